use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::QuizService;
use crate::models::quizzes::requests::CreateQuizRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{
    bad_request, current_user, forbidden, not_found, require_staff_profile, storage_error,
};

/// 时长需为正数
pub(crate) fn check_duration(duration_minutes: Option<i32>) -> Result<(), HttpResponse> {
    match duration_minutes {
        Some(minutes) if minutes < 1 => Err(bad_request(
            ErrorCode::BadRequest,
            "duration_minutes must be at least 1",
        )),
        _ => Ok(()),
    }
}

pub async fn create_quiz(
    service: &QuizService,
    request: &HttpRequest,
    mut req: CreateQuizRequest,
) -> ActixResult<HttpResponse> {
    req.title = req.title.trim().to_string();
    if req.title.is_empty() {
        return Ok(bad_request(ErrorCode::BadRequest, "Quiz title is required"));
    }
    if let Err(resp) = check_duration(req.duration_minutes) {
        return Ok(resp);
    }

    let storage = service.get_storage(request)?;
    let user = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    let staff = match require_staff_profile(&storage, &user).await {
        Ok(staff) => staff,
        Err(resp) => return Ok(resp),
    };

    // 只能为自己任教的科目出题
    match storage.get_subject_by_id(req.subject_id).await {
        Ok(Some(subject)) if subject.staff_id == staff.id => {}
        Ok(Some(_)) => return Ok(forbidden("You do not teach this subject")),
        Ok(None) => return Ok(not_found(ErrorCode::SubjectNotFound, "Subject not found")),
        Err(e) => return Ok(storage_error("Failed to load subject", e)),
    }

    match storage.create_quiz(staff.id, req).await {
        Ok(quiz) => {
            info!("Quiz {} created by staff {}", quiz.id, staff.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(quiz, "Quiz created")))
        }
        Err(e) => Ok(storage_error("Failed to create quiz", e)),
    }
}
