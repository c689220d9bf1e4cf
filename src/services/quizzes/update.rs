use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QuizService;
use super::create::check_duration;
use crate::models::quizzes::requests::UpdateQuizRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{
    bad_request, current_user, load_owned_quiz, not_found, require_staff_profile, storage_error,
};

pub async fn update_quiz(
    service: &QuizService,
    request: &HttpRequest,
    quiz_id: i64,
    mut req: UpdateQuizRequest,
) -> ActixResult<HttpResponse> {
    if let Some(title) = req.title.as_mut() {
        *title = title.trim().to_string();
        if title.is_empty() {
            return Ok(bad_request(ErrorCode::BadRequest, "Quiz title is required"));
        }
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
    if let Err(resp) = load_owned_quiz(&storage, &staff, quiz_id).await {
        return Ok(resp);
    }

    match storage.update_quiz(quiz_id, req).await {
        Ok(Some(quiz)) => Ok(HttpResponse::Ok().json(ApiResponse::success(quiz, "Quiz updated"))),
        Ok(None) => Ok(not_found(ErrorCode::QuizNotFound, "Quiz not found")),
        Err(e) => Ok(storage_error("Failed to update quiz", e)),
    }
}
