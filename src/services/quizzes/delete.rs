use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QuizService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{
    current_user, load_owned_quiz, not_found, require_staff_profile, storage_error,
};

pub async fn delete_quiz(
    service: &QuizService,
    request: &HttpRequest,
    quiz_id: i64,
) -> ActixResult<HttpResponse> {
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

    match storage.delete_quiz(quiz_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Quiz deleted"))),
        Ok(false) => Ok(not_found(ErrorCode::QuizNotFound, "Quiz not found")),
        Err(e) => Ok(storage_error("Failed to delete quiz", e)),
    }
}
