use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QuizService;
use crate::models::ApiResponse;
use crate::services::common::{current_user, require_staff_profile, storage_error};

pub async fn list_quizzes(
    service: &QuizService,
    request: &HttpRequest,
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

    match storage.list_quizzes_by_staff(staff.id).await {
        Ok(quizzes) => Ok(HttpResponse::Ok().json(ApiResponse::success(quizzes, "Quizzes"))),
        Err(e) => Ok(storage_error("Failed to list quizzes", e)),
    }
}
