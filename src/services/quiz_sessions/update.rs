use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QuizSessionService;
use super::create::check_session_settings;
use crate::models::quiz_sessions::requests::UpdateSessionRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{
    bad_request, current_user, load_owned_session, not_found, require_staff_profile,
    storage_error,
};

pub async fn update_session(
    service: &QuizSessionService,
    request: &HttpRequest,
    session_id: i64,
    req: UpdateSessionRequest,
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
    let (session, _) = match load_owned_session(&storage, &staff, session_id).await {
        Ok(found) => found,
        Err(resp) => return Ok(resp),
    };

    // 与现有值合并后再校验
    if let Err(msg) = check_session_settings(
        req.starts_at.unwrap_or(session.starts_at),
        req.ends_at.unwrap_or(session.ends_at),
        req.max_attempts_per_student
            .unwrap_or(session.max_attempts_per_student),
    ) {
        return Ok(bad_request(ErrorCode::QuizSessionInvalid, msg));
    }

    match storage.update_quiz_session(session.id, req).await {
        Ok(Some(session)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(session, "Session updated")))
        }
        Ok(None) => Ok(not_found(
            ErrorCode::QuizSessionNotFound,
            "Quiz session not found",
        )),
        Err(e) => Ok(storage_error("Failed to update session", e)),
    }
}
