use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::debug;

use super::QuizSessionService;
use crate::models::quiz_sessions::{
    requests::JoinSessionRequest, responses::JoinSessionResponse,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{bad_request, not_found, storage_error};
use crate::utils::random_code::normalize_session_code;

pub async fn join_session(
    service: &QuizSessionService,
    request: &HttpRequest,
    req: JoinSessionRequest,
) -> ActixResult<HttpResponse> {
    let code = normalize_session_code(&req.session_code);
    if code.is_empty() {
        return Ok(bad_request(
            ErrorCode::QuizSessionCodeInvalid,
            "Please enter a session code",
        ));
    }

    let storage = service.get_storage(request)?;
    let session = match storage.get_quiz_session_by_code(&code).await {
        Ok(Some(session)) => session,
        Ok(None) => {
            debug!("Join with unknown session code {}", code);
            return Ok(not_found(
                ErrorCode::QuizSessionCodeInvalid,
                "Invalid session code",
            ));
        }
        Err(e) => return Ok(storage_error("Failed to look up session", e)),
    };

    if !session.is_open_now() {
        return Ok(bad_request(
            ErrorCode::QuizSessionClosed,
            "This session is not currently active or has ended",
        ));
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        JoinSessionResponse {
            session_id: session.id,
        },
        "Joined session",
    )))
}
