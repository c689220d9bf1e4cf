use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QuizSessionService;
use crate::models::quiz_sessions::responses::SessionDetailResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{
    current_user, load_owned_session, require_staff_profile, storage_error,
};
use crate::utils::qr;

pub async fn get_session(
    service: &QuizSessionService,
    request: &HttpRequest,
    session_id: i64,
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
    let (session, quiz) = match load_owned_session(&storage, &staff, session_id).await {
        Ok(found) => found,
        Err(resp) => return Ok(resp),
    };

    let attempt_count = match storage.count_session_attempts(session.id).await {
        Ok(count) => count,
        Err(e) => return Ok(storage_error("Failed to count attempts", e)),
    };
    let qr_data_url = match qr::render_data_url(
        &session.session_code,
        service.get_config().quiz.qr_module_size,
    ) {
        Ok(url) => url,
        Err(e) => return Ok(storage_error("Failed to render QR code", e)),
    };

    let response = SessionDetailResponse {
        is_open: session.is_open_now(),
        quiz_title: quiz.title,
        attempt_count,
        qr_data_url,
        session,
    };
    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Quiz session")))
}

/// 渲染场次码二维码，直接返回 PNG
pub async fn session_qr(
    service: &QuizSessionService,
    request: &HttpRequest,
    session_id: i64,
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

    match qr::render_png(
        &session.session_code,
        service.get_config().quiz.qr_module_size,
    ) {
        Ok(png) => Ok(HttpResponse::Ok().content_type("image/png").body(png)),
        Err(e) => {
            tracing::error!("QR render failed for session {}: {}", session.id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to render QR code: {e}"),
                )),
            )
        }
    }
}
