use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AcademicService;
use crate::models::academics::requests::AcademicSessionRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{bad_request, not_found, storage_error};

fn check_range(req: &AcademicSessionRequest) -> Result<(), HttpResponse> {
    if req.end_year <= req.start_year {
        return Err(bad_request(
            ErrorCode::AcademicSessionInvalid,
            "end_year must be after start_year",
        ));
    }
    Ok(())
}

pub async fn list_sessions(
    service: &AcademicService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    match storage.list_academic_sessions().await {
        Ok(sessions) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(sessions, "Academic sessions")))
        }
        Err(e) => Ok(storage_error("Failed to list academic sessions", e)),
    }
}

pub async fn create_session(
    service: &AcademicService,
    request: &HttpRequest,
    req: AcademicSessionRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = check_range(&req) {
        return Ok(resp);
    }
    let storage = service.get_storage(request)?;
    match storage.create_academic_session(req).await {
        Ok(session) => Ok(HttpResponse::Created().json(ApiResponse::success(
            session,
            "Session Created",
        ))),
        Err(e) => Ok(storage_error("Could not add academic session", e)),
    }
}

pub async fn update_session(
    service: &AcademicService,
    request: &HttpRequest,
    session_id: i64,
    req: AcademicSessionRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = check_range(&req) {
        return Ok(resp);
    }
    let storage = service.get_storage(request)?;
    match storage.update_academic_session(session_id, req).await {
        Ok(Some(session)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            session,
            "Session Updated",
        ))),
        Ok(None) => Ok(not_found(
            ErrorCode::AcademicSessionNotFound,
            "Academic session not found",
        )),
        Err(e) => Ok(storage_error("Could not update academic session", e)),
    }
}

pub async fn delete_session(
    service: &AcademicService,
    request: &HttpRequest,
    session_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    match storage.delete_academic_session(session_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Session deleted"))),
        Ok(false) => Ok(not_found(
            ErrorCode::AcademicSessionNotFound,
            "Academic session not found",
        )),
        Err(e) => Ok(storage_error("Could not delete academic session", e)),
    }
}
