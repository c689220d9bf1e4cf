use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LeaveService;
use crate::models::leaves::requests::ApplyLeaveRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{bad_request, current_user, storage_error};

pub async fn apply_leave(
    service: &LeaveService,
    request: &HttpRequest,
    mut req: ApplyLeaveRequest,
) -> ActixResult<HttpResponse> {
    req.date = req.date.trim().to_string();
    req.message = req.message.trim().to_string();
    if req.date.is_empty() || req.message.is_empty() {
        return Ok(bad_request(
            ErrorCode::BadRequest,
            "Leave date and message are required",
        ));
    }

    let storage = service.get_storage(request)?;
    let user = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    match storage.create_leave(user.id, req).await {
        Ok(leave) => Ok(HttpResponse::Created().json(ApiResponse::success(
            leave,
            "Application for leave has been submitted for review",
        ))),
        Err(e) => Ok(storage_error("Could not submit leave application", e)),
    }
}
