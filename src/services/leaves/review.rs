use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::LeaveService;
use crate::models::leaves::{entities::LeaveStatus, requests::ReviewLeaveRequest};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{not_found, storage_error};

fn already_reviewed() -> HttpResponse {
    HttpResponse::Conflict().json(ApiResponse::error_empty(
        ErrorCode::LeaveAlreadyReviewed,
        "Leave application has already been reviewed",
    ))
}

/// 审批请假，只能处理待审批的申请
pub async fn review_leave(
    service: &LeaveService,
    request: &HttpRequest,
    leave_id: i64,
    req: ReviewLeaveRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_leave_by_id(leave_id).await {
        Ok(Some(leave)) if leave.status != LeaveStatus::Pending => {
            return Ok(already_reviewed());
        }
        Ok(Some(_)) => {}
        Ok(None) => return Ok(not_found(ErrorCode::LeaveNotFound, "Leave not found")),
        Err(e) => return Ok(storage_error("Failed to load leave", e)),
    }

    let status = if req.approve {
        LeaveStatus::Approved
    } else {
        LeaveStatus::Rejected
    };

    match storage.review_leave(leave_id, status).await {
        Ok(Some(leave)) => {
            info!("Leave {} marked {:?}", leave.id, leave.status);
            Ok(HttpResponse::Ok().json(ApiResponse::success(leave, "Leave reviewed")))
        }
        // 预检之后被并发审批
        Ok(None) => Ok(already_reviewed()),
        Err(e) => Ok(storage_error("Failed to review leave", e)),
    }
}
