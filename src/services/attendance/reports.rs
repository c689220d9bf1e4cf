use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::AttendanceService;
use crate::errors::SchoolHubError;
use crate::models::attendance::entities::Attendance;
use crate::models::attendance::requests::UpdateAttendanceRequest;
use crate::models::users::entities::User;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{check_subject_access, current_user, not_found, storage_error};
use crate::storage::Storage;

// 加载考勤并校验调用者对其科目的权限
async fn load_accessible_attendance(
    storage: &Arc<dyn Storage>,
    user: &User,
    attendance_id: i64,
) -> Result<Attendance, HttpResponse> {
    let attendance = match storage.get_attendance_by_id(attendance_id).await {
        Ok(Some(attendance)) => attendance,
        Ok(None) => {
            return Err(not_found(
                ErrorCode::AttendanceNotFound,
                "Attendance not found",
            ));
        }
        Err(e) => return Err(storage_error("Failed to load attendance", e)),
    };
    check_subject_access(storage, user, attendance.subject_id).await?;
    Ok(attendance)
}

pub async fn get_reports(
    service: &AttendanceService,
    request: &HttpRequest,
    attendance_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    if let Err(resp) = load_accessible_attendance(&storage, &user, attendance_id).await {
        return Ok(resp);
    }

    match storage.list_attendance_reports(attendance_id).await {
        Ok(reports) => Ok(HttpResponse::Ok().json(ApiResponse::success(reports, "Reports"))),
        Err(e) => Ok(storage_error("Failed to load attendance reports", e)),
    }
}

pub async fn update_reports(
    service: &AttendanceService,
    request: &HttpRequest,
    attendance_id: i64,
    req: UpdateAttendanceRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    if let Err(resp) = load_accessible_attendance(&storage, &user, attendance_id).await {
        return Ok(resp);
    }

    match storage
        .update_attendance_reports(attendance_id, &req.students)
        .await
    {
        Ok(updated) => Ok(HttpResponse::Ok().json(ApiResponse::success(updated, "OK"))),
        Err(SchoolHubError::NotFound(msg)) => {
            Ok(not_found(ErrorCode::AttendanceReportNotFound, &msg))
        }
        Err(e) => Ok(storage_error("Failed to update attendance", e)),
    }
}
