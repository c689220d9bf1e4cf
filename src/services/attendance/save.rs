use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AttendanceService;
use crate::models::attendance::requests::SaveAttendanceRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{check_subject_access, current_user, not_found, storage_error};

/// 保存考勤，已存在的学生记录保持原状
pub async fn save_attendance(
    service: &AttendanceService,
    request: &HttpRequest,
    req: SaveAttendanceRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    if let Err(resp) = check_subject_access(&storage, &user, req.subject_id).await {
        return Ok(resp);
    }

    match storage.get_academic_session_by_id(req.session_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(not_found(
                ErrorCode::AcademicSessionNotFound,
                "Academic session not found",
            ));
        }
        Err(e) => return Ok(storage_error("Failed to load academic session", e)),
    }

    match storage
        .save_attendance(req.subject_id, req.session_id, req.date, &req.students)
        .await
    {
        Ok(saved) => {
            info!(
                "Attendance {} saved by user {}: {} new, {} unchanged",
                saved.attendance_id, user.id, saved.created, saved.unchanged
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(saved, "OK")))
        }
        Err(e) => Ok(storage_error("Error Occured While Saving", e)),
    }
}
