use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::models::attendance::requests::MyAttendanceQuery;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{bad_request, current_user, require_student_profile, storage_error};

pub async fn my_attendance(
    service: &AttendanceService,
    request: &HttpRequest,
    query: MyAttendanceQuery,
) -> ActixResult<HttpResponse> {
    if query.end_date < query.start_date {
        return Ok(bad_request(
            ErrorCode::AttendanceDateInvalid,
            "end_date must not be before start_date",
        ));
    }

    let storage = service.get_storage(request)?;
    let user = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    let student = match require_student_profile(&storage, &user).await {
        Ok(student) => student,
        Err(resp) => return Ok(resp),
    };

    match storage
        .list_student_attendance(
            student.id,
            query.subject_id,
            query.start_date,
            query.end_date,
        )
        .await
    {
        Ok(entries) => Ok(HttpResponse::Ok().json(ApiResponse::success(entries, "Attendance"))),
        Err(e) => Ok(storage_error("Failed to load attendance", e)),
    }
}
