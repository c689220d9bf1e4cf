use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::models::attendance::requests::SubjectSessionQuery;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{check_subject_access, current_user, not_found, storage_error};

pub async fn get_students(
    service: &AttendanceService,
    request: &HttpRequest,
    query: SubjectSessionQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    if let Err(resp) = check_subject_access(&storage, &user, query.subject_id).await {
        return Ok(resp);
    }

    let subject = match storage.get_subject_by_id(query.subject_id).await {
        Ok(Some(subject)) => subject,
        Ok(None) => return Ok(not_found(ErrorCode::SubjectNotFound, "Subject not found")),
        Err(e) => return Ok(storage_error("Failed to load subject", e)),
    };

    match storage.list_roster(subject.course_id, query.session_id).await {
        Ok(students) => Ok(HttpResponse::Ok().json(ApiResponse::success(students, "Students"))),
        Err(e) => Ok(storage_error("Failed to load students", e)),
    }
}

pub async fn list_attendance_dates(
    service: &AttendanceService,
    request: &HttpRequest,
    query: SubjectSessionQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    if let Err(resp) = check_subject_access(&storage, &user, query.subject_id).await {
        return Ok(resp);
    }

    match storage
        .list_attendances(query.subject_id, query.session_id)
        .await
    {
        Ok(rows) => Ok(HttpResponse::Ok().json(ApiResponse::success(rows, "Attendance dates"))),
        Err(e) => Ok(storage_error("Failed to list attendance", e)),
    }
}
