use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AcademicService;
use crate::models::academics::requests::CourseRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{bad_request, not_found, storage_error};
use crate::utils::validate::validate_name;

pub async fn list_courses(
    service: &AcademicService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    match storage.list_courses().await {
        Ok(courses) => Ok(HttpResponse::Ok().json(ApiResponse::success(courses, "Courses"))),
        Err(e) => Ok(storage_error("Failed to list courses", e)),
    }
}

pub async fn create_course(
    service: &AcademicService,
    request: &HttpRequest,
    req: CourseRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_name(&req.name) {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }
    let storage = service.get_storage(request)?;
    match storage.create_course(req.name.trim()).await {
        Ok(course) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(course, "Successfully Added")))
        }
        Err(e) => Ok(storage_error("Could not add course", e)),
    }
}

pub async fn update_course(
    service: &AcademicService,
    request: &HttpRequest,
    course_id: i64,
    req: CourseRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_name(&req.name) {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }
    let storage = service.get_storage(request)?;
    match storage.update_course(course_id, req.name.trim()).await {
        Ok(Some(course)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(course, "Successfully Updated")))
        }
        Ok(None) => Ok(not_found(ErrorCode::CourseNotFound, "Course not found")),
        Err(e) => Ok(storage_error("Could not update course", e)),
    }
}

pub async fn delete_course(
    service: &AcademicService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    match storage.delete_course(course_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Course deleted"))),
        Ok(false) => Ok(not_found(ErrorCode::CourseNotFound, "Course not found")),
        Err(e) => Ok(storage_error("Could not delete course", e)),
    }
}
