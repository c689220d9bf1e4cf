use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::AcademicService;
use crate::models::academics::requests::{
    CreateSubjectRequest, SubjectListQuery, UpdateSubjectRequest,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{bad_request, not_found, storage_error};
use crate::storage::Storage;
use crate::utils::validate::validate_name;

// 科目引用的教职工和课程必须存在
async fn check_subject_refs(
    storage: &Arc<dyn Storage>,
    staff_id: Option<i64>,
    course_id: Option<i64>,
) -> Result<(), HttpResponse> {
    if let Some(staff_id) = staff_id {
        match storage.get_staff_by_id(staff_id).await {
            Ok(Some(_)) => {}
            Ok(None) => return Err(not_found(ErrorCode::ProfileNotFound, "Staff not found")),
            Err(e) => return Err(storage_error("Failed to load staff", e)),
        }
    }
    if let Some(course_id) = course_id {
        match storage.get_course_by_id(course_id).await {
            Ok(Some(_)) => {}
            Ok(None) => return Err(not_found(ErrorCode::CourseNotFound, "Course not found")),
            Err(e) => return Err(storage_error("Failed to load course", e)),
        }
    }
    Ok(())
}

pub async fn list_subjects(
    service: &AcademicService,
    request: &HttpRequest,
    query: SubjectListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    match storage.list_subjects(query).await {
        Ok(subjects) => Ok(HttpResponse::Ok().json(ApiResponse::success(subjects, "Subjects"))),
        Err(e) => Ok(storage_error("Failed to list subjects", e)),
    }
}

pub async fn create_subject(
    service: &AcademicService,
    request: &HttpRequest,
    mut req: CreateSubjectRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_name(&req.name) {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }
    req.name = req.name.trim().to_string();

    let storage = service.get_storage(request)?;
    if let Err(resp) = check_subject_refs(&storage, Some(req.staff_id), Some(req.course_id)).await
    {
        return Ok(resp);
    }

    match storage.create_subject(req).await {
        Ok(subject) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(subject, "Successfully Added")))
        }
        Err(e) => Ok(storage_error("Could not add subject", e)),
    }
}

pub async fn update_subject(
    service: &AcademicService,
    request: &HttpRequest,
    subject_id: i64,
    mut req: UpdateSubjectRequest,
) -> ActixResult<HttpResponse> {
    if let Some(name) = req.name.as_mut() {
        if let Err(msg) = validate_name(name) {
            return Ok(bad_request(ErrorCode::BadRequest, msg));
        }
        *name = name.trim().to_string();
    }

    let storage = service.get_storage(request)?;
    if let Err(resp) = check_subject_refs(&storage, req.staff_id, req.course_id).await {
        return Ok(resp);
    }

    match storage.update_subject(subject_id, req).await {
        Ok(Some(subject)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(subject, "Successfully Updated")))
        }
        Ok(None) => Ok(not_found(ErrorCode::SubjectNotFound, "Subject not found")),
        Err(e) => Ok(storage_error("Could not update subject", e)),
    }
}

pub async fn delete_subject(
    service: &AcademicService,
    request: &HttpRequest,
    subject_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    match storage.delete_subject(subject_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Subject deleted"))),
        Ok(false) => Ok(not_found(ErrorCode::SubjectNotFound, "Subject not found")),
        Err(e) => Ok(storage_error("Could not delete subject", e)),
    }
}
