use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DashboardService;
use crate::models::ApiResponse;
use crate::services::common::{
    current_user, require_staff_profile, require_student_profile, storage_error,
};

pub async fn admin_home(
    service: &DashboardService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    match storage.admin_dashboard().await {
        Ok(data) => Ok(HttpResponse::Ok().json(ApiResponse::success(data, "Administrative Dashboard"))),
        Err(e) => Ok(storage_error("Failed to load dashboard", e)),
    }
}

pub async fn staff_home(
    service: &DashboardService,
    request: &HttpRequest,
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

    match storage.staff_dashboard(&staff).await {
        Ok(data) => Ok(HttpResponse::Ok().json(ApiResponse::success(data, "Staff Panel"))),
        Err(e) => Ok(storage_error("Failed to load dashboard", e)),
    }
}

pub async fn student_home(
    service: &DashboardService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    let student = match require_student_profile(&storage, &user).await {
        Ok(student) => student,
        Err(resp) => return Ok(resp),
    };

    match storage.student_dashboard(&student).await {
        Ok(data) => Ok(HttpResponse::Ok().json(ApiResponse::success(data, "Student Homepage"))),
        Err(e) => Ok(storage_error("Failed to load dashboard", e)),
    }
}
