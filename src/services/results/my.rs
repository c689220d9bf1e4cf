use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ResultService;
use crate::models::ApiResponse;
use crate::services::common::{current_user, require_student_profile, storage_error};

pub async fn list_my_results(
    service: &ResultService,
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

    match storage.list_results_by_student(student.id).await {
        Ok(results) => Ok(HttpResponse::Ok().json(ApiResponse::success(results, "Results"))),
        Err(e) => Ok(storage_error("Failed to load results", e)),
    }
}
