use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ResultService;
use crate::models::results::{requests::ResultLookupQuery, responses::ResultScores};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{check_subject_access, current_user, not_found, storage_error};

pub async fn fetch_result(
    service: &ResultService,
    request: &HttpRequest,
    query: ResultLookupQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    if let Err(resp) = check_subject_access(&storage, &user, query.subject_id).await {
        return Ok(resp);
    }

    match storage.get_result(query.student_id, query.subject_id).await {
        Ok(Some(result)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ResultScores {
                test: result.test,
                exam: result.exam,
            },
            "Result",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::ResultNotFound, "Result not found")),
        Err(e) => Ok(storage_error("Failed to load result", e)),
    }
}
