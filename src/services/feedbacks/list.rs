use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeedbackService;
use crate::models::ApiResponse;
use crate::models::feedbacks::requests::{FeedbackListParams, FeedbackListQuery};
use crate::services::common::{current_user, storage_error};

pub async fn list_my_feedbacks(
    service: &FeedbackService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    match storage.list_feedbacks_by_user(user.id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(items, "Feedbacks"))),
        Err(e) => Ok(storage_error("Failed to list feedbacks", e)),
    }
}

pub async fn list_feedbacks(
    service: &FeedbackService,
    request: &HttpRequest,
    query: FeedbackListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let list_query = FeedbackListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        role: query.role,
    };

    match storage.list_feedbacks_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Feedbacks"))),
        Err(e) => Ok(storage_error("Failed to list feedbacks", e)),
    }
}
