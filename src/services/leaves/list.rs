use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LeaveService;
use crate::models::ApiResponse;
use crate::models::leaves::requests::{LeaveListParams, LeaveListQuery};
use crate::services::common::{current_user, storage_error};

pub async fn list_my_leaves(
    service: &LeaveService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    match storage.list_leaves_by_user(user.id).await {
        Ok(leaves) => Ok(HttpResponse::Ok().json(ApiResponse::success(leaves, "Leave history"))),
        Err(e) => Ok(storage_error("Failed to list leaves", e)),
    }
}

pub async fn list_leaves(
    service: &LeaveService,
    request: &HttpRequest,
    query: LeaveListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let list_query = LeaveListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        role: query.role,
        status: query.status,
    };

    match storage.list_leaves_with_pagination(list_query).await {
        Ok(response) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Leave applications")))
        }
        Err(e) => Ok(storage_error("Failed to list leaves", e)),
    }
}
