use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::NotificationService;
use crate::models::ApiResponse;
use crate::services::common::{current_user, storage_error};

pub async fn list_my_notifications(
    service: &NotificationService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    match storage.list_notifications_by_user(user.id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(items, "Notifications"))),
        Err(e) => Ok(storage_error("Failed to list notifications", e)),
    }
}
