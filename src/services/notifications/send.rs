use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::NotificationService;
use crate::models::notifications::requests::SendNotificationRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{bad_request, not_found, storage_error};

pub async fn send_notification(
    service: &NotificationService,
    request: &HttpRequest,
    req: SendNotificationRequest,
) -> ActixResult<HttpResponse> {
    let message = req.message.trim();
    if message.is_empty() {
        return Ok(bad_request(ErrorCode::BadRequest, "Message must not be empty"));
    }

    let storage = service.get_storage(request)?;
    match storage.get_user_by_id(req.user_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(not_found(ErrorCode::UserNotFound, "User not found")),
        Err(e) => return Ok(storage_error("Failed to load user", e)),
    }

    match storage.create_notification(req.user_id, message).await {
        Ok(notification) => {
            info!("Notification {} sent to user {}", notification.id, req.user_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(notification, "Notification sent")))
        }
        Err(e) => Ok(storage_error("Failed to send notification", e)),
    }
}
