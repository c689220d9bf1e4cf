use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeedbackService;
use crate::models::feedbacks::requests::ReplyFeedbackRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{bad_request, not_found, storage_error};

pub async fn reply_feedback(
    service: &FeedbackService,
    request: &HttpRequest,
    feedback_id: i64,
    req: ReplyFeedbackRequest,
) -> ActixResult<HttpResponse> {
    let reply = req.reply.trim();
    if reply.is_empty() {
        return Ok(bad_request(ErrorCode::BadRequest, "Reply must not be empty"));
    }

    let storage = service.get_storage(request)?;
    match storage.reply_feedback(feedback_id, reply).await {
        Ok(Some(feedback)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            feedback,
            "Reply sent",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::FeedbackNotFound, "Feedback not found")),
        Err(e) => Ok(storage_error("Failed to reply to feedback", e)),
    }
}
