use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeedbackService;
use crate::models::feedbacks::requests::SubmitFeedbackRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{bad_request, current_user, storage_error};

pub async fn submit_feedback(
    service: &FeedbackService,
    request: &HttpRequest,
    req: SubmitFeedbackRequest,
) -> ActixResult<HttpResponse> {
    let feedback = req.feedback.trim();
    if feedback.is_empty() {
        return Ok(bad_request(ErrorCode::BadRequest, "Feedback must not be empty"));
    }

    let storage = service.get_storage(request)?;
    let user = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    match storage.create_feedback(user.id, feedback).await {
        Ok(feedback) => Ok(HttpResponse::Created().json(ApiResponse::success(
            feedback,
            "Feedback submitted for review",
        ))),
        Err(e) => Ok(storage_error("Could not submit feedback", e)),
    }
}
