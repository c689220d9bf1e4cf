pub mod list;
pub mod reply;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::feedbacks::requests::{
    FeedbackListParams, ReplyFeedbackRequest, SubmitFeedbackRequest,
};
use crate::storage::Storage;

pub struct FeedbackService {
    storage: Option<Arc<dyn Storage>>,
}

impl FeedbackService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::common::storage_from_request(request),
        }
    }

    pub async fn submit_feedback(
        &self,
        request: &HttpRequest,
        req: SubmitFeedbackRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_feedback(self, request, req).await
    }

    pub async fn list_my_feedbacks(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_my_feedbacks(self, request).await
    }

    pub async fn list_feedbacks(
        &self,
        request: &HttpRequest,
        query: FeedbackListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_feedbacks(self, request, query).await
    }

    pub async fn reply_feedback(
        &self,
        request: &HttpRequest,
        feedback_id: i64,
        req: ReplyFeedbackRequest,
    ) -> ActixResult<HttpResponse> {
        reply::reply_feedback(self, request, feedback_id, req).await
    }
}
