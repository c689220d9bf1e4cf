pub mod result;
pub mod scoring;
pub mod start;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::quiz_attempts::requests::SubmitAttemptRequest;
use crate::storage::Storage;

pub struct QuizAttemptService {
    storage: Option<Arc<dyn Storage>>,
}

impl QuizAttemptService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::common::storage_from_request(request),
        }
    }

    pub(crate) fn get_config(&self) -> &AppConfig {
        AppConfig::get()
    }

    // 开始一次答题
    pub async fn start_attempt(
        &self,
        request: &HttpRequest,
        session_id: i64,
    ) -> ActixResult<HttpResponse> {
        start::start_attempt(self, request, session_id).await
    }

    pub async fn submit_attempt(
        &self,
        request: &HttpRequest,
        attempt_id: i64,
        req: SubmitAttemptRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_attempt(self, request, attempt_id, req).await
    }

    pub async fn get_attempt_result(
        &self,
        request: &HttpRequest,
        attempt_id: i64,
    ) -> ActixResult<HttpResponse> {
        result::get_attempt_result(self, request, attempt_id).await
    }
}
