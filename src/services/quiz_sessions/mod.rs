pub mod analytics;
pub mod create;
pub mod dashboard;
pub mod detail;
pub mod item_analysis;
pub mod join;
pub mod lobby;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::quiz_sessions::requests::{
    CreateSessionRequest, JoinSessionRequest, UpdateSessionRequest,
};
use crate::storage::Storage;

pub struct QuizSessionService {
    storage: Option<Arc<dyn Storage>>,
}

impl QuizSessionService {
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

    pub async fn create_session(
        &self,
        request: &HttpRequest,
        quiz_id: i64,
        req: CreateSessionRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_session(self, request, quiz_id, req).await
    }

    pub async fn get_session(
        &self,
        request: &HttpRequest,
        session_id: i64,
    ) -> ActixResult<HttpResponse> {
        detail::get_session(self, request, session_id).await
    }

    // 二维码 PNG
    pub async fn session_qr(
        &self,
        request: &HttpRequest,
        session_id: i64,
    ) -> ActixResult<HttpResponse> {
        detail::session_qr(self, request, session_id).await
    }

    pub async fn update_session(
        &self,
        request: &HttpRequest,
        session_id: i64,
        req: UpdateSessionRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_session(self, request, session_id, req).await
    }

    // 学生输入场次码加入
    pub async fn join_session(
        &self,
        request: &HttpRequest,
        req: JoinSessionRequest,
    ) -> ActixResult<HttpResponse> {
        join::join_session(self, request, req).await
    }

    pub async fn lobby(&self, request: &HttpRequest, session_id: i64) -> ActixResult<HttpResponse> {
        lobby::lobby(self, request, session_id).await
    }

    pub async fn session_dashboard(
        &self,
        request: &HttpRequest,
        session_id: i64,
    ) -> ActixResult<HttpResponse> {
        dashboard::session_dashboard(self, request, session_id).await
    }

    pub async fn item_analysis(
        &self,
        request: &HttpRequest,
        session_id: i64,
    ) -> ActixResult<HttpResponse> {
        item_analysis::item_analysis(self, request, session_id).await
    }
}
