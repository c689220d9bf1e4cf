//! 各角色首页统计
pub mod home;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct DashboardService {
    storage: Option<Arc<dyn Storage>>,
}

impl DashboardService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::common::storage_from_request(request),
        }
    }

    pub async fn admin_home(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        home::admin_home(self, request).await
    }

    pub async fn staff_home(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        home::staff_home(self, request).await
    }

    pub async fn student_home(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        home::student_home(self, request).await
    }
}
