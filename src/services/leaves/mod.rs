pub mod apply;
pub mod list;
pub mod review;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::leaves::requests::{ApplyLeaveRequest, LeaveListParams, ReviewLeaveRequest};
use crate::storage::Storage;

pub struct LeaveService {
    storage: Option<Arc<dyn Storage>>,
}

impl LeaveService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::common::storage_from_request(request),
        }
    }

    pub async fn apply_leave(
        &self,
        request: &HttpRequest,
        req: ApplyLeaveRequest,
    ) -> ActixResult<HttpResponse> {
        apply::apply_leave(self, request, req).await
    }

    pub async fn list_my_leaves(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_my_leaves(self, request).await
    }

    pub async fn list_leaves(
        &self,
        request: &HttpRequest,
        query: LeaveListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_leaves(self, request, query).await
    }

    pub async fn review_leave(
        &self,
        request: &HttpRequest,
        leave_id: i64,
        req: ReviewLeaveRequest,
    ) -> ActixResult<HttpResponse> {
        review::review_leave(self, request, leave_id, req).await
    }
}
