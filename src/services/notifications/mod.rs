pub mod list;
pub mod send;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::notifications::requests::SendNotificationRequest;
use crate::storage::Storage;

pub struct NotificationService {
    storage: Option<Arc<dyn Storage>>,
}

impl NotificationService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::common::storage_from_request(request),
        }
    }

    pub async fn send_notification(
        &self,
        request: &HttpRequest,
        req: SendNotificationRequest,
    ) -> ActixResult<HttpResponse> {
        send::send_notification(self, request, req).await
    }

    pub async fn list_my_notifications(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_my_notifications(self, request).await
    }
}
