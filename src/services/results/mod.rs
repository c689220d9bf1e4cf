pub mod lookup;
pub mod my;
pub mod save;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::results::requests::{ResultLookupQuery, SaveResultRequest};
use crate::storage::Storage;

pub struct ResultService {
    storage: Option<Arc<dyn Storage>>,
}

impl ResultService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::common::storage_from_request(request),
        }
    }

    pub async fn save_result(
        &self,
        request: &HttpRequest,
        req: SaveResultRequest,
    ) -> ActixResult<HttpResponse> {
        save::save_result(self, request, req).await
    }

    pub async fn fetch_result(
        &self,
        request: &HttpRequest,
        query: ResultLookupQuery,
    ) -> ActixResult<HttpResponse> {
        lookup::fetch_result(self, request, query).await
    }

    pub async fn list_my_results(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        my::list_my_results(self, request).await
    }
}
