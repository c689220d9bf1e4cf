pub mod my;
pub mod reports;
pub mod roster;
pub mod save;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::attendance::requests::{
    MyAttendanceQuery, SaveAttendanceRequest, SubjectSessionQuery, UpdateAttendanceRequest,
};
use crate::storage::Storage;

pub struct AttendanceService {
    storage: Option<Arc<dyn Storage>>,
}

impl AttendanceService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::common::storage_from_request(request),
        }
    }

    // 点名册
    pub async fn get_students(
        &self,
        request: &HttpRequest,
        query: SubjectSessionQuery,
    ) -> ActixResult<HttpResponse> {
        roster::get_students(self, request, query).await
    }

    pub async fn save_attendance(
        &self,
        request: &HttpRequest,
        req: SaveAttendanceRequest,
    ) -> ActixResult<HttpResponse> {
        save::save_attendance(self, request, req).await
    }

    // 已有的考勤日期
    pub async fn list_attendance_dates(
        &self,
        request: &HttpRequest,
        query: SubjectSessionQuery,
    ) -> ActixResult<HttpResponse> {
        roster::list_attendance_dates(self, request, query).await
    }

    pub async fn get_reports(
        &self,
        request: &HttpRequest,
        attendance_id: i64,
    ) -> ActixResult<HttpResponse> {
        reports::get_reports(self, request, attendance_id).await
    }

    pub async fn update_reports(
        &self,
        request: &HttpRequest,
        attendance_id: i64,
        req: UpdateAttendanceRequest,
    ) -> ActixResult<HttpResponse> {
        reports::update_reports(self, request, attendance_id, req).await
    }

    // 学生查看本人出勤
    pub async fn my_attendance(
        &self,
        request: &HttpRequest,
        query: MyAttendanceQuery,
    ) -> ActixResult<HttpResponse> {
        my::my_attendance(self, request, query).await
    }
}
