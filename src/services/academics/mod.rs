//! 课程、科目与学年，管理员维护，所有登录用户可查询
pub mod courses;
pub mod sessions;
pub mod subjects;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::academics::requests::{
    AcademicSessionRequest, CourseRequest, CreateSubjectRequest, SubjectListQuery,
    UpdateSubjectRequest,
};
use crate::storage::Storage;

pub struct AcademicService {
    storage: Option<Arc<dyn Storage>>,
}

impl AcademicService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::common::storage_from_request(request),
        }
    }

    pub async fn list_courses(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        courses::list_courses(self, request).await
    }

    pub async fn create_course(
        &self,
        request: &HttpRequest,
        req: CourseRequest,
    ) -> ActixResult<HttpResponse> {
        courses::create_course(self, request, req).await
    }

    pub async fn update_course(
        &self,
        request: &HttpRequest,
        course_id: i64,
        req: CourseRequest,
    ) -> ActixResult<HttpResponse> {
        courses::update_course(self, request, course_id, req).await
    }

    pub async fn delete_course(
        &self,
        request: &HttpRequest,
        course_id: i64,
    ) -> ActixResult<HttpResponse> {
        courses::delete_course(self, request, course_id).await
    }

    pub async fn list_subjects(
        &self,
        request: &HttpRequest,
        query: SubjectListQuery,
    ) -> ActixResult<HttpResponse> {
        subjects::list_subjects(self, request, query).await
    }

    pub async fn create_subject(
        &self,
        request: &HttpRequest,
        req: CreateSubjectRequest,
    ) -> ActixResult<HttpResponse> {
        subjects::create_subject(self, request, req).await
    }

    pub async fn update_subject(
        &self,
        request: &HttpRequest,
        subject_id: i64,
        req: UpdateSubjectRequest,
    ) -> ActixResult<HttpResponse> {
        subjects::update_subject(self, request, subject_id, req).await
    }

    pub async fn delete_subject(
        &self,
        request: &HttpRequest,
        subject_id: i64,
    ) -> ActixResult<HttpResponse> {
        subjects::delete_subject(self, request, subject_id).await
    }

    pub async fn list_sessions(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        sessions::list_sessions(self, request).await
    }

    pub async fn create_session(
        &self,
        request: &HttpRequest,
        req: AcademicSessionRequest,
    ) -> ActixResult<HttpResponse> {
        sessions::create_session(self, request, req).await
    }

    pub async fn update_session(
        &self,
        request: &HttpRequest,
        session_id: i64,
        req: AcademicSessionRequest,
    ) -> ActixResult<HttpResponse> {
        sessions::update_session(self, request, session_id, req).await
    }

    pub async fn delete_session(
        &self,
        request: &HttpRequest,
        session_id: i64,
    ) -> ActixResult<HttpResponse> {
        sessions::delete_session(self, request, session_id).await
    }
}
