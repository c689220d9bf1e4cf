pub mod builder;
pub mod create;
pub mod delete;
pub mod detail;
pub mod list;
pub mod questions;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::quizzes::requests::{
    AddChoiceRequest, AddQuestionRequest, CreateQuizRequest, QuizBuilderRequest,
    UpdateQuizRequest,
};
use crate::storage::Storage;

/// 默认每题分值
pub(crate) const DEFAULT_MARKS: f64 = 1.0;

pub struct QuizService {
    storage: Option<Arc<dyn Storage>>,
}

impl QuizService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::common::storage_from_request(request),
        }
    }

    pub async fn list_quizzes(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_quizzes(self, request).await
    }

    pub async fn create_quiz(
        &self,
        request: &HttpRequest,
        req: CreateQuizRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_quiz(self, request, req).await
    }

    pub async fn get_quiz(&self, request: &HttpRequest, quiz_id: i64) -> ActixResult<HttpResponse> {
        detail::get_quiz(self, request, quiz_id).await
    }

    pub async fn update_quiz(
        &self,
        request: &HttpRequest,
        quiz_id: i64,
        req: UpdateQuizRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_quiz(self, request, quiz_id, req).await
    }

    pub async fn delete_quiz(
        &self,
        request: &HttpRequest,
        quiz_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_quiz(self, request, quiz_id).await
    }

    pub async fn add_question(
        &self,
        request: &HttpRequest,
        quiz_id: i64,
        req: AddQuestionRequest,
    ) -> ActixResult<HttpResponse> {
        questions::add_question(self, request, quiz_id, req).await
    }

    pub async fn add_choice(
        &self,
        request: &HttpRequest,
        question_id: i64,
        req: AddChoiceRequest,
    ) -> ActixResult<HttpResponse> {
        questions::add_choice(self, request, question_id, req).await
    }

    // 快速出题
    pub async fn quiz_builder(
        &self,
        request: &HttpRequest,
        quiz_id: i64,
        req: QuizBuilderRequest,
    ) -> ActixResult<HttpResponse> {
        builder::quiz_builder(self, request, quiz_id, req).await
    }
}
