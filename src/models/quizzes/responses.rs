use super::entities::{Quiz, QuestionWithChoices};
use crate::models::quiz_sessions::entities::QuizSession;
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "quiz.ts")]
pub struct QuizDetailResponse {
    pub quiz: Quiz,
    pub questions: Vec<QuestionWithChoices>,
    pub sessions: Vec<QuizSession>,
    pub total_marks: f64,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "quiz.ts")]
pub struct QuizBuilderResponse {
    pub created: usize,
    pub questions: Vec<QuestionWithChoices>,
}
