use super::entities::QuizAttempt;
use crate::models::quizzes::entities::QuestionType;
use serde::Serialize;
use ts_rs::TS;

// 作答时下发的选项，不含正确答案
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "quiz_attempt.ts")]
pub struct PublicChoice {
    pub id: i64,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "quiz_attempt.ts")]
pub struct PublicQuestion {
    pub id: i64,
    pub text: String,
    pub question_type: QuestionType,
    pub marks: f64,
    pub order: i32,
    pub choices: Vec<PublicChoice>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "quiz_attempt.ts")]
pub struct StartAttemptResponse {
    pub attempt: QuizAttempt,
    pub quiz_title: String,
    pub duration_minutes: i32,
    pub deadline: chrono::DateTime<chrono::Utc>,
    pub questions: Vec<PublicQuestion>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "quiz_attempt.ts")]
pub struct AttemptResultResponse {
    pub attempt: QuizAttempt,
    pub quiz_title: String,
    pub total_marks: f64,
    pub percentage: f64,
}
