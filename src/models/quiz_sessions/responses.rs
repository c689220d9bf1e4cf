use super::entities::QuizSession;
use crate::models::quizzes::entities::{QuestionType, Quiz};
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "quiz_session.ts")]
pub struct SessionDetailResponse {
    pub session: QuizSession,
    pub quiz_title: String,
    pub is_open: bool,
    pub attempt_count: i64,
    // data:image/png;base64,...
    pub qr_data_url: String,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "quiz_session.ts")]
pub struct JoinSessionResponse {
    pub session_id: i64,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "quiz_session.ts")]
pub struct LobbyResponse {
    pub session_id: i64,
    pub quiz: Quiz,
    pub question_count: usize,
    pub total_marks: f64,
    pub is_open: bool,
    pub attempts_used: i64,
    pub attempts_remaining: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "quiz_session.ts")]
pub struct ScoreStats {
    pub average: f64,
    pub max: f64,
    pub min: f64,
    pub std_dev: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "quiz_session.ts")]
pub struct HistogramBin {
    pub label: String,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "quiz_session.ts")]
pub struct AttemptSummary {
    pub attempt_id: i64,
    pub student_id: i64,
    pub student_name: String,
    pub attempt_no: i32,
    pub score: f64,
    pub submitted_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "quiz_session.ts")]
pub struct SessionDashboardResponse {
    pub session_id: i64,
    pub quiz_title: String,
    pub total_marks: f64,
    pub no_submissions: bool,
    pub stats: Option<ScoreStats>,
    pub students_submitted: i64,
    pub students_in_course: i64,
    pub participation_rate: f64,
    pub histogram: Vec<HistogramBin>,
    pub attempts: Vec<AttemptSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "quiz_session.ts")]
pub struct ChoiceAnalysis {
    pub choice_id: i64,
    pub text: String,
    pub is_correct: bool,
    pub times_selected: i64,
    pub selection_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "quiz_session.ts")]
pub struct QuestionAnalysis {
    pub question_id: i64,
    pub text: String,
    pub question_type: QuestionType,
    pub marks: f64,
    pub answered: i64,
    pub correct: i64,
    // 未作答时为空
    pub difficulty: Option<f64>,
    pub choices: Vec<ChoiceAnalysis>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "quiz_session.ts")]
pub struct ItemAnalysisResponse {
    pub session_id: i64,
    pub quiz_title: String,
    pub submitted_attempts: i64,
    pub questions: Vec<QuestionAnalysis>,
}
