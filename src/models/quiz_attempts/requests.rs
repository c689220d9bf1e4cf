use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "quiz_attempt.ts")]
pub struct SubmittedAnswer {
    pub question_id: i64,
    #[serde(default)]
    pub choice_ids: Vec<i64>,
    pub text_answer: Option<String>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "quiz_attempt.ts")]
pub struct SubmitAttemptRequest {
    #[serde(default)]
    pub answers: Vec<SubmittedAnswer>,
}

/// 评分后写入存储层的作答行
#[derive(Debug, Clone, PartialEq)]
pub struct NewAnswer {
    pub question_id: i64,
    pub selected_choice_id: Option<i64>,
    pub text_answer: String,
}
