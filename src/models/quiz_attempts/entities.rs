use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "quiz_attempt.ts")]
pub enum AttemptStatus {
    Started,
    Submitted,
    Cancelled,
}

impl std::fmt::Display for AttemptStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttemptStatus::Started => write!(f, "started"),
            AttemptStatus::Submitted => write!(f, "submitted"),
            AttemptStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for AttemptStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "started" => Ok(AttemptStatus::Started),
            "submitted" => Ok(AttemptStatus::Submitted),
            "cancelled" => Ok(AttemptStatus::Cancelled),
            _ => Err(format!("Invalid attempt status: {s}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "quiz_attempt.ts")]
pub struct QuizAttempt {
    pub id: i64,
    pub session_id: i64,
    // 学生档案ID
    pub student_id: i64,
    pub attempt_no: i32,
    pub status: AttemptStatus,
    pub started_at: DateTime<Utc>,
    pub submitted_at: Option<DateTime<Utc>>,
    pub score: f64,
}

// 多选题每个选中项一行
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "quiz_attempt.ts")]
pub struct Answer {
    pub id: i64,
    pub attempt_id: i64,
    pub question_id: i64,
    pub selected_choice_id: Option<i64>,
    pub text_answer: String,
}
