use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "feedback.ts")]
pub struct Feedback {
    pub id: i64,
    pub user_id: i64,
    pub feedback: String,
    // 未回复时为空字符串
    pub reply: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
