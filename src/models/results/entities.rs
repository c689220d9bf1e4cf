use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "result.ts")]
pub struct StudentResult {
    pub id: i64,
    pub student_id: i64,
    pub subject_id: i64,
    pub test: f64,
    pub exam: f64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl StudentResult {
    pub fn total(&self) -> f64 {
        self.test + self.exam
    }
}
