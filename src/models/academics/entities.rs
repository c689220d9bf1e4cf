use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "academics.ts")]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "academics.ts")]
pub struct Subject {
    pub id: i64,
    pub name: String,
    // 授课教职工档案ID
    pub staff_id: i64,
    pub course_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "academics.ts")]
pub struct AcademicSession {
    pub id: i64,
    pub start_year: chrono::NaiveDate,
    pub end_year: chrono::NaiveDate,
}

impl AcademicSession {
    pub fn label(&self) -> String {
        format!("From {} to {}", self.start_year, self.end_year)
    }
}
