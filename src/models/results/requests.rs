use serde::Deserialize;
use ts_rs::TS;

// student_id 为学生档案ID
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "result.ts")]
pub struct SaveResultRequest {
    pub student_id: i64,
    pub subject_id: i64,
    pub test: f64,
    pub exam: f64,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "result.ts")]
pub struct ResultLookupQuery {
    pub student_id: i64,
    pub subject_id: i64,
}
