use super::entities::StudentResult;
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "result.ts")]
pub struct SaveResultResponse {
    pub result: StudentResult,
    // 是否为新建记录
    pub created: bool,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "result.ts")]
pub struct ResultScores {
    pub test: f64,
    pub exam: f64,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "result.ts")]
pub struct MyResultEntry {
    pub subject_id: i64,
    pub subject_name: String,
    pub test: f64,
    pub exam: f64,
    pub total: f64,
}
