use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 点名册条目
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "attendance.ts")]
pub struct RosterEntry {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "attendance.ts")]
pub struct SaveAttendanceResponse {
    pub attendance_id: i64,
    pub created: usize,
    pub unchanged: usize,
}

// student_id 为用户ID
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "attendance.ts")]
pub struct AttendanceReportEntry {
    pub student_id: i64,
    pub name: String,
    pub status: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "attendance.ts")]
pub struct MyAttendanceEntry {
    pub date: chrono::NaiveDate,
    pub status: bool,
}
