use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "attendance.ts")]
pub struct SubjectSessionQuery {
    pub subject_id: i64,
    pub session_id: i64,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "attendance.ts")]
pub struct AttendanceMark {
    pub student_id: i64,
    pub status: bool,
}

// 保存考勤：student_id 为学生档案ID
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "attendance.ts")]
pub struct SaveAttendanceRequest {
    pub subject_id: i64,
    pub session_id: i64,
    pub date: chrono::NaiveDate,
    pub students: Vec<AttendanceMark>,
}

// 修改考勤：student_id 为学生的用户ID
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "attendance.ts")]
pub struct UpdateAttendanceRequest {
    pub students: Vec<AttendanceMark>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "attendance.ts")]
pub struct MyAttendanceQuery {
    pub subject_id: i64,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
}
