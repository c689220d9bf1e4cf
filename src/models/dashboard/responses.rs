use serde::Serialize;
use ts_rs::TS;

// 每个科目的考勤次数
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "dashboard.ts")]
pub struct SubjectAttendanceCount {
    pub subject_id: i64,
    pub subject_name: String,
    pub attendance_count: i64,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "dashboard.ts")]
pub struct CourseStudentCount {
    pub course_id: i64,
    pub course_name: String,
    pub student_count: i64,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "dashboard.ts")]
pub struct AdminDashboardResponse {
    pub total_staff: i64,
    pub total_students: i64,
    pub total_courses: i64,
    pub total_subjects: i64,
    pub subject_attendance: Vec<SubjectAttendanceCount>,
    pub course_students: Vec<CourseStudentCount>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "dashboard.ts")]
pub struct StaffDashboardResponse {
    pub total_students: i64,
    pub total_leaves: i64,
    pub total_subjects: i64,
    pub total_attendance: i64,
    pub subject_attendance: Vec<SubjectAttendanceCount>,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "dashboard.ts")]
pub struct SubjectPresence {
    pub subject_id: i64,
    pub subject_name: String,
    pub present: i64,
    pub absent: i64,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "dashboard.ts")]
pub struct StudentDashboardResponse {
    pub total_attendance: i64,
    pub total_present: i64,
    pub total_absent: i64,
    pub percent_present: i64,
    pub percent_absent: i64,
    pub total_subjects: i64,
    pub subjects: Vec<SubjectPresence>,
}
