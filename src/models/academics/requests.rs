use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "academics.ts")]
pub struct CourseRequest {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "academics.ts")]
pub struct CreateSubjectRequest {
    pub name: String,
    pub staff_id: i64,
    pub course_id: i64,
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "academics.ts")]
pub struct UpdateSubjectRequest {
    pub name: Option<String>,
    pub staff_id: Option<i64>,
    pub course_id: Option<i64>,
}

// 科目筛选参数
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "academics.ts")]
pub struct SubjectListQuery {
    pub staff_id: Option<i64>,
    pub course_id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "academics.ts")]
pub struct AcademicSessionRequest {
    pub start_year: chrono::NaiveDate,
    pub end_year: chrono::NaiveDate,
}
