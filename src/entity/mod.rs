//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。

pub mod prelude;

pub mod academic_sessions;
pub mod admins;
pub mod answers;
pub mod attendance_reports;
pub mod attendances;
pub mod choices;
pub mod courses;
pub mod feedbacks;
pub mod leave_reports;
pub mod notifications;
pub mod questions;
pub mod quiz_attempts;
pub mod quiz_sessions;
pub mod quizzes;
pub mod staffs;
pub mod student_results;
pub mod students;
pub mod subjects;
pub mod users;

use chrono::{DateTime, Utc};

/// 秒级时间戳转 UTC 时间
pub(crate) fn to_datetime(ts: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()
}
