//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod academics;
mod attendance;
mod dashboard;
mod feedbacks;
mod leaves;
mod notifications;
mod quiz_attempts;
mod quiz_sessions;
mod quizzes;
mod results;
mod users;

use crate::models::{
    academics::{
        entities::{AcademicSession, Course, Subject},
        requests::{
            AcademicSessionRequest, CreateSubjectRequest, SubjectListQuery, UpdateSubjectRequest,
        },
    },
    attendance::{
        entities::Attendance,
        requests::AttendanceMark,
        responses::{
            AttendanceReportEntry, MyAttendanceEntry, RosterEntry, SaveAttendanceResponse,
        },
    },
    dashboard::responses::{
        AdminDashboardResponse, StaffDashboardResponse, StudentDashboardResponse,
    },
    feedbacks::{
        entities::Feedback, requests::FeedbackListQuery, responses::FeedbackListResponse,
    },
    leaves::{
        entities::{LeaveReport, LeaveStatus},
        requests::{ApplyLeaveRequest, LeaveListQuery},
        responses::LeaveListResponse,
    },
    notifications::entities::Notification,
    quiz_attempts::{
        entities::{Answer, AttemptStatus, QuizAttempt},
        requests::NewAnswer,
    },
    quiz_sessions::{
        entities::QuizSession,
        requests::{NewQuizSession, UpdateSessionRequest},
        responses::AttemptSummary,
    },
    quizzes::{
        entities::{Choice, Question, QuestionWithChoices, Quiz},
        requests::{AddChoiceRequest, CreateQuizRequest, NewQuestion, UpdateQuizRequest},
    },
    results::{entities::StudentResult, requests::SaveResultRequest, responses::MyResultEntry},
    users::{
        entities::{StaffProfile, StudentProfile, User},
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};

use super::Storage;
use async_trait::async_trait;
use crate::config::AppConfig;
use crate::errors::{SchoolHubError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr, SqlErr};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// 基于已有连接创建存储并运行迁移
    pub async fn from_connection(db: DatabaseConnection) -> Result<Self> {
        Migrator::up(&db, None)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("数据库迁移失败: {e}")))?;
        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| SchoolHubError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000")
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| SchoolHubError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| SchoolHubError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(SchoolHubError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

/// 数据库错误转换，唯一约束冲突映射为 Conflict
pub(crate) fn db_error(context: &'static str) -> impl Fn(DbErr) -> SchoolHubError {
    move |e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => {
            SchoolHubError::conflict(format!("{context}: {msg}"))
        }
        _ => SchoolHubError::database_operation(format!("{context}: {e}")),
    }
}

// Storage trait 实现
#[async_trait]
impl Storage for SeaOrmStorage {
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn update_fcm_token(&self, id: i64, token: &str) -> Result<bool> {
        self.update_fcm_token_impl(id, token).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    async fn get_staff_by_user_id(&self, user_id: i64) -> Result<Option<StaffProfile>> {
        self.get_staff_by_user_id_impl(user_id).await
    }

    async fn get_student_by_user_id(&self, user_id: i64) -> Result<Option<StudentProfile>> {
        self.get_student_by_user_id_impl(user_id).await
    }

    async fn get_staff_by_id(&self, id: i64) -> Result<Option<StaffProfile>> {
        self.get_staff_by_id_impl(id).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<StudentProfile>> {
        self.get_student_by_id_impl(id).await
    }

    async fn create_course(&self, name: &str) -> Result<Course> {
        self.create_course_impl(name).await
    }

    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(id).await
    }

    async fn list_courses(&self) -> Result<Vec<Course>> {
        self.list_courses_impl().await
    }

    async fn update_course(&self, id: i64, name: &str) -> Result<Option<Course>> {
        self.update_course_impl(id, name).await
    }

    async fn delete_course(&self, id: i64) -> Result<bool> {
        self.delete_course_impl(id).await
    }

    async fn create_subject(&self, req: CreateSubjectRequest) -> Result<Subject> {
        self.create_subject_impl(req).await
    }

    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>> {
        self.get_subject_by_id_impl(id).await
    }

    async fn list_subjects(&self, query: SubjectListQuery) -> Result<Vec<Subject>> {
        self.list_subjects_impl(query).await
    }

    async fn update_subject(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        self.update_subject_impl(id, update).await
    }

    async fn delete_subject(&self, id: i64) -> Result<bool> {
        self.delete_subject_impl(id).await
    }

    async fn create_academic_session(
        &self,
        req: AcademicSessionRequest,
    ) -> Result<AcademicSession> {
        self.create_academic_session_impl(req).await
    }

    async fn get_academic_session_by_id(&self, id: i64) -> Result<Option<AcademicSession>> {
        self.get_academic_session_by_id_impl(id).await
    }

    async fn list_academic_sessions(&self) -> Result<Vec<AcademicSession>> {
        self.list_academic_sessions_impl().await
    }

    async fn update_academic_session(
        &self,
        id: i64,
        req: AcademicSessionRequest,
    ) -> Result<Option<AcademicSession>> {
        self.update_academic_session_impl(id, req).await
    }

    async fn delete_academic_session(&self, id: i64) -> Result<bool> {
        self.delete_academic_session_impl(id).await
    }

    async fn list_roster(&self, course_id: i64, session_id: i64) -> Result<Vec<RosterEntry>> {
        self.list_roster_impl(course_id, session_id).await
    }

    async fn save_attendance(
        &self,
        subject_id: i64,
        session_id: i64,
        date: chrono::NaiveDate,
        marks: &[AttendanceMark],
    ) -> Result<SaveAttendanceResponse> {
        self.save_attendance_impl(subject_id, session_id, date, marks).await
    }

    async fn list_attendances(&self, subject_id: i64, session_id: i64) -> Result<Vec<Attendance>> {
        self.list_attendances_impl(subject_id, session_id).await
    }

    async fn get_attendance_by_id(&self, id: i64) -> Result<Option<Attendance>> {
        self.get_attendance_by_id_impl(id).await
    }

    async fn list_attendance_reports(
        &self,
        attendance_id: i64,
    ) -> Result<Vec<AttendanceReportEntry>> {
        self.list_attendance_reports_impl(attendance_id).await
    }

    async fn update_attendance_reports(
        &self,
        attendance_id: i64,
        marks: &[AttendanceMark],
    ) -> Result<usize> {
        self.update_attendance_reports_impl(attendance_id, marks).await
    }

    async fn list_student_attendance(
        &self,
        student_id: i64,
        subject_id: i64,
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    ) -> Result<Vec<MyAttendanceEntry>> {
        self.list_student_attendance_impl(student_id, subject_id, start, end).await
    }

    async fn create_leave(&self, user_id: i64, req: ApplyLeaveRequest) -> Result<LeaveReport> {
        self.create_leave_impl(user_id, req).await
    }

    async fn list_leaves_by_user(&self, user_id: i64) -> Result<Vec<LeaveReport>> {
        self.list_leaves_by_user_impl(user_id).await
    }

    async fn list_leaves_with_pagination(
        &self,
        query: LeaveListQuery,
    ) -> Result<LeaveListResponse> {
        self.list_leaves_with_pagination_impl(query).await
    }

    async fn get_leave_by_id(&self, id: i64) -> Result<Option<LeaveReport>> {
        self.get_leave_by_id_impl(id).await
    }

    async fn review_leave(&self, id: i64, status: LeaveStatus) -> Result<Option<LeaveReport>> {
        self.review_leave_impl(id, status).await
    }

    async fn create_feedback(&self, user_id: i64, feedback: &str) -> Result<Feedback> {
        self.create_feedback_impl(user_id, feedback).await
    }

    async fn list_feedbacks_by_user(&self, user_id: i64) -> Result<Vec<Feedback>> {
        self.list_feedbacks_by_user_impl(user_id).await
    }

    async fn list_feedbacks_with_pagination(
        &self,
        query: FeedbackListQuery,
    ) -> Result<FeedbackListResponse> {
        self.list_feedbacks_with_pagination_impl(query).await
    }

    async fn reply_feedback(&self, id: i64, reply: &str) -> Result<Option<Feedback>> {
        self.reply_feedback_impl(id, reply).await
    }

    async fn create_notification(&self, user_id: i64, message: &str) -> Result<Notification> {
        self.create_notification_impl(user_id, message).await
    }

    async fn list_notifications_by_user(&self, user_id: i64) -> Result<Vec<Notification>> {
        self.list_notifications_by_user_impl(user_id).await
    }

    async fn upsert_result(&self, req: SaveResultRequest) -> Result<(StudentResult, bool)> {
        self.upsert_result_impl(req).await
    }

    async fn get_result(&self, student_id: i64, subject_id: i64) -> Result<Option<StudentResult>> {
        self.get_result_impl(student_id, subject_id).await
    }

    async fn list_results_by_student(&self, student_id: i64) -> Result<Vec<MyResultEntry>> {
        self.list_results_by_student_impl(student_id).await
    }

    async fn admin_dashboard(&self) -> Result<AdminDashboardResponse> {
        self.admin_dashboard_impl().await
    }

    async fn staff_dashboard(&self, staff: &StaffProfile) -> Result<StaffDashboardResponse> {
        self.staff_dashboard_impl(staff).await
    }

    async fn student_dashboard(
        &self,
        student: &StudentProfile,
    ) -> Result<StudentDashboardResponse> {
        self.student_dashboard_impl(student).await
    }

    async fn create_quiz(&self, created_by: i64, req: CreateQuizRequest) -> Result<Quiz> {
        self.create_quiz_impl(created_by, req).await
    }

    async fn get_quiz_by_id(&self, id: i64) -> Result<Option<Quiz>> {
        self.get_quiz_by_id_impl(id).await
    }

    async fn list_quizzes_by_staff(&self, staff_id: i64) -> Result<Vec<Quiz>> {
        self.list_quizzes_by_staff_impl(staff_id).await
    }

    async fn update_quiz(&self, id: i64, update: UpdateQuizRequest) -> Result<Option<Quiz>> {
        self.update_quiz_impl(id, update).await
    }

    async fn delete_quiz(&self, id: i64) -> Result<bool> {
        self.delete_quiz_impl(id).await
    }

    async fn list_questions_with_choices(&self, quiz_id: i64) -> Result<Vec<QuestionWithChoices>> {
        self.list_questions_with_choices_impl(quiz_id).await
    }

    async fn create_questions(
        &self,
        quiz_id: i64,
        questions: Vec<NewQuestion>,
    ) -> Result<Vec<QuestionWithChoices>> {
        self.create_questions_impl(quiz_id, questions).await
    }

    async fn get_question_by_id(&self, id: i64) -> Result<Option<Question>> {
        self.get_question_by_id_impl(id).await
    }

    async fn create_choice(&self, question_id: i64, req: AddChoiceRequest) -> Result<Choice> {
        self.create_choice_impl(question_id, req).await
    }

    async fn session_code_exists(&self, code: &str) -> Result<bool> {
        self.session_code_exists_impl(code).await
    }

    async fn create_quiz_session(&self, session: NewQuizSession) -> Result<QuizSession> {
        self.create_quiz_session_impl(session).await
    }

    async fn get_quiz_session_by_id(&self, id: i64) -> Result<Option<QuizSession>> {
        self.get_quiz_session_by_id_impl(id).await
    }

    async fn get_quiz_session_by_code(&self, code: &str) -> Result<Option<QuizSession>> {
        self.get_quiz_session_by_code_impl(code).await
    }

    async fn list_sessions_by_quiz(&self, quiz_id: i64) -> Result<Vec<QuizSession>> {
        self.list_sessions_by_quiz_impl(quiz_id).await
    }

    async fn update_quiz_session(
        &self,
        id: i64,
        update: UpdateSessionRequest,
    ) -> Result<Option<QuizSession>> {
        self.update_quiz_session_impl(id, update).await
    }

    async fn count_session_attempts(&self, session_id: i64) -> Result<i64> {
        self.count_session_attempts_impl(session_id).await
    }

    async fn count_student_attempts(&self, session_id: i64, student_id: i64) -> Result<i64> {
        self.count_student_attempts_impl(session_id, student_id).await
    }

    async fn count_students_in_course(&self, course_id: i64) -> Result<i64> {
        self.count_students_in_course_impl(course_id).await
    }

    async fn create_attempt(
        &self,
        session_id: i64,
        student_id: i64,
        max_attempts: i32,
    ) -> Result<Option<QuizAttempt>> {
        self.create_attempt_impl(session_id, student_id, max_attempts).await
    }

    async fn get_attempt_by_id(&self, id: i64) -> Result<Option<QuizAttempt>> {
        self.get_attempt_by_id_impl(id).await
    }

    async fn finish_attempt(
        &self,
        attempt_id: i64,
        status: AttemptStatus,
        score: f64,
        answers: Vec<NewAnswer>,
    ) -> Result<Option<QuizAttempt>> {
        self.finish_attempt_impl(attempt_id, status, score, answers).await
    }

    async fn list_submitted_attempts(&self, session_id: i64) -> Result<Vec<AttemptSummary>> {
        self.list_submitted_attempts_impl(session_id).await
    }

    async fn list_answers_for_attempts(&self, attempt_ids: &[i64]) -> Result<Vec<Answer>> {
        self.list_answers_for_attempts_impl(attempt_ids).await
    }
}

#[cfg(test)]
mod tests;
