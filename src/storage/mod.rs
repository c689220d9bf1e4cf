use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户及其档案（密码需已哈希）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息（含档案中的课程 / 学年）
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 更新推送令牌
    async fn update_fcm_token(&self, id: i64, token: &str) -> Result<bool>;
    // 统计用户数量
    async fn count_users(&self) -> Result<u64>;
    // 档案查询
    async fn get_staff_by_user_id(&self, user_id: i64) -> Result<Option<StaffProfile>>;
    async fn get_student_by_user_id(&self, user_id: i64) -> Result<Option<StudentProfile>>;
    async fn get_staff_by_id(&self, id: i64) -> Result<Option<StaffProfile>>;
    async fn get_student_by_id(&self, id: i64) -> Result<Option<StudentProfile>>;

    /// 课程管理方法
    async fn create_course(&self, name: &str) -> Result<Course>;
    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>>;
    async fn list_courses(&self) -> Result<Vec<Course>>;
    async fn update_course(&self, id: i64, name: &str) -> Result<Option<Course>>;
    async fn delete_course(&self, id: i64) -> Result<bool>;

    /// 科目管理方法
    async fn create_subject(&self, req: CreateSubjectRequest) -> Result<Subject>;
    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>>;
    async fn list_subjects(&self, query: SubjectListQuery) -> Result<Vec<Subject>>;
    async fn update_subject(&self, id: i64, update: UpdateSubjectRequest)
    -> Result<Option<Subject>>;
    async fn delete_subject(&self, id: i64) -> Result<bool>;

    /// 学年管理方法
    async fn create_academic_session(&self, req: AcademicSessionRequest)
    -> Result<AcademicSession>;
    async fn get_academic_session_by_id(&self, id: i64) -> Result<Option<AcademicSession>>;
    async fn list_academic_sessions(&self) -> Result<Vec<AcademicSession>>;
    async fn update_academic_session(
        &self,
        id: i64,
        req: AcademicSessionRequest,
    ) -> Result<Option<AcademicSession>>;
    async fn delete_academic_session(&self, id: i64) -> Result<bool>;

    /// 考勤方法
    // 某课程某学年的学生名单
    async fn list_roster(&self, course_id: i64, session_id: i64) -> Result<Vec<RosterEntry>>;
    // 保存考勤，已有记录不覆盖
    async fn save_attendance(
        &self,
        subject_id: i64,
        session_id: i64,
        date: chrono::NaiveDate,
        marks: &[AttendanceMark],
    ) -> Result<SaveAttendanceResponse>;
    async fn list_attendances(&self, subject_id: i64, session_id: i64) -> Result<Vec<Attendance>>;
    async fn get_attendance_by_id(&self, id: i64) -> Result<Option<Attendance>>;
    async fn list_attendance_reports(&self, attendance_id: i64)
    -> Result<Vec<AttendanceReportEntry>>;
    // 覆盖已有记录的状态，mark 中的 student_id 为用户ID
    async fn update_attendance_reports(
        &self,
        attendance_id: i64,
        marks: &[AttendanceMark],
    ) -> Result<usize>;
    async fn list_student_attendance(
        &self,
        student_id: i64,
        subject_id: i64,
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    ) -> Result<Vec<MyAttendanceEntry>>;

    /// 请假方法
    async fn create_leave(&self, user_id: i64, req: ApplyLeaveRequest) -> Result<LeaveReport>;
    async fn list_leaves_by_user(&self, user_id: i64) -> Result<Vec<LeaveReport>>;
    async fn list_leaves_with_pagination(&self, query: LeaveListQuery)
    -> Result<LeaveListResponse>;
    async fn get_leave_by_id(&self, id: i64) -> Result<Option<LeaveReport>>;
    // 只处理待审批的申请，不存在或已审批时返回 None
    async fn review_leave(&self, id: i64, status: LeaveStatus) -> Result<Option<LeaveReport>>;

    /// 反馈方法
    async fn create_feedback(&self, user_id: i64, feedback: &str) -> Result<Feedback>;
    async fn list_feedbacks_by_user(&self, user_id: i64) -> Result<Vec<Feedback>>;
    async fn list_feedbacks_with_pagination(
        &self,
        query: FeedbackListQuery,
    ) -> Result<FeedbackListResponse>;
    async fn reply_feedback(&self, id: i64, reply: &str) -> Result<Option<Feedback>>;

    /// 通知方法
    async fn create_notification(&self, user_id: i64, message: &str) -> Result<Notification>;
    async fn list_notifications_by_user(&self, user_id: i64) -> Result<Vec<Notification>>;

    /// 成绩方法
    // 返回 (成绩, 是否新建)
    async fn upsert_result(&self, req: SaveResultRequest) -> Result<(StudentResult, bool)>;
    async fn get_result(&self, student_id: i64, subject_id: i64) -> Result<Option<StudentResult>>;
    async fn list_results_by_student(&self, student_id: i64) -> Result<Vec<MyResultEntry>>;

    /// 统计面板
    async fn admin_dashboard(&self) -> Result<AdminDashboardResponse>;
    async fn staff_dashboard(&self, staff: &StaffProfile) -> Result<StaffDashboardResponse>;
    async fn student_dashboard(&self, student: &StudentProfile)
    -> Result<StudentDashboardResponse>;

    /// 测验方法
    async fn create_quiz(&self, created_by: i64, req: CreateQuizRequest) -> Result<Quiz>;
    async fn get_quiz_by_id(&self, id: i64) -> Result<Option<Quiz>>;
    async fn list_quizzes_by_staff(&self, staff_id: i64) -> Result<Vec<Quiz>>;
    async fn update_quiz(&self, id: i64, update: UpdateQuizRequest) -> Result<Option<Quiz>>;
    async fn delete_quiz(&self, id: i64) -> Result<bool>;
    // 按 (order, id) 排序
    async fn list_questions_with_choices(&self, quiz_id: i64) -> Result<Vec<QuestionWithChoices>>;
    // 同一事务内写入题目及选项
    async fn create_questions(
        &self,
        quiz_id: i64,
        questions: Vec<NewQuestion>,
    ) -> Result<Vec<QuestionWithChoices>>;
    async fn get_question_by_id(&self, id: i64) -> Result<Option<Question>>;
    async fn create_choice(&self, question_id: i64, req: AddChoiceRequest) -> Result<Choice>;

    /// 测验场次方法
    async fn session_code_exists(&self, code: &str) -> Result<bool>;
    async fn create_quiz_session(&self, session: NewQuizSession) -> Result<QuizSession>;
    async fn get_quiz_session_by_id(&self, id: i64) -> Result<Option<QuizSession>>;
    async fn get_quiz_session_by_code(&self, code: &str) -> Result<Option<QuizSession>>;
    async fn list_sessions_by_quiz(&self, quiz_id: i64) -> Result<Vec<QuizSession>>;
    async fn update_quiz_session(
        &self,
        id: i64,
        update: UpdateSessionRequest,
    ) -> Result<Option<QuizSession>>;
    async fn count_session_attempts(&self, session_id: i64) -> Result<i64>;
    async fn count_student_attempts(&self, session_id: i64, student_id: i64) -> Result<i64>;
    async fn count_students_in_course(&self, course_id: i64) -> Result<i64>;

    /// 答题方法
    // 次数已用尽时返回 None
    async fn create_attempt(
        &self,
        session_id: i64,
        student_id: i64,
        max_attempts: i32,
    ) -> Result<Option<QuizAttempt>>;
    async fn get_attempt_by_id(&self, id: i64) -> Result<Option<QuizAttempt>>;
    // 仅当答题仍处于 started 状态时生效，否则返回 None
    async fn finish_attempt(
        &self,
        attempt_id: i64,
        status: AttemptStatus,
        score: f64,
        answers: Vec<NewAnswer>,
    ) -> Result<Option<QuizAttempt>>;
    // 已提交的答题，按分数降序
    async fn list_submitted_attempts(&self, session_id: i64) -> Result<Vec<AttemptSummary>>;
    async fn list_answers_for_attempts(&self, attempt_ids: &[i64]) -> Result<Vec<Answer>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
