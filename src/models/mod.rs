//! 数据模型
//!
//! `entities` 为业务实体，`requests` / `responses` 为 HTTP 层的输入输出。

pub mod academics;
pub mod attendance;
pub mod auth;
pub mod common;
pub mod dashboard;
pub mod feedbacks;
pub mod leaves;
pub mod notifications;
pub mod quiz_attempts;
pub mod quiz_sessions;
pub mod quizzes;
pub mod results;
pub mod users;

pub use common::{ApiResponse, PaginatedResponse, PaginationInfo, PaginationQuery};

/// 业务错误码
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1003,
    NotFound = 1004,
    Conflict = 1009,
    RateLimitExceeded = 1029,
    InternalServerError = 1500,

    // 认证
    AuthFailed = 2000,
    RefreshTokenInvalid = 2001,
    PasswordPolicyViolation = 2002,

    // 用户
    UserNotFound = 3000,
    UserAlreadyExists = 3001,
    UserCreationFailed = 3002,
    UserUpdateFailed = 3003,
    UserDeleteFailed = 3004,
    UserEmailInvalid = 3005,
    UserNameInvalid = 3006,
    CanNotDeleteCurrentUser = 3007,
    ProfileNotFound = 3008,

    // 课程 / 科目 / 学年
    CourseNotFound = 4000,
    SubjectNotFound = 4001,
    AcademicSessionNotFound = 4002,
    AcademicSessionInvalid = 4003,

    // 考勤
    AttendanceNotFound = 4100,
    AttendanceReportNotFound = 4101,
    AttendanceDateInvalid = 4102,

    // 请假 / 反馈 / 通知
    LeaveNotFound = 4200,
    LeaveAlreadyReviewed = 4201,
    FeedbackNotFound = 4202,

    // 成绩
    ResultNotFound = 4300,
    ResultScoreInvalid = 4301,

    // 测验
    QuizNotFound = 5000,
    QuestionNotFound = 5001,
    QuestionInvalid = 5002,
    QuizSessionNotFound = 5100,
    QuizSessionInvalid = 5101,
    QuizSessionCodeInvalid = 5102,
    QuizSessionClosed = 5103,
    QuizSessionCodeExhausted = 5104,
    QuizAttemptNotFound = 5200,
    QuizAttemptLimitReached = 5201,
    QuizAttemptNotInProgress = 5202,
    QuizAttemptExpired = 5203,
    QuizNoSubmissions = 5300,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::NotFound as i32, 1004);
        assert_eq!(ErrorCode::QuizAttemptLimitReached as i32, 5201);
    }
}
