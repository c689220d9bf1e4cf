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

pub use academics::AcademicService;
pub use attendance::AttendanceService;
pub use auth::AuthService;
pub use dashboard::DashboardService;
pub use feedbacks::FeedbackService;
pub use leaves::LeaveService;
pub use notifications::NotificationService;
pub use quiz_attempts::QuizAttemptService;
pub use quiz_sessions::QuizSessionService;
pub use quizzes::QuizService;
pub use results::ResultService;
pub use users::UserService;
