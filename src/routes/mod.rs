pub mod academics;
pub mod attendance;
pub mod auth;
pub mod dashboard;
pub mod feedbacks;
pub mod leaves;
pub mod notifications;
pub mod quiz_attempts;
pub mod quiz_sessions;
pub mod quizzes;
pub mod results;
pub mod users;

pub use academics::configure_academic_routes;
pub use attendance::configure_attendance_routes;
pub use auth::configure_auth_routes;
pub use dashboard::configure_dashboard_routes;
pub use feedbacks::configure_feedback_routes;
pub use leaves::configure_leave_routes;
pub use notifications::configure_notification_routes;
pub use quiz_attempts::configure_quiz_attempt_routes;
pub use quiz_sessions::configure_quiz_session_routes;
pub use quizzes::configure_quiz_routes;
pub use results::configure_result_routes;
pub use users::configure_user_routes;
