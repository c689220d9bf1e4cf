//! 预导入模块，方便使用

pub use super::academic_sessions::{
    ActiveModel as AcademicSessionActiveModel, Entity as AcademicSessions,
    Model as AcademicSessionModel,
};
pub use super::admins::{ActiveModel as AdminActiveModel, Entity as Admins, Model as AdminModel};
pub use super::answers::{ActiveModel as AnswerActiveModel, Entity as Answers, Model as AnswerModel};
pub use super::attendance_reports::{
    ActiveModel as AttendanceReportActiveModel, Entity as AttendanceReports,
    Model as AttendanceReportModel,
};
pub use super::attendances::{
    ActiveModel as AttendanceActiveModel, Entity as Attendances, Model as AttendanceModel,
};
pub use super::choices::{ActiveModel as ChoiceActiveModel, Entity as Choices, Model as ChoiceModel};
pub use super::courses::{ActiveModel as CourseActiveModel, Entity as Courses, Model as CourseModel};
pub use super::feedbacks::{
    ActiveModel as FeedbackActiveModel, Entity as Feedbacks, Model as FeedbackModel,
};
pub use super::leave_reports::{
    ActiveModel as LeaveReportActiveModel, Entity as LeaveReports, Model as LeaveReportModel,
};
pub use super::notifications::{
    ActiveModel as NotificationActiveModel, Entity as Notifications, Model as NotificationModel,
};
pub use super::questions::{
    ActiveModel as QuestionActiveModel, Entity as Questions, Model as QuestionModel,
};
pub use super::quiz_attempts::{
    ActiveModel as QuizAttemptActiveModel, Entity as QuizAttempts, Model as QuizAttemptModel,
};
pub use super::quiz_sessions::{
    ActiveModel as QuizSessionActiveModel, Entity as QuizSessions, Model as QuizSessionModel,
};
pub use super::quizzes::{ActiveModel as QuizActiveModel, Entity as Quizzes, Model as QuizModel};
pub use super::staffs::{ActiveModel as StaffActiveModel, Entity as Staffs, Model as StaffModel};
pub use super::student_results::{
    ActiveModel as StudentResultActiveModel, Entity as StudentResults, Model as StudentResultModel,
};
pub use super::students::{
    ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel,
};
pub use super::subjects::{
    ActiveModel as SubjectActiveModel, Entity as Subjects, Model as SubjectModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
