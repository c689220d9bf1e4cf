use super::entities::Feedback;
use crate::models::common::PaginationInfo;
use crate::models::users::entities::UserRole;
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "feedback.ts")]
pub struct FeedbackWithSender {
    #[serde(flatten)]
    #[ts(flatten)]
    pub feedback: Feedback,
    pub sender_name: String,
    pub sender_role: UserRole,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "feedback.ts")]
pub struct FeedbackListResponse {
    pub items: Vec<FeedbackWithSender>,
    pub pagination: PaginationInfo,
}
