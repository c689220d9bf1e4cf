use crate::models::common::PaginationQuery;
use crate::models::users::entities::UserRole;
use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "feedback.ts")]
pub struct SubmitFeedbackRequest {
    pub feedback: String,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "feedback.ts")]
pub struct ReplyFeedbackRequest {
    pub reply: String,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "feedback.ts")]
pub struct FeedbackListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub role: Option<UserRole>,
}

#[derive(Debug, Clone, Default)]
pub struct FeedbackListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub role: Option<UserRole>,
}
