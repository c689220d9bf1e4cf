use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "notification.ts")]
pub struct SendNotificationRequest {
    pub user_id: i64,
    pub message: String,
}
