use super::entities::LeaveStatus;
use crate::models::common::PaginationQuery;
use crate::models::users::entities::UserRole;
use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "leave.ts")]
pub struct ApplyLeaveRequest {
    pub date: String,
    pub message: String,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "leave.ts")]
pub struct LeaveListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub role: Option<UserRole>,
    pub status: Option<LeaveStatus>,
}

// 存储层查询参数
#[derive(Debug, Clone, Default)]
pub struct LeaveListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub role: Option<UserRole>,
    pub status: Option<LeaveStatus>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "leave.ts")]
pub struct ReviewLeaveRequest {
    pub approve: bool,
}
