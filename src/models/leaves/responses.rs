use super::entities::LeaveReport;
use crate::models::common::PaginationInfo;
use crate::models::users::entities::UserRole;
use serde::Serialize;
use ts_rs::TS;

// 管理员视角的请假记录，附带申请人
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "leave.ts")]
pub struct LeaveWithApplicant {
    #[serde(flatten)]
    #[ts(flatten)]
    pub leave: LeaveReport,
    pub applicant_name: String,
    pub applicant_role: UserRole,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "leave.ts")]
pub struct LeaveListResponse {
    pub items: Vec<LeaveWithApplicant>,
    pub pagination: PaginationInfo,
}
