use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 请假状态，数据库中存为 0 / 1 / -1
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "leave.ts")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn code(self) -> i16 {
        match self {
            LeaveStatus::Pending => 0,
            LeaveStatus::Approved => 1,
            LeaveStatus::Rejected => -1,
        }
    }

    pub fn from_code(code: i16) -> Self {
        match code {
            1 => LeaveStatus::Approved,
            -1 => LeaveStatus::Rejected,
            _ => LeaveStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "leave.ts")]
pub struct LeaveReport {
    pub id: i64,
    pub user_id: i64,
    // 请假日期，原样保存用户输入
    pub date: String,
    pub message: String,
    pub status: LeaveStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        for status in [
            LeaveStatus::Pending,
            LeaveStatus::Approved,
            LeaveStatus::Rejected,
        ] {
            assert_eq!(LeaveStatus::from_code(status.code()), status);
        }
        assert_eq!(LeaveStatus::from_code(7), LeaveStatus::Pending);
    }
}
