use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use ts_rs::TS;

fn default_max_attempts() -> i32 {
    1
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "quiz_session.ts")]
pub struct CreateSessionRequest {
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(default = "default_max_attempts")]
    pub max_attempts_per_student: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

// 字段出现即为 Some，null 得到 Some(None)
fn deserialize_nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// 省略的字段保持不变；时间窗口传 null 表示清除
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "quiz_session.ts")]
pub struct UpdateSessionRequest {
    pub is_active: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[ts(optional)]
    pub starts_at: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[ts(optional)]
    pub ends_at: Option<Option<DateTime<Utc>>>,
    pub max_attempts_per_student: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "quiz_session.ts")]
pub struct JoinSessionRequest {
    #[serde(default)]
    pub session_code: String,
}

/// 写入存储层的新场次
#[derive(Debug, Clone)]
pub struct NewQuizSession {
    pub quiz_id: i64,
    pub created_by: i64,
    pub session_code: String,
    pub is_active: bool,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub max_attempts_per_student: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_window_absent_null_and_value() {
        let absent: UpdateSessionRequest = serde_json::from_str(r#"{"is_active":false}"#).unwrap();
        assert_eq!(absent.starts_at, None);
        assert_eq!(absent.ends_at, None);

        let cleared: UpdateSessionRequest =
            serde_json::from_str(r#"{"starts_at":null,"ends_at":null}"#).unwrap();
        assert_eq!(cleared.starts_at, Some(None));
        assert_eq!(cleared.ends_at, Some(None));

        let set: UpdateSessionRequest =
            serde_json::from_str(r#"{"ends_at":"2025-10-06T09:00:00Z"}"#).unwrap();
        assert_eq!(set.starts_at, None);
        assert_eq!(
            set.ends_at.flatten().map(|t| t.timestamp()),
            Some(1_759_741_200)
        );
    }
}
