use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "quiz_session.ts")]
pub struct QuizSession {
    pub id: i64,
    pub quiz_id: i64,
    // 创建者教职工档案ID
    pub created_by: i64,
    pub session_code: String,
    pub is_active: bool,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub max_attempts_per_student: i32,
    pub created_at: DateTime<Utc>,
}

impl QuizSession {
    /// 是否在 `now` 时刻开放作答，窗口两端均包含
    pub fn is_open_at(&self, now: DateTime<Utc>) -> bool {
        if !self.is_active {
            return false;
        }
        if let Some(starts_at) = self.starts_at
            && now < starts_at
        {
            return false;
        }
        if let Some(ends_at) = self.ends_at
            && now > ends_at
        {
            return false;
        }
        true
    }

    pub fn is_open_now(&self) -> bool {
        self.is_open_at(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn session(is_active: bool) -> QuizSession {
        QuizSession {
            id: 1,
            quiz_id: 1,
            created_by: 1,
            session_code: "ABC234".to_string(),
            is_active,
            starts_at: None,
            ends_at: None,
            max_attempts_per_student: 1,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_inactive_session_is_closed() {
        assert!(!session(false).is_open_at(Utc::now()));
    }

    #[test]
    fn test_open_without_window() {
        assert!(session(true).is_open_at(Utc::now()));
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let now = Utc::now();
        let mut s = session(true);
        s.starts_at = Some(now);
        s.ends_at = Some(now + Duration::minutes(30));

        assert!(s.is_open_at(now));
        assert!(s.is_open_at(now + Duration::minutes(30)));
        assert!(!s.is_open_at(now - Duration::seconds(1)));
        assert!(!s.is_open_at(now + Duration::minutes(30) + Duration::seconds(1)));
    }

    #[test]
    fn test_only_end_bound() {
        let now = Utc::now();
        let mut s = session(true);
        s.ends_at = Some(now - Duration::minutes(1));
        assert!(!s.is_open_at(now));
    }
}
