use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::{DateTime, Utc};
use tracing::{info, warn};

use super::QuizSessionService;
use crate::errors::SchoolHubError;
use crate::models::quiz_sessions::requests::{CreateSessionRequest, NewQuizSession};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{
    bad_request, current_user, load_owned_quiz, require_staff_profile, storage_error,
};
use crate::utils::random_code::generate_session_code;

/// 场次窗口与次数上限校验
pub(crate) fn check_session_settings(
    starts_at: Option<DateTime<Utc>>,
    ends_at: Option<DateTime<Utc>>,
    max_attempts: i32,
) -> Result<(), &'static str> {
    if let (Some(starts_at), Some(ends_at)) = (starts_at, ends_at)
        && ends_at <= starts_at
    {
        return Err("ends_at must be after starts_at");
    }
    if max_attempts < 1 {
        return Err("max_attempts_per_student must be at least 1");
    }
    Ok(())
}

pub async fn create_session(
    service: &QuizSessionService,
    request: &HttpRequest,
    quiz_id: i64,
    req: CreateSessionRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) =
        check_session_settings(req.starts_at, req.ends_at, req.max_attempts_per_student)
    {
        return Ok(bad_request(ErrorCode::QuizSessionInvalid, msg));
    }

    let storage = service.get_storage(request)?;
    let config = &service.get_config().quiz;
    let user = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    let staff = match require_staff_profile(&storage, &user).await {
        Ok(staff) => staff,
        Err(resp) => return Ok(resp),
    };
    let quiz = match load_owned_quiz(&storage, &staff, quiz_id).await {
        Ok(quiz) => quiz,
        Err(resp) => return Ok(resp),
    };

    // 先查后插，唯一索引兜底并发冲突
    for attempt in 1..=config.code_max_retries {
        let code = generate_session_code(config.code_length);
        match storage.session_code_exists(&code).await {
            Ok(true) => continue,
            Ok(false) => {}
            Err(e) => return Ok(storage_error("Failed to check session code", e)),
        }

        let new_session = NewQuizSession {
            quiz_id: quiz.id,
            created_by: staff.id,
            session_code: code,
            is_active: req.is_active,
            starts_at: req.starts_at,
            ends_at: req.ends_at,
            max_attempts_per_student: req.max_attempts_per_student,
        };
        match storage.create_quiz_session(new_session).await {
            Ok(session) => {
                info!(
                    "Quiz session {} ({}) created for quiz {}",
                    session.id, session.session_code, quiz.id
                );
                return Ok(
                    HttpResponse::Created().json(ApiResponse::success(session, "Session created"))
                );
            }
            Err(SchoolHubError::Conflict(_)) => {
                warn!("Session code collided on insert (try {})", attempt);
            }
            Err(e) => return Ok(storage_error("Failed to create session", e)),
        }
    }

    warn!(
        "Gave up generating a session code after {} tries",
        config.code_max_retries
    );
    Ok(
        HttpResponse::ServiceUnavailable().json(ApiResponse::error_empty(
            ErrorCode::QuizSessionCodeExhausted,
            "Could not allocate a unique session code, please retry",
        )),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_window_must_be_ordered() {
        let now = Utc::now();
        assert!(check_session_settings(Some(now), Some(now + Duration::minutes(5)), 1).is_ok());
        assert!(check_session_settings(Some(now), Some(now), 1).is_err());
        assert!(check_session_settings(Some(now), Some(now - Duration::minutes(5)), 1).is_err());
    }

    #[test]
    fn test_open_ended_windows_are_allowed() {
        let now = Utc::now();
        assert!(check_session_settings(None, Some(now), 2).is_ok());
        assert!(check_session_settings(Some(now), None, 2).is_ok());
        assert!(check_session_settings(None, None, 1).is_ok());
    }

    #[test]
    fn test_at_least_one_attempt() {
        assert!(check_session_settings(None, None, 0).is_err());
    }
}
