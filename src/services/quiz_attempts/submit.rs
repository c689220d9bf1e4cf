use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::{DateTime, Duration, Utc};
use tracing::{info, warn};

use super::QuizAttemptService;
use super::scoring::score_submission;
use crate::models::quiz_attempts::entities::{AttemptStatus, QuizAttempt};
use crate::models::quiz_attempts::requests::SubmitAttemptRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{
    bad_request, current_user, forbidden, not_found, require_student_profile, storage_error,
};
use crate::services::quiz_sessions::lobby::load_session_with_quiz;

/// 超过作答时长加宽限即视为超时
pub(crate) fn is_overdue(
    started_at: DateTime<Utc>,
    duration_minutes: i32,
    grace_seconds: i64,
    now: DateTime<Utc>,
) -> bool {
    let deadline = started_at
        + Duration::minutes(i64::from(duration_minutes))
        + Duration::seconds(grace_seconds);
    now > deadline
}

fn not_in_progress() -> HttpResponse {
    HttpResponse::Conflict().json(ApiResponse::error_empty(
        ErrorCode::QuizAttemptNotInProgress,
        "This attempt has already been submitted or cancelled",
    ))
}

pub async fn submit_attempt(
    service: &QuizAttemptService,
    request: &HttpRequest,
    attempt_id: i64,
    req: SubmitAttemptRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    let student = match require_student_profile(&storage, &user).await {
        Ok(student) => student,
        Err(resp) => return Ok(resp),
    };

    let attempt: QuizAttempt = match storage.get_attempt_by_id(attempt_id).await {
        Ok(Some(attempt)) => attempt,
        Ok(None) => return Ok(not_found(ErrorCode::QuizAttemptNotFound, "Attempt not found")),
        Err(e) => return Ok(storage_error("Failed to load attempt", e)),
    };
    if attempt.student_id != student.id {
        return Ok(forbidden("This attempt belongs to another student"));
    }
    if attempt.status != AttemptStatus::Started {
        return Ok(not_in_progress());
    }

    let (_, quiz) = match load_session_with_quiz(&storage, attempt.session_id).await {
        Ok(found) => found,
        Err(resp) => return Ok(resp),
    };

    let grace = service.get_config().quiz.submit_grace_seconds;
    if is_overdue(attempt.started_at, quiz.duration_minutes, grace, Utc::now()) {
        warn!(
            "Attempt {} submitted after its deadline, cancelling",
            attempt.id
        );
        if let Err(e) = storage
            .finish_attempt(attempt.id, AttemptStatus::Cancelled, 0.0, Vec::new())
            .await
        {
            return Ok(storage_error("Failed to cancel attempt", e));
        }
        return Ok(bad_request(
            ErrorCode::QuizAttemptExpired,
            "Time is up, this attempt has been cancelled",
        ));
    }

    let questions = match storage.list_questions_with_choices(quiz.id).await {
        Ok(questions) => questions,
        Err(e) => return Ok(storage_error("Failed to load questions", e)),
    };
    let scored = score_submission(&questions, &req.answers);

    match storage
        .finish_attempt(
            attempt.id,
            AttemptStatus::Submitted,
            scored.score,
            scored.answers,
        )
        .await
    {
        Ok(Some(attempt)) => {
            info!(
                "Attempt {} submitted: {} of {} questions correct, score {}",
                attempt.id,
                scored.correct_questions,
                questions.len(),
                attempt.score
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(attempt, "Quiz submitted")))
        }
        // 并发提交时另一请求已先完成
        Ok(None) => Ok(not_in_progress()),
        Err(e) => Ok(storage_error("Failed to submit attempt", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_duration_is_not_overdue() {
        let started = Utc::now();
        assert!(!is_overdue(started, 10, 0, started + Duration::minutes(9)));
        assert!(!is_overdue(started, 10, 0, started + Duration::minutes(10)));
    }

    #[test]
    fn test_grace_extends_deadline() {
        let started = Utc::now();
        let now = started + Duration::minutes(10) + Duration::seconds(20);
        assert!(is_overdue(started, 10, 0, now));
        assert!(!is_overdue(started, 10, 30, now));
        assert!(is_overdue(started, 10, 30, now + Duration::seconds(11)));
    }
}
