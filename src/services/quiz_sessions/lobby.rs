use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QuizSessionService;
use crate::models::quiz_sessions::entities::QuizSession;
use crate::models::quiz_sessions::responses::LobbyResponse;
use crate::models::quizzes::entities::{Quiz, total_marks};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{
    current_user, not_found, require_student_profile, storage_error,
};
use crate::storage::Storage;
use std::sync::Arc;

/// 加载场次及其测验
pub(crate) async fn load_session_with_quiz(
    storage: &Arc<dyn Storage>,
    session_id: i64,
) -> Result<(QuizSession, Quiz), HttpResponse> {
    let session = match storage.get_quiz_session_by_id(session_id).await {
        Ok(Some(session)) => session,
        Ok(None) => {
            return Err(not_found(
                ErrorCode::QuizSessionNotFound,
                "Quiz session not found",
            ));
        }
        Err(e) => return Err(storage_error("Failed to load quiz session", e)),
    };
    match storage.get_quiz_by_id(session.quiz_id).await {
        Ok(Some(quiz)) => Ok((session, quiz)),
        Ok(None) => Err(not_found(ErrorCode::QuizNotFound, "Quiz not found")),
        Err(e) => Err(storage_error("Failed to load quiz", e)),
    }
}

pub(crate) fn attempt_limit_reached() -> HttpResponse {
    HttpResponse::Forbidden().json(ApiResponse::error_empty(
        ErrorCode::QuizAttemptLimitReached,
        "You have used all attempts for this session",
    ))
}

pub async fn lobby(
    service: &QuizSessionService,
    request: &HttpRequest,
    session_id: i64,
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
    let (session, quiz) = match load_session_with_quiz(&storage, session_id).await {
        Ok(found) => found,
        Err(resp) => return Ok(resp),
    };

    let attempts_used = match storage.count_student_attempts(session.id, student.id).await {
        Ok(count) => count,
        Err(e) => return Ok(storage_error("Failed to count attempts", e)),
    };
    let max_attempts = i64::from(session.max_attempts_per_student);
    if attempts_used >= max_attempts {
        return Ok(attempt_limit_reached());
    }

    let questions = match storage.list_questions_with_choices(quiz.id).await {
        Ok(questions) => questions,
        Err(e) => return Ok(storage_error("Failed to load questions", e)),
    };

    let response = LobbyResponse {
        session_id: session.id,
        question_count: questions.len(),
        total_marks: total_marks(&questions),
        is_open: session.is_open_now(),
        attempts_used,
        attempts_remaining: max_attempts - attempts_used,
        quiz,
    };
    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Quiz lobby")))
}
