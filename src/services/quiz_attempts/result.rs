use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QuizAttemptService;
use super::scoring::percentage;
use crate::models::quiz_attempts::responses::AttemptResultResponse;
use crate::models::quizzes::entities::total_marks;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{
    current_user, forbidden, not_found, require_student_profile, storage_error,
};
use crate::services::quiz_sessions::lobby::load_session_with_quiz;

pub async fn get_attempt_result(
    service: &QuizAttemptService,
    request: &HttpRequest,
    attempt_id: i64,
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

    let attempt = match storage.get_attempt_by_id(attempt_id).await {
        Ok(Some(attempt)) if attempt.student_id == student.id => attempt,
        Ok(Some(_)) => return Ok(forbidden("This attempt belongs to another student")),
        Ok(None) => return Ok(not_found(ErrorCode::QuizAttemptNotFound, "Attempt not found")),
        Err(e) => return Ok(storage_error("Failed to load attempt", e)),
    };

    let (_, quiz) = match load_session_with_quiz(&storage, attempt.session_id).await {
        Ok(found) => found,
        Err(resp) => return Ok(resp),
    };
    let questions = match storage.list_questions_with_choices(quiz.id).await {
        Ok(questions) => questions,
        Err(e) => return Ok(storage_error("Failed to load questions", e)),
    };
    let total = total_marks(&questions);

    let response = AttemptResultResponse {
        percentage: percentage(attempt.score, total),
        total_marks: total,
        quiz_title: quiz.title,
        attempt,
    };
    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Attempt result")))
}
