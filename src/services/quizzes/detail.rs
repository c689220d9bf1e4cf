use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QuizService;
use crate::models::ApiResponse;
use crate::models::quizzes::{entities::total_marks, responses::QuizDetailResponse};
use crate::services::common::{
    current_user, load_owned_quiz, require_staff_profile, storage_error,
};

pub async fn get_quiz(
    service: &QuizService,
    request: &HttpRequest,
    quiz_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
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

    let questions = match storage.list_questions_with_choices(quiz.id).await {
        Ok(questions) => questions,
        Err(e) => return Ok(storage_error("Failed to load questions", e)),
    };
    let sessions = match storage.list_sessions_by_quiz(quiz.id).await {
        Ok(sessions) => sessions,
        Err(e) => return Ok(storage_error("Failed to load sessions", e)),
    };

    let response = QuizDetailResponse {
        total_marks: total_marks(&questions),
        quiz,
        questions,
        sessions,
    };
    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Quiz")))
}
