use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QuizSessionService;
use super::analytics::item_analysis as analyse_items;
use crate::models::quiz_sessions::responses::ItemAnalysisResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{
    bad_request, current_user, load_owned_session, require_staff_profile, storage_error,
};

pub async fn item_analysis(
    service: &QuizSessionService,
    request: &HttpRequest,
    session_id: i64,
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
    let (session, quiz) = match load_owned_session(&storage, &staff, session_id).await {
        Ok(found) => found,
        Err(resp) => return Ok(resp),
    };

    let attempts = match storage.list_submitted_attempts(session.id).await {
        Ok(attempts) => attempts,
        Err(e) => return Ok(storage_error("Failed to load attempts", e)),
    };
    if attempts.is_empty() {
        return Ok(bad_request(
            ErrorCode::QuizNoSubmissions,
            "No submitted attempts to analyse",
        ));
    }

    let attempt_ids: Vec<i64> = attempts.iter().map(|a| a.attempt_id).collect();
    let answers = match storage.list_answers_for_attempts(&attempt_ids).await {
        Ok(answers) => answers,
        Err(e) => return Ok(storage_error("Failed to load answers", e)),
    };
    let questions = match storage.list_questions_with_choices(quiz.id).await {
        Ok(questions) => questions,
        Err(e) => return Ok(storage_error("Failed to load questions", e)),
    };

    let response = ItemAnalysisResponse {
        session_id: session.id,
        quiz_title: quiz.title,
        submitted_attempts: attempts.len() as i64,
        questions: analyse_items(&questions, &answers),
    };
    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Item analysis")))
}
