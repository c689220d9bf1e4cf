use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashSet;

use super::QuizSessionService;
use super::analytics::{histogram, participation_rate, score_stats};
use crate::models::ApiResponse;
use crate::models::quiz_sessions::responses::SessionDashboardResponse;
use crate::models::quizzes::entities::total_marks;
use crate::services::common::{
    current_user, load_owned_session, require_staff_profile, storage_error,
};

pub async fn session_dashboard(
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

    let questions = match storage.list_questions_with_choices(quiz.id).await {
        Ok(questions) => questions,
        Err(e) => return Ok(storage_error("Failed to load questions", e)),
    };
    let total = total_marks(&questions);

    // 已按分数降序
    let attempts = match storage.list_submitted_attempts(session.id).await {
        Ok(attempts) => attempts,
        Err(e) => return Ok(storage_error("Failed to load attempts", e)),
    };

    if attempts.is_empty() {
        let response = SessionDashboardResponse {
            session_id: session.id,
            quiz_title: quiz.title,
            total_marks: total,
            no_submissions: true,
            stats: None,
            students_submitted: 0,
            students_in_course: 0,
            participation_rate: 0.0,
            histogram: Vec::new(),
            attempts,
        };
        return Ok(HttpResponse::Ok().json(ApiResponse::success(response, "No submissions yet")));
    }

    let scores: Vec<f64> = attempts.iter().map(|a| a.score).collect();
    let students_submitted = attempts
        .iter()
        .map(|a| a.student_id)
        .collect::<HashSet<_>>()
        .len() as i64;

    let students_in_course = match storage.get_subject_by_id(quiz.subject_id).await {
        Ok(Some(subject)) => match storage.count_students_in_course(subject.course_id).await {
            Ok(count) => count,
            Err(e) => return Ok(storage_error("Failed to count students", e)),
        },
        Ok(None) => 0,
        Err(e) => return Ok(storage_error("Failed to load subject", e)),
    };

    let response = SessionDashboardResponse {
        session_id: session.id,
        quiz_title: quiz.title,
        total_marks: total,
        no_submissions: false,
        stats: score_stats(&scores),
        students_submitted,
        students_in_course,
        participation_rate: participation_rate(students_submitted, students_in_course),
        histogram: histogram(&scores, total),
        attempts,
    };
    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Session dashboard")))
}
