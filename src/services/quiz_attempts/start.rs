use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::Duration;
use tracing::info;

use super::QuizAttemptService;
use crate::models::quiz_attempts::responses::{
    PublicChoice, PublicQuestion, StartAttemptResponse,
};
use crate::models::quizzes::entities::QuestionWithChoices;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{bad_request, current_user, require_student_profile, storage_error};
use crate::services::quiz_sessions::lobby::{attempt_limit_reached, load_session_with_quiz};

/// 去掉正确性标记后下发给学生
pub(crate) fn public_questions(questions: Vec<QuestionWithChoices>) -> Vec<PublicQuestion> {
    questions
        .into_iter()
        .map(|q| PublicQuestion {
            id: q.question.id,
            text: q.question.text,
            question_type: q.question.question_type,
            marks: q.question.marks,
            order: q.question.order,
            choices: q
                .choices
                .into_iter()
                .map(|c| PublicChoice {
                    id: c.id,
                    text: c.text,
                })
                .collect(),
        })
        .collect()
}

pub async fn start_attempt(
    service: &QuizAttemptService,
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

    if !session.is_open_now() {
        return Ok(bad_request(
            ErrorCode::QuizSessionClosed,
            "This session is not currently active or has ended",
        ));
    }

    // 次数检查与 attempt_no 分配在存储层的同一事务内完成
    let attempt = match storage
        .create_attempt(session.id, student.id, session.max_attempts_per_student)
        .await
    {
        Ok(Some(attempt)) => attempt,
        Ok(None) => return Ok(attempt_limit_reached()),
        Err(e) => return Ok(storage_error("Failed to start attempt", e)),
    };

    let questions = match storage.list_questions_with_choices(quiz.id).await {
        Ok(questions) => questions,
        Err(e) => return Ok(storage_error("Failed to load questions", e)),
    };

    info!(
        "Student {} started attempt {} (#{}) in session {}",
        student.id, attempt.id, attempt.attempt_no, session.id
    );

    let response = StartAttemptResponse {
        deadline: attempt.started_at + Duration::minutes(i64::from(quiz.duration_minutes)),
        duration_minutes: quiz.duration_minutes,
        quiz_title: quiz.title,
        questions: public_questions(questions),
        attempt,
    };
    Ok(HttpResponse::Created().json(ApiResponse::success(response, "Attempt started")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::quizzes::entities::QuestionType;
    use crate::services::quiz_attempts::scoring::tests::question;

    #[test]
    fn test_public_questions_keep_choice_order() {
        let questions = vec![question(
            1,
            QuestionType::Single,
            2.0,
            &[(10, "Paris", true), (11, "Rome", false)],
        )];
        let public = public_questions(questions);

        assert_eq!(public.len(), 1);
        assert_eq!(public[0].marks, 2.0);
        let ids: Vec<i64> = public[0].choices.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![10, 11]);
    }

    #[test]
    fn test_public_questions_hide_correctness() {
        let questions = vec![question(1, QuestionType::Text, 1.0, &[(5, "42", true)])];
        let json = serde_json::to_value(public_questions(questions)).unwrap();
        assert!(json[0]["choices"][0].get("is_correct").is_none());
        assert_eq!(json[0]["choices"][0]["text"], "42");
    }
}
