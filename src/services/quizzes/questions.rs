use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{DEFAULT_MARKS, QuizService};
use crate::models::quizzes::entities::QuestionType;
use crate::models::quizzes::requests::{
    AddChoiceRequest, AddQuestionRequest, NewChoice, NewQuestion,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{
    bad_request, current_user, load_owned_quiz, not_found, require_staff_profile, storage_error,
};

/// 校验单个题目。简答题的选项即标准答案，全部视为正确
pub(crate) fn question_from_request(req: AddQuestionRequest) -> Result<NewQuestion, String> {
    let text = req.text.trim().to_string();
    if text.is_empty() {
        return Err("Question text is required".to_string());
    }

    let marks = req.marks.unwrap_or(DEFAULT_MARKS);
    if !marks.is_finite() || marks <= 0.0 {
        return Err("Question marks must be positive".to_string());
    }

    let mut choices: Vec<NewChoice> = req
        .choices
        .into_iter()
        .filter_map(|c| {
            let text = c.text.trim().to_string();
            (!text.is_empty()).then_some(NewChoice {
                text,
                is_correct: c.is_correct,
            })
        })
        .collect();

    if choices.is_empty() {
        return Err("At least one choice is required".to_string());
    }

    match req.question_type {
        QuestionType::Text => choices.iter_mut().for_each(|c| c.is_correct = true),
        QuestionType::Single | QuestionType::Multi => {
            if !choices.iter().any(|c| c.is_correct) {
                return Err("At least one choice must be marked correct".to_string());
            }
        }
    }

    Ok(NewQuestion {
        text,
        question_type: req.question_type,
        marks,
        order: req.order.unwrap_or(0),
        choices,
    })
}

pub async fn add_question(
    service: &QuizService,
    request: &HttpRequest,
    quiz_id: i64,
    req: AddQuestionRequest,
) -> ActixResult<HttpResponse> {
    let question = match question_from_request(req) {
        Ok(question) => question,
        Err(msg) => return Ok(bad_request(ErrorCode::QuestionInvalid, msg)),
    };

    let storage = service.get_storage(request)?;
    let user = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    let staff = match require_staff_profile(&storage, &user).await {
        Ok(staff) => staff,
        Err(resp) => return Ok(resp),
    };
    if let Err(resp) = load_owned_quiz(&storage, &staff, quiz_id).await {
        return Ok(resp);
    }

    match storage.create_questions(quiz_id, vec![question]).await {
        Ok(mut created) => match created.pop() {
            Some(question) => Ok(HttpResponse::Created()
                .json(ApiResponse::success(question, "Question added"))),
            None => Ok(storage_error(
                "Failed to add question",
                crate::errors::SchoolHubError::database_operation("no question returned"),
            )),
        },
        Err(e) => Ok(storage_error("Failed to add question", e)),
    }
}

pub async fn add_choice(
    service: &QuizService,
    request: &HttpRequest,
    question_id: i64,
    mut req: AddChoiceRequest,
) -> ActixResult<HttpResponse> {
    req.text = req.text.trim().to_string();
    if req.text.is_empty() {
        return Ok(bad_request(ErrorCode::QuestionInvalid, "Choice text is required"));
    }

    let storage = service.get_storage(request)?;
    let user = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    let staff = match require_staff_profile(&storage, &user).await {
        Ok(staff) => staff,
        Err(resp) => return Ok(resp),
    };

    let question = match storage.get_question_by_id(question_id).await {
        Ok(Some(question)) => question,
        Ok(None) => return Ok(not_found(ErrorCode::QuestionNotFound, "Question not found")),
        Err(e) => return Ok(storage_error("Failed to load question", e)),
    };
    if let Err(resp) = load_owned_quiz(&storage, &staff, question.quiz_id).await {
        return Ok(resp);
    }

    if question.question_type == QuestionType::Text {
        req.is_correct = true;
    }

    match storage.create_choice(question.id, req).await {
        Ok(choice) => Ok(HttpResponse::Created().json(ApiResponse::success(choice, "Choice added"))),
        Err(e) => Ok(storage_error("Failed to add choice", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choice(text: &str, is_correct: bool) -> NewChoice {
        NewChoice {
            text: text.to_string(),
            is_correct,
        }
    }

    fn request(question_type: QuestionType, choices: Vec<NewChoice>) -> AddQuestionRequest {
        AddQuestionRequest {
            text: " What is 2 + 2? ".to_string(),
            question_type,
            marks: None,
            order: None,
            choices,
        }
    }

    #[test]
    fn test_defaults_and_trimming() {
        let q = question_from_request(request(
            QuestionType::Single,
            vec![choice("3", false), choice(" 4 ", true), choice("  ", true)],
        ))
        .unwrap();
        assert_eq!(q.text, "What is 2 + 2?");
        assert_eq!(q.marks, DEFAULT_MARKS);
        assert_eq!(q.order, 0);
        assert_eq!(q.choices.len(), 2);
        assert_eq!(q.choices[1].text, "4");
    }

    #[test]
    fn test_requires_a_correct_choice() {
        let err = question_from_request(request(
            QuestionType::Multi,
            vec![choice("a", false), choice("b", false)],
        ))
        .unwrap_err();
        assert!(err.contains("correct"));
    }

    #[test]
    fn test_requires_choices() {
        assert!(question_from_request(request(QuestionType::Single, vec![])).is_err());
    }

    #[test]
    fn test_text_answers_are_all_correct() {
        let q = question_from_request(request(
            QuestionType::Text,
            vec![choice("four", false), choice("4", false)],
        ))
        .unwrap();
        assert!(q.choices.iter().all(|c| c.is_correct));
    }

    #[test]
    fn test_rejects_non_positive_marks() {
        let mut req = request(QuestionType::Single, vec![choice("a", true)]);
        req.marks = Some(0.0);
        assert!(question_from_request(req).is_err());
    }
}
