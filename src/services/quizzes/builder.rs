use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{DEFAULT_MARKS, QuizService};
use crate::models::quizzes::entities::QuestionType;
use crate::models::quizzes::requests::{BuilderQuestion, NewChoice, NewQuestion, QuizBuilderRequest};
use crate::models::quizzes::responses::QuizBuilderResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{
    bad_request, current_user, load_owned_quiz, require_staff_profile, storage_error,
};

const MAX_BUILDER_CHOICES: usize = 4;

/// 快速出题的单道题：单选，空白选项跳过，correct_choice 从 1 开始
fn build_question(index: usize, item: BuilderQuestion) -> Result<NewQuestion, String> {
    let position = index + 1;
    let text = item.text.trim().to_string();
    if text.is_empty() {
        return Err(format!("Question {position}: text is required"));
    }

    let marks = item.marks.unwrap_or(DEFAULT_MARKS);
    if !marks.is_finite() || marks <= 0.0 {
        return Err(format!("Question {position}: marks must be positive"));
    }

    if item.choices.len() > MAX_BUILDER_CHOICES {
        return Err(format!(
            "Question {position}: at most {MAX_BUILDER_CHOICES} choices are allowed"
        ));
    }
    let first_two_filled = item.choices.len() >= 2
        && item.choices[..2].iter().all(|c| !c.trim().is_empty());
    if !first_two_filled {
        return Err(format!("Question {position}: the first two choices are required"));
    }

    let correct = item.correct_choice;
    let correct_is_filled = correct >= 1
        && item
            .choices
            .get(correct - 1)
            .is_some_and(|c| !c.trim().is_empty());
    if !correct_is_filled {
        return Err(format!(
            "Question {position}: correct_choice must point to a non-empty choice"
        ));
    }

    let choices = item
        .choices
        .iter()
        .enumerate()
        .filter(|(_, c)| !c.trim().is_empty())
        .map(|(i, c)| NewChoice {
            text: c.trim().to_string(),
            is_correct: i + 1 == correct,
        })
        .collect();

    Ok(NewQuestion {
        text,
        question_type: QuestionType::Single,
        marks,
        order: 0,
        choices,
    })
}

pub(crate) fn build_questions(req: QuizBuilderRequest) -> Result<Vec<NewQuestion>, String> {
    if req.questions.is_empty() {
        return Err("At least one question is required".to_string());
    }
    req.questions
        .into_iter()
        .enumerate()
        .map(|(i, item)| build_question(i, item))
        .collect()
}

pub async fn quiz_builder(
    service: &QuizService,
    request: &HttpRequest,
    quiz_id: i64,
    req: QuizBuilderRequest,
) -> ActixResult<HttpResponse> {
    let questions = match build_questions(req) {
        Ok(questions) => questions,
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

    match storage.create_questions(quiz_id, questions).await {
        Ok(questions) => {
            info!("Builder added {} questions to quiz {}", questions.len(), quiz_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                QuizBuilderResponse {
                    created: questions.len(),
                    questions,
                },
                "Questions saved",
            )))
        }
        Err(e) => Ok(storage_error("Failed to save questions", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(choices: &[&str], correct_choice: usize) -> BuilderQuestion {
        BuilderQuestion {
            text: "Capital of Ghana?".to_string(),
            marks: Some(2.0),
            choices: choices.iter().map(|c| c.to_string()).collect(),
            correct_choice,
        }
    }

    #[test]
    fn test_blank_choices_are_skipped() {
        let q = build_question(0, item(&["Accra", "Kumasi", "", "Tamale"], 4)).unwrap();
        assert_eq!(q.question_type, QuestionType::Single);
        assert_eq!(q.order, 0);
        let texts: Vec<_> = q.choices.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["Accra", "Kumasi", "Tamale"]);
        assert!(q.choices[2].is_correct);
        assert_eq!(q.choices.iter().filter(|c| c.is_correct).count(), 1);
    }

    #[test]
    fn test_first_two_choices_required() {
        assert!(build_question(0, item(&["Accra", " "], 1)).is_err());
        assert!(build_question(0, item(&["Accra"], 1)).is_err());
    }

    #[test]
    fn test_correct_choice_must_be_filled() {
        assert!(build_question(0, item(&["Accra", "Kumasi", ""], 3)).is_err());
        assert!(build_question(0, item(&["Accra", "Kumasi"], 0)).is_err());
        assert!(build_question(0, item(&["Accra", "Kumasi"], 5)).is_err());
    }

    #[test]
    fn test_too_many_choices() {
        assert!(build_question(0, item(&["a", "b", "c", "d", "e"], 1)).is_err());
    }

    #[test]
    fn test_error_names_the_question() {
        let req = QuizBuilderRequest {
            questions: vec![item(&["a", "b"], 1), item(&["a", ""], 1)],
        };
        let err = build_questions(req).unwrap_err();
        assert!(err.starts_with("Question 2"));
    }

    #[test]
    fn test_empty_builder_rejected() {
        assert!(build_questions(QuizBuilderRequest { questions: vec![] }).is_err());
    }
}
