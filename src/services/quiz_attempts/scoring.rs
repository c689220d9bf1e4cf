//! 答卷评分
//!
//! 分数为答对题目的分值之和。不属于该题的选项一律忽略；
//! 单选要求恰好选中一个正确项，多选要求选中集合与正确集合相同，
//! 简答去除首尾空白后与任一正确选项文本忽略大小写比较。

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::models::quiz_attempts::requests::{NewAnswer, SubmittedAnswer};
use crate::models::quizzes::entities::{QuestionType, QuestionWithChoices};

/// 评分结果及待写入的作答行
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSubmission {
    pub score: f64,
    pub correct_questions: usize,
    pub answers: Vec<NewAnswer>,
}

/// 只保留属于该题的选项，去重
pub fn own_choice_ids(question: &QuestionWithChoices, selected: &[i64]) -> BTreeSet<i64> {
    let own: HashSet<i64> = question.choices.iter().map(|c| c.id).collect();
    selected.iter().copied().filter(|id| own.contains(id)).collect()
}

/// 判断一道题是否答对
pub fn is_correct(question: &QuestionWithChoices, selected: &[i64], text_answer: &str) -> bool {
    let correct: BTreeSet<i64> = question
        .choices
        .iter()
        .filter(|c| c.is_correct)
        .map(|c| c.id)
        .collect();

    match question.question.question_type {
        QuestionType::Single => {
            let chosen = own_choice_ids(question, selected);
            chosen.len() == 1 && chosen.is_subset(&correct)
        }
        QuestionType::Multi => {
            let chosen = own_choice_ids(question, selected);
            !correct.is_empty() && chosen == correct
        }
        QuestionType::Text => {
            let answer = text_answer.trim().to_lowercase();
            !answer.is_empty()
                && question
                    .choices
                    .iter()
                    .filter(|c| c.is_correct)
                    .any(|c| c.text.trim().to_lowercase() == answer)
        }
    }
}

/// 作答行：选择题每个有效选项一行，简答题一行
fn answer_rows(question: &QuestionWithChoices, submitted: &SubmittedAnswer) -> Vec<NewAnswer> {
    let question_id = question.question.id;
    match question.question.question_type {
        QuestionType::Single | QuestionType::Multi => {
            own_choice_ids(question, &submitted.choice_ids)
                .into_iter()
                .map(|choice_id| NewAnswer {
                    question_id,
                    selected_choice_id: Some(choice_id),
                    text_answer: String::new(),
                })
                .collect()
        }
        QuestionType::Text => {
            let text = submitted.text_answer.as_deref().unwrap_or("").trim();
            if text.is_empty() {
                Vec::new()
            } else {
                vec![NewAnswer {
                    question_id,
                    selected_choice_id: None,
                    text_answer: text.to_string(),
                }]
            }
        }
    }
}

/// 为一份答卷评分，未知题目忽略，同一题重复提交时取第一份
pub fn score_submission(
    questions: &[QuestionWithChoices],
    submitted: &[SubmittedAnswer],
) -> ScoredSubmission {
    let mut by_question: HashMap<i64, &SubmittedAnswer> = HashMap::new();
    for answer in submitted {
        by_question.entry(answer.question_id).or_insert(answer);
    }

    let mut result = ScoredSubmission {
        score: 0.0,
        correct_questions: 0,
        answers: Vec::new(),
    };

    for question in questions {
        let Some(answer) = by_question.get(&question.question.id) else {
            continue;
        };
        let text = answer.text_answer.as_deref().unwrap_or("");
        if is_correct(question, &answer.choice_ids, text) {
            result.score += question.question.marks;
            result.correct_questions += 1;
        }
        result.answers.extend(answer_rows(question, answer));
    }

    result
}

/// 得分百分比，总分为 0 时按 0 计
pub fn percentage(score: f64, total_marks: f64) -> f64 {
    if total_marks > 0.0 {
        score / total_marks * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::quizzes::entities::{Choice, Question};

    pub(crate) fn question(
        id: i64,
        question_type: QuestionType,
        marks: f64,
        choices: &[(i64, &str, bool)],
    ) -> QuestionWithChoices {
        QuestionWithChoices {
            question: Question {
                id,
                quiz_id: 1,
                text: format!("Q{id}"),
                question_type,
                marks,
                order: 0,
            },
            choices: choices
                .iter()
                .map(|(cid, text, is_correct)| Choice {
                    id: *cid,
                    question_id: id,
                    text: text.to_string(),
                    is_correct: *is_correct,
                })
                .collect(),
        }
    }

    fn answer(question_id: i64, choice_ids: &[i64], text: Option<&str>) -> SubmittedAnswer {
        SubmittedAnswer {
            question_id,
            choice_ids: choice_ids.to_vec(),
            text_answer: text.map(str::to_string),
        }
    }

    fn sample_quiz() -> Vec<QuestionWithChoices> {
        vec![
            question(1, QuestionType::Single, 2.0, &[(11, "3", false), (12, "4", true)]),
            question(
                2,
                QuestionType::Multi,
                3.0,
                &[(21, "2", true), (22, "3", true), (23, "4", false)],
            ),
            question(3, QuestionType::Text, 5.0, &[(31, "Photosynthesis", true)]),
        ]
    }

    #[test]
    fn test_all_correct_scores_full_marks() {
        let scored = score_submission(
            &sample_quiz(),
            &[
                answer(1, &[12], None),
                answer(2, &[22, 21], None),
                answer(3, &[], Some("  photosynthesis ")),
            ],
        );
        assert_eq!(scored.score, 10.0);
        assert_eq!(scored.correct_questions, 3);
        assert_eq!(scored.answers.len(), 4);
    }

    #[test]
    fn test_multi_requires_exact_set() {
        let quiz = sample_quiz();
        assert!(!is_correct(&quiz[1], &[21], ""));
        assert!(!is_correct(&quiz[1], &[21, 22, 23], ""));
        assert!(is_correct(&quiz[1], &[22, 21, 21], ""));
    }

    #[test]
    fn test_single_with_two_selections_is_wrong() {
        let quiz = sample_quiz();
        assert!(!is_correct(&quiz[0], &[11, 12], ""));
    }

    #[test]
    fn test_foreign_choices_never_count() {
        let quiz = sample_quiz();
        // 21 属于第 2 题
        let scored = score_submission(&quiz, &[answer(1, &[21], None)]);
        assert_eq!(scored.score, 0.0);
        assert!(scored.answers.is_empty());

        // 外来选项不影响本题判定
        assert!(is_correct(&quiz[0], &[12, 99], ""));
    }

    #[test]
    fn test_unknown_question_ignored_and_first_duplicate_wins() {
        let scored = score_submission(
            &sample_quiz(),
            &[
                answer(42, &[12], None),
                answer(1, &[11], None),
                answer(1, &[12], None),
            ],
        );
        assert_eq!(scored.score, 0.0);
        assert_eq!(scored.answers.len(), 1);
        assert_eq!(scored.answers[0].selected_choice_id, Some(11));
    }

    #[test]
    fn test_blank_text_is_unanswered() {
        let scored = score_submission(&sample_quiz(), &[answer(3, &[], Some("   "))]);
        assert_eq!(scored.score, 0.0);
        assert!(scored.answers.is_empty());
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(5.0, 10.0), 50.0);
        assert_eq!(percentage(3.0, 0.0), 0.0);
    }
}
