//! 场次成绩统计与题目分析

use std::collections::{HashMap, HashSet};

use crate::models::quiz_attempts::entities::Answer;
use crate::models::quiz_sessions::responses::{
    ChoiceAnalysis, HistogramBin, QuestionAnalysis, ScoreStats,
};
use crate::models::quizzes::entities::QuestionWithChoices;
use crate::services::quiz_attempts::scoring::{is_correct, percentage};

pub const HISTOGRAM_BINS: usize = 10;

/// 平均、最高、最低和总体标准差，无成绩时为空
pub fn score_stats(scores: &[f64]) -> Option<ScoreStats> {
    if scores.is_empty() {
        return None;
    }
    let n = scores.len() as f64;
    let average = scores.iter().sum::<f64>() / n;
    let max = scores.iter().copied().fold(f64::MIN, f64::max);
    let min = scores.iter().copied().fold(f64::MAX, f64::min);
    let variance = scores.iter().map(|s| (s - average).powi(2)).sum::<f64>() / n;

    Some(ScoreStats {
        average,
        max,
        min,
        std_dev: variance.sqrt(),
    })
}

/// 得分百分比的十段直方图，100% 落在最后一段
pub fn histogram(scores: &[f64], total_marks: f64) -> Vec<HistogramBin> {
    let safe_total = if total_marks > 0.0 { total_marks } else { 1.0 };
    let mut counts = [0i64; HISTOGRAM_BINS];

    for score in scores {
        let percent = (score / safe_total * 100.0).max(0.0);
        let bin = ((percent / 10.0).floor() as usize).min(HISTOGRAM_BINS - 1);
        counts[bin] += 1;
    }

    counts
        .iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            label: format!("{}-{}%", i * 10, i * 10 + 10),
            count: *count,
        })
        .collect()
}

/// 参与率，课程无学生时为 0
pub fn participation_rate(joined: i64, in_course: i64) -> f64 {
    if in_course > 0 {
        joined as f64 / in_course as f64 * 100.0
    } else {
        0.0
    }
}

/// 逐题统计：作答人数、答对人数、难度和选项选择率
///
/// `answers` 只应包含已提交答题的作答行。
pub fn item_analysis(
    questions: &[QuestionWithChoices],
    answers: &[Answer],
) -> Vec<QuestionAnalysis> {
    // (question_id, attempt_id) -> (选中项, 文本)
    let mut responses: HashMap<(i64, i64), (Vec<i64>, String)> = HashMap::new();
    for answer in answers {
        let entry = responses
            .entry((answer.question_id, answer.attempt_id))
            .or_default();
        if let Some(choice_id) = answer.selected_choice_id {
            entry.0.push(choice_id);
        }
        if !answer.text_answer.is_empty() {
            entry.1 = answer.text_answer.clone();
        }
    }

    questions
        .iter()
        .map(|question| {
            let question_id = question.question.id;
            let mut answered = 0i64;
            let mut correct = 0i64;
            let mut selected_counts: HashMap<i64, i64> = HashMap::new();

            for ((qid, _), (selected, text)) in &responses {
                if *qid != question_id {
                    continue;
                }
                answered += 1;
                if is_correct(question, selected, text) {
                    correct += 1;
                }
                let distinct: HashSet<i64> = selected.iter().copied().collect();
                for choice_id in distinct {
                    *selected_counts.entry(choice_id).or_default() += 1;
                }
            }

            let difficulty = (answered > 0).then(|| percentage(correct as f64, answered as f64));
            let choices = question
                .choices
                .iter()
                .map(|choice| {
                    let times_selected = selected_counts.get(&choice.id).copied().unwrap_or(0);
                    ChoiceAnalysis {
                        choice_id: choice.id,
                        text: choice.text.clone(),
                        is_correct: choice.is_correct,
                        times_selected,
                        selection_rate: percentage(times_selected as f64, answered as f64),
                    }
                })
                .collect();

            QuestionAnalysis {
                question_id,
                text: question.question.text.clone(),
                question_type: question.question.question_type,
                marks: question.question.marks,
                answered,
                correct,
                difficulty,
                choices,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::quizzes::entities::QuestionType;
    use crate::services::quiz_attempts::scoring::tests::question;

    fn choice_answer(id: i64, attempt_id: i64, question_id: i64, choice_id: i64) -> Answer {
        Answer {
            id,
            attempt_id,
            question_id,
            selected_choice_id: Some(choice_id),
            text_answer: String::new(),
        }
    }

    #[test]
    fn test_stats_use_population_std_dev() {
        let stats = score_stats(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_eq!(stats.average, 5.0);
        assert_eq!(stats.max, 9.0);
        assert_eq!(stats.min, 2.0);
        assert_eq!(stats.std_dev, 2.0);
        assert!(score_stats(&[]).is_none());
    }

    #[test]
    fn test_histogram_edges() {
        let bins = histogram(&[0.0, 10.0, 9.99, 5.0, 10.0], 10.0);
        assert_eq!(bins.len(), HISTOGRAM_BINS);
        assert_eq!(bins[0].label, "0-10%");
        assert_eq!(bins[9].label, "90-100%");
        assert_eq!(bins[0].count, 1);
        assert_eq!(bins[5].count, 1);
        assert_eq!(bins[9].count, 3);
        assert_eq!(bins.iter().map(|b| b.count).sum::<i64>(), 5);
    }

    #[test]
    fn test_histogram_with_zero_total() {
        // 总分为 0 时按 1 计，任何正分都落在最后一段
        let bins = histogram(&[0.0, 3.0], 0.0);
        assert_eq!(bins[0].count, 1);
        assert_eq!(bins[9].count, 1);
    }

    #[test]
    fn test_participation_rate() {
        assert_eq!(participation_rate(3, 4), 75.0);
        assert_eq!(participation_rate(3, 0), 0.0);
    }

    #[test]
    fn test_item_analysis_counts() {
        let questions = vec![
            question(1, QuestionType::Single, 1.0, &[(11, "a", true), (12, "b", false)]),
            question(2, QuestionType::Single, 1.0, &[(21, "c", true), (22, "d", false)]),
        ];
        let answers = vec![
            choice_answer(1, 100, 1, 11),
            choice_answer(2, 101, 1, 12),
            choice_answer(3, 102, 1, 11),
            choice_answer(4, 103, 1, 11),
        ];

        let analysis = item_analysis(&questions, &answers);
        assert_eq!(analysis.len(), 2);

        let first = &analysis[0];
        assert_eq!(first.answered, 4);
        assert_eq!(first.correct, 3);
        assert_eq!(first.difficulty, Some(75.0));
        assert_eq!(first.choices[0].times_selected, 3);
        assert_eq!(first.choices[0].selection_rate, 75.0);
        assert_eq!(first.choices[1].selection_rate, 25.0);

        let second = &analysis[1];
        assert_eq!(second.answered, 0);
        assert_eq!(second.difficulty, None);
        assert!(second.choices.iter().all(|c| c.times_selected == 0));
    }
}
