use super::entities::QuestionType;
use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "quiz.ts")]
pub struct CreateQuizRequest {
    pub subject_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub duration_minutes: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "quiz.ts")]
pub struct UpdateQuizRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration_minutes: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "quiz.ts")]
pub struct NewChoice {
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "quiz.ts")]
pub struct AddQuestionRequest {
    pub text: String,
    #[serde(default)]
    pub question_type: QuestionType,
    pub marks: Option<f64>,
    pub order: Option<i32>,
    #[serde(default)]
    pub choices: Vec<NewChoice>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "quiz.ts")]
pub struct AddChoiceRequest {
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
}

// 快速出题：最多 4 个选项，前两个必填，correct_choice 从 1 开始
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "quiz.ts")]
pub struct BuilderQuestion {
    pub text: String,
    pub marks: Option<f64>,
    pub choices: Vec<String>,
    pub correct_choice: usize,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "quiz.ts")]
pub struct QuizBuilderRequest {
    pub questions: Vec<BuilderQuestion>,
}

/// 校验后写入存储层的题目
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub text: String,
    pub question_type: QuestionType,
    pub marks: f64,
    pub order: i32,
    pub choices: Vec<NewChoice>,
}
