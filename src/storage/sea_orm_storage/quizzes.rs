use std::collections::HashMap;

use super::{SeaOrmStorage, db_error};
use crate::entity::prelude::{
    ChoiceActiveModel, Choices, QuestionActiveModel, Questions, QuizActiveModel, Quizzes,
};
use crate::entity::{choices, questions, quizzes};
use crate::errors::{Result, SchoolHubError};
use crate::models::quizzes::{
    entities::{Choice, Question, QuestionWithChoices, Quiz},
    requests::{AddChoiceRequest, CreateQuizRequest, NewQuestion, UpdateQuizRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

/// 默认测验时长（分钟）
const DEFAULT_DURATION_MINUTES: i32 = 10;

impl SeaOrmStorage {
    pub async fn create_quiz_impl(&self, created_by: i64, req: CreateQuizRequest) -> Result<Quiz> {
        let now = chrono::Utc::now().timestamp();

        let model = QuizActiveModel {
            subject_id: Set(req.subject_id),
            title: Set(req.title),
            description: Set(req.description),
            duration_minutes: Set(req.duration_minutes.unwrap_or(DEFAULT_DURATION_MINUTES)),
            created_by: Set(created_by),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_error("创建测验失败"))?;

        Ok(result.into_quiz())
    }

    pub async fn get_quiz_by_id_impl(&self, id: i64) -> Result<Option<Quiz>> {
        let result = Quizzes::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询测验失败: {e}")))?;

        Ok(result.map(|m| m.into_quiz()))
    }

    /// 教职工创建的测验，最新在前
    pub async fn list_quizzes_by_staff_impl(&self, staff_id: i64) -> Result<Vec<Quiz>> {
        let result = Quizzes::find()
            .filter(quizzes::Column::CreatedBy.eq(staff_id))
            .order_by_desc(quizzes::Column::CreatedAt)
            .order_by_desc(quizzes::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询测验列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_quiz()).collect())
    }

    pub async fn update_quiz_impl(
        &self,
        id: i64,
        update: UpdateQuizRequest,
    ) -> Result<Option<Quiz>> {
        if self.get_quiz_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = QuizActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        if let Some(duration) = update.duration_minutes {
            model.duration_minutes = Set(duration);
        }

        let result = model.update(&self.db).await.map_err(db_error("更新测验失败"))?;

        Ok(Some(result.into_quiz()))
    }

    pub async fn delete_quiz_impl(&self, id: i64) -> Result<bool> {
        let result = Quizzes::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("删除测验失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 测验题目及选项，题目按 (order, id) 排序
    pub async fn list_questions_with_choices_impl(
        &self,
        quiz_id: i64,
    ) -> Result<Vec<QuestionWithChoices>> {
        let question_models = Questions::find()
            .filter(questions::Column::QuizId.eq(quiz_id))
            .order_by_asc(questions::Column::SortOrder)
            .order_by_asc(questions::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询题目失败: {e}")))?;

        if question_models.is_empty() {
            return Ok(Vec::new());
        }

        let question_ids: Vec<i64> = question_models.iter().map(|q| q.id).collect();
        let choice_models = Choices::find()
            .filter(choices::Column::QuestionId.is_in(question_ids))
            .order_by_asc(choices::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询选项失败: {e}")))?;

        let mut by_question: HashMap<i64, Vec<Choice>> = HashMap::new();
        for c in choice_models {
            by_question
                .entry(c.question_id)
                .or_default()
                .push(c.into_choice());
        }

        Ok(question_models
            .into_iter()
            .map(|q| QuestionWithChoices {
                choices: by_question.remove(&q.id).unwrap_or_default(),
                question: q.into_question(),
            })
            .collect())
    }

    async fn insert_question<C: ConnectionTrait>(
        conn: &C,
        quiz_id: i64,
        question: NewQuestion,
    ) -> Result<QuestionWithChoices> {
        let created = QuestionActiveModel {
            quiz_id: Set(quiz_id),
            text: Set(question.text),
            question_type: Set(question.question_type.to_string()),
            marks: Set(question.marks),
            sort_order: Set(question.order),
            ..Default::default()
        }
        .insert(conn)
        .await
        .map_err(db_error("创建题目失败"))?;

        let mut choices = Vec::with_capacity(question.choices.len());
        for choice in question.choices {
            let c = ChoiceActiveModel {
                question_id: Set(created.id),
                text: Set(choice.text),
                is_correct: Set(choice.is_correct),
                ..Default::default()
            }
            .insert(conn)
            .await
            .map_err(db_error("创建选项失败"))?;
            choices.push(c.into_choice());
        }

        Ok(QuestionWithChoices {
            question: created.into_question(),
            choices,
        })
    }

    /// 同一事务内写入一组题目及其选项
    pub async fn create_questions_impl(
        &self,
        quiz_id: i64,
        questions: Vec<NewQuestion>,
    ) -> Result<Vec<QuestionWithChoices>> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("开启事务失败: {e}")))?;

        let mut created = Vec::with_capacity(questions.len());
        for question in questions {
            created.push(Self::insert_question(&txn, quiz_id, question).await?);
        }

        txn.commit()
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(created)
    }

    pub async fn get_question_by_id_impl(&self, id: i64) -> Result<Option<Question>> {
        let result = Questions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询题目失败: {e}")))?;

        Ok(result.map(|m| m.into_question()))
    }

    pub async fn create_choice_impl(
        &self,
        question_id: i64,
        req: AddChoiceRequest,
    ) -> Result<Choice> {
        let model = ChoiceActiveModel {
            question_id: Set(question_id),
            text: Set(req.text),
            is_correct: Set(req.is_correct),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_error("创建选项失败"))?;

        Ok(result.into_choice())
    }
}
