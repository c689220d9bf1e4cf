use super::{SeaOrmStorage, db_error};
use crate::entity::prelude::{AnswerActiveModel, Answers, QuizAttemptActiveModel, QuizAttempts};
use crate::entity::{answers, quiz_attempts};
use crate::errors::{Result, SchoolHubError};
use crate::models::quiz_attempts::{
    entities::{Answer, AttemptStatus, QuizAttempt},
    requests::NewAnswer,
};
use crate::models::quiz_sessions::responses::AttemptSummary;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 在同一事务内检查次数并创建答题，次数已用尽返回 None
    pub async fn create_attempt_impl(
        &self,
        session_id: i64,
        student_id: i64,
        max_attempts: i32,
    ) -> Result<Option<QuizAttempt>> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("开启事务失败: {e}")))?;

        let used = QuizAttempts::find()
            .filter(quiz_attempts::Column::SessionId.eq(session_id))
            .filter(quiz_attempts::Column::StudentId.eq(student_id))
            .count(&txn)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("统计答题次数失败: {e}")))?
            as i32;

        if used >= max_attempts {
            return Ok(None);
        }

        // (场次, 学生, 序号) 唯一索引兜底并发重复
        let created = QuizAttemptActiveModel {
            session_id: Set(session_id),
            student_id: Set(student_id),
            attempt_no: Set(used + 1),
            status: Set(AttemptStatus::Started.to_string()),
            started_at: Set(chrono::Utc::now().timestamp()),
            submitted_at: Set(None),
            score: Set(0.0),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(db_error("创建答题记录失败"))?;

        txn.commit()
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(Some(created.into_quiz_attempt()))
    }

    pub async fn get_attempt_by_id_impl(&self, id: i64) -> Result<Option<QuizAttempt>> {
        let result = QuizAttempts::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询答题记录失败: {e}")))?;

        Ok(result.map(|m| m.into_quiz_attempt()))
    }

    /// 结束答题并写入作答，仅对 started 状态生效
    pub async fn finish_attempt_impl(
        &self,
        attempt_id: i64,
        status: AttemptStatus,
        score: f64,
        answers: Vec<NewAnswer>,
    ) -> Result<Option<QuizAttempt>> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("开启事务失败: {e}")))?;

        let result = QuizAttempts::update_many()
            .col_expr(
                quiz_attempts::Column::Status,
                sea_orm::sea_query::Expr::value(status.to_string()),
            )
            .col_expr(
                quiz_attempts::Column::Score,
                sea_orm::sea_query::Expr::value(score),
            )
            .col_expr(
                quiz_attempts::Column::SubmittedAt,
                sea_orm::sea_query::Expr::value(now),
            )
            .filter(quiz_attempts::Column::Id.eq(attempt_id))
            .filter(quiz_attempts::Column::Status.eq(AttemptStatus::Started.to_string()))
            .exec(&txn)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("更新答题记录失败: {e}")))?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        for answer in answers {
            AnswerActiveModel {
                attempt_id: Set(attempt_id),
                question_id: Set(answer.question_id),
                selected_choice_id: Set(answer.selected_choice_id),
                text_answer: Set(answer.text_answer),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(db_error("保存作答失败"))?;
        }

        txn.commit()
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("提交事务失败: {e}")))?;

        self.get_attempt_by_id_impl(attempt_id).await
    }

    /// 场次内已提交的答题，分数降序
    pub async fn list_submitted_attempts_impl(
        &self,
        session_id: i64,
    ) -> Result<Vec<AttemptSummary>> {
        let attempts = QuizAttempts::find()
            .filter(quiz_attempts::Column::SessionId.eq(session_id))
            .filter(quiz_attempts::Column::Status.eq(AttemptStatus::Submitted.to_string()))
            .order_by_desc(quiz_attempts::Column::Score)
            .order_by_asc(quiz_attempts::Column::SubmittedAt)
            .order_by_asc(quiz_attempts::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询答题记录失败: {e}")))?;

        let student_ids: Vec<i64> = attempts.iter().map(|a| a.student_id).collect();
        let names = self.load_student_names(student_ids).await?;

        Ok(attempts
            .into_iter()
            .map(|a| AttemptSummary {
                student_name: names
                    .get(&a.student_id)
                    .map(|(_, name)| name.clone())
                    .unwrap_or_default(),
                attempt_id: a.id,
                student_id: a.student_id,
                attempt_no: a.attempt_no,
                score: a.score,
                submitted_at: a.submitted_at.map(crate::entity::to_datetime),
            })
            .collect())
    }

    pub async fn list_answers_for_attempts_impl(&self, attempt_ids: &[i64]) -> Result<Vec<Answer>> {
        if attempt_ids.is_empty() {
            return Ok(Vec::new());
        }

        let result = Answers::find()
            .filter(answers::Column::AttemptId.is_in(attempt_ids.to_vec()))
            .order_by_asc(answers::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询作答记录失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_answer()).collect())
    }
}
