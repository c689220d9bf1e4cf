use super::{SeaOrmStorage, db_error};
use crate::entity::prelude::{QuizAttempts, QuizSessionActiveModel, QuizSessions};
use crate::entity::{quiz_attempts, quiz_sessions};
use crate::errors::{Result, SchoolHubError};
use crate::models::quiz_sessions::{
    entities::QuizSession,
    requests::{NewQuizSession, UpdateSessionRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn session_code_exists_impl(&self, code: &str) -> Result<bool> {
        let count = QuizSessions::find()
            .filter(quiz_sessions::Column::SessionCode.eq(code))
            .count(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询场次码失败: {e}")))?;

        Ok(count > 0)
    }

    /// 场次码重复时返回 Conflict
    pub async fn create_quiz_session_impl(&self, session: NewQuizSession) -> Result<QuizSession> {
        let model = QuizSessionActiveModel {
            quiz_id: Set(session.quiz_id),
            created_by: Set(session.created_by),
            session_code: Set(session.session_code),
            is_active: Set(session.is_active),
            starts_at: Set(session.starts_at.map(|t| t.timestamp())),
            ends_at: Set(session.ends_at.map(|t| t.timestamp())),
            max_attempts_per_student: Set(session.max_attempts_per_student),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_error("创建测验场次失败"))?;

        Ok(result.into_quiz_session())
    }

    pub async fn get_quiz_session_by_id_impl(&self, id: i64) -> Result<Option<QuizSession>> {
        let result = QuizSessions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询测验场次失败: {e}")))?;

        Ok(result.map(|m| m.into_quiz_session()))
    }

    pub async fn get_quiz_session_by_code_impl(&self, code: &str) -> Result<Option<QuizSession>> {
        let result = QuizSessions::find()
            .filter(quiz_sessions::Column::SessionCode.eq(code))
            .one(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询测验场次失败: {e}")))?;

        Ok(result.map(|m| m.into_quiz_session()))
    }

    pub async fn list_sessions_by_quiz_impl(&self, quiz_id: i64) -> Result<Vec<QuizSession>> {
        let result = QuizSessions::find()
            .filter(quiz_sessions::Column::QuizId.eq(quiz_id))
            .order_by_desc(quiz_sessions::Column::CreatedAt)
            .order_by_desc(quiz_sessions::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询测验场次失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_quiz_session()).collect())
    }

    pub async fn update_quiz_session_impl(
        &self,
        id: i64,
        update: UpdateSessionRequest,
    ) -> Result<Option<QuizSession>> {
        if self.get_quiz_session_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = QuizSessionActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(is_active) = update.is_active {
            model.is_active = Set(is_active);
        }
        if let Some(starts_at) = update.starts_at {
            model.starts_at = Set(starts_at.map(|t| t.timestamp()));
        }
        if let Some(ends_at) = update.ends_at {
            model.ends_at = Set(ends_at.map(|t| t.timestamp()));
        }
        if let Some(max_attempts) = update.max_attempts_per_student {
            model.max_attempts_per_student = Set(max_attempts);
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(db_error("更新测验场次失败"))?;

        Ok(Some(result.into_quiz_session()))
    }

    pub async fn count_session_attempts_impl(&self, session_id: i64) -> Result<i64> {
        let count = QuizAttempts::find()
            .filter(quiz_attempts::Column::SessionId.eq(session_id))
            .count(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("统计答题次数失败: {e}")))?;

        Ok(count as i64)
    }

    pub async fn count_student_attempts_impl(
        &self,
        session_id: i64,
        student_id: i64,
    ) -> Result<i64> {
        let count = QuizAttempts::find()
            .filter(quiz_attempts::Column::SessionId.eq(session_id))
            .filter(quiz_attempts::Column::StudentId.eq(student_id))
            .count(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("统计答题次数失败: {e}")))?;

        Ok(count as i64)
    }
}
