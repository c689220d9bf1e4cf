use super::{SeaOrmStorage, db_error};
use crate::entity::feedbacks::{ActiveModel, Column, Entity as Feedbacks, Relation};
use crate::entity::users;
use crate::errors::{Result, SchoolHubError};
use crate::models::{
    PaginationInfo,
    feedbacks::{
        entities::Feedback,
        requests::FeedbackListQuery,
        responses::{FeedbackListResponse, FeedbackWithSender},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, JoinType, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Set,
};

impl SeaOrmStorage {
    pub async fn create_feedback_impl(&self, user_id: i64, feedback: &str) -> Result<Feedback> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            user_id: Set(user_id),
            feedback: Set(feedback.to_string()),
            reply: Set(String::new()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_error("提交反馈失败"))?;

        Ok(result.into_feedback())
    }

    pub async fn list_feedbacks_by_user_impl(&self, user_id: i64) -> Result<Vec<Feedback>> {
        let result = Feedbacks::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询反馈列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_feedback()).collect())
    }

    pub async fn list_feedbacks_with_pagination_impl(
        &self,
        query: FeedbackListQuery,
    ) -> Result<FeedbackListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Feedbacks::find();

        if let Some(ref role) = query.role {
            select = select
                .join(JoinType::InnerJoin, Relation::User.def())
                .filter(users::Column::Role.eq(role.to_string()));
        }

        select = select.order_by_desc(Column::CreatedAt).order_by_desc(Column::Id);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询反馈总数失败: {e}")))?;

        let feedbacks = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询反馈列表失败: {e}")))?;

        let user_ids: Vec<i64> = feedbacks.iter().map(|f| f.user_id).collect();
        let users = self.load_users_map(user_ids).await?;

        let items = feedbacks
            .into_iter()
            .filter_map(|m| {
                let user = users.get(&m.user_id)?;
                Some(FeedbackWithSender {
                    sender_name: user.full_name(),
                    sender_role: user.role.clone(),
                    feedback: m.into_feedback(),
                })
            })
            .collect();

        Ok(FeedbackListResponse {
            items,
            pagination: PaginationInfo::new(page as i64, size as i64, total as i64),
        })
    }

    pub async fn reply_feedback_impl(&self, id: i64, reply: &str) -> Result<Option<Feedback>> {
        let existing = Feedbacks::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询反馈失败: {e}")))?;
        if existing.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id),
            reply: Set(reply.to_string()),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("回复反馈失败: {e}")))?;

        Ok(Some(result.into_feedback()))
    }
}
