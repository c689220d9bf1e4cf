use super::{SeaOrmStorage, db_error};
use crate::entity::notifications::{ActiveModel, Column, Entity as Notifications};
use crate::errors::{Result, SchoolHubError};
use crate::models::notifications::entities::Notification;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_notification_impl(
        &self,
        user_id: i64,
        message: &str,
    ) -> Result<Notification> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            user_id: Set(user_id),
            message: Set(message.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_error("创建通知失败"))?;

        Ok(result.into_notification())
    }

    /// 用户的通知，最新在前
    pub async fn list_notifications_by_user_impl(
        &self,
        user_id: i64,
    ) -> Result<Vec<Notification>> {
        let result = Notifications::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询通知列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_notification()).collect())
    }
}
