use super::{SeaOrmStorage, db_error};
use crate::entity::leave_reports::{ActiveModel, Column, Entity as LeaveReports, Relation};
use crate::entity::users;
use crate::errors::{Result, SchoolHubError};
use crate::models::{
    PaginationInfo,
    leaves::{
        entities::{LeaveReport, LeaveStatus},
        requests::{ApplyLeaveRequest, LeaveListQuery},
        responses::{LeaveListResponse, LeaveWithApplicant},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, JoinType, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Set, sea_query::Expr,
};

impl SeaOrmStorage {
    pub async fn create_leave_impl(
        &self,
        user_id: i64,
        req: ApplyLeaveRequest,
    ) -> Result<LeaveReport> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            user_id: Set(user_id),
            date: Set(req.date),
            message: Set(req.message),
            status: Set(LeaveStatus::Pending.code()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_error("创建请假申请失败"))?;

        Ok(result.into_leave_report())
    }

    pub async fn list_leaves_by_user_impl(&self, user_id: i64) -> Result<Vec<LeaveReport>> {
        let result = LeaveReports::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询请假列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_leave_report()).collect())
    }

    /// 分页列出请假申请，可按申请人角色和状态筛选
    pub async fn list_leaves_with_pagination_impl(
        &self,
        query: LeaveListQuery,
    ) -> Result<LeaveListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = LeaveReports::find();

        if let Some(ref role) = query.role {
            select = select
                .join(JoinType::InnerJoin, Relation::User.def())
                .filter(users::Column::Role.eq(role.to_string()));
        }

        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.code()));
        }

        select = select.order_by_desc(Column::CreatedAt).order_by_desc(Column::Id);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询请假总数失败: {e}")))?;

        let leaves = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询请假列表失败: {e}")))?;

        let user_ids: Vec<i64> = leaves.iter().map(|l| l.user_id).collect();
        let users = self.load_users_map(user_ids).await?;

        let items = leaves
            .into_iter()
            .filter_map(|m| {
                let user = users.get(&m.user_id)?;
                Some(LeaveWithApplicant {
                    applicant_name: user.full_name(),
                    applicant_role: user.role.clone(),
                    leave: m.into_leave_report(),
                })
            })
            .collect();

        Ok(LeaveListResponse {
            items,
            pagination: PaginationInfo::new(page as i64, size as i64, total as i64),
        })
    }

    pub async fn get_leave_by_id_impl(&self, id: i64) -> Result<Option<LeaveReport>> {
        let result = LeaveReports::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询请假申请失败: {e}")))?;

        Ok(result.map(|m| m.into_leave_report()))
    }

    /// 仅当申请仍为待审批时写入结果，否则返回 None
    pub async fn review_leave_impl(
        &self,
        id: i64,
        status: LeaveStatus,
    ) -> Result<Option<LeaveReport>> {
        let result = LeaveReports::update_many()
            .col_expr(Column::Status, Expr::value(status.code()))
            .col_expr(Column::UpdatedAt, Expr::value(chrono::Utc::now().timestamp()))
            .filter(Column::Id.eq(id))
            .filter(Column::Status.eq(LeaveStatus::Pending.code()))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("审批请假申请失败: {e}")))?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.get_leave_by_id_impl(id).await
    }
}
