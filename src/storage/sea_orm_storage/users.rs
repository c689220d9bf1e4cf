use std::collections::HashMap;

use super::{SeaOrmStorage, db_error};
use crate::entity::prelude::{
    AdminActiveModel, StaffActiveModel, Staffs, StudentActiveModel, Students,
};
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::entity::{staffs, students};
use crate::errors::{Result, SchoolHubError};
use crate::models::{
    PaginationInfo,
    users::{
        entities::{StaffProfile, StudentProfile, User, UserRole, UserStatus},
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建用户，并在同一事务内创建对应角色的档案
    pub async fn create_user_impl(&self, req: CreateUserRequest) -> Result<User> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("开启事务失败: {e}")))?;

        let model = ActiveModel {
            email: Set(req.email),
            password_hash: Set(req.password),
            role: Set(req.role.to_string()),
            status: Set(UserStatus::Active.to_string()),
            first_name: Set(req.first_name),
            last_name: Set(req.last_name),
            gender: Set(req.gender.to_string()),
            address: Set(req.address),
            profile_pic: Set(req.profile_pic),
            fcm_token: Set(String::new()),
            last_login: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let user = model.insert(&txn).await.map_err(db_error("创建用户失败"))?;

        match req.role {
            UserRole::Admin => {
                AdminActiveModel {
                    user_id: Set(user.id),
                    ..Default::default()
                }
                .insert(&txn)
                .await
                .map_err(db_error("创建管理员档案失败"))?;
            }
            UserRole::Staff => {
                StaffActiveModel {
                    user_id: Set(user.id),
                    course_id: Set(req.course_id),
                    ..Default::default()
                }
                .insert(&txn)
                .await
                .map_err(db_error("创建教职工档案失败"))?;
            }
            UserRole::Student => {
                StudentActiveModel {
                    user_id: Set(user.id),
                    course_id: Set(req.course_id),
                    session_id: Set(req.session_id),
                    ..Default::default()
                }
                .insert(&txn)
                .await
                .map_err(db_error("创建学生档案失败"))?;
            }
        }

        txn.commit()
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(user.into_user())
    }

    /// 通过 ID 获取用户
    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 通过邮箱获取用户
    pub async fn get_user_by_email_impl(&self, email: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 分页列出用户
    pub async fn list_users_with_pagination_impl(
        &self,
        query: UserListQuery,
    ) -> Result<UserListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Users::find();

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Email.contains(&escaped))
                    .add(Column::FirstName.contains(&escaped))
                    .add(Column::LastName.contains(&escaped)),
            );
        }

        if let Some(ref role) = query.role {
            select = select.filter(Column::Role.eq(role.to_string()));
        }

        if let Some(ref status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        select = select.order_by_desc(Column::CreatedAt).order_by_desc(Column::Id);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询用户总数失败: {e}")))?;

        let users = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询用户列表失败: {e}")))?;

        Ok(UserListResponse {
            items: users.into_iter().map(|m| m.into_user()).collect(),
            pagination: PaginationInfo::new(page as i64, size as i64, total as i64),
        })
    }

    /// 更新用户最后登录时间
    pub async fn update_last_login_impl(&self, id: i64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = Users::update_many()
            .col_expr(Column::LastLogin, sea_orm::sea_query::Expr::value(now))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("更新最后登录时间失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 更新推送令牌
    pub async fn update_fcm_token_impl(&self, id: i64, token: &str) -> Result<bool> {
        let result = Users::update_many()
            .col_expr(Column::FcmToken, sea_orm::sea_query::Expr::value(token))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("更新推送令牌失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 更新用户信息，课程 / 学年写入档案
    pub async fn update_user_impl(
        &self,
        id: i64,
        update: UpdateUserRequest,
    ) -> Result<Option<User>> {
        let Some(existing) = self.get_user_by_id_impl(id).await? else {
            return Ok(None);
        };

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(email) = update.email {
            model.email = Set(email);
        }
        if let Some(password) = update.password {
            model.password_hash = Set(password);
        }
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }
        if let Some(first_name) = update.first_name {
            model.first_name = Set(first_name);
        }
        if let Some(last_name) = update.last_name {
            model.last_name = Set(last_name);
        }
        if let Some(gender) = update.gender {
            model.gender = Set(gender.to_string());
        }
        if let Some(address) = update.address {
            model.address = Set(address);
        }
        if let Some(profile_pic) = update.profile_pic {
            model.profile_pic = Set(Some(profile_pic));
        }

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("开启事务失败: {e}")))?;

        model.update(&txn).await.map_err(db_error("更新用户失败"))?;

        match existing.role {
            UserRole::Staff if update.course_id.is_some() => {
                Staffs::update_many()
                    .col_expr(
                        staffs::Column::CourseId,
                        sea_orm::sea_query::Expr::value(update.course_id),
                    )
                    .filter(staffs::Column::UserId.eq(id))
                    .exec(&txn)
                    .await
                    .map_err(db_error("更新教职工档案失败"))?;
            }
            UserRole::Student if update.course_id.is_some() || update.session_id.is_some() => {
                let mut stmt = Students::update_many();
                if update.course_id.is_some() {
                    stmt = stmt.col_expr(
                        students::Column::CourseId,
                        sea_orm::sea_query::Expr::value(update.course_id),
                    );
                }
                if update.session_id.is_some() {
                    stmt = stmt.col_expr(
                        students::Column::SessionId,
                        sea_orm::sea_query::Expr::value(update.session_id),
                    );
                }
                stmt
                    .filter(students::Column::UserId.eq(id))
                    .exec(&txn)
                    .await
                    .map_err(db_error("更新学生档案失败"))?;
            }
            _ => {}
        }

        txn.commit()
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("提交事务失败: {e}")))?;

        self.get_user_by_id_impl(id).await
    }

    /// 删除用户，档案随外键级联删除
    pub async fn delete_user_impl(&self, id: i64) -> Result<bool> {
        let result = Users::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("删除用户失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 统计用户数量
    pub async fn count_users_impl(&self) -> Result<u64> {
        let count = Users::find()
            .count(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("统计用户数量失败: {e}")))?;

        Ok(count)
    }

    /// 批量加载用户，用于列表中补充姓名和角色
    pub(super) async fn load_users_map(&self, ids: Vec<i64>) -> Result<HashMap<i64, User>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let users = Users::find()
            .filter(Column::Id.is_in(ids))
            .all(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("批量查询用户失败: {e}")))?;

        Ok(users.into_iter().map(|m| (m.id, m.into_user())).collect())
    }

    pub async fn get_staff_by_user_id_impl(&self, user_id: i64) -> Result<Option<StaffProfile>> {
        let result = Staffs::find()
            .filter(staffs::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询教职工档案失败: {e}")))?;

        Ok(result.map(|m| m.into_staff_profile()))
    }

    pub async fn get_student_by_user_id_impl(
        &self,
        user_id: i64,
    ) -> Result<Option<StudentProfile>> {
        let result = Students::find()
            .filter(students::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询学生档案失败: {e}")))?;

        Ok(result.map(|m| m.into_student_profile()))
    }

    pub async fn get_staff_by_id_impl(&self, id: i64) -> Result<Option<StaffProfile>> {
        let result = Staffs::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询教职工档案失败: {e}")))?;

        Ok(result.map(|m| m.into_staff_profile()))
    }

    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<StudentProfile>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询学生档案失败: {e}")))?;

        Ok(result.map(|m| m.into_student_profile()))
    }
}
