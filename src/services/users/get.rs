use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::UserService;
use crate::errors::Result;
use crate::models::users::entities::{User, UserRole};
use crate::models::users::responses::UserResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{not_found, storage_error};
use crate::storage::Storage;

/// 用户附带其角色对应的档案
pub(crate) async fn with_profile(storage: &Arc<dyn Storage>, user: User) -> Result<UserResponse> {
    let (staff, student) = match user.role {
        UserRole::Staff => (storage.get_staff_by_user_id(user.id).await?, None),
        UserRole::Student => (None, storage.get_student_by_user_id(user.id).await?),
        UserRole::Admin => (None, None),
    };
    Ok(UserResponse {
        user,
        staff,
        student,
    })
}

pub async fn get_user(
    service: &UserService,
    user_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let user = match storage.get_user_by_id(user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => return Ok(not_found(ErrorCode::UserNotFound, "User not found")),
        Err(e) => return Ok(storage_error("Failed to get user information", e)),
    };

    match with_profile(&storage, user).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "User information retrieved successfully",
        ))),
        Err(e) => Ok(storage_error("Failed to get user profile", e)),
    }
}
