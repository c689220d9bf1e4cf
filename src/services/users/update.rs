use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use super::create::check_profile_refs;
use super::get::with_profile;
use crate::errors::SchoolHubError;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    users::{entities::UserStatus, requests::UpdateUserRequest},
};
use crate::services::common::{bad_request, not_found, storage_error};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_name, validate_password};

pub async fn update_user(
    service: &UserService,
    user_id: i64,
    mut update_data: UpdateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    if let Some(email) = update_data.email.as_mut() {
        *email = email.trim().to_lowercase();
        if let Err(msg) = validate_email(email) {
            return Ok(bad_request(ErrorCode::UserEmailInvalid, msg));
        }
    }

    for name in [update_data.first_name.as_mut(), update_data.last_name.as_mut()]
        .into_iter()
        .flatten()
    {
        if let Err(msg) = validate_name(name) {
            return Ok(bad_request(ErrorCode::UserNameInvalid, msg));
        }
        *name = name.trim().to_string();
    }

    // 用户 1 为初始管理员，不允许停用
    if user_id == 1
        && update_data
            .status
            .as_ref()
            .is_some_and(|s| *s != UserStatus::Active)
    {
        return Ok(bad_request(
            ErrorCode::UserUpdateFailed,
            "The initial administrator cannot be deactivated",
        ));
    }

    if let Err(resp) =
        check_profile_refs(&storage, update_data.course_id, update_data.session_id).await
    {
        return Ok(resp);
    }

    update_data.password = match update_data.password.take().filter(|p| !p.is_empty()) {
        Some(password) => {
            if let Err(msg) = validate_password(&password) {
                return Ok(bad_request(ErrorCode::PasswordPolicyViolation, msg));
            }
            match hash_password(&password) {
                Ok(hash) => Some(hash),
                Err(e) => {
                    return Ok(
                        HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            format!("Password hashing failed: {e}"),
                        )),
                    );
                }
            }
        }
        None => None,
    };

    let user = match storage.update_user(user_id, update_data).await {
        Ok(Some(user)) => user,
        Ok(None) => return Ok(not_found(ErrorCode::UserNotFound, "User not found")),
        Err(SchoolHubError::Conflict(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::UserAlreadyExists,
                "Email already exists",
            )));
        }
        Err(e) => return Ok(storage_error("Failed to update user information", e)),
    };
    RequireJWT::evict_user(request, user.id).await;

    match with_profile(&storage, user).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "User information updated successfully",
        ))),
        Err(e) => Ok(storage_error("Failed to load updated user", e)),
    }
}
