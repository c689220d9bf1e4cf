use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::auth::requests::{FcmTokenRequest, UpdateProfileRequest};
use crate::models::auth::responses::UserInfoResponse;
use crate::models::users::requests::UpdateUserRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{bad_request, current_user, not_found, storage_error};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_name, validate_password};

use super::AuthService;

pub async fn handle_update_profile(
    service: &AuthService,
    update_data: UpdateProfileRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    for name in [&update_data.first_name, &update_data.last_name]
        .into_iter()
        .flatten()
    {
        if let Err(msg) = validate_name(name) {
            return Ok(bad_request(ErrorCode::UserNameInvalid, msg));
        }
    }

    // 新密码需满足密码策略
    let password = match update_data.password.as_deref() {
        Some(password) if !password.is_empty() => {
            if let Err(msg) = validate_password(password) {
                return Ok(bad_request(ErrorCode::PasswordPolicyViolation, msg));
            }
            match hash_password(password) {
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
        _ => None,
    };

    let update = UpdateUserRequest {
        password,
        first_name: update_data.first_name.map(|s| s.trim().to_string()),
        last_name: update_data.last_name.map(|s| s.trim().to_string()),
        gender: update_data.gender,
        address: update_data.address,
        profile_pic: update_data.profile_pic,
        ..Default::default()
    };

    match storage.update_user(user.id, update).await {
        Ok(Some(user)) => {
            RequireJWT::invalidate_cached_user(request).await;
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                UserInfoResponse { user },
                "Profile updated",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::UserNotFound, "User not found")),
        Err(e) => Ok(storage_error("Failed to update profile", e)),
    }
}

pub async fn handle_update_fcm_token(
    service: &AuthService,
    token_request: FcmTokenRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    match storage
        .update_fcm_token(user.id, token_request.token.trim())
        .await
    {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Device token saved"))),
        Ok(false) => Ok(not_found(ErrorCode::UserNotFound, "User not found")),
        Err(e) => Ok(storage_error("Failed to save device token", e)),
    }
}
