use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::{error, info};

use super::UserService;
use super::get::with_profile;
use crate::errors::SchoolHubError;
use crate::models::{
    ApiResponse, ErrorCode,
    users::{entities::UserRole, requests::CreateUserRequest},
};
use crate::services::common::{bad_request, not_found, storage_error};
use crate::storage::Storage;
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_name, validate_password};

/// 校验档案引用的课程和学年存在
pub(crate) async fn check_profile_refs(
    storage: &Arc<dyn Storage>,
    course_id: Option<i64>,
    session_id: Option<i64>,
) -> Result<(), HttpResponse> {
    if let Some(course_id) = course_id {
        match storage.get_course_by_id(course_id).await {
            Ok(Some(_)) => {}
            Ok(None) => return Err(not_found(ErrorCode::CourseNotFound, "Course not found")),
            Err(e) => return Err(storage_error("Failed to load course", e)),
        }
    }
    if let Some(session_id) = session_id {
        match storage.get_academic_session_by_id(session_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Err(not_found(
                    ErrorCode::AcademicSessionNotFound,
                    "Academic session not found",
                ));
            }
            Err(e) => return Err(storage_error("Failed to load academic session", e)),
        }
    }
    Ok(())
}

pub async fn create_user(
    service: &UserService,
    mut user_data: CreateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    user_data.email = user_data.email.trim().to_lowercase();
    if let Err(msg) = validate_email(&user_data.email) {
        return Ok(bad_request(ErrorCode::UserEmailInvalid, msg));
    }

    for name in [&user_data.first_name, &user_data.last_name] {
        if let Err(msg) = validate_name(name) {
            return Ok(bad_request(ErrorCode::UserNameInvalid, msg));
        }
    }
    user_data.first_name = user_data.first_name.trim().to_string();
    user_data.last_name = user_data.last_name.trim().to_string();

    if let Err(msg) = validate_password(&user_data.password) {
        return Ok(bad_request(ErrorCode::PasswordPolicyViolation, msg));
    }

    // 管理员没有档案，忽略课程和学年
    match user_data.role {
        UserRole::Admin => {
            user_data.course_id = None;
            user_data.session_id = None;
        }
        UserRole::Staff => user_data.session_id = None,
        UserRole::Student => {}
    }

    let storage = service.get_storage(request)?;
    if let Err(resp) =
        check_profile_refs(&storage, user_data.course_id, user_data.session_id).await
    {
        return Ok(resp);
    }

    user_data.password = match hash_password(&user_data.password) {
        Ok(hash) => hash,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Password hashing failed: {e}"),
                )),
            );
        }
    };

    let user = match storage.create_user(user_data).await {
        Ok(user) => user,
        Err(SchoolHubError::Conflict(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::UserAlreadyExists,
                "Email already exists",
            )));
        }
        Err(e) => {
            error!("User creation failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::UserCreationFailed,
                    format!("User creation failed: {e}"),
                )),
            );
        }
    };

    info!("Created {} user {}", user.role, user.email);
    match with_profile(&storage, user).await {
        Ok(response) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(response, "User created")))
        }
        Err(e) => Ok(storage_error("Failed to load created user", e)),
    }
}
