//! 各服务共用的请求上下文与错误响应

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web::Data};
use std::sync::Arc;
use tracing::error;

use crate::errors::SchoolHubError;
use crate::middlewares::RequireJWT;
use crate::models::quiz_sessions::entities::QuizSession;
use crate::models::quizzes::entities::Quiz;
use crate::models::users::entities::{StaffProfile, StudentProfile, User, UserRole};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

/// 从 app_data 中取存储，未注册时返回 500
pub(crate) fn storage_from_request(request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
    request
        .app_data::<Data<Arc<dyn Storage>>>()
        .map(|storage| storage.get_ref().clone())
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("Storage not found in app data"))
}

/// 存储层错误转为响应，唯一约束冲突为 409
pub(crate) fn storage_error(context: &str, err: SchoolHubError) -> HttpResponse {
    match err {
        SchoolHubError::Conflict(_) => HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::Conflict,
            format!("{context}: resource already exists"),
        )),
        SchoolHubError::NotFound(msg) => {
            HttpResponse::NotFound().json(ApiResponse::error_empty(ErrorCode::NotFound, msg))
        }
        SchoolHubError::Validation(msg) => {
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, msg))
        }
        other => {
            error!("{}: {}", context, other);
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("{context}: {other}"),
            ))
        }
    }
}

pub(crate) fn not_found(code: ErrorCode, message: &str) -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(code, message))
}

pub(crate) fn bad_request(code: ErrorCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(code, message))
}

pub(crate) fn forbidden(message: &str) -> HttpResponse {
    HttpResponse::Forbidden().json(ApiResponse::error_empty(ErrorCode::Forbidden, message))
}

/// 当前登录用户
pub(crate) fn current_user(request: &HttpRequest) -> Result<User, HttpResponse> {
    RequireJWT::extract_user_claims(request).ok_or_else(|| {
        HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        ))
    })
}

pub(crate) async fn require_staff_profile(
    storage: &Arc<dyn Storage>,
    user: &User,
) -> Result<StaffProfile, HttpResponse> {
    match storage.get_staff_by_user_id(user.id).await {
        Ok(Some(staff)) => Ok(staff),
        Ok(None) => Err(not_found(
            ErrorCode::ProfileNotFound,
            "Staff profile not found",
        )),
        Err(e) => Err(storage_error("Failed to load staff profile", e)),
    }
}

pub(crate) async fn require_student_profile(
    storage: &Arc<dyn Storage>,
    user: &User,
) -> Result<StudentProfile, HttpResponse> {
    match storage.get_student_by_user_id(user.id).await {
        Ok(Some(student)) => Ok(student),
        Ok(None) => Err(not_found(
            ErrorCode::ProfileNotFound,
            "Student profile not found",
        )),
        Err(e) => Err(storage_error("Failed to load student profile", e)),
    }
}

/// 教职工只能操作自己任教的科目，管理员不受限
pub(crate) async fn check_subject_access(
    storage: &Arc<dyn Storage>,
    user: &User,
    subject_id: i64,
) -> Result<(), HttpResponse> {
    let subject = match storage.get_subject_by_id(subject_id).await {
        Ok(Some(subject)) => subject,
        Ok(None) => return Err(not_found(ErrorCode::SubjectNotFound, "Subject not found")),
        Err(e) => return Err(storage_error("Failed to load subject", e)),
    };

    if user.role == UserRole::Admin {
        return Ok(());
    }

    let staff = require_staff_profile(storage, user).await?;
    if subject.staff_id != staff.id {
        return Err(forbidden("You do not teach this subject"));
    }
    Ok(())
}

/// 加载调用者创建的测验
pub(crate) async fn load_owned_quiz(
    storage: &Arc<dyn Storage>,
    staff: &StaffProfile,
    quiz_id: i64,
) -> Result<Quiz, HttpResponse> {
    match storage.get_quiz_by_id(quiz_id).await {
        Ok(Some(quiz)) if quiz.created_by == staff.id => Ok(quiz),
        Ok(Some(_)) => Err(forbidden("You do not own this quiz")),
        Ok(None) => Err(not_found(ErrorCode::QuizNotFound, "Quiz not found")),
        Err(e) => Err(storage_error("Failed to load quiz", e)),
    }
}

/// 加载调用者名下测验的场次
pub(crate) async fn load_owned_session(
    storage: &Arc<dyn Storage>,
    staff: &StaffProfile,
    session_id: i64,
) -> Result<(QuizSession, Quiz), HttpResponse> {
    let session = match storage.get_quiz_session_by_id(session_id).await {
        Ok(Some(session)) => session,
        Ok(None) => {
            return Err(not_found(
                ErrorCode::QuizSessionNotFound,
                "Quiz session not found",
            ));
        }
        Err(e) => return Err(storage_error("Failed to load quiz session", e)),
    };
    let quiz = load_owned_quiz(storage, staff, session.quiz_id).await?;
    Ok((session, quiz))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_storage_error_status_mapping() {
        assert_eq!(
            storage_error("x", SchoolHubError::conflict("dup")).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            storage_error("x", SchoolHubError::not_found("gone")).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            storage_error("x", SchoolHubError::validation("bad")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            storage_error("x", SchoolHubError::database_operation("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_missing_storage_is_an_error() {
        let req = actix_web::test::TestRequest::default().to_http_request();
        assert!(storage_from_request(&req).is_err());
    }

    #[test]
    fn test_current_user_requires_login() {
        let req = actix_web::test::TestRequest::default().to_http_request();
        let resp = current_user(&req).unwrap_err();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
