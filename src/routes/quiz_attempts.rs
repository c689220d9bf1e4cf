use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::quiz_attempts::requests::SubmitAttemptRequest;
use crate::models::users::entities::UserRole;
use crate::services::QuizAttemptService;
use crate::utils::SafeIDI64;

static QUIZ_ATTEMPT_SERVICE: Lazy<QuizAttemptService> = Lazy::new(QuizAttemptService::new_lazy);

pub async fn submit_attempt(
    req: HttpRequest,
    id: SafeIDI64,
    body: web::Json<SubmitAttemptRequest>,
) -> ActixResult<HttpResponse> {
    QUIZ_ATTEMPT_SERVICE
        .submit_attempt(&req, id.0, body.into_inner())
        .await
}

pub async fn get_attempt_result(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    QUIZ_ATTEMPT_SERVICE.get_attempt_result(&req, id.0).await
}

// 配置路由：仅作答学生本人
pub fn configure_quiz_attempt_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/quiz-attempts")
            // 后注册的 wrap 在外层，先认证再校验角色
            .wrap(middlewares::RequireRole::new_any(UserRole::student_roles()))
            .wrap(middlewares::RequireJWT)
            .route("/{id}", web::get().to(get_attempt_result))
            .route("/{id}/submit", web::post().to(submit_attempt)),
    );
}
