use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::quiz_sessions::requests::{JoinSessionRequest, UpdateSessionRequest};
use crate::models::users::entities::UserRole;
use crate::services::{QuizAttemptService, QuizSessionService};
use crate::utils::SafeIDI64;

static QUIZ_SESSION_SERVICE: Lazy<QuizSessionService> = Lazy::new(QuizSessionService::new_lazy);
static QUIZ_ATTEMPT_SERVICE: Lazy<QuizAttemptService> = Lazy::new(QuizAttemptService::new_lazy);

pub async fn join_session(
    req: HttpRequest,
    body: web::Json<JoinSessionRequest>,
) -> ActixResult<HttpResponse> {
    QUIZ_SESSION_SERVICE
        .join_session(&req, body.into_inner())
        .await
}

pub async fn get_session(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    QUIZ_SESSION_SERVICE.get_session(&req, id.0).await
}

pub async fn update_session(
    req: HttpRequest,
    id: SafeIDI64,
    body: web::Json<UpdateSessionRequest>,
) -> ActixResult<HttpResponse> {
    QUIZ_SESSION_SERVICE
        .update_session(&req, id.0, body.into_inner())
        .await
}

pub async fn session_qr(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    QUIZ_SESSION_SERVICE.session_qr(&req, id.0).await
}

pub async fn lobby(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    QUIZ_SESSION_SERVICE.lobby(&req, id.0).await
}

pub async fn start_attempt(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    QUIZ_ATTEMPT_SERVICE.start_attempt(&req, id.0).await
}

pub async fn session_dashboard(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    QUIZ_SESSION_SERVICE.session_dashboard(&req, id.0).await
}

pub async fn item_analysis(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    QUIZ_SESSION_SERVICE.item_analysis(&req, id.0).await
}

fn students() -> middlewares::RequireRole {
    middlewares::RequireRole::new_any(UserRole::student_roles())
}

fn quiz_owners() -> middlewares::RequireRole {
    middlewares::RequireRole::new_any(UserRole::staff_only_roles())
}

// 配置路由
pub fn configure_quiz_session_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/quiz-sessions")
            .wrap(middlewares::RequireJWT)
            // 场次码加入，按用户限流
            .service(
                web::resource("/join")
                    .route(web::post().to(join_session))
                    .wrap(students())
                    .wrap(middlewares::RateLimit::session_join()),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_session))
                    .route(web::put().to(update_session))
                    .wrap(quiz_owners()),
            )
            .service(
                web::resource("/{id}/qr")
                    .route(web::get().to(session_qr))
                    .wrap(quiz_owners()),
            )
            .service(
                web::resource("/{id}/lobby")
                    .route(web::get().to(lobby))
                    .wrap(students()),
            )
            .service(
                web::resource("/{id}/attempts")
                    .route(web::post().to(start_attempt))
                    .wrap(students()),
            )
            .service(
                web::resource("/{id}/dashboard")
                    .route(web::get().to(session_dashboard))
                    .wrap(quiz_owners()),
            )
            .service(
                web::resource("/{id}/item-analysis")
                    .route(web::get().to(item_analysis))
                    .wrap(quiz_owners()),
            ),
    );
}
