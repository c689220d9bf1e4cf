use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::feedbacks::requests::{
    FeedbackListParams, ReplyFeedbackRequest, SubmitFeedbackRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::FeedbackService;
use crate::utils::SafeIDI64;

static FEEDBACK_SERVICE: Lazy<FeedbackService> = Lazy::new(FeedbackService::new_lazy);

pub async fn submit_feedback(
    req: HttpRequest,
    body: web::Json<SubmitFeedbackRequest>,
) -> ActixResult<HttpResponse> {
    FEEDBACK_SERVICE
        .submit_feedback(&req, body.into_inner())
        .await
}

pub async fn list_my_feedbacks(req: HttpRequest) -> ActixResult<HttpResponse> {
    FEEDBACK_SERVICE.list_my_feedbacks(&req).await
}

pub async fn list_feedbacks(
    req: HttpRequest,
    query: web::Query<FeedbackListParams>,
) -> ActixResult<HttpResponse> {
    FEEDBACK_SERVICE
        .list_feedbacks(&req, query.into_inner())
        .await
}

pub async fn reply_feedback(
    req: HttpRequest,
    id: SafeIDI64,
    body: web::Json<ReplyFeedbackRequest>,
) -> ActixResult<HttpResponse> {
    FEEDBACK_SERVICE
        .reply_feedback(&req, id.0, body.into_inner())
        .await
}

// 配置路由
pub fn configure_feedback_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/feedbacks")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(
                        web::post()
                            .to(submit_feedback)
                            .wrap(middlewares::RequireRole::new_any(UserRole::member_roles())),
                    )
                    .route(
                        web::get()
                            .to(list_feedbacks)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/my")
                    .route(web::get().to(list_my_feedbacks))
                    .wrap(middlewares::RequireRole::new_any(UserRole::member_roles())),
            )
            .service(
                web::resource("/{id}/reply")
                    .route(web::put().to(reply_feedback))
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
            ),
    );
}
