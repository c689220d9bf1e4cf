use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::leaves::requests::{ApplyLeaveRequest, LeaveListParams, ReviewLeaveRequest};
use crate::models::users::entities::UserRole;
use crate::services::LeaveService;
use crate::utils::SafeIDI64;

static LEAVE_SERVICE: Lazy<LeaveService> = Lazy::new(LeaveService::new_lazy);

pub async fn apply_leave(
    req: HttpRequest,
    body: web::Json<ApplyLeaveRequest>,
) -> ActixResult<HttpResponse> {
    LEAVE_SERVICE.apply_leave(&req, body.into_inner()).await
}

pub async fn list_my_leaves(req: HttpRequest) -> ActixResult<HttpResponse> {
    LEAVE_SERVICE.list_my_leaves(&req).await
}

pub async fn list_leaves(
    req: HttpRequest,
    query: web::Query<LeaveListParams>,
) -> ActixResult<HttpResponse> {
    LEAVE_SERVICE.list_leaves(&req, query.into_inner()).await
}

pub async fn review_leave(
    req: HttpRequest,
    id: SafeIDI64,
    body: web::Json<ReviewLeaveRequest>,
) -> ActixResult<HttpResponse> {
    LEAVE_SERVICE
        .review_leave(&req, id.0, body.into_inner())
        .await
}

// 配置路由
pub fn configure_leave_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/leaves")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(
                        web::post()
                            .to(apply_leave)
                            .wrap(middlewares::RequireRole::new_any(UserRole::member_roles())),
                    )
                    .route(
                        web::get()
                            .to(list_leaves)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/my")
                    .route(web::get().to(list_my_leaves))
                    .wrap(middlewares::RequireRole::new_any(UserRole::member_roles())),
            )
            .service(
                web::resource("/{id}/review")
                    .route(web::put().to(review_leave))
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
            ),
    );
}
