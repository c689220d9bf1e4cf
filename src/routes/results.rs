use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::results::requests::{ResultLookupQuery, SaveResultRequest};
use crate::models::users::entities::UserRole;
use crate::services::ResultService;

static RESULT_SERVICE: Lazy<ResultService> = Lazy::new(ResultService::new_lazy);

pub async fn save_result(
    req: HttpRequest,
    body: web::Json<SaveResultRequest>,
) -> ActixResult<HttpResponse> {
    RESULT_SERVICE.save_result(&req, body.into_inner()).await
}

pub async fn fetch_result(
    req: HttpRequest,
    query: web::Query<ResultLookupQuery>,
) -> ActixResult<HttpResponse> {
    RESULT_SERVICE.fetch_result(&req, query.into_inner()).await
}

pub async fn list_my_results(req: HttpRequest) -> ActixResult<HttpResponse> {
    RESULT_SERVICE.list_my_results(&req).await
}

// 配置路由
pub fn configure_result_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/results")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::put().to(save_result))
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
            )
            .service(
                web::resource("/lookup")
                    .route(web::get().to(fetch_result))
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
            )
            .service(
                web::resource("/my")
                    .route(web::get().to(list_my_results))
                    .wrap(middlewares::RequireRole::new_any(UserRole::student_roles())),
            ),
    );
}
