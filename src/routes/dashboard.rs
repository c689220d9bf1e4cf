use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::entities::UserRole;
use crate::services::DashboardService;

static DASHBOARD_SERVICE: Lazy<DashboardService> = Lazy::new(DashboardService::new_lazy);

pub async fn admin_home(req: HttpRequest) -> ActixResult<HttpResponse> {
    DASHBOARD_SERVICE.admin_home(&req).await
}

pub async fn staff_home(req: HttpRequest) -> ActixResult<HttpResponse> {
    DASHBOARD_SERVICE.staff_home(&req).await
}

pub async fn student_home(req: HttpRequest) -> ActixResult<HttpResponse> {
    DASHBOARD_SERVICE.student_home(&req).await
}

// 配置路由：三个首页各自限定角色
pub fn configure_dashboard_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/dashboard")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/admin")
                    .route(web::get().to(admin_home))
                    .wrap(middlewares::RequireRole::new(&UserRole::Admin)),
            )
            .service(
                web::resource("/staff")
                    .route(web::get().to(staff_home))
                    .wrap(middlewares::RequireRole::new(&UserRole::Staff)),
            )
            .service(
                web::resource("/student")
                    .route(web::get().to(student_home))
                    .wrap(middlewares::RequireRole::new(&UserRole::Student)),
            ),
    );
}
