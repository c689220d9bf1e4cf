use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::attendance::requests::{
    MyAttendanceQuery, SaveAttendanceRequest, SubjectSessionQuery, UpdateAttendanceRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::AttendanceService;
use crate::utils::SafeIDI64;

static ATTENDANCE_SERVICE: Lazy<AttendanceService> = Lazy::new(AttendanceService::new_lazy);

pub async fn get_students(
    req: HttpRequest,
    query: web::Query<SubjectSessionQuery>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .get_students(&req, query.into_inner())
        .await
}

pub async fn save_attendance(
    req: HttpRequest,
    body: web::Json<SaveAttendanceRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .save_attendance(&req, body.into_inner())
        .await
}

pub async fn list_attendance_dates(
    req: HttpRequest,
    query: web::Query<SubjectSessionQuery>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .list_attendance_dates(&req, query.into_inner())
        .await
}

pub async fn get_reports(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE.get_reports(&req, id.0).await
}

pub async fn update_reports(
    req: HttpRequest,
    id: SafeIDI64,
    body: web::Json<UpdateAttendanceRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .update_reports(&req, id.0, body.into_inner())
        .await
}

pub async fn my_attendance(
    req: HttpRequest,
    query: web::Query<MyAttendanceQuery>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .my_attendance(&req, query.into_inner())
        .await
}

// 配置路由
pub fn configure_attendance_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/attendance")
            .wrap(middlewares::RequireJWT)
            // 学生查看自己的出勤
            .service(
                web::resource("/my")
                    .route(web::get().to(my_attendance))
                    .wrap(middlewares::RequireRole::new_any(UserRole::student_roles())),
            )
            // 点名相关，科目权限在业务层检查
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
                    .route("/students", web::get().to(get_students))
                    .route("", web::get().to(list_attendance_dates))
                    .route("", web::post().to(save_attendance))
                    .route("/{id}/reports", web::get().to(get_reports))
                    .route("/{id}/reports", web::put().to(update_reports)),
            ),
    );
}
