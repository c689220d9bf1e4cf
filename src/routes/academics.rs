use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::academics::requests::{
    AcademicSessionRequest, CourseRequest, CreateSubjectRequest, SubjectListQuery,
    UpdateSubjectRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::AcademicService;
use crate::utils::SafeIDI64;

static ACADEMIC_SERVICE: Lazy<AcademicService> = Lazy::new(AcademicService::new_lazy);

// 课程
pub async fn list_courses(req: HttpRequest) -> ActixResult<HttpResponse> {
    ACADEMIC_SERVICE.list_courses(&req).await
}

pub async fn create_course(
    req: HttpRequest,
    body: web::Json<CourseRequest>,
) -> ActixResult<HttpResponse> {
    ACADEMIC_SERVICE.create_course(&req, body.into_inner()).await
}

pub async fn update_course(
    req: HttpRequest,
    id: SafeIDI64,
    body: web::Json<CourseRequest>,
) -> ActixResult<HttpResponse> {
    ACADEMIC_SERVICE
        .update_course(&req, id.0, body.into_inner())
        .await
}

pub async fn delete_course(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    ACADEMIC_SERVICE.delete_course(&req, id.0).await
}

// 科目
pub async fn list_subjects(
    req: HttpRequest,
    query: web::Query<SubjectListQuery>,
) -> ActixResult<HttpResponse> {
    ACADEMIC_SERVICE
        .list_subjects(&req, query.into_inner())
        .await
}

pub async fn create_subject(
    req: HttpRequest,
    body: web::Json<CreateSubjectRequest>,
) -> ActixResult<HttpResponse> {
    ACADEMIC_SERVICE
        .create_subject(&req, body.into_inner())
        .await
}

pub async fn update_subject(
    req: HttpRequest,
    id: SafeIDI64,
    body: web::Json<UpdateSubjectRequest>,
) -> ActixResult<HttpResponse> {
    ACADEMIC_SERVICE
        .update_subject(&req, id.0, body.into_inner())
        .await
}

pub async fn delete_subject(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    ACADEMIC_SERVICE.delete_subject(&req, id.0).await
}

// 学年
pub async fn list_sessions(req: HttpRequest) -> ActixResult<HttpResponse> {
    ACADEMIC_SERVICE.list_sessions(&req).await
}

pub async fn create_session(
    req: HttpRequest,
    body: web::Json<AcademicSessionRequest>,
) -> ActixResult<HttpResponse> {
    ACADEMIC_SERVICE
        .create_session(&req, body.into_inner())
        .await
}

pub async fn update_session(
    req: HttpRequest,
    id: SafeIDI64,
    body: web::Json<AcademicSessionRequest>,
) -> ActixResult<HttpResponse> {
    ACADEMIC_SERVICE
        .update_session(&req, id.0, body.into_inner())
        .await
}

pub async fn delete_session(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    ACADEMIC_SERVICE.delete_session(&req, id.0).await
}

fn admin_only() -> middlewares::RequireRole {
    middlewares::RequireRole::new_any(UserRole::admin_roles())
}

// 配置路由：查询对所有登录用户开放，增删改仅管理员
pub fn configure_academic_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/courses")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_courses))
                    .route(web::post().to(create_course).wrap(admin_only())),
            )
            .service(
                web::resource("/{id}")
                    .route(web::put().to(update_course).wrap(admin_only()))
                    .route(web::delete().to(delete_course).wrap(admin_only())),
            ),
    )
    .service(
        web::scope("/api/v1/subjects")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_subjects))
                    .route(web::post().to(create_subject).wrap(admin_only())),
            )
            .service(
                web::resource("/{id}")
                    .route(web::put().to(update_subject).wrap(admin_only()))
                    .route(web::delete().to(delete_subject).wrap(admin_only())),
            ),
    )
    .service(
        web::scope("/api/v1/academic-sessions")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_sessions))
                    .route(web::post().to(create_session).wrap(admin_only())),
            )
            .service(
                web::resource("/{id}")
                    .route(web::put().to(update_session).wrap(admin_only()))
                    .route(web::delete().to(delete_session).wrap(admin_only())),
            ),
    );
}
