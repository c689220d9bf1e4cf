use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::quiz_sessions::requests::CreateSessionRequest;
use crate::models::quizzes::requests::{
    AddChoiceRequest, AddQuestionRequest, CreateQuizRequest, QuizBuilderRequest,
    UpdateQuizRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::{QuizService, QuizSessionService};
use crate::utils::SafeIDI64;

static QUIZ_SERVICE: Lazy<QuizService> = Lazy::new(QuizService::new_lazy);
static QUIZ_SESSION_SERVICE: Lazy<QuizSessionService> = Lazy::new(QuizSessionService::new_lazy);

pub async fn list_quizzes(req: HttpRequest) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE.list_quizzes(&req).await
}

pub async fn create_quiz(
    req: HttpRequest,
    body: web::Json<CreateQuizRequest>,
) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE.create_quiz(&req, body.into_inner()).await
}

pub async fn get_quiz(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE.get_quiz(&req, id.0).await
}

pub async fn update_quiz(
    req: HttpRequest,
    id: SafeIDI64,
    body: web::Json<UpdateQuizRequest>,
) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE
        .update_quiz(&req, id.0, body.into_inner())
        .await
}

pub async fn delete_quiz(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE.delete_quiz(&req, id.0).await
}

pub async fn add_question(
    req: HttpRequest,
    id: SafeIDI64,
    body: web::Json<AddQuestionRequest>,
) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE
        .add_question(&req, id.0, body.into_inner())
        .await
}

pub async fn quiz_builder(
    req: HttpRequest,
    id: SafeIDI64,
    body: web::Json<QuizBuilderRequest>,
) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE
        .quiz_builder(&req, id.0, body.into_inner())
        .await
}

pub async fn add_choice(
    req: HttpRequest,
    id: SafeIDI64,
    body: web::Json<AddChoiceRequest>,
) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE.add_choice(&req, id.0, body.into_inner()).await
}

pub async fn create_session(
    req: HttpRequest,
    id: SafeIDI64,
    body: web::Json<CreateSessionRequest>,
) -> ActixResult<HttpResponse> {
    QUIZ_SESSION_SERVICE
        .create_session(&req, id.0, body.into_inner())
        .await
}

// 配置路由：测验归属在业务层检查
pub fn configure_quiz_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/quizzes")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(
                        UserRole::staff_only_roles(),
                    ))
                    .route("", web::get().to(list_quizzes))
                    .route("", web::post().to(create_quiz))
                    .route("/questions/{id}/choices", web::post().to(add_choice))
                    .route("/{id}", web::get().to(get_quiz))
                    .route("/{id}", web::put().to(update_quiz))
                    .route("/{id}", web::delete().to(delete_quiz))
                    .route("/{id}/questions", web::post().to(add_question))
                    .route("/{id}/builder", web::post().to(quiz_builder))
                    .route("/{id}/sessions", web::post().to(create_session)),
            ),
    );
}
