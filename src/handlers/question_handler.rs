use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{AuthMiddleware, RoleGuard},
    errors::AppError,
    models::dto::{
        request::QuestionRequest,
        response::{MessageResponse, QuestionDto, QuestionUpdatedResponse},
    },
};

#[post(
    "/preguntas",
    wrap = "RoleGuard::require_admin()",
    wrap = "AuthMiddleware"
)]
pub async fn create_question(
    state: web::Data<AppState>,
    request: web::Json<QuestionRequest>,
) -> Result<HttpResponse, AppError> {
    state.question_service.create(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(MessageResponse::new("Pregunta creada exitosamente")))
}

#[get("/preguntas")]
pub async fn list_questions(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let questions: Vec<QuestionDto> = state
        .question_service
        .list()
        .await?
        .into_iter()
        .map(QuestionDto::from)
        .collect();
    Ok(HttpResponse::Ok().json(questions))
}

#[get("/preguntas/{id}")]
pub async fn get_question(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let question = state.question_service.get(&id).await?;
    Ok(HttpResponse::Ok().json(QuestionDto::from(question)))
}

#[put(
    "/preguntas/{id}",
    wrap = "RoleGuard::require_admin()",
    wrap = "AuthMiddleware"
)]
pub async fn update_question(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<QuestionRequest>,
) -> Result<HttpResponse, AppError> {
    let question = state
        .question_service
        .update(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(QuestionUpdatedResponse {
        message: "Pregunta editada exitosamente".to_string(),
        pregunta: question.into(),
    }))
}

#[delete(
    "/preguntas/{id}",
    wrap = "RoleGuard::require_admin()",
    wrap = "AuthMiddleware"
)]
pub async fn delete_question(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.question_service.delete(&id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Pregunta eliminada exitosamente")))
}
