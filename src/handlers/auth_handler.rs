use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{AuthMiddleware, AuthenticatedUser},
    errors::AppError,
    models::dto::{
        request::{LoginRequest, RegisterRequest},
        response::{LoginResponse, MessageResponse, ProfileResponse},
    },
};

#[post("/registro")]
pub async fn register(
    state: web::Data<AppState>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    state.auth_service.register(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(MessageResponse::new("Usuario registrado correctamente")))
}

#[post("/ingreso")]
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let token = state.auth_service.login(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(LoginResponse {
        message: "Inicio de sesión exitoso".to_string(),
        token,
    }))
}

#[get("/perfil", wrap = "AuthMiddleware")]
pub async fn profile(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let user = state.auth_service.profile(&auth.0).await?;
    Ok(HttpResponse::Ok().json(ProfileResponse {
        message: "Acceso autorizado a la ruta protegida".to_string(),
        user,
    }))
}
