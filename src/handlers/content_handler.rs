use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{AuthMiddleware, RoleGuard},
    errors::AppError,
    models::dto::{
        request::{
            CreateModuleRequest, CreateSubmoduleRequest, UpdateModuleRequest,
            UpdateSubmoduleRequest, VideoRequest,
        },
        response::{MessageResponse, ModuleDto, SubmoduleDto, VideoDto},
    },
};

// Modules

#[post(
    "/api/modules",
    wrap = "RoleGuard::require_admin()",
    wrap = "AuthMiddleware"
)]
pub async fn create_module(
    state: web::Data<AppState>,
    request: web::Json<CreateModuleRequest>,
) -> Result<HttpResponse, AppError> {
    let module = state
        .content_service
        .create_module(request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(ModuleDto::from(module)))
}

#[get("/api/modules")]
pub async fn list_modules(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let modules: Vec<ModuleDto> = state
        .content_service
        .list_modules()
        .await?
        .into_iter()
        .map(ModuleDto::from)
        .collect();
    Ok(HttpResponse::Ok().json(modules))
}

#[get("/api/modules/{id}")]
pub async fn get_module(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let module = state.content_service.get_module(&id).await?;
    Ok(HttpResponse::Ok().json(ModuleDto::from(module)))
}

#[put(
    "/api/modules/{id}",
    wrap = "RoleGuard::require_admin()",
    wrap = "AuthMiddleware"
)]
pub async fn update_module(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<UpdateModuleRequest>,
) -> Result<HttpResponse, AppError> {
    let module = state
        .content_service
        .update_module(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ModuleDto::from(module)))
}

#[delete(
    "/api/modules/{id}",
    wrap = "RoleGuard::require_admin()",
    wrap = "AuthMiddleware"
)]
pub async fn delete_module(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.content_service.delete_module(&id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Módulo eliminado correctamente.")))
}

// Submodules

#[post(
    "/api/modules/{module_id}/submodules",
    wrap = "RoleGuard::require_admin()",
    wrap = "AuthMiddleware"
)]
pub async fn create_submodule(
    state: web::Data<AppState>,
    module_id: web::Path<String>,
    request: web::Json<CreateSubmoduleRequest>,
) -> Result<HttpResponse, AppError> {
    let submodule = state
        .content_service
        .create_submodule(&module_id, request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(SubmoduleDto::from(submodule)))
}

#[get("/api/modules/{module_id}/submodules")]
pub async fn list_submodules(
    state: web::Data<AppState>,
    module_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let submodules: Vec<SubmoduleDto> = state
        .content_service
        .list_submodules(&module_id)
        .await?
        .into_iter()
        .map(SubmoduleDto::from)
        .collect();
    Ok(HttpResponse::Ok().json(submodules))
}

#[get("/api/submodules/{id}")]
pub async fn get_submodule(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let submodule = state.content_service.get_submodule(&id).await?;
    Ok(HttpResponse::Ok().json(SubmoduleDto::from(submodule)))
}

#[put(
    "/api/submodules/{id}",
    wrap = "RoleGuard::require_admin()",
    wrap = "AuthMiddleware"
)]
pub async fn update_submodule(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<UpdateSubmoduleRequest>,
) -> Result<HttpResponse, AppError> {
    let submodule = state
        .content_service
        .update_submodule(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(SubmoduleDto::from(submodule)))
}

#[delete(
    "/api/submodules/{id}",
    wrap = "RoleGuard::require_admin()",
    wrap = "AuthMiddleware"
)]
pub async fn delete_submodule(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.content_service.delete_submodule(&id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Tema eliminado correctamente.")))
}

// Videos

#[post(
    "/api/submodules/{submodule_id}/videos",
    wrap = "RoleGuard::require_admin()",
    wrap = "AuthMiddleware"
)]
pub async fn create_video(
    state: web::Data<AppState>,
    submodule_id: web::Path<String>,
    request: web::Json<VideoRequest>,
) -> Result<HttpResponse, AppError> {
    let video = state
        .content_service
        .create_video(&submodule_id, request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(VideoDto::from(video)))
}

#[get("/api/submodules/{submodule_id}/videos")]
pub async fn list_videos(
    state: web::Data<AppState>,
    submodule_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let videos: Vec<VideoDto> = state
        .content_service
        .list_videos(&submodule_id)
        .await?
        .into_iter()
        .map(VideoDto::from)
        .collect();
    Ok(HttpResponse::Ok().json(videos))
}

#[get("/api/videos/{id}")]
pub async fn get_video(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let video = state.content_service.get_video(&id).await?;
    Ok(HttpResponse::Ok().json(VideoDto::from(video)))
}

#[put(
    "/api/videos/{id}",
    wrap = "RoleGuard::require_admin()",
    wrap = "AuthMiddleware"
)]
pub async fn update_video(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<VideoRequest>,
) -> Result<HttpResponse, AppError> {
    let video = state
        .content_service
        .update_video(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(VideoDto::from(video)))
}

#[delete(
    "/api/videos/{id}",
    wrap = "RoleGuard::require_admin()",
    wrap = "AuthMiddleware"
)]
pub async fn delete_video(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.content_service.delete_video(&id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Video eliminado correctamente.")))
}
