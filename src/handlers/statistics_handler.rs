use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{AuthMiddleware, AuthenticatedUser, RoleGuard},
    errors::AppError,
    models::dto::{
        request::{SaveStatisticsRequest, UpdateStatisticsRequest},
        response::{MessageResponse, StatisticsDto, StatisticsUpdatedResponse},
    },
};

#[get("/obtener-estadisticas/{user_id}", wrap = "AuthMiddleware")]
pub async fn get_statistics(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let statistics: Vec<StatisticsDto> = state
        .statistics_service
        .list_for_user(&user_id)
        .await?
        .into_iter()
        .map(StatisticsDto::from)
        .collect();
    Ok(HttpResponse::Ok().json(statistics))
}

#[post(
    "/guardar-sesion-historial",
    wrap = "RoleGuard::deny_admin()",
    wrap = "AuthMiddleware"
)]
pub async fn save_statistics(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
    request: web::Json<SaveStatisticsRequest>,
) -> Result<HttpResponse, AppError> {
    state
        .statistics_service
        .save(&auth.0.user_id, request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(MessageResponse::new("Estadísticas guardadas exitosamente")))
}

#[put(
    "/actualizar-estadisticas/{user_id}",
    wrap = "RoleGuard::deny_admin()",
    wrap = "AuthMiddleware"
)]
pub async fn update_statistics(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
    request: web::Json<UpdateStatisticsRequest>,
) -> Result<HttpResponse, AppError> {
    let statistics = state
        .statistics_service
        .update_for_user(&user_id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(StatisticsUpdatedResponse {
        message: "Estadísticas actualizadas exitosamente".to_string(),
        statistics: statistics.into(),
    }))
}

#[delete(
    "/eliminar-estadisticas/{user_id}",
    wrap = "RoleGuard::deny_admin()",
    wrap = "AuthMiddleware"
)]
pub async fn delete_statistics(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.statistics_service.delete_for_user(&user_id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Estadísticas eliminadas exitosamente")))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use mongodb::bson::oid::ObjectId;

    use crate::{
        app_state::Repositories,
        auth::access::{MockRoleResolver, RoleNames},
        config::Config,
        repositories::MockStatisticsRepository,
        test_utils::fixtures::unused_repositories,
    };

    fn state(statistics: MockStatisticsRepository, role: &'static str) -> AppState {
        let mut resolver = MockRoleResolver::new();
        resolver
            .expect_resolve_roles()
            .returning(move |_| Ok(RoleNames::from([role.to_string()])));

        AppState::from_repositories(
            Config::test_config(),
            Repositories {
                statistics: Arc::new(statistics),
                ..unused_repositories()
            },
        )
        .with_role_resolver(Arc::new(resolver))
    }

    #[actix_web::test]
    async fn test_save_uses_token_identity() {
        let caller = ObjectId::new();
        let mut repo = MockStatisticsRepository::new();
        repo.expect_create()
            .withf(move |s| s.user_id == caller)
            .times(1)
            .returning(Ok);

        let state = state(repo, "user");
        let token = state.token_service.issue(&caller.to_hex(), "a@x.com").unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(save_statistics),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/guardar-sesion-historial")
            .insert_header(("Authorization", token))
            .set_json(serde_json::json!({
                "userId": ObjectId::new().to_hex(),
                "correctAnswers": 8,
                "incorrectAnswers": 2
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Estadísticas guardadas exitosamente");
    }

    #[actix_web::test]
    async fn test_admin_cannot_save_sessions() {
        let mut repo = MockStatisticsRepository::new();
        repo.expect_create().never();

        let state = state(repo, "admin");
        let token = state
            .token_service
            .issue(&ObjectId::new().to_hex(), "root@x.com")
            .unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(save_statistics),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/guardar-sesion-historial")
            .insert_header(("Authorization", token))
            .set_json(serde_json::json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Acceso denegado para el admin");
    }

    #[actix_web::test]
    async fn test_missing_statistics_is_not_found() {
        let mut repo = MockStatisticsRepository::new();
        repo.expect_find_by_user().returning(|_| Ok(vec![]));

        let state = state(repo, "user");
        let user_id = ObjectId::new().to_hex();
        let token = state.token_service.issue(&user_id, "a@x.com").unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(get_statistics),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/obtener-estadisticas/{}", user_id))
            .insert_header(("Authorization", token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
