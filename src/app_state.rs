use std::sync::Arc;

use crate::{
    auth::{PasswordHasher, RoleResolver, StoreRoleResolver, TokenService},
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        ModuleRepository, MongoModuleRepository, MongoQuestionRepository, MongoRoleRepository,
        MongoStatisticsRepository, MongoSubmoduleRepository, MongoUserRepository,
        MongoVideoRepository, QuestionRepository, RoleRepository, StatisticsRepository,
        SubmoduleRepository, UserRepository, VideoRepository,
    },
    services::{AuthService, ContentService, QuestionService, StatisticsService},
};

/// Storage backends the services are built on.
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub roles: Arc<dyn RoleRepository>,
    pub questions: Arc<dyn QuestionRepository>,
    pub statistics: Arc<dyn StatisticsRepository>,
    pub modules: Arc<dyn ModuleRepository>,
    pub submodules: Arc<dyn SubmoduleRepository>,
    pub videos: Arc<dyn VideoRepository>,
}

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub question_service: Arc<QuestionService>,
    pub statistics_service: Arc<StatisticsService>,
    pub content_service: Arc<ContentService>,
    pub token_service: Arc<TokenService>,
    pub role_resolver: Arc<dyn RoleResolver>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Connects to MongoDB, ensures indexes and seeds the default roles.
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let users = Arc::new(MongoUserRepository::new(&db));
        users.ensure_indexes().await?;

        let roles = Arc::new(MongoRoleRepository::new(&db));
        roles.ensure_indexes().await?;

        let state = Self::from_repositories(
            config,
            Repositories {
                users,
                roles,
                questions: Arc::new(MongoQuestionRepository::new(&db)),
                statistics: Arc::new(MongoStatisticsRepository::new(&db)),
                modules: Arc::new(MongoModuleRepository::new(&db)),
                submodules: Arc::new(MongoSubmoduleRepository::new(&db)),
                videos: Arc::new(MongoVideoRepository::new(&db)),
            },
        );

        state.auth_service.seed_default_roles().await?;

        Ok(state)
    }

    pub fn from_repositories(config: Config, repos: Repositories) -> Self {
        let token_service = Arc::new(TokenService::new(&config.jwt_secret));
        let hasher = PasswordHasher::new(config.bcrypt_cost);

        let role_resolver: Arc<dyn RoleResolver> = Arc::new(StoreRoleResolver::new(
            Arc::clone(&repos.users),
            Arc::clone(&repos.roles),
        ));

        let auth_service = Arc::new(AuthService::new(
            repos.users,
            repos.roles,
            hasher,
            Arc::clone(&token_service),
        ));

        Self {
            auth_service,
            question_service: Arc::new(QuestionService::new(repos.questions)),
            statistics_service: Arc::new(StatisticsService::new(repos.statistics)),
            content_service: Arc::new(ContentService::new(
                repos.modules,
                repos.submodules,
                repos.videos,
            )),
            token_service,
            role_resolver,
            config: Arc::new(config),
        }
    }

    /// Replaces the resolver consulted by the role guards.
    pub fn with_role_resolver(mut self, resolver: Arc<dyn RoleResolver>) -> Self {
        self.role_resolver = resolver;
        self
    }
}
