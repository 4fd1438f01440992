#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use secrecy::SecretString;
use tokio::sync::RwLock;

use quiz_learn_server::{
    app_state::{AppState, Repositories},
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{
        module::ModulePatch, question::QuestionPatch, statistics::StatisticsPatch,
        submodule::SubmodulePatch, video::VideoPatch, Module, Question, Role, Statistics,
        Submodule, User, Video,
    },
    repositories::{
        ModuleRepository, QuestionRepository, RoleRepository, StatisticsRepository,
        SubmoduleRepository, UserRepository, VideoRepository,
    },
};

/// Rows kept in insertion order.
struct Table<T> {
    rows: Arc<RwLock<Vec<T>>>,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self {
            rows: Arc::new(RwLock::new(Vec::new())),
        }
    }

    async fn insert(&self, row: T) -> T {
        self.rows.write().await.push(row.clone());
        row
    }

    async fn find(&self, pred: impl Fn(&T) -> bool) -> Option<T> {
        self.rows.read().await.iter().find(|r| pred(r)).cloned()
    }

    async fn filter(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows
            .read()
            .await
            .iter()
            .filter(|r| pred(r))
            .cloned()
            .collect()
    }

    async fn modify(&self, pred: impl Fn(&T) -> bool, change: impl FnOnce(&mut T)) -> Option<T> {
        let mut rows = self.rows.write().await;
        let row = rows.iter_mut().find(|r| pred(r))?;
        change(row);
        Some(row.clone())
    }

    async fn remove(&self, pred: impl Fn(&T) -> bool) -> Option<T> {
        let mut rows = self.rows.write().await;
        let index = rows.iter().position(|r| pred(r))?;
        Some(rows.remove(index))
    }
}

pub struct InMemoryUserRepository {
    users: Table<User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Table::new(),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> AppResult<User> {
        let email = user.email.clone();
        if self.users.find(|u| u.email == email).await.is_some() {
            return Err(AppError::AlreadyExists(format!(
                "User with email '{}' already exists",
                email
            )));
        }
        Ok(self.users.insert(user).await)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        Ok(self.users.find(|u| u.id == *id).await)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.users.find(|u| u.email == email).await)
    }
}

pub struct InMemoryRoleRepository {
    roles: Table<Role>,
}

impl InMemoryRoleRepository {
    pub fn new() -> Self {
        Self {
            roles: Table::new(),
        }
    }
}

#[async_trait]
impl RoleRepository for InMemoryRoleRepository {
    async fn create(&self, role: Role) -> AppResult<Role> {
        let name = role.name.clone();
        if self.roles.find(|r| r.name == name).await.is_some() {
            return Err(AppError::AlreadyExists(format!("Role '{}' already exists", name)));
        }
        Ok(self.roles.insert(role).await)
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Role>> {
        Ok(self.roles.find(|r| r.name == name).await)
    }

    async fn find_by_names(&self, names: &[String]) -> AppResult<Vec<Role>> {
        Ok(self.roles.filter(|r| names.contains(&r.name)).await)
    }

    async fn find_by_ids(&self, ids: &[ObjectId]) -> AppResult<Vec<Role>> {
        Ok(self.roles.filter(|r| ids.contains(&r.id)).await)
    }
}

pub struct InMemoryQuestionRepository {
    questions: Table<Question>,
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn create(&self, question: Question) -> AppResult<Question> {
        Ok(self.questions.insert(question).await)
    }

    async fn find_all(&self) -> AppResult<Vec<Question>> {
        Ok(self.questions.filter(|_| true).await)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Question>> {
        Ok(self.questions.find(|q| q.id == *id).await)
    }

    async fn update(&self, id: &ObjectId, patch: QuestionPatch) -> AppResult<Option<Question>> {
        Ok(self.questions.modify(|q| q.id == *id, |q| patch.apply(q)).await)
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        Ok(self.questions.remove(|q| q.id == *id).await.is_some())
    }
}

pub struct InMemoryStatisticsRepository {
    statistics: Table<Statistics>,
}

#[async_trait]
impl StatisticsRepository for InMemoryStatisticsRepository {
    async fn create(&self, statistics: Statistics) -> AppResult<Statistics> {
        Ok(self.statistics.insert(statistics).await)
    }

    async fn find_by_user(&self, user_id: &ObjectId) -> AppResult<Vec<Statistics>> {
        Ok(self.statistics.filter(|s| s.user_id == *user_id).await)
    }

    async fn update_by_user(
        &self,
        user_id: &ObjectId,
        patch: StatisticsPatch,
    ) -> AppResult<Option<Statistics>> {
        Ok(self
            .statistics
            .modify(|s| s.user_id == *user_id, |s| patch.apply(s))
            .await)
    }

    async fn delete_by_user(&self, user_id: &ObjectId) -> AppResult<Option<Statistics>> {
        Ok(self.statistics.remove(|s| s.user_id == *user_id).await)
    }
}

pub struct InMemoryModuleRepository {
    modules: Table<Module>,
}

#[async_trait]
impl ModuleRepository for InMemoryModuleRepository {
    async fn create(&self, module: Module) -> AppResult<Module> {
        Ok(self.modules.insert(module).await)
    }

    async fn find_all(&self) -> AppResult<Vec<Module>> {
        Ok(self.modules.filter(|_| true).await)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Module>> {
        Ok(self.modules.find(|m| m.id == *id).await)
    }

    async fn update(&self, id: &ObjectId, patch: ModulePatch) -> AppResult<Option<Module>> {
        Ok(self.modules.modify(|m| m.id == *id, |m| patch.apply(m)).await)
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        Ok(self.modules.remove(|m| m.id == *id).await.is_some())
    }

    async fn push_submodule(&self, id: &ObjectId, submodule_id: &ObjectId) -> AppResult<bool> {
        let child = *submodule_id;
        Ok(self
            .modules
            .modify(|m| m.id == *id, |m| m.submodulos.push(child))
            .await
            .is_some())
    }
}

pub struct InMemorySubmoduleRepository {
    submodules: Table<Submodule>,
}

#[async_trait]
impl SubmoduleRepository for InMemorySubmoduleRepository {
    async fn create(&self, submodule: Submodule) -> AppResult<Submodule> {
        Ok(self.submodules.insert(submodule).await)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Submodule>> {
        Ok(self.submodules.find(|s| s.id == *id).await)
    }

    async fn find_by_ids(&self, ids: &[ObjectId]) -> AppResult<Vec<Submodule>> {
        Ok(self.submodules.filter(|s| ids.contains(&s.id)).await)
    }

    async fn update(&self, id: &ObjectId, patch: SubmodulePatch) -> AppResult<Option<Submodule>> {
        Ok(self.submodules.modify(|s| s.id == *id, |s| patch.apply(s)).await)
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        Ok(self.submodules.remove(|s| s.id == *id).await.is_some())
    }

    async fn push_video(&self, id: &ObjectId, video_id: &ObjectId) -> AppResult<bool> {
        let child = *video_id;
        Ok(self
            .submodules
            .modify(|s| s.id == *id, |s| s.videos.push(child))
            .await
            .is_some())
    }
}

pub struct InMemoryVideoRepository {
    videos: Table<Video>,
}

#[async_trait]
impl VideoRepository for InMemoryVideoRepository {
    async fn create(&self, video: Video) -> AppResult<Video> {
        Ok(self.videos.insert(video).await)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Video>> {
        Ok(self.videos.find(|v| v.id == *id).await)
    }

    async fn find_by_ids(&self, ids: &[ObjectId]) -> AppResult<Vec<Video>> {
        Ok(self.videos.filter(|v| ids.contains(&v.id)).await)
    }

    async fn update(&self, id: &ObjectId, patch: VideoPatch) -> AppResult<Option<Video>> {
        Ok(self.videos.modify(|v| v.id == *id, |v| patch.apply(v)).await)
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        Ok(self.videos.remove(|v| v.id == *id).await.is_some())
    }
}

pub fn test_config() -> Config {
    Config {
        mongo_conn_string: "mongodb://localhost:27017".to_string(),
        mongo_db_name: "quiz-learn-test".to_string(),
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 3000,
        jwt_secret: SecretString::from("integration_test_secret".to_string()),
        bcrypt_cost: 4,
    }
}

pub fn in_memory_repositories() -> Repositories {
    Repositories {
        users: Arc::new(InMemoryUserRepository::new()),
        roles: Arc::new(InMemoryRoleRepository::new()),
        questions: Arc::new(InMemoryQuestionRepository {
            questions: Table::new(),
        }),
        statistics: Arc::new(InMemoryStatisticsRepository {
            statistics: Table::new(),
        }),
        modules: Arc::new(InMemoryModuleRepository {
            modules: Table::new(),
        }),
        submodules: Arc::new(InMemorySubmoduleRepository {
            submodules: Table::new(),
        }),
        videos: Arc::new(InMemoryVideoRepository {
            videos: Table::new(),
        }),
    }
}

/// State backed by in-memory repositories with the default roles seeded.
pub async fn seeded_state() -> AppState {
    let state = AppState::from_repositories(test_config(), in_memory_repositories());
    state
        .auth_service
        .seed_default_roles()
        .await
        .expect("seed default roles");
    state
}

/// The full application, wired like `main` minus CORS and access logs.
macro_rules! init_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(quiz_learn_server::middleware::RequestIdMiddleware)
                .app_data(actix_web::web::Data::new($state))
                .configure(quiz_learn_server::handlers::configure),
        )
        .await
    };
}
