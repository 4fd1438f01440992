pub mod content_repository;
pub mod question_repository;
pub mod role_repository;
pub mod statistics_repository;
pub mod user_repository;

pub use content_repository::{
    ModuleRepository, MongoModuleRepository, MongoSubmoduleRepository, MongoVideoRepository,
    SubmoduleRepository, VideoRepository,
};
pub use question_repository::{MongoQuestionRepository, QuestionRepository};
pub use role_repository::{MongoRoleRepository, RoleRepository};
pub use statistics_repository::{MongoStatisticsRepository, StatisticsRepository};
pub use user_repository::{MongoUserRepository, UserRepository};

#[cfg(test)]
pub use content_repository::{MockModuleRepository, MockSubmoduleRepository, MockVideoRepository};
#[cfg(test)]
pub use question_repository::MockQuestionRepository;
#[cfg(test)]
pub use role_repository::MockRoleRepository;
#[cfg(test)]
pub use statistics_repository::MockStatisticsRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
