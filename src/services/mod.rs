pub mod auth_service;
pub mod content_service;
pub mod db_helpers;
pub mod question_service;
pub mod statistics_service;

pub use auth_service::AuthService;
pub use content_service::ContentService;
pub use question_service::QuestionService;
pub use statistics_service::StatisticsService;
