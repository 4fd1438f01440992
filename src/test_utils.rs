#[cfg(test)]
pub mod fixtures {
    use std::sync::Arc;

    use crate::{
        app_state::{AppState, Repositories},
        auth::access::MockRoleResolver,
        config::Config,
        repositories::{
            MockModuleRepository, MockQuestionRepository, MockRoleRepository,
            MockStatisticsRepository, MockSubmoduleRepository, MockUserRepository,
            MockVideoRepository,
        },
    };

    /// Repositories with no expectations set. Any call fails the test.
    pub fn unused_repositories() -> Repositories {
        Repositories {
            users: Arc::new(MockUserRepository::new()),
            roles: Arc::new(MockRoleRepository::new()),
            questions: Arc::new(MockQuestionRepository::new()),
            statistics: Arc::new(MockStatisticsRepository::new()),
            modules: Arc::new(MockModuleRepository::new()),
            submodules: Arc::new(MockSubmoduleRepository::new()),
            videos: Arc::new(MockVideoRepository::new()),
        }
    }

    /// State whose role guards consult `resolver`.
    pub fn state_with_resolver(resolver: MockRoleResolver) -> AppState {
        AppState::from_repositories(Config::test_config(), unused_repositories())
            .with_role_resolver(Arc::new(resolver))
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}
