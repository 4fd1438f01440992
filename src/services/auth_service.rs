use std::sync::Arc;

use tokio::sync::OnceCell;
use validator::Validate;

use crate::{
    auth::{Claims, PasswordHasher, TokenService},
    errors::{AppError, AppResult},
    models::{
        domain::{
            role::{DEFAULT_ROLES, USER_ROLE},
            Role, User,
        },
        dto::{
            request::{LoginRequest, RegisterRequest},
            response::ProfileDto,
        },
    },
    repositories::{RoleRepository, UserRepository},
    services::db_helpers::parse_object_id,
};

pub const EMAIL_TAKEN_MESSAGE: &str = "El email ya está registrado";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Credenciales de inicio de sesión inválidas";
pub const USER_NOT_FOUND_MESSAGE: &str = "Usuario no encontrado";

// Verified against when the email is unknown so both failures cost one bcrypt run.
const DUMMY_PASSWORD: &str = "quiz-learn-dummy-password";

/// Registration, login and profile lookup.
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    roles: Arc<dyn RoleRepository>,
    hasher: PasswordHasher,
    tokens: Arc<TokenService>,
    dummy_hash: OnceCell<String>,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        roles: Arc<dyn RoleRepository>,
        hasher: PasswordHasher,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            users,
            roles,
            hasher,
            tokens,
            dummy_hash: OnceCell::new(),
        }
    }

    /// Creates any default role that is missing. Safe to run on every start.
    pub async fn seed_default_roles(&self) -> AppResult<()> {
        for name in DEFAULT_ROLES {
            if self.roles.find_by_name(name).await?.is_some() {
                continue;
            }

            match self.roles.create(Role::new(name)).await {
                Ok(_) => log::info!("Created role '{}'", name),
                // another instance seeded it first
                Err(AppError::AlreadyExists(_)) => {}
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }

    pub async fn register(&self, request: RegisterRequest) -> AppResult<User> {
        request.validate()?;

        if self.users.find_by_email(&request.email).await?.is_some() {
            return Err(AppError::AlreadyExists(EMAIL_TAKEN_MESSAGE.to_string()));
        }

        let role_ids = match &request.roles {
            Some(names) => self
                .roles
                .find_by_names(names)
                .await?
                .into_iter()
                .map(|role| role.id)
                .collect(),
            None => {
                let role = self.roles.find_by_name(USER_ROLE).await?.ok_or_else(|| {
                    AppError::InternalError(format!("Default role '{}' is not seeded", USER_ROLE))
                })?;
                vec![role.id]
            }
        };

        let password_hash = self.hasher.hash_blocking(request.password).await?;
        let user = User::new(request.nombre, &request.email, password_hash, role_ids);

        let user = self.users.create(user).await.map_err(|err| match err {
            AppError::AlreadyExists(_) => AppError::AlreadyExists(EMAIL_TAKEN_MESSAGE.to_string()),
            other => other,
        })?;

        log::info!("Registered user {}", user.id.to_hex());
        Ok(user)
    }

    /// Returns a signed token. Unknown email and wrong password fail identically.
    pub async fn login(&self, request: LoginRequest) -> AppResult<String> {
        let user = self.users.find_by_email(&request.email).await?;

        let password_hash = match &user {
            Some(user) => user.password.clone(),
            None => self.dummy_hash().await?.to_string(),
        };
        let matches = self
            .hasher
            .verify_blocking(request.password, password_hash)
            .await?;

        match user {
            Some(user) if matches => self.tokens.issue(&user.id.to_hex(), &user.email),
            _ => Err(AppError::Unauthorized(
                INVALID_CREDENTIALS_MESSAGE.to_string(),
            )),
        }
    }

    async fn dummy_hash(&self) -> AppResult<&str> {
        self.dummy_hash
            .get_or_try_init(|| self.hasher.hash_blocking(DUMMY_PASSWORD.to_string()))
            .await
            .map(String::as_str)
    }

    pub async fn profile(&self, claims: &Claims) -> AppResult<ProfileDto> {
        let id = parse_object_id(&claims.user_id, USER_NOT_FOUND_MESSAGE)?;

        let user = self
            .users
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND_MESSAGE.to_string()))?;

        let role_names = self
            .roles
            .find_by_ids(&user.roles)
            .await?
            .into_iter()
            .map(|role| role.name)
            .collect();

        Ok(ProfileDto::new(user, role_names))
    }
}
