use std::{collections::HashSet, sync::Arc};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::{
    errors::{AppError, AppResult},
    models::domain::role::is_admin_role,
    repositories::{RoleRepository, UserRepository},
};

pub const ADMIN_REQUIRED_MESSAGE: &str = "Requiere rol de administrador!";
pub const ADMIN_DENIED_MESSAGE: &str = "Acceso denegado para el admin";

pub type RoleNames = HashSet<String>;

/// Looks up the role names currently attached to a user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoleResolver: Send + Sync {
    /// Fails with `Unauthorized` when the user no longer exists.
    async fn resolve_roles(&self, user_id: &str) -> AppResult<RoleNames>;
}

/// Resolves roles through the user and role collections: load the user,
/// then every role it references.
pub struct StoreRoleResolver {
    users: Arc<dyn UserRepository>,
    roles: Arc<dyn RoleRepository>,
}

impl StoreRoleResolver {
    pub fn new(users: Arc<dyn UserRepository>, roles: Arc<dyn RoleRepository>) -> Self {
        Self { users, roles }
    }
}

#[async_trait]
impl RoleResolver for StoreRoleResolver {
    async fn resolve_roles(&self, user_id: &str) -> AppResult<RoleNames> {
        let id = ObjectId::parse_str(user_id).map_err(|_| AppError::unauthorized())?;

        let user = self.users.find_by_id(&id).await?.ok_or_else(|| {
            log::warn!("Token subject {} no longer exists", user_id);
            AppError::unauthorized()
        })?;

        let roles = self.roles.find_by_ids(&user.roles).await?;
        Ok(roles.into_iter().map(|role| role.name).collect())
    }
}

/// Role policies enforced before a handler runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessPolicy {
    RequireAdmin,
    DenyAdmin,
}

impl AccessPolicy {
    pub fn check(&self, roles: &RoleNames) -> AppResult<()> {
        let is_admin = roles.iter().any(|name| is_admin_role(name));

        match self {
            AccessPolicy::RequireAdmin if !is_admin => {
                Err(AppError::Forbidden(ADMIN_REQUIRED_MESSAGE.to_string()))
            }
            AccessPolicy::DenyAdmin if is_admin => {
                Err(AppError::Forbidden(ADMIN_DENIED_MESSAGE.to_string()))
            }
            _ => Ok(()),
        }
    }

    /// Resolve the caller's roles, then decide. Stops at the first failure.
    pub async fn authorize(&self, resolver: &dyn RoleResolver, user_id: &str) -> AppResult<()> {
        let roles = resolver.resolve_roles(user_id).await?;
        self.check(&roles)
    }
}
