pub mod access;
pub mod claims;
pub mod jwt;
pub mod middleware;
pub mod password;

pub use access::{AccessPolicy, RoleResolver, StoreRoleResolver};
pub use claims::Claims;
pub use jwt::{InvalidToken, TokenService};
pub use middleware::{AuthMiddleware, AuthenticatedUser, RoleGuard};
pub use password::PasswordHasher;
