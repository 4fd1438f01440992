use serde::{Deserialize, Serialize};

/// Token lifetime, fixed at three hours.
pub const TOKEN_TTL_SECS: i64 = 3 * 60 * 60;

/// Identity carried by an access token. Roles are deliberately absent: they
/// are resolved from the store on every gated request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub user_id: String,
    pub email: String,
    pub iat: i64, // Issued at (UTC seconds)
    pub exp: i64, // Expiration (UTC seconds)
}

impl Claims {
    pub fn new(user_id: &str, email: &str, issued_at: i64) -> Self {
        Self {
            user_id: user_id.to_string(),
            email: email.to_string(),
            iat: issued_at,
            exp: issued_at + TOKEN_TTL_SECS,
        }
    }

    /// Valid strictly before `exp`.
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.exp
    }
}
