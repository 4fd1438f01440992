use crate::errors::{AppError, AppResult};

/// Salted one-way hashing for stored credentials.
#[derive(Clone, Copy, Debug)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn hash(&self, password: &str) -> AppResult<String> {
        bcrypt::hash(password, self.cost)
            .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))
    }

    /// Comparison is constant time inside bcrypt. A stored value that is not
    /// a bcrypt hash counts as a mismatch.
    pub fn verify(&self, password: &str, hashed: &str) -> bool {
        match bcrypt::verify(password, hashed) {
            Ok(matches) => matches,
            Err(e) => {
                log::warn!("Stored password hash could not be checked: {}", e);
                false
            }
        }
    }

    /// Runs [`hash`](Self::hash) on the blocking pool.
    pub async fn hash_blocking(&self, password: String) -> AppResult<String> {
        let hasher = *self;
        tokio::task::spawn_blocking(move || hasher.hash(&password)).await?
    }

    /// Runs [`verify`](Self::verify) on the blocking pool.
    pub async fn verify_blocking(&self, password: String, hashed: String) -> AppResult<bool> {
        let hasher = *self;
        Ok(tokio::task::spawn_blocking(move || hasher.verify(&password, &hashed)).await?)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}
