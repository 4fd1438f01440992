use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::{
    auth::claims::Claims,
    errors::{AppError, AppResult},
};

/// Any failed verification. Bad signature, malformed payload and expiry are
/// deliberately indistinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid token")]
pub struct InvalidToken;

impl From<InvalidToken> for AppError {
    fn from(_: InvalidToken) -> Self {
        AppError::unauthorized()
    }
}

#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    pub fn new(secret: &SecretString) -> Self {
        let secret_bytes = secret.expose_secret().as_bytes();

        // Expiry is checked by `Claims::is_expired_at` so the boundary has no leeway.
        let mut validation = Validation::default();
        validation.validate_exp = false;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret_bytes),
            decoding_key: DecodingKey::from_secret(secret_bytes),
            validation,
        }
    }

    pub fn issue(&self, user_id: &str, email: &str) -> AppResult<String> {
        self.issue_at(user_id, email, Utc::now().timestamp())
    }

    pub fn issue_at(&self, user_id: &str, email: &str, issued_at: i64) -> AppResult<String> {
        let claims = Claims::new(user_id, email, issued_at);

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("Failed to create JWT: {}", e)))
    }

    pub fn verify(&self, token: &str) -> Result<Claims, InvalidToken> {
        self.verify_at(token, Utc::now().timestamp())
    }

    pub fn verify_at(&self, token: &str, now: i64) -> Result<Claims, InvalidToken> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                log::debug!("Token rejected: {}", e);
                InvalidToken
            })?;

        if claims.is_expired_at(now) {
            log::debug!("Token rejected: expired for user {}", claims.user_id);
            return Err(InvalidToken);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{auth::claims::TOKEN_TTL_SECS, config::Config};

    fn service() -> TokenService {
        TokenService::new(&Config::test_config().jwt_secret)
    }

    #[test]
    fn test_issue_and_verify() {
        let tokens = service();
        let token = tokens.issue("64b7f0c2a1b2c3d4e5f60718", "a@x.com").unwrap();

        assert!(!token.is_empty());

        let claims = tokens.verify(&token).unwrap();
        assert_eq!(claims.user_id, "64b7f0c2a1b2c3d4e5f60718");
        assert_eq!(claims.email, "a@x.com");
    }

    #[test]
    fn test_expired_exactly_at_exp() {
        let tokens = service();
        let issued_at = 1_700_000_000;
        let token = tokens.issue_at("id", "a@x.com", issued_at).unwrap();

        assert!(tokens.verify_at(&token, issued_at + TOKEN_TTL_SECS - 1).is_ok());
        assert_eq!(
            tokens.verify_at(&token, issued_at + TOKEN_TTL_SECS),
            Err(InvalidToken)
        );
        assert_eq!(
            tokens.verify_at(&token, issued_at + TOKEN_TTL_SECS + 60),
            Err(InvalidToken)
        );
    }

    #[test]
    fn test_old_token_rejected_by_wall_clock() {
        let tokens = service();
        let token = tokens
            .issue_at("id", "a@x.com", Utc::now().timestamp() - TOKEN_TTL_SECS)
            .unwrap();

        assert_eq!(tokens.verify(&token), Err(InvalidToken));
    }

    #[test]
    fn test_garbage_and_unsigned_tokens() {
        let tokens = service();

        for candidate in ["garbage", "", "invalid.token.here", "a.b"] {
            assert_eq!(tokens.verify(candidate), Err(InvalidToken));
        }
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let other = TokenService::new(&SecretString::from("another_secret".to_string()));
        let token = other.issue("id", "a@x.com").unwrap();

        assert_eq!(service().verify(&token), Err(InvalidToken));
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let tokens = service();
        let token = tokens.issue("id", "a@x.com").unwrap();
        let forged = tokens.issue("other-id", "b@x.com").unwrap();

        // header.payload.signature with the payload swapped in
        let parts: Vec<&str> = token.split('.').collect();
        let forged_parts: Vec<&str> = forged.split('.').collect();
        let tampered = format!("{}.{}.{}", parts[0], forged_parts[1], parts[2]);

        assert_eq!(tokens.verify(&tampered), Err(InvalidToken));
    }

    #[test]
    fn test_invalid_token_maps_to_uniform_unauthorized() {
        let err: AppError = InvalidToken.into();

        assert_eq!(err.client_message(), crate::errors::UNAUTHORIZED_MESSAGE);
    }
}
