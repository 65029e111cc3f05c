use rand::RngExt;
use uuid::Uuid;

use crate::domain::repository::{TokenRepository, UserRepository};
use crate::domain::types::User;
use crate::error::ApiError;
use crate::usecase::password::verify_password;

const TOKEN_KEY_LEN: usize = 40;

/// Charset for opaque bearer token keys (lowercase hex).
const TOKEN_CHARSET: &[u8] = b"0123456789abcdef";

pub fn generate_token_key() -> String {
    let mut rng = rand::rng();
    (0..TOKEN_KEY_LEN)
        .map(|_| TOKEN_CHARSET[rng.random_range(0..TOKEN_CHARSET.len())] as char)
        .collect()
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct LoginOutput {
    pub token: String,
    pub user: User,
}

pub struct LoginUseCase<U: UserRepository, T: TokenRepository> {
    pub users: U,
    pub tokens: T,
}

impl<U: UserRepository, T: TokenRepository> LoginUseCase<U, T> {
    /// Unknown email and wrong password produce the identical error.
    pub async fn execute(&self, input: LoginInput) -> Result<LoginOutput, ApiError> {
        let user = self
            .users
            .find_by_email(&input.email)
            .await?
            .ok_or(ApiError::InvalidCredentials)?;
        let stored = self
            .users
            .password_hash_by_email(&input.email)
            .await?
            .ok_or(ApiError::InvalidCredentials)?;
        if !verify_password(&input.password, &stored) {
            return Err(ApiError::InvalidCredentials);
        }

        let token = self
            .tokens
            .fetch_or_create(user.id, &generate_token_key())
            .await?;
        Ok(LoginOutput { token, user })
    }
}

// ── Logout ───────────────────────────────────────────────────────────────────

pub struct LogoutUseCase<T: TokenRepository> {
    pub tokens: T,
}

impl<T: TokenRepository> LogoutUseCase<T> {
    /// Revoking an already-revoked session is a no-op, not an error.
    pub async fn execute(&self, user_id: Uuid) -> Result<(), ApiError> {
        self.tokens.revoke(user_id).await?;
        Ok(())
    }
}
