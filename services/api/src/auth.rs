//! Bearer-token authentication extractor.

use axum::extract::FromRequestParts;
use http::request::Parts;

use crate::domain::repository::{TokenRepository, UserRepository};
use crate::domain::types::User;
use crate::error::ApiError;
use crate::state::AppState;

/// The authenticated caller, resolved from an `Authorization: Token <key>`
/// header against the token table. Rejects with 401 when the header is
/// missing, malformed, or names an unknown token.
#[derive(Debug, Clone)]
pub struct Identity(pub User);

const TOKEN_SCHEME: &str = "Token ";

impl FromRequestParts<AppState> for Identity {
    type Rejection = ApiError;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // Extract header values synchronously, then do the DB lookups in a
    // 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let key = parts
            .headers
            .get(http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix(TOKEN_SCHEME))
            .map(str::to_owned);
        let state = state.clone();

        async move {
            let key = key.ok_or(ApiError::Unauthorized)?;
            let user_id = state
                .token_repo()
                .find_user_id(&key)
                .await?
                .ok_or(ApiError::Unauthorized)?;
            let user = state
                .user_repo()
                .find_by_id(user_id)
                .await?
                .ok_or(ApiError::Unauthorized)?;
            Ok(Self(user))
        }
    }
}
