use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::warn;

use crate::{
    auth::{jwt::JwtKeys, repo::User},
    error::ApiError,
    state::AppState,
};

/// Resolves the `Authorization: Bearer` token to a live user row. Rejects
/// with 401 when the header is missing, the token fails verification, or
/// the subject no longer exists.
pub struct CurrentUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| ApiError::unauthorized("Missing Authorization header"))?;

        let token = auth
            .strip_prefix("Bearer ")
            .or_else(|| auth.strip_prefix("bearer "))
            .ok_or_else(|| ApiError::unauthorized("Invalid Authorization header"))?;

        let keys = JwtKeys::from_ref(state);
        let claims = keys.verify(token).map_err(|_| {
            warn!("invalid or expired token");
            ApiError::unauthorized("Invalid or expired token")
        })?;

        let user_id: i64 = claims
            .sub
            .parse()
            .map_err(|_| ApiError::unauthorized("Invalid or expired token"))?;

        let user = User::find_by_id(&state.db, user_id).await?.ok_or_else(|| {
            warn!(user_id, "token subject no longer exists");
            ApiError::unauthorized("Invalid or expired token")
        })?;

        Ok(CurrentUser(user))
    }
}
