use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, RegisterRequest, RegisteredUser, TokenResponse},
        jwt::JwtKeys,
        password::{hash_password, verify_password},
        repo::User,
    },
    error::ApiError,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db| matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisteredUser>), ApiError> {
    if !is_valid_email(&payload.email) {
        warn!("invalid email");
        return Err(ApiError::validation("Invalid email"));
    }

    // Friendly pre-check; the unique index still decides concurrent races.
    if User::find_by_email(&state.db, &payload.email).await?.is_some() {
        warn!(email = %payload.email, "email already registered");
        return Err(ApiError::conflict("Email already registered"));
    }

    let hash = hash_password(&payload.password)?;

    let user = match User::create(&state.db, &payload.email, &hash).await {
        Ok(u) => u,
        Err(e) if is_unique_violation(&e) => {
            warn!(email = %payload.email, "email already registered");
            return Err(ApiError::conflict("Email already registered"));
        }
        Err(e) => return Err(ApiError::Internal(e.into())),
    };

    info!(user_id = user.id, email = %user.email, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(RegisteredUser {
            id: user.id,
            email: user.email,
            created_at: user.created_at,
        }),
    ))
}

/// Look up the user and check the password. An unknown email and a wrong
/// password are indistinguishable to the caller.
async fn authenticate(
    db: &sqlx::PgPool,
    email: &str,
    password: &str,
) -> anyhow::Result<Option<User>> {
    let Some(user) = User::find_by_email(db, email).await? else {
        return Ok(None);
    };
    if !verify_password(password, &user.password_hash)? {
        return Ok(None);
    }
    Ok(Some(user))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let user = authenticate(&state.db, &payload.email, &payload.password)
        .await?
        .ok_or_else(|| {
            warn!("login failed");
            ApiError::unauthorized("Invalid email or password")
        })?;

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(user.id)?;

    info!(user_id = user.id, "user logged in");
    Ok(Json(TokenResponse::bearer(token)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_regex_accepts_plausible_addresses() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("USER@EXAMPLE.COM"));
        assert!(is_valid_email("a.b+c@mail.co.kr"));
    }

    #[test]
    fn email_regex_rejects_garbage() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("spaces in@example.com"));
        assert!(!is_valid_email("user@nodot"));
    }
}
