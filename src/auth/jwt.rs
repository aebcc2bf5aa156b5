use std::time::Duration;

use axum::extract::FromRef;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use time::{Duration as TimeDuration, OffsetDateTime};
use tracing::debug;

use crate::{config::JwtConfig, state::AppState};

/// Bearer-token claims. `sub` is the user id rendered as a string. `exp` is
/// only present when a TTL is configured, so default tokens never expire.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<usize>,
    pub iss: String,
    pub aud: String,
}

/// JWT signing and verification keys plus the claim configuration.
#[derive(Clone)]
pub struct JwtKeys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
    pub issuer: String,
    pub audience: String,
    pub ttl: Option<Duration>,
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        let JwtConfig {
            secret,
            issuer,
            audience,
            ttl_minutes,
        } = state.config.jwt.clone();
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            issuer,
            audience,
            ttl: ttl_minutes.map(|m| Duration::from_secs((m as u64) * 60)),
        }
    }
}

impl JwtKeys {
    pub fn sign(&self, user_id: i64) -> anyhow::Result<String> {
        let now = OffsetDateTime::now_utc();
        let exp = self.ttl.map(|ttl| {
            (now + TimeDuration::seconds(ttl.as_secs() as i64)).unix_timestamp() as usize
        });
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.unix_timestamp() as usize,
            exp,
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
        };
        let token = encode(&Header::default(), &claims, &self.encoding)?;
        debug!(user_id, "jwt signed");
        Ok(token)
    }

    pub fn verify(&self, token: &str) -> anyhow::Result<Claims> {
        let mut validation = Validation::default();
        validation.set_audience(std::slice::from_ref(&self.audience));
        validation.set_issuer(std::slice::from_ref(&self.issuer));
        // `exp` is optional on our tokens; when a token carries one it is
        // still enforced.
        validation.required_spec_claims.remove("exp");
        let data = decode::<Claims>(token, &self.decoding, &validation)?;
        debug!(sub = %data.claims.sub, "jwt verified");
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_keys() -> JwtKeys {
        JwtKeys::from_ref(&AppState::fake())
    }

    fn keys_with_secret(secret: &str) -> JwtKeys {
        JwtKeys {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            issuer: "test-issuer".into(),
            audience: "test-aud".into(),
            ttl: None,
        }
    }

    #[tokio::test]
    async fn sign_and_verify_roundtrip() {
        let keys = make_keys();
        let token = keys.sign(42).expect("sign");
        let claims = keys.verify(&token).expect("verify");
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.iss, "test-issuer");
        assert_eq!(claims.aud, "test-aud");
    }

    #[tokio::test]
    async fn default_token_has_no_expiry() {
        let keys = make_keys();
        let token = keys.sign(1).expect("sign");
        let claims = keys.verify(&token).expect("verify");
        assert!(claims.exp.is_none());
    }

    #[tokio::test]
    async fn token_expires_when_ttl_configured() {
        let mut keys = make_keys();
        keys.ttl = Some(Duration::from_secs(600));
        let token = keys.sign(1).expect("sign");
        let claims = keys.verify(&token).expect("verify");
        let exp = claims.exp.expect("exp claim present");
        assert!(exp > claims.iat);
    }

    #[tokio::test]
    async fn verify_rejects_expired_token() {
        let keys = make_keys();
        let past = OffsetDateTime::now_utc() - TimeDuration::hours(2);
        let claims = Claims {
            sub: "1".into(),
            iat: past.unix_timestamp() as usize,
            exp: Some((past + TimeDuration::minutes(10)).unix_timestamp() as usize),
            iss: "test-issuer".into(),
            aud: "test-aud".into(),
        };
        let token = encode(&Header::default(), &claims, &keys.encoding).expect("encode");
        assert!(keys.verify(&token).is_err());
    }

    #[test]
    fn verify_rejects_wrong_secret() {
        let token = keys_with_secret("secret-a").sign(7).expect("sign");
        assert!(keys_with_secret("secret-b").verify(&token).is_err());
    }

    #[tokio::test]
    async fn verify_rejects_wrong_audience() {
        let keys = make_keys();
        let mut other = keys_with_secret("test-secret");
        other.audience = "someone-else".into();
        let token = other.sign(7).expect("sign");
        assert!(keys.verify(&token).is_err());
    }

    #[tokio::test]
    async fn verify_rejects_garbage() {
        let keys = make_keys();
        assert!(keys.verify("not-a-jwt").is_err());
    }
}
