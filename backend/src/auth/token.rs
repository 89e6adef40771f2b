//! Session token issuance and verification
//!
//! Tokens are signed, self-contained JWTs carrying the authenticated
//! user's identity and an absolute expiry. The signing secret is injected
//! once at construction; keys are pre-computed and shared via `Arc`.

use anyhow::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};
use marina_shared::errors::AuthError;
use marina_shared::types::UserProfile;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Session token claims
///
/// Carries the user's identity minus the password hash, which never
/// enters a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    pub name: String,
    pub email: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Pre-computed signing keys, cheap to clone across handlers
#[derive(Clone)]
struct TokenKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

/// Stateless token service
///
/// Construct once at startup and store in AppState; verification holds no
/// per-request state and is reentrant.
#[derive(Clone)]
pub struct TokenService {
    keys: TokenKeys,
    ttl_secs: i64,
    validation: Validation,
}

impl TokenService {
    /// Create a new token service from an explicit secret and TTL
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        let mut validation = Validation::default();
        // No clock leeway: a token past its expiry is invalid immediately
        validation.leeway = 0;

        Self {
            keys: TokenKeys {
                encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
                decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
            },
            ttl_secs,
            validation,
        }
    }

    /// Issue a session token for an authenticated user
    #[inline]
    pub fn issue(&self, user: &UserProfile) -> Result<String> {
        self.issue_with_ttl(user, self.ttl_secs)
    }

    /// Issue a token with an explicit TTL in seconds
    pub fn issue_with_ttl(&self, user: &UserProfile, ttl_secs: i64) -> Result<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(ttl_secs);

        let claims = Claims {
            sub: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::default(), &claims, &self.keys.encoding)
            .map_err(|e| anyhow::anyhow!("Failed to sign session token: {}", e))
    }

    /// Verify a token and return its claims
    ///
    /// Accepts an optional case-insensitive `"bearer "` prefix. Any
    /// verification failure (bad signature, malformed structure, elapsed
    /// expiry) yields an error; this never falls open.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let token = strip_bearer_prefix(token);
        if token.is_empty() {
            return Err(AuthError::MissingToken);
        }

        decode::<Claims>(token, &self.keys.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            })
    }

    /// Token lifetime in seconds (drives the cookie max-age)
    #[inline]
    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }
}

/// Strip an optional case-insensitive "bearer " prefix
///
/// Byte-wise comparison: an ASCII match guarantees the split point is a
/// character boundary even for arbitrary cookie contents.
fn strip_bearer_prefix(token: &str) -> &str {
    let token = token.trim();
    let bytes = token.as_bytes();
    if bytes.len() >= 7 && bytes[..7].eq_ignore_ascii_case(b"bearer ") {
        token[7..].trim_start()
    } else {
        token
    }
}
