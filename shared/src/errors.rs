//! Error types shared across the marina application

use thiserror::Error;

/// Authentication error types
///
/// Every variant maps to a 401 at the HTTP boundary; the distinction only
/// matters for logging and tests. `InvalidCredentials` is deliberately
/// generic so the response cannot reveal whether an email is registered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Missing token")]
    MissingToken,
}
