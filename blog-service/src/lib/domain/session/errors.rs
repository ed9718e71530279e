use thiserror::Error;

use crate::user::errors::ValidationError;

/// Sign-in failures.
///
/// `UserNotFound` and `InvalidCredentials` stay distinct here so they can be
/// logged apart; the HTTP layer reports both with the same message.
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("No user registered with this email")]
    UserNotFound,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] auth::JwtError),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<auth::AuthenticationError> for SessionError {
    fn from(err: auth::AuthenticationError) -> Self {
        match err {
            auth::AuthenticationError::InvalidCredentials => SessionError::InvalidCredentials,
            auth::AuthenticationError::PasswordError(e) => SessionError::Password(e),
            auth::AuthenticationError::JwtError(e) => SessionError::Token(e),
        }
    }
}
