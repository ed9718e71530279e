use thiserror::Error;

use crate::domain::access::AccessError;
use crate::user::models::UserId;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid user id: {0}")]
    InvalidFormat(String),
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Field-level validation failure of submitted user data.
///
/// Messages are the ones reported to clients.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Firstname Required")]
    FirstnameRequired,

    #[error("Lastname Required")]
    LastnameRequired,

    #[error("Email Required")]
    EmailRequired,

    #[error("Email Invalid")]
    EmailInvalid,

    #[error("Password Required")]
    PasswordRequired,
}

impl From<EmailError> for ValidationError {
    fn from(_: EmailError) -> Self {
        ValidationError::EmailInvalid
    }
}

/// Top-level error for all user-related operations
#[derive(Debug, Clone, Error)]
pub enum UserError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid user ID: {0}")]
    InvalidUserId(#[from] UserIdError),

    #[error("{0}")]
    Unauthorized(#[from] AccessError),

    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    // Domain-level errors
    #[error("User Not Found")]
    NotFound(UserId),

    #[error("Email Already Taken")]
    EmailAlreadyExists(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<EmailError> for UserError {
    fn from(err: EmailError) -> Self {
        UserError::Validation(err.into())
    }
}
