use thiserror::Error;

use crate::domain::access::AccessError;
use crate::domain::post::models::PostId;

/// Error type for PostId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PostIdError {
    #[error("Invalid post id: {0}")]
    InvalidFormat(String),
}

/// Field-level validation failure of a submitted post.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PostValidationError {
    #[error("Required Title")]
    TitleRequired,

    #[error("Required Content")]
    ContentRequired,

    #[error("Required Author")]
    AuthorRequired,
}

/// Top-level error type for all post-related operations
#[derive(Debug, Clone, Error)]
pub enum PostError {
    #[error("{0}")]
    Validation(#[from] PostValidationError),

    #[error("Invalid post ID: {0}")]
    InvalidPostId(#[from] PostIdError),

    #[error("{0}")]
    Unauthorized(#[from] AccessError),

    #[error("Post Not Found")]
    NotFound(PostId),

    #[error("Title Already Taken")]
    TitleAlreadyExists(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
