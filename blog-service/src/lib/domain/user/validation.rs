//! Field checks for submitted user data.
//!
//! Each mode has its own function; they share the `require_*` helpers.
//! Checks run in a fixed order and stop at the first failure.

use crate::user::errors::ValidationError;
use crate::user::models::EmailAddress;
use crate::user::models::UserDraft;

/// Operation a draft is validated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Registration: every field is mandatory.
    Create,
    /// Profile edit: names and email mandatory, password optional.
    Update,
    /// Sign-in: email and password only.
    Login,
}

/// Validate `draft` for the given operation.
///
/// Expects an already prepared (trimmed) draft.
pub fn validate(draft: &UserDraft, mode: ValidationMode) -> Result<(), ValidationError> {
    match mode {
        ValidationMode::Create => validate_create(draft),
        ValidationMode::Update => validate_update(draft),
        ValidationMode::Login => validate_login(draft),
    }
}

fn validate_create(draft: &UserDraft) -> Result<(), ValidationError> {
    require_names(draft)?;
    require_email(&draft.email)?;
    require_password(draft.password.as_deref())
}

fn validate_update(draft: &UserDraft) -> Result<(), ValidationError> {
    require_names(draft)?;
    require_email(&draft.email)
}

fn validate_login(draft: &UserDraft) -> Result<(), ValidationError> {
    require_email(&draft.email)?;
    require_password(draft.password.as_deref())
}

fn require_names(draft: &UserDraft) -> Result<(), ValidationError> {
    require(&draft.firstname, ValidationError::FirstnameRequired)?;
    require(&draft.lastname, ValidationError::LastnameRequired)
}

fn require_email(email: &str) -> Result<(), ValidationError> {
    require(email, ValidationError::EmailRequired)?;
    EmailAddress::new(email.to_string())?;
    Ok(())
}

fn require_password(password: Option<&str>) -> Result<(), ValidationError> {
    require(password.unwrap_or_default(), ValidationError::PasswordRequired)
}

fn require(value: &str, missing: ValidationError) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(missing)
    } else {
        Ok(())
    }
}
