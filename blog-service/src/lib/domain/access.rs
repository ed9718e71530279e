//! Ownership checks applied by every mutating operation.
//!
//! A validated token only proves who the caller is. Whether that caller may
//! touch a given record is decided here, by comparing the token's subject
//! with the record's owner.

use thiserror::Error;

use crate::user::models::UserId;

/// Caller is authenticated but not allowed to act.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum AccessError {
    #[error("Unauthorized Access")]
    Anonymous,

    #[error("Unauthorized")]
    NotOwner { subject: UserId, owner: UserId },
}

/// Reject the identity-less subject a claim-free token decodes to.
pub fn require_identity(subject: UserId) -> Result<UserId, AccessError> {
    if subject.is_assigned() {
        Ok(subject)
    } else {
        Err(AccessError::Anonymous)
    }
}

/// Require `subject` to be the recorded `owner`.
pub fn ensure_owner(subject: UserId, owner: UserId) -> Result<(), AccessError> {
    if subject == owner {
        Ok(())
    } else {
        tracing::warn!(
            subject = %subject,
            owner = %owner,
            "Ownership check failed"
        );
        Err(AccessError::NotOwner { subject, owner })
    }
}
