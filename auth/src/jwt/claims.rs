use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Bearer token payload.
///
/// Fixed record rather than an open claim map: the subject is carried as an
/// integer under `userId`, next to the `authorized` flag and the registered
/// `iat`/`exp` timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Always `true` for tokens issued by this library
    #[serde(default)]
    pub authorized: bool,

    /// Subject (user identifier). Absent in the payload means `0`.
    #[serde(rename = "userId", default)]
    pub user_id: i64,

    /// Issued at (Unix timestamp)
    #[serde(default)]
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for an authenticated subject.
    ///
    /// # Arguments
    /// * `user_id` - Subject identifier
    /// * `issued_at` - Issuance instant
    /// * `validity` - Lifetime of the token from `issued_at`
    ///
    /// # Returns
    /// Claims with authorized, userId, iat and exp set
    pub fn for_subject(user_id: i64, issued_at: DateTime<Utc>, validity: Duration) -> Self {
        let expiration = issued_at + validity;

        Self {
            authorized: true,
            user_id,
            iat: issued_at.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Check if token is expired at the given instant.
    ///
    /// A token is only live while `current_timestamp < exp`.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }
}
