use async_trait::async_trait;

use crate::domain::session::errors::SessionError;

/// Port for exchanging credentials against a bearer token.
#[async_trait]
pub trait SessionServicePort: Send + Sync + 'static {
    /// Verify `email`/`password` and issue a token for the matching user.
    ///
    /// Input is validated before the credential store is touched.
    ///
    /// # Errors
    /// * `Validation` - Email missing or malformed, or password missing
    /// * `UserNotFound` - No user with this exact email
    /// * `InvalidCredentials` - Password does not match
    /// * `Password` - Stored hash is unreadable
    /// * `Token` - Token could not be signed
    /// * `DatabaseError` - Lookup failed
    async fn sign_in(&self, email: &str, password: &str) -> Result<String, SessionError>;
}
