use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;

/// Lifetime of every issued token.
pub const TOKEN_VALIDITY_HOURS: i64 = 1;

/// Issues and validates the bearer tokens handed out at login.
///
/// Tokens are stateless: their whole lifecycle is the signature plus the
/// `exp` claim, there is no revocation list.
pub struct TokenService {
    jwt_handler: JwtHandler,
    validity: Duration,
}

impl TokenService {
    /// Create a token service signing with `secret`.
    ///
    /// # Errors
    /// * `MissingSecret` - Secret is empty
    pub fn new(secret: &[u8]) -> Result<Self, JwtError> {
        Ok(Self {
            jwt_handler: JwtHandler::new(secret)?,
            validity: Duration::hours(TOKEN_VALIDITY_HOURS),
        })
    }

    /// Issue a token for `subject_id`, valid for one hour from now.
    pub fn issue(&self, subject_id: i64) -> Result<String, JwtError> {
        self.issue_at(subject_id, Utc::now())
    }

    /// Issue a token as if it had been created at `issued_at`.
    pub fn issue_at(&self, subject_id: i64, issued_at: DateTime<Utc>) -> Result<String, JwtError> {
        let claims = Claims::for_subject(subject_id, issued_at, self.validity);
        self.jwt_handler.encode(&claims)
    }

    /// Verify signature, algorithm and expiry, returning the typed payload.
    ///
    /// # Errors
    /// * `InvalidToken` - Malformed, bad signature or non-HMAC algorithm
    /// * `TokenExpired` - Current time has reached `exp`
    pub fn validate(&self, token: &str) -> Result<Claims, JwtError> {
        let claims: Claims = self.jwt_handler.decode(token)?;

        // The decoder still accepts a token during the second `exp` names.
        if claims.is_expired(Utc::now().timestamp()) {
            return Err(JwtError::TokenExpired);
        }

        Ok(claims)
    }

    /// Validate and return the subject id.
    ///
    /// A verified token without a `userId` claim yields `0`, which callers
    /// must treat as "no identity".
    pub fn extract_subject_id(&self, token: &str) -> Result<i64, JwtError> {
        self.validate(token).map(|claims| claims.user_id)
    }
}
