//! Authentication utilities library
//!
//! Provides the authentication core of the blog service:
//! - Password hashing (Argon2id)
//! - Bearer token issuance and validation (HS256, one hour validity)
//! - Token extraction from query parameter or `Authorization` header
//! - Authentication coordination
//!
//! Nothing here knows about HTTP frameworks or storage; the service adapts
//! these pieces at its own boundaries.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Tokens
//! ```
//! use auth::TokenService;
//!
//! let tokens = TokenService::new(b"secret_key_at_least_32_bytes_long!").unwrap();
//! let token = tokens.issue(42).unwrap();
//! assert_eq!(tokens.extract_subject_id(&token).unwrap(), 42);
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!").unwrap();
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token for user 7
//! let result = auth.authenticate("password123", &hash, 7).unwrap();
//!
//! // Later requests: validate token
//! assert_eq!(auth.subject_id(&result.access_token).unwrap(), 7);
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::extract_token;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::TokenService;
pub use token::TOKEN_VALIDITY_HOURS;
