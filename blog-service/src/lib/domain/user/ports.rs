use async_trait::async_trait;

use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserDraft;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `draft` - Submitted fields, validated in `ValidationMode::Create`
    ///
    /// # Errors
    /// * `Validation` - A field is missing or malformed
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create_user(&self, draft: UserDraft) -> Result<User, UserError>;

    /// Retrieve user by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_user(&self, id: UserId) -> Result<User, UserError>;

    /// List users, at most `limit` of them.
    async fn list_users(&self, limit: i64) -> Result<Vec<User>, UserError>;

    /// Update a user on behalf of `subject`.
    ///
    /// # Arguments
    /// * `subject` - Authenticated caller
    /// * `id` - User to update; must equal `subject`
    /// * `draft` - New fields, validated in `ValidationMode::Update`
    ///
    /// # Errors
    /// * `Unauthorized` - Caller is not the user being edited
    /// * `Validation` - A field is missing or malformed
    /// * `NotFound` - User does not exist
    /// * `EmailAlreadyExists` - New email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn update_user(
        &self,
        subject: UserId,
        id: UserId,
        draft: UserDraft,
    ) -> Result<User, UserError>;

    /// Delete a user on behalf of `subject`.
    ///
    /// # Errors
    /// * `Unauthorized` - Caller is not the user being deleted
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_user(&self, subject: UserId, id: UserId) -> Result<(), UserError>;
}

/// Persistence operations for user aggregate.
///
/// Also the credential store consulted at sign-in.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user, returning it with its assigned id.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: NewUser) -> Result<User, UserError>;

    /// Retrieve user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by exact, case-sensitive email match.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Retrieve up to `limit` users.
    async fn list(&self, limit: i64) -> Result<Vec<User>, UserError>;

    /// Update existing user in storage.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `EmailAlreadyExists` - New email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, user: User) -> Result<User, UserError>;

    /// Remove user from storage.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: UserId) -> Result<(), UserError>;
}
