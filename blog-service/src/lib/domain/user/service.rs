use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use chrono::Utc;

use crate::domain::access;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserDraft;
use crate::domain::user::models::UserId;
use crate::domain::user::validation::validate;
use crate::domain::user::validation::ValidationMode;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service hashing with default Argon2id parameters.
    pub fn new(repository: Arc<UR>) -> Self {
        Self::with_password_hasher(repository, PasswordHasher::new())
    }

    /// Create a user service with a specific password hasher.
    pub fn with_password_hasher(repository: Arc<UR>, password_hasher: PasswordHasher) -> Self {
        Self {
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn create_user(&self, draft: UserDraft) -> Result<User, UserError> {
        let draft = draft.prepared();
        validate(&draft, ValidationMode::Create)?;

        let password_hash = self
            .password_hasher
            .hash(draft.password.as_deref().unwrap_or_default())?;

        let user = NewUser {
            firstname: draft.firstname,
            lastname: draft.lastname,
            email: EmailAddress::new(draft.email)?,
            password_hash,
        };

        let created_user = self.repository.create(user).await?;
        tracing::info!(user_id = %created_user.id, "User registered");

        Ok(created_user)
    }

    async fn get_user(&self, id: UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))
    }

    async fn list_users(&self, limit: i64) -> Result<Vec<User>, UserError> {
        self.repository.list(limit).await
    }

    async fn update_user(
        &self,
        subject: UserId,
        id: UserId,
        draft: UserDraft,
    ) -> Result<User, UserError> {
        access::ensure_owner(subject, id)?;

        let draft = draft.prepared();
        validate(&draft, ValidationMode::Update)?;

        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))?;

        user.firstname = draft.firstname;
        user.lastname = draft.lastname;
        user.email = EmailAddress::new(draft.email)?;

        // An absent or empty password leaves the stored hash untouched.
        if let Some(new_password) = draft.password.filter(|p| !p.is_empty()) {
            user.password_hash = self.password_hasher.hash(&new_password)?;
        }

        user.updated_at = Utc::now();

        let updated_user = self.repository.update(user).await?;
        tracing::info!(user_id = %updated_user.id, "User updated");

        Ok(updated_user)
    }

    async fn delete_user(&self, subject: UserId, id: UserId) -> Result<(), UserError> {
        access::ensure_owner(subject, id)?;

        self.repository.delete(id).await?;
        tracing::info!(user_id = %id, "User deleted");

        Ok(())
    }
}
