use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;

use crate::domain::session::errors::SessionError;
use crate::domain::session::ports::SessionServicePort;
use crate::domain::user::models::UserDraft;
use crate::domain::user::validation::validate;
use crate::domain::user::validation::ValidationMode;
use crate::user::ports::UserRepository;

/// Sign-in flow: validate input, look the user up, verify the password,
/// issue a token.
///
/// No lockout, attempt counting or audit trail; each call is independent.
pub struct SessionService<UR>
where
    UR: UserRepository,
{
    user_repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> SessionService<UR>
where
    UR: UserRepository,
{
    pub fn new(user_repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            user_repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR> SessionServicePort for SessionService<UR>
where
    UR: UserRepository,
{
    async fn sign_in(&self, email: &str, password: &str) -> Result<String, SessionError> {
        let credentials = UserDraft::credentials(email, password).prepared();
        validate(&credentials, ValidationMode::Login)?;

        let user = self
            .user_repository
            .find_by_email(&credentials.email)
            .await
            .map_err(|e| SessionError::DatabaseError(e.to_string()))?
            .ok_or_else(|| {
                tracing::debug!("Sign-in attempted for unknown email");
                SessionError::UserNotFound
            })?;

        let result = self
            .authenticator
            .authenticate(password, &user.password_hash, user.id.0)
            .map_err(|e| {
                tracing::debug!(user_id = %user.id, error = %e, "Sign-in rejected");
                SessionError::from(e)
            })?;

        tracing::info!(user_id = %user.id, "User signed in");

        Ok(result.access_token)
    }
}

#[cfg(test)]
mod tests {
    use auth::PasswordHasher;
    use chrono::Utc;
    use mockall::mock;

    use super::*;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::NewUser;
    use crate::domain::user::models::User;
    use crate::domain::user::models::UserId;
    use crate::user::errors::UserError;
    use crate::user::errors::ValidationError;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: NewUser) -> Result<User, UserError>;
            async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
            async fn list(&self, limit: i64) -> Result<Vec<User>, UserError>;
            async fn update(&self, user: User) -> Result<User, UserError>;
            async fn delete(&self, id: UserId) -> Result<(), UserError>;
        }
    }

    const SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
    const PAM_EMAIL: &str = "pam.beesly@dundermifflin.com";

    fn pam() -> User {
        let hasher = PasswordHasher::with_params(1024, 1, 1).unwrap();
        User {
            id: UserId(3),
            firstname: "Pam".to_string(),
            lastname: "Beesly".to_string(),
            email: EmailAddress::new(PAM_EMAIL.to_string()).unwrap(),
            password_hash: hasher.hash("Pamela20").unwrap(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn service(repository: MockTestUserRepository) -> SessionService<MockTestUserRepository> {
        SessionService::new(
            Arc::new(repository),
            Arc::new(Authenticator::new(SECRET).unwrap()),
        )
    }

    fn repository_with_pam() -> MockTestUserRepository {
        let mut repository = MockTestUserRepository::new();
        let user = pam();
        repository
            .expect_find_by_email()
            .returning(move |email| Ok((email == PAM_EMAIL).then(|| user.clone())));
        repository
    }

    #[tokio::test]
    async fn test_sign_in_success() {
        let service = service(repository_with_pam());

        let token = service.sign_in(PAM_EMAIL, "Pamela20").await.unwrap();

        let authenticator = Authenticator::new(SECRET).unwrap();
        assert_eq!(authenticator.subject_id(&token).unwrap(), 3);
    }

    #[tokio::test]
    async fn test_sign_in_trims_email() {
        let service = service(repository_with_pam());

        let result = service.sign_in("  pam.beesly@dundermifflin.com ", "Pamela20").await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_sign_in_wrong_password() {
        let service = service(repository_with_pam());

        let result = service.sign_in(PAM_EMAIL, "wrong").await;

        assert!(matches!(result, Err(SessionError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_sign_in_unknown_email() {
        let service = service(repository_with_pam());

        let result = service.sign_in("pam@dundermifflin.com", "Pamela20").await;

        assert!(matches!(result, Err(SessionError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_sign_in_email_is_case_sensitive() {
        let service = service(repository_with_pam());

        let result = service
            .sign_in("Pam.Beesly@dundermifflin.com", "Pamela20")
            .await;

        assert!(matches!(result, Err(SessionError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_sign_in_empty_email_never_queries_store() {
        let mut repository = MockTestUserRepository::new();
        repository.expect_find_by_email().times(0);

        let result = service(repository).sign_in("", "Pamela20").await;

        assert!(matches!(
            result,
            Err(SessionError::Validation(ValidationError::EmailRequired))
        ));
    }

    #[tokio::test]
    async fn test_sign_in_invalid_email_never_queries_store() {
        let mut repository = MockTestUserRepository::new();
        repository.expect_find_by_email().times(0);

        let result = service(repository)
            .sign_in("dundermifflin.com", "Pamela20")
            .await;

        assert!(matches!(
            result,
            Err(SessionError::Validation(ValidationError::EmailInvalid))
        ));
    }

    #[tokio::test]
    async fn test_sign_in_empty_password_never_queries_store() {
        let mut repository = MockTestUserRepository::new();
        repository.expect_find_by_email().times(0);

        let result = service(repository).sign_in(PAM_EMAIL, "").await;

        assert!(matches!(
            result,
            Err(SessionError::Validation(ValidationError::PasswordRequired))
        ));
    }

    #[tokio::test]
    async fn test_sign_in_store_failure_surfaces() {
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Err(UserError::DatabaseError("connection reset".to_string())));

        let result = service(repository).sign_in(PAM_EMAIL, "Pamela20").await;

        assert!(matches!(result, Err(SessionError::DatabaseError(_))));
    }
}
