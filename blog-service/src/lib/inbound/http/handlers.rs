use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::post::errors::PostError;
use crate::domain::post::models::Post;
use crate::domain::session::errors::SessionError;
use crate::domain::user::models::User;
use crate::user::errors::UserError;

pub mod create_post;
pub mod create_user;
pub mod delete_post;
pub mod delete_user;
pub mod get_post;
pub mod get_user;
pub mod home;
pub mod list_posts;
pub mod list_users;
pub mod login;
pub mod update_post;
pub mod update_user;

/// Maximum number of rows returned by list endpoints.
pub const LIST_LIMIT: i64 = 100;

/// Message returned for every failed sign-in, whatever the cause.
const INCORRECT_DETAILS: &str = "Incorrect details";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => ApiError::NotFound(err.to_string()),
            UserError::EmailAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            UserError::Unauthorized(_) => ApiError::Unauthorized(err.to_string()),
            UserError::Validation(_) => ApiError::UnprocessableEntity(err.to_string()),
            UserError::InvalidUserId(_) => ApiError::BadRequest(err.to_string()),
            UserError::Password(_) | UserError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<PostError> for ApiError {
    fn from(err: PostError) -> Self {
        match err {
            PostError::NotFound(_) => ApiError::NotFound(err.to_string()),
            PostError::TitleAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            PostError::Unauthorized(_) => ApiError::Unauthorized(err.to_string()),
            PostError::Validation(_) => ApiError::UnprocessableEntity(err.to_string()),
            PostError::InvalidPostId(_) => ApiError::BadRequest(err.to_string()),
            PostError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Validation(_) => ApiError::BadRequest(err.to_string()),
            SessionError::UserNotFound | SessionError::InvalidCredentials => {
                ApiError::UnprocessableEntity(INCORRECT_DETAILS.to_string())
            }
            SessionError::Password(_)
            | SessionError::Token(_)
            | SessionError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

/// Public view of a user. The password hash never leaves the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.0,
            firstname: user.firstname.clone(),
            lastname: user.lastname.clone(),
            email: user.email.as_str().to_string(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostData {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Post> for PostData {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.0,
            title: post.title.clone(),
            content: post.content.clone(),
            author_id: post.author_id.0,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::access::AccessError;
    use crate::domain::user::models::UserId;
    use crate::user::errors::ValidationError;

    #[test]
    fn test_login_validation_is_bad_request() {
        let err = ApiError::from(SessionError::Validation(ValidationError::EmailRequired));
        assert_eq!(err, ApiError::BadRequest("Email Required".to_string()));
    }

    #[test]
    fn test_failed_sign_in_hides_cause() {
        let unknown = ApiError::from(SessionError::UserNotFound);
        let mismatch = ApiError::from(SessionError::InvalidCredentials);

        assert_eq!(unknown, mismatch);
        assert_eq!(
            unknown,
            ApiError::UnprocessableEntity("Incorrect details".to_string())
        );
    }

    #[test]
    fn test_access_errors_are_unauthorized() {
        let err = ApiError::from(PostError::Unauthorized(AccessError::NotOwner {
            subject: UserId(2),
            owner: UserId(1),
        }));
        assert_eq!(err, ApiError::Unauthorized("Unauthorized".to_string()));

        let err = ApiError::from(UserError::Unauthorized(AccessError::Anonymous));
        assert_eq!(
            err,
            ApiError::Unauthorized("Unauthorized Access".to_string())
        );
    }

    #[test]
    fn test_user_validation_is_unprocessable() {
        let err = ApiError::from(UserError::Validation(ValidationError::FirstnameRequired));
        assert_eq!(
            err,
            ApiError::UnprocessableEntity("Firstname Required".to_string())
        );
    }

    #[test]
    fn test_unparseable_ids_are_bad_requests() {
        let err = ApiError::from(UserError::from(
            UserId::from_string("pam").unwrap_err(),
        ));
        assert!(matches!(err, ApiError::BadRequest(_)));

        let err = ApiError::from(PostError::from(
            crate::domain::post::models::PostId::from_string("first").unwrap_err(),
        ));
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn test_internal_errors_are_not_leaked() {
        let response =
            ApiError::from(UserError::DatabaseError("relation missing".to_string()))
                .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
