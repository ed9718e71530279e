use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::user::models::UserDraft;
use crate::inbound::http::router::AppState;

pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<UserRequestBody>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    state
        .user_service
        .create_user(body.into())
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::CREATED, user.into()))
}

/// HTTP request body for creating or updating a user (raw JSON).
///
/// Every field is optional on the wire; which ones are required is decided
/// by domain validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UserRequestBody {
    firstname: String,
    lastname: String,
    email: String,
    password: Option<String>,
}

impl From<UserRequestBody> for UserDraft {
    fn from(body: UserRequestBody) -> Self {
        UserDraft {
            firstname: body.firstname,
            lastname: body.lastname,
            email: body.email,
            password: body.password,
        }
    }
}
