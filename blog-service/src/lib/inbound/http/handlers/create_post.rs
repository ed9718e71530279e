use axum::extract::State;
use axum::http::header;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::PostData;
use crate::domain::post::models::PostDraft;
use crate::domain::user::models::UserId;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Publish a post. Responds `201` with a `Location` header pointing at it.
pub async fn create_post(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Json(body): Json<PostRequestBody>,
) -> Result<impl IntoResponse, ApiError> {
    let post = state
        .post_service
        .create_post(caller.user_id, body.into())
        .await
        .map_err(ApiError::from)?;

    let location = format!("/posts/{}", post.id);

    Ok((
        [(header::LOCATION, location)],
        ApiSuccess::new(StatusCode::CREATED, PostData::from(&post)),
    ))
}

/// HTTP request body for creating or updating a post (raw JSON).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PostRequestBody {
    title: String,
    content: String,
    author_id: i64,
}

impl From<PostRequestBody> for PostDraft {
    fn from(body: PostRequestBody) -> Self {
        PostDraft {
            title: body.title,
            content: body.content,
            author_id: UserId(body.author_id),
        }
    }
}
