use axum::extract::Query;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use serde::Deserialize;

use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Subject of a validated token, stored in request extensions.
///
/// `user_id` may be `0` when the token carried no subject; the domain
/// guards reject that identity wherever it matters.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

#[derive(Debug, Default, Deserialize)]
struct TokenQuery {
    token: Option<String>,
}

/// Middleware that validates the bearer token and records its subject.
///
/// The token is read from the `token` query parameter or the
/// `Authorization: Bearer` header. A missing, invalid or expired token ends
/// the request with `401`.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let subject = {
        let query = Query::<TokenQuery>::try_from_uri(req.uri())
            .map(|Query(q)| q)
            .unwrap_or_default();
        let authorization = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        let token = auth::extract_token(query.token.as_deref(), authorization).ok_or_else(|| {
            tracing::debug!(uri = %req.uri(), "No bearer token presented");
            unauthorized()
        })?;

        state.authenticator.subject_id(token).map_err(|e| {
            tracing::warn!(error = %e, "Token validation failed");
            unauthorized()
        })?
    };

    req.extensions_mut().insert(AuthenticatedUser {
        user_id: UserId(subject),
    });

    Ok(next.run(req).await)
}

fn unauthorized() -> ApiError {
    ApiError::Unauthorized("Unauthorized".to_string())
}
