use axum::http::StatusCode;

use super::ApiSuccess;

pub async fn home() -> ApiSuccess<&'static str> {
    ApiSuccess::new(StatusCode::OK, "Welcome To This Awesome API")
}
