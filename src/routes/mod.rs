pub mod submit;

use axum::Router;
use axum::routing::post;

use crate::error::AppError;
use crate::state::SharedState;

pub fn form_routes() -> Router<SharedState> {
    Router::new().route("/submit", post(submit::submit))
}

pub async fn not_found() -> AppError {
    AppError::NotFound("No such path".to_string())
}
