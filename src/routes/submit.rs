use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::error::AppError;
use crate::state::SharedState;
use crate::submission::parser;

/// Accept a form-encoded checklist submission and acknowledge it.
///
/// Every decodable mapping, including the empty one, gets the same fixed
/// acknowledgment; hooks observe the submission but cannot change the
/// response.
pub async fn submit(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let content_type = headers.get("content-type").and_then(|v| v.to_str().ok());

    let submission = if content_type.is_some_and(|ct| ct.contains("multipart/form-data")) {
        parser::parse_multipart(&headers, body)
            .await
            .map_err(AppError::BadRequest)?
    } else {
        parser::parse_form(&body).map_err(AppError::BadRequest)?
    };

    state.hooks.dispatch(&submission).await;

    Ok((
        StatusCode::OK,
        Json(json!({ "message": "Form submitted successfully!" })),
    )
        .into_response())
}
