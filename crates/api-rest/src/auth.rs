//! Optional bearer-token gate for the note, file and tool routes.
//!
//! Disabled by default to match the API's open contract; enabling
//! `require_auth` in the configuration applies this middleware to every
//! protected route. Tokens come from `/login` and are verified against the
//! session store on each request.

use crate::error::ApiError;
use crate::AppState;
use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

/// Rejects requests without a valid `Authorization: Bearer <token>` header.
pub async fn require_bearer(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    match token {
        Some(token) if state.sessions.verify(token).is_ok() => next.run(request).await,
        _ => ApiError::unauthorized("Auth token missing or invalid").into_response(),
    }
}
