//! Status-code mapping for core errors.

use crate::dto::MessageRes;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use notedown_core::NoteError;

/// An error ready to be sent to the client.
///
/// Validation failures keep their message; everything unexpected is logged
/// and collapsed into a generic 500 so internal details never leak.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            message: message.into(),
        }
    }
}

impl From<NoteError> for ApiError {
    fn from(err: NoteError) -> Self {
        match &err {
            NoteError::MissingContent
            | NoteError::InvalidInput(_)
            | NoteError::MissingCredentials
            | NoteError::InvalidUsername
            | NoteError::UserExists
            | NoteError::InvalidCredentials
            | NoteError::InvalidFilename(_) => Self::bad_request(err.to_string()),
            NoteError::NotFound(_) => Self::not_found("Note not found"),
            NoteError::FileNotFound(_) => Self::not_found("Note not found"),
            NoteError::InvalidToken => Self::unauthorized(err.to_string()),
            _ => {
                tracing::error!("request failed: {:?}", err);
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: "Internal error".to_string(),
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(MessageRes {
                message: self.message,
            }),
        )
            .into_response()
    }
}
