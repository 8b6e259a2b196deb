//! Wire types for the REST surface.
//!
//! Request bodies use `Option` fields with serde defaults so that missing
//! required fields produce the API's own 400 message instead of a
//! deserialization rejection. Responses convert core types into plain
//! strings at the boundary.

use notedown_core::Note;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A note as it appears on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NoteDto {
    pub id: String,
    pub title: String,
    pub content: String,
    pub pinned: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Note> for NoteDto {
    fn from(note: Note) -> Self {
        Self {
            id: note.id.to_string(),
            title: note.title,
            content: note.content.into_inner(),
            pinned: note.pinned,
            created_at: note.created_at.to_rfc3339(),
            updated_at: note.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateNoteReq {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub pinned: Option<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateNoteRes {
    pub message: String,
    pub note: NoteDto,
}

/// Raw paging parameters; non-numeric values fall back to the defaults.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListNotesParams {
    pub page: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListNotesRes {
    pub notes: Vec<NoteDto>,
    pub total: usize,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateNoteReq {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub pinned: Option<bool>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ConvertMarkdownReq {
    #[serde(default)]
    pub markdown: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ConvertMarkdownRes {
    pub html: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CheckGrammarReq {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FsNotesRes {
    pub notes: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FsNoteRes {
    pub filename: String,
    pub content: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SaveNoteReq {
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SaveNoteRes {
    pub message: String,
    pub path: String,
}

/// Body for both `/register` and `/login`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CredentialsReq {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginRes {
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageRes {
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}
