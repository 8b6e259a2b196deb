//! REST request handlers.
//!
//! Each handler maps one verb+path onto one core operation. Required-field
//! presence checks run here, before dispatch, so a bad request never touches
//! the store; everything else is status-code mapping via [`ApiError`].

use crate::dto::{
    CheckGrammarReq, ConvertMarkdownReq, ConvertMarkdownRes, CreateNoteReq, CreateNoteRes,
    CredentialsReq, FsNoteRes, FsNotesRes, HealthRes, ListNotesParams, ListNotesRes, LoginRes,
    MessageRes, NoteDto, SaveNoteReq, SaveNoteRes, UpdateNoteReq,
};
use crate::error::ApiError;
use crate::AppState;
use axum::extract::{Path as AxumPath, Query, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Json, Response};
use notedown_core::{ListQuery, NewNote, UpdateNote};
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "API banner", body = String)
    )
)]
/// Base route confirming the API is reachable.
pub async fn root() -> &'static str {
    "Markdown note-taking API is running"
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for monitoring and load balancers.
pub async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "Notedown API is alive".into(),
    })
}

#[utoipa::path(
    post,
    path = "/notes",
    request_body = CreateNoteReq,
    responses(
        (status = 201, description = "Note created", body = CreateNoteRes),
        (status = 400, description = "Missing content", body = MessageRes),
        (status = 500, description = "Internal server error", body = MessageRes)
    )
)]
/// Create a new note.
///
/// Stores the note, then exports its content to the markdown directory under
/// a sanitized file name. The two writes are independent side effects; a
/// failed export does not roll back the stored note.
///
/// # Errors
///
/// Returns `400 Bad Request` when `content` is missing or empty, and
/// `500 Internal Server Error` when either write fails.
pub async fn create_note(
    State(state): State<AppState>,
    Json(req): Json<CreateNoteReq>,
) -> Result<(StatusCode, Json<CreateNoteRes>), ApiError> {
    let content = req.content.unwrap_or_default();
    if content.trim().is_empty() {
        return Err(ApiError::bad_request("Content is required"));
    }

    let note = state.notes.create(NewNote {
        title: req.title,
        content,
        pinned: req.pinned,
    })?;

    state.mirror.export(&note.title, note.content.as_str())?;

    Ok((
        StatusCode::CREATED,
        Json(CreateNoteRes {
            message: "Note saved".into(),
            note: note.into(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/notes",
    params(ListNotesParams),
    responses(
        (status = 200, description = "One page of notes plus total count", body = ListNotesRes),
        (status = 500, description = "Internal server error", body = MessageRes)
    )
)]
/// List notes, pinned first, then newest first.
///
/// `page` and `limit` default to 1 and 5 when absent or non-numeric.
pub async fn list_notes(
    State(state): State<AppState>,
    Query(params): Query<ListNotesParams>,
) -> Result<Json<ListNotesRes>, ApiError> {
    let page = state.notes.list(&ListQuery {
        page: params.page,
        limit: params.limit,
    })?;

    Ok(Json(ListNotesRes {
        notes: page.notes.into_iter().map(NoteDto::from).collect(),
        total: page.total,
    }))
}

#[utoipa::path(
    put,
    path = "/notes/{id}",
    request_body = UpdateNoteReq,
    params(("id" = String, Path, description = "Note identifier")),
    responses(
        (status = 200, description = "Updated note", body = NoteDto),
        (status = 400, description = "Missing content", body = MessageRes),
        (status = 404, description = "Note not found", body = MessageRes)
    )
)]
/// Replace a note's title, content and pinned flag wholesale.
///
/// # Errors
///
/// Returns `404 Not Found` for an unknown or unparsable id and
/// `400 Bad Request` when `content` is missing or empty.
pub async fn update_note(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
    Json(req): Json<UpdateNoteReq>,
) -> Result<Json<NoteDto>, ApiError> {
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::not_found("Note not found"))?;

    let content = req.content.unwrap_or_default();
    if content.trim().is_empty() {
        return Err(ApiError::bad_request("Content is required"));
    }

    let note = state.notes.update(
        id,
        UpdateNote {
            title: req.title,
            content,
            pinned: req.pinned,
        },
    )?;

    Ok(Json(note.into()))
}

#[utoipa::path(
    delete,
    path = "/notes/{id}",
    params(("id" = String, Path, description = "Note identifier")),
    responses(
        (status = 200, description = "Deletion confirmation", body = MessageRes),
        (status = 404, description = "Note not found", body = MessageRes)
    )
)]
/// Delete a note.
pub async fn delete_note(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<Json<MessageRes>, ApiError> {
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::not_found("Note not found"))?;

    state.notes.delete(id)?;

    Ok(Json(MessageRes {
        message: "Note deleted".into(),
    }))
}

#[utoipa::path(
    post,
    path = "/convert-markdown",
    request_body = ConvertMarkdownReq,
    responses(
        (status = 200, description = "Rendered HTML", body = ConvertMarkdownRes),
        (status = 400, description = "Missing markdown", body = MessageRes)
    )
)]
/// Convert a markdown string to HTML.
pub async fn convert_markdown(
    Json(req): Json<ConvertMarkdownReq>,
) -> Result<Json<ConvertMarkdownRes>, ApiError> {
    let markdown = req.markdown.unwrap_or_default();
    if markdown.is_empty() {
        return Err(ApiError::bad_request("Markdown is required"));
    }

    Ok(Json(ConvertMarkdownRes {
        html: notedown_core::markdown::render_html(&markdown),
    }))
}

#[utoipa::path(
    post,
    path = "/check-grammar",
    request_body = CheckGrammarReq,
    responses(
        (status = 200, description = "Raw checker payload"),
        (status = 400, description = "Missing text", body = MessageRes),
        (status = 500, description = "Checker unavailable", body = MessageRes)
    )
)]
/// Forward free text to the grammar checker and relay its findings verbatim.
///
/// # Errors
///
/// Returns `500 Internal Server Error` when the remote checker cannot be
/// reached or answers with a failure status; the request is not retried.
pub async fn check_grammar(
    State(state): State<AppState>,
    Json(req): Json<CheckGrammarReq>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let text = req.text.unwrap_or_default();
    if text.trim().is_empty() {
        return Err(ApiError::bad_request("Text is required"));
    }

    let payload = state.grammar.check(&text).await?;
    Ok(Json(payload))
}

#[utoipa::path(
    get,
    path = "/fs-notes",
    responses(
        (status = 200, description = "Names of exported markdown files", body = FsNotesRes),
        (status = 500, description = "Internal server error", body = MessageRes)
    )
)]
/// List the `.md` files in the export directory.
pub async fn fs_notes(State(state): State<AppState>) -> Result<Json<FsNotesRes>, ApiError> {
    let notes = state.mirror.list()?;
    Ok(Json(FsNotesRes { notes }))
}

#[utoipa::path(
    get,
    path = "/note/{filename}",
    params(("filename" = String, Path, description = "Exported file name, including extension")),
    responses(
        (status = 200, description = "Raw file content", body = FsNoteRes),
        (status = 404, description = "File not found", body = MessageRes)
    )
)]
/// Read an exported file's raw markdown.
pub async fn fs_note(
    State(state): State<AppState>,
    AxumPath(filename): AxumPath<String>,
) -> Result<Json<FsNoteRes>, ApiError> {
    let content = state.mirror.read(&filename)?;
    Ok(Json(FsNoteRes { filename, content }))
}

#[utoipa::path(
    get,
    path = "/note-html/{filename}",
    params(("filename" = String, Path, description = "Exported file name, including extension")),
    responses(
        (status = 200, description = "Rendered HTML body", body = String),
        (status = 404, description = "File not found", body = MessageRes)
    )
)]
/// Read an exported file and return its rendered HTML.
pub async fn fs_note_html(
    State(state): State<AppState>,
    AxumPath(filename): AxumPath<String>,
) -> Result<Html<String>, ApiError> {
    let html = state.mirror.render_html(&filename)?;
    Ok(Html(html))
}

#[utoipa::path(
    get,
    path = "/download/{filename}",
    params(("filename" = String, Path, description = "Exported file name, including extension")),
    responses(
        (status = 200, description = "File attachment"),
        (status = 404, description = "File not found", body = MessageRes)
    )
)]
/// Stream an exported file as a download attachment.
pub async fn download(
    State(state): State<AppState>,
    AxumPath(filename): AxumPath<String>,
) -> Result<Response, ApiError> {
    let content = state.mirror.read(&filename)?;

    // The validated name cannot contain quotes, so the header value is safe.
    let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{}\"", filename))
        .map_err(|e| {
            tracing::error!("invalid content-disposition for {}: {}", filename, e);
            ApiError::not_found("Note not found")
        })?;

    Ok((
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/markdown; charset=utf-8"),
            ),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        content,
    )
        .into_response())
}

#[utoipa::path(
    post,
    path = "/save-note",
    request_body = SaveNoteReq,
    responses(
        (status = 200, description = "Save confirmation", body = SaveNoteRes),
        (status = 400, description = "Missing filename or content", body = MessageRes)
    )
)]
/// Write content directly to a named file in the export directory.
///
/// The `.md` extension is appended to the supplied name.
pub async fn save_note(
    State(state): State<AppState>,
    Json(req): Json<SaveNoteReq>,
) -> Result<Json<SaveNoteRes>, ApiError> {
    let (filename, content) = match (req.filename, req.content) {
        (Some(f), Some(c)) if !f.trim().is_empty() && !c.trim().is_empty() => (f, c),
        _ => return Err(ApiError::bad_request("Filename and content required")),
    };

    let path = state.mirror.save(&filename, &content)?;

    Ok(Json(SaveNoteRes {
        message: "Note saved successfully".into(),
        path: path.display().to_string(),
    }))
}

#[utoipa::path(
    post,
    path = "/register",
    request_body = CredentialsReq,
    responses(
        (status = 201, description = "User registered", body = MessageRes),
        (status = 400, description = "Invalid or duplicate credentials", body = MessageRes)
    )
)]
/// Register a new user.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<CredentialsReq>,
) -> Result<(StatusCode, Json<MessageRes>), ApiError> {
    let (username, password) = require_credentials(req)?;

    state.users.register(&username, &password)?;

    Ok((
        StatusCode::CREATED,
        Json(MessageRes {
            message: "User registered successfully".into(),
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/login",
    request_body = CredentialsReq,
    responses(
        (status = 200, description = "Bearer token", body = LoginRes),
        (status = 400, description = "Invalid credentials", body = MessageRes)
    )
)]
/// Verify credentials and issue a bearer token valid for one hour.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<CredentialsReq>,
) -> Result<Json<LoginRes>, ApiError> {
    let (username, password) = require_credentials(req)?;

    state.users.login(&username, &password)?;
    let token = state.sessions.issue(&username)?;

    Ok(Json(LoginRes { token }))
}

fn require_credentials(req: CredentialsReq) -> Result<(String, String), ApiError> {
    match (req.username, req.password) {
        (Some(u), Some(p)) if !u.trim().is_empty() && !p.is_empty() => Ok((u, p)),
        _ => Err(ApiError::bad_request("Username and password required")),
    }
}
