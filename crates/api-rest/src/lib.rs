//! # API REST
//!
//! REST API implementation for Notedown.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, status-code mapping)
//! - Serving the static single-page frontend
//!
//! Core data operations live in `notedown-core`; this crate only maps
//! requests onto them.

#![warn(rust_2018_idioms)]

pub mod auth;
pub mod dto;
pub mod error;
pub mod handlers;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use notedown_core::{
    CoreConfig, GrammarService, MirrorService, NoteResult, NoteService, SessionService,
    UserService,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across REST API handlers.
///
/// All services are cheap clones over the same injected configuration; the
/// grammar service additionally carries the shared HTTP client.
#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<CoreConfig>,
    pub notes: NoteService,
    pub mirror: MirrorService,
    pub grammar: GrammarService,
    pub users: UserService,
    pub sessions: SessionService,
}

impl AppState {
    /// Builds the full service set from a resolved configuration.
    ///
    /// # Errors
    ///
    /// Fails only when the grammar-check HTTP client cannot be constructed.
    pub fn new(cfg: Arc<CoreConfig>) -> NoteResult<Self> {
        let grammar = GrammarService::new(&cfg)?;
        Ok(Self {
            notes: NoteService::new(cfg.clone()),
            mirror: MirrorService::new(cfg.clone()),
            grammar,
            users: UserService::new(cfg.clone()),
            sessions: SessionService::new(cfg.clone()),
            cfg,
        })
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::root,
        handlers::health,
        handlers::create_note,
        handlers::list_notes,
        handlers::update_note,
        handlers::delete_note,
        handlers::convert_markdown,
        handlers::check_grammar,
        handlers::fs_notes,
        handlers::fs_note,
        handlers::fs_note_html,
        handlers::download,
        handlers::save_note,
        handlers::register,
        handlers::login,
    ),
    components(schemas(
        dto::NoteDto,
        dto::CreateNoteReq,
        dto::CreateNoteRes,
        dto::ListNotesRes,
        dto::UpdateNoteReq,
        dto::ConvertMarkdownReq,
        dto::ConvertMarkdownRes,
        dto::CheckGrammarReq,
        dto::FsNotesRes,
        dto::FsNoteRes,
        dto::SaveNoteReq,
        dto::SaveNoteRes,
        dto::CredentialsReq,
        dto::LoginRes,
        dto::MessageRes,
        dto::HealthRes,
    ))
)]
pub struct ApiDoc;

/// Builds the complete application router.
///
/// Note, file and tool routes are wrapped in the bearer-token middleware when
/// the configuration requires auth; the auth route pair, health check and
/// documentation stay open either way. When `static_dir` is given, unmatched
/// paths fall through to the static frontend.
pub fn build_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let api_routes = Router::new()
        .route("/notes", post(handlers::create_note).get(handlers::list_notes))
        .route(
            "/notes/:id",
            axum::routing::put(handlers::update_note).delete(handlers::delete_note),
        )
        .route("/convert-markdown", post(handlers::convert_markdown))
        .route("/check-grammar", post(handlers::check_grammar))
        .route("/fs-notes", get(handlers::fs_notes))
        .route("/note/:filename", get(handlers::fs_note))
        .route("/note-html/:filename", get(handlers::fs_note_html))
        .route("/download/:filename", get(handlers::download))
        .route("/save-note", post(handlers::save_note));

    let api_routes = if state.cfg.require_auth() {
        api_routes.route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_bearer,
        ))
    } else {
        api_routes
    };

    let app = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .merge(api_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive());

    let app = match static_dir {
        Some(dir) => app.fallback_service(ServeDir::new(dir)),
        None => app,
    };

    app.with_state(state)
}
