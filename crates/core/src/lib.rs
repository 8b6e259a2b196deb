//! # Notedown Core
//!
//! Core business logic for the Notedown note-taking system.
//!
//! This crate contains pure data operations and file/folder management:
//! - Note creation, listing, update and deletion over a JSON document store
//! - One-shot export of note content to a markdown directory
//! - Markdown-to-HTML rendering and the grammar-check client
//! - User registration/login and bearer-token sessions
//!
//! **No API concerns**: HTTP servers, routing, status-code mapping and
//! OpenAPI documentation belong in `api-rest`.

pub mod config;
pub mod constants;
pub mod error;
pub mod grammar;
pub mod markdown;
pub mod mirror;
pub mod note;
pub mod repositories;
pub mod text;

pub use config::CoreConfig;
pub use error::{NoteError, NoteResult};
pub use grammar::GrammarService;
pub use mirror::MirrorService;
pub use note::{ListQuery, NewNote, Note, NotePage, UpdateNote};
pub use repositories::notes::NoteService;
pub use repositories::sessions::SessionService;
pub use repositories::users::UserService;
pub use text::{NonEmptyText, TextError};
