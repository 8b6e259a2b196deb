//! The note document and the per-operation input structs.
//!
//! Request bodies are modelled as explicit structs with documented defaults
//! rather than dynamic maps, so every operation states up front which fields
//! it takes and what happens when they are absent.

use crate::constants::{DEFAULT_LIMIT, DEFAULT_PAGE, UNTITLED};
use crate::text::NonEmptyText;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The sole persistent entity: one stored markdown note.
///
/// Persisted as a single JSON document under `<data_dir>/store/<id>.json`.
/// `content` is [`NonEmptyText`], so a stored note can never have an empty
/// body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Store-assigned identifier, immutable for the note's lifetime.
    pub id: Uuid,
    pub title: String,
    pub content: NonEmptyText,
    /// Pinned notes sort before all unpinned notes regardless of recency.
    pub pinned: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a note.
///
/// Defaults: `title` falls back to `"Untitled"`, `pinned` to `false`.
#[derive(Debug, Clone, Default)]
pub struct NewNote {
    pub title: Option<String>,
    pub content: String,
    pub pinned: Option<bool>,
}

impl NewNote {
    /// The title that will be stored, applying the placeholder default.
    pub fn title_or_default(&self) -> String {
        match self.title.as_deref().map(str::trim) {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => UNTITLED.to_string(),
        }
    }
}

/// Input for updating a note.
///
/// All three mutable fields are replaced wholesale; absent `title`/`pinned`
/// take the same defaults as on creation rather than keeping the old values.
#[derive(Debug, Clone)]
pub struct UpdateNote {
    pub title: Option<String>,
    pub content: String,
    pub pinned: Option<bool>,
}

impl UpdateNote {
    pub fn title_or_default(&self) -> String {
        match self.title.as_deref().map(str::trim) {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => UNTITLED.to_string(),
        }
    }
}

/// Paging input for listing notes.
///
/// Raw query-string values are kept as strings so that absent and non-numeric
/// parameters both fall back to the defaults (page 1, limit 5) instead of
/// failing the request.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ListQuery {
    /// The 1-based page to return; values below 1 or non-numeric input fall
    /// back to the default.
    pub fn page(&self) -> usize {
        parse_positive(self.page.as_deref()).unwrap_or(DEFAULT_PAGE)
    }

    /// The page size; values below 1 or non-numeric input fall back to the
    /// default.
    pub fn limit(&self) -> usize {
        parse_positive(self.limit.as_deref()).unwrap_or(DEFAULT_LIMIT)
    }
}

fn parse_positive(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|n| *n >= 1)
}

/// One page of notes plus the total count across all stored notes.
#[derive(Debug, Clone)]
pub struct NotePage {
    pub notes: Vec<Note>,
    pub total: usize,
}
