//! Note persistence and pagination.
//!
//! Notes are stored one JSON document per note:
//!
//! ```text
//! <data_dir>/store/<uuid>.json
//! ```
//!
//! Listing loads every document, sorts pinned-first then newest-first, and
//! slices the requested page. Documents that fail to parse are logged as
//! warnings and skipped rather than failing the whole listing.
//!
//! ## Pure data operations
//!
//! This module contains **only** data operations. No HTTP status codes, no
//! request validation beyond the store's own invariants. API-level logic
//! belongs in `api-rest`.

use crate::config::CoreConfig;
use crate::error::{NoteError, NoteResult};
use crate::note::{ListQuery, NewNote, Note, NotePage, UpdateNote};
use crate::text::NonEmptyText;
use chrono::Utc;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use uuid::Uuid;

/// Service for note store operations.
///
/// Cheap to clone; all instances share the injected configuration.
#[derive(Clone, Debug)]
pub struct NoteService {
    cfg: Arc<CoreConfig>,
}

impl NoteService {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self { cfg }
    }

    /// Creates a note with a generated id and timestamps.
    ///
    /// `title` defaults to `"Untitled"` and `pinned` to `false` when absent.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::MissingContent` when `content` is empty or
    /// whitespace; nothing is written in that case. Otherwise fails only on
    /// storage-directory creation, serialization or write errors.
    pub fn create(&self, input: NewNote) -> NoteResult<Note> {
        let content =
            NonEmptyText::new(input.content.clone()).map_err(|_| NoteError::MissingContent)?;

        let now = Utc::now();
        let note = Note {
            id: Uuid::new_v4(),
            title: input.title_or_default(),
            content,
            pinned: input.pinned.unwrap_or(false),
            created_at: now,
            updated_at: now,
        };

        self.write_document(&note)?;

        tracing::debug!(id = %note.id, title = %note.title, "note created");
        Ok(note)
    }

    /// Returns one page of notes plus the total count.
    ///
    /// Sort contract: pinned notes first, then by descending creation time.
    /// Ties within the same pinned group and creation timestamp are broken
    /// arbitrarily.
    pub fn list(&self, query: &ListQuery) -> NoteResult<NotePage> {
        let mut notes = self.load_all();

        notes.sort_by(|a, b| {
            b.pinned
                .cmp(&a.pinned)
                .then(b.created_at.cmp(&a.created_at))
        });

        let total = notes.len();
        let page = query.page();
        let limit = query.limit();
        let notes = notes
            .into_iter()
            .skip((page - 1) * limit)
            .take(limit)
            .collect();

        Ok(NotePage { notes, total })
    }

    /// Loads a single note by id.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::NotFound` when no document exists for `id`.
    pub fn get(&self, id: Uuid) -> NoteResult<Note> {
        let path = self.document_path(id);
        if !path.is_file() {
            return Err(NoteError::NotFound(id));
        }

        let contents = fs::read_to_string(&path).map_err(NoteError::FileRead)?;
        serde_json::from_str(&contents).map_err(NoteError::Deserialization)
    }

    /// Replaces a note's title, content and pinned flag wholesale.
    ///
    /// `created_at` is preserved; `updated_at` is refreshed. Absent `title`
    /// and `pinned` take the creation defaults rather than the old values.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::NotFound` for an unknown id and
    /// `NoteError::MissingContent` for an empty body; the stored document is
    /// untouched in both cases.
    pub fn update(&self, id: Uuid, input: UpdateNote) -> NoteResult<Note> {
        let content =
            NonEmptyText::new(input.content.clone()).map_err(|_| NoteError::MissingContent)?;

        let existing = self.get(id)?;

        let note = Note {
            id: existing.id,
            title: input.title_or_default(),
            content,
            pinned: input.pinned.unwrap_or(false),
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };

        self.write_document(&note)?;

        tracing::debug!(id = %note.id, "note updated");
        Ok(note)
    }

    /// Removes a note's document.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::NotFound` when no document exists for `id`.
    pub fn delete(&self, id: Uuid) -> NoteResult<()> {
        let path = self.document_path(id);
        if !path.is_file() {
            return Err(NoteError::NotFound(id));
        }

        fs::remove_file(&path).map_err(NoteError::FileDelete)?;

        tracing::debug!(id = %id, "note deleted");
        Ok(())
    }

    /// Reads every parsable note document in the store directory.
    ///
    /// A missing store directory is an empty store. Individual documents that
    /// cannot be read or parsed are logged as warnings and skipped.
    fn load_all(&self) -> Vec<Note> {
        let store_dir = self.cfg.store_dir();
        let entries = match fs::read_dir(&store_dir) {
            Ok(it) => it,
            Err(_) => return Vec::new(),
        };

        let mut notes = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }

            match fs::read_to_string(&path) {
                Ok(contents) => match serde_json::from_str::<Note>(&contents) {
                    Ok(note) => notes.push(note),
                    Err(e) => {
                        tracing::warn!("failed to parse note document {}: {}", path.display(), e);
                    }
                },
                Err(e) => {
                    tracing::warn!("failed to read note document {}: {}", path.display(), e);
                }
            }
        }

        notes
    }

    fn document_path(&self, id: Uuid) -> PathBuf {
        self.cfg.store_dir().join(format!("{}.json", id.simple()))
    }

    fn write_document(&self, note: &Note) -> NoteResult<()> {
        fs::create_dir_all(self.cfg.store_dir()).map_err(NoteError::StorageDirCreation)?;

        let json = serde_json::to_string_pretty(note).map_err(NoteError::Serialization)?;
        fs::write(self.document_path(note.id), json).map_err(NoteError::FileWrite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_GRAMMAR_API_URL;
    use chrono::{DateTime, Duration, Utc};
    use std::path::Path;
    use tempfile::TempDir;

    fn test_cfg(data_dir: &Path) -> Arc<CoreConfig> {
        Arc::new(
            CoreConfig::new(
                data_dir.to_path_buf(),
                DEFAULT_GRAMMAR_API_URL.to_string(),
                false,
            )
            .expect("CoreConfig::new should succeed"),
        )
    }

    fn new_note(title: &str, content: &str, pinned: bool) -> NewNote {
        NewNote {
            title: Some(title.to_string()),
            content: content.to_string(),
            pinned: Some(pinned),
        }
    }

    /// Writes a note document directly, with an explicit creation time, so
    /// ordering tests do not depend on wall-clock spacing.
    fn write_note_doc(
        cfg: &CoreConfig,
        title: &str,
        pinned: bool,
        created_at: DateTime<Utc>,
    ) -> Uuid {
        let note = Note {
            id: Uuid::new_v4(),
            title: title.to_string(),
            content: NonEmptyText::new(format!("{} body", title)).unwrap(),
            pinned,
            created_at,
            updated_at: created_at,
        };
        std::fs::create_dir_all(cfg.store_dir()).unwrap();
        std::fs::write(
            cfg.store_dir().join(format!("{}.json", note.id.simple())),
            serde_json::to_string_pretty(&note).unwrap(),
        )
        .unwrap();
        note.id
    }

    fn count_documents(cfg: &CoreConfig) -> usize {
        match std::fs::read_dir(cfg.store_dir()) {
            Ok(it) => it.count(),
            Err(_) => 0,
        }
    }

    #[test]
    fn test_create_assigns_id_and_timestamps() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let service = NoteService::new(test_cfg(temp.path()));

        let note = service
            .create(new_note("Plans", "# Plans\n", false))
            .expect("create should succeed");

        assert_eq!(note.title, "Plans");
        assert_eq!(note.content.as_str(), "# Plans\n");
        assert!(!note.pinned);
        assert_eq!(note.created_at, note.updated_at);

        let reloaded = service.get(note.id).expect("get should succeed");
        assert_eq!(reloaded, note);
    }

    #[test]
    fn test_create_without_content_writes_nothing() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let cfg = test_cfg(temp.path());
        let service = NoteService::new(cfg.clone());

        let result = service.create(NewNote {
            title: Some("Empty".into()),
            content: "   ".into(),
            pinned: None,
        });

        assert!(matches!(result, Err(NoteError::MissingContent)));
        assert_eq!(count_documents(&cfg), 0, "no document should be written");
    }

    #[test]
    fn test_create_defaults() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let service = NoteService::new(test_cfg(temp.path()));

        let note = service
            .create(NewNote {
                title: None,
                content: "body".into(),
                pinned: None,
            })
            .expect("create should succeed");

        assert_eq!(note.title, "Untitled");
        assert!(!note.pinned, "pinned should default to false");
    }

    #[test]
    fn test_list_pinned_first_then_newest() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let cfg = test_cfg(temp.path());
        let service = NoteService::new(cfg.clone());

        let base: DateTime<Utc> = "2024-06-01T12:00:00Z".parse().unwrap();
        for i in 0..5 {
            write_note_doc(&cfg, &format!("plain-{}", i), false, base + Duration::minutes(i));
        }
        // Oldest note of the lot, but pinned.
        write_note_doc(&cfg, "pinned", true, base - Duration::minutes(10));

        let page = service.list(&ListQuery::default()).expect("list should succeed");

        assert_eq!(page.total, 6);
        assert_eq!(page.notes.len(), 5);
        assert_eq!(page.notes[0].title, "pinned");
        let rest: Vec<&str> = page.notes[1..].iter().map(|n| n.title.as_str()).collect();
        assert_eq!(rest, vec!["plain-4", "plain-3", "plain-2", "plain-1"]);
    }

    #[test]
    fn test_list_second_page() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let cfg = test_cfg(temp.path());
        let service = NoteService::new(cfg.clone());

        let base: DateTime<Utc> = "2024-06-01T12:00:00Z".parse().unwrap();
        for i in 0..7 {
            write_note_doc(&cfg, &format!("n-{}", i), false, base + Duration::minutes(i));
        }

        let page = service
            .list(&ListQuery {
                page: Some("2".into()),
                limit: Some("5".into()),
            })
            .expect("list should succeed");

        assert_eq!(page.total, 7);
        let titles: Vec<&str> = page.notes.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["n-1", "n-0"]);
    }

    #[test]
    fn test_list_page_past_end_is_empty() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let cfg = test_cfg(temp.path());
        let service = NoteService::new(cfg.clone());

        write_note_doc(&cfg, "only", false, Utc::now());

        let page = service
            .list(&ListQuery {
                page: Some("9".into()),
                limit: None,
            })
            .expect("list should succeed");

        assert_eq!(page.total, 1);
        assert!(page.notes.is_empty());
    }

    #[test]
    fn test_list_skips_unparsable_documents() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let cfg = test_cfg(temp.path());
        let service = NoteService::new(cfg.clone());

        write_note_doc(&cfg, "good", false, Utc::now());
        std::fs::write(cfg.store_dir().join("broken.json"), "{ not json").unwrap();

        let page = service.list(&ListQuery::default()).expect("list should succeed");

        assert_eq!(page.total, 1);
        assert_eq!(page.notes[0].title, "good");
    }

    #[test]
    fn test_list_empty_store() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let service = NoteService::new(test_cfg(temp.path()));

        let page = service.list(&ListQuery::default()).expect("list should succeed");

        assert_eq!(page.total, 0);
        assert!(page.notes.is_empty());
    }

    #[test]
    fn test_update_replaces_fields_wholesale() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let service = NoteService::new(test_cfg(temp.path()));

        let note = service
            .create(new_note("Before", "old body", true))
            .expect("create should succeed");

        let updated = service
            .update(
                note.id,
                UpdateNote {
                    title: Some("After".into()),
                    content: "new body".into(),
                    pinned: None,
                },
            )
            .expect("update should succeed");

        assert_eq!(updated.id, note.id);
        assert_eq!(updated.title, "After");
        assert_eq!(updated.content.as_str(), "new body");
        assert!(!updated.pinned, "absent pinned takes the default, not the old value");
        assert_eq!(updated.created_at, note.created_at);
        assert!(updated.updated_at > note.updated_at);
    }

    #[test]
    fn test_update_unknown_id_leaves_store_unchanged() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let cfg = test_cfg(temp.path());
        let service = NoteService::new(cfg.clone());

        let note = service
            .create(new_note("Keep", "body", false))
            .expect("create should succeed");

        let result = service.update(
            Uuid::new_v4(),
            UpdateNote {
                title: Some("X".into()),
                content: "y".into(),
                pinned: None,
            },
        );

        assert!(matches!(result, Err(NoteError::NotFound(_))));
        assert_eq!(count_documents(&cfg), 1);
        assert_eq!(service.get(note.id).unwrap(), note);
    }

    #[test]
    fn test_update_rejects_empty_content() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let service = NoteService::new(test_cfg(temp.path()));

        let note = service
            .create(new_note("Keep", "body", false))
            .expect("create should succeed");

        let result = service.update(
            note.id,
            UpdateNote {
                title: None,
                content: "".into(),
                pinned: None,
            },
        );

        assert!(matches!(result, Err(NoteError::MissingContent)));
        assert_eq!(service.get(note.id).unwrap().content.as_str(), "body");
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let cfg = test_cfg(temp.path());
        let service = NoteService::new(cfg.clone());

        let first = service.create(new_note("First", "a", false)).unwrap();
        let second = service.create(new_note("Second", "b", false)).unwrap();

        service.delete(first.id).expect("delete should succeed");

        let page = service.list(&ListQuery::default()).unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.notes[0].id, second.id);
        assert!(matches!(service.get(first.id), Err(NoteError::NotFound(_))));
    }

    #[test]
    fn test_delete_unknown_id() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let service = NoteService::new(test_cfg(temp.path()));

        let result = service.delete(Uuid::new_v4());

        assert!(matches!(result, Err(NoteError::NotFound(_))));
    }
}
