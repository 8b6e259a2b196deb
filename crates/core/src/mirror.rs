//! One-way export of note content to the markdown directory.
//!
//! Every created note is written to `<data_dir>/notes/<sanitized-title>.md`.
//! The export is a point-in-time copy: note edits and deletions do not touch
//! the file, and two titles that sanitize to the same name overwrite each
//! other. The same directory also backs the file-oriented endpoints
//! (`/fs-notes`, `/note/:filename`, `/save-note`, `/download/:filename`).

use crate::config::CoreConfig;
use crate::error::NoteResult;
use crate::markdown;
use notedown_files::{MarkdownDir, MARKDOWN_EXTENSION};
use std::path::PathBuf;
use std::sync::Arc;

/// Service for the exported-notes directory.
#[derive(Clone, Debug)]
pub struct MirrorService {
    cfg: Arc<CoreConfig>,
}

impl MirrorService {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self { cfg }
    }

    /// Derives a file-safe name from a note title: every character outside
    /// `[a-zA-Z0-9]` becomes `_` and the result is lower-cased.
    pub fn sanitize_title(title: &str) -> String {
        title
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_lowercase()
                } else {
                    '_'
                }
            })
            .collect()
    }

    /// Writes `content` to `<sanitized-title>.md`, overwriting any existing
    /// file of that name. Returns the written path.
    pub fn export(&self, title: &str, content: &str) -> NoteResult<PathBuf> {
        let file_name = format!("{}.{}", Self::sanitize_title(title), MARKDOWN_EXTENSION);
        let path = self.dir()?.write(&file_name, content)?;
        tracing::debug!(file = %path.display(), "note exported");
        Ok(path)
    }

    /// Writes `content` to `<filename>.md` for the save-note endpoint.
    ///
    /// Unlike [`export`](Self::export), the name is caller-supplied and is
    /// validated rather than sanitized.
    pub fn save(&self, filename: &str, content: &str) -> NoteResult<PathBuf> {
        let file_name = format!("{}.{}", filename, MARKDOWN_EXTENSION);
        Ok(self.dir()?.write(&file_name, content)?)
    }

    /// Names of all `.md` files in the directory.
    pub fn list(&self) -> NoteResult<Vec<String>> {
        Ok(self.dir()?.list()?)
    }

    /// Raw content of an exported file. `filename` includes the extension.
    pub fn read(&self, filename: &str) -> NoteResult<String> {
        Ok(self.dir()?.read(filename)?)
    }

    /// Reads a file and renders its content to HTML.
    pub fn render_html(&self, filename: &str) -> NoteResult<String> {
        let content = self.read(filename)?;
        Ok(markdown::render_html(&content))
    }

    /// Absolute path of an existing file, for streaming it as a download.
    pub fn file_path(&self, filename: &str) -> NoteResult<PathBuf> {
        Ok(self.dir()?.existing_path(filename)?)
    }

    fn dir(&self) -> NoteResult<MarkdownDir> {
        Ok(MarkdownDir::create(&self.cfg.mirror_dir())?)
    }
}
