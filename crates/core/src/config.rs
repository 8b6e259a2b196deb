//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. The intent is to avoid reading process-wide environment variables
//! during request handling, which can lead to inconsistent behaviour in multi-threaded runtimes
//! and test harnesses.

use crate::constants::{MIRROR_DIR_NAME, SESSIONS_DIR_NAME, STORE_DIR_NAME, USERS_DIR_NAME};
use crate::{NoteError, NoteResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    data_dir: PathBuf,
    grammar_api_url: String,
    require_auth: bool,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// `data_dir` is the root under which the note store, the markdown
    /// mirror, users and sessions each get their own subdirectory.
    pub fn new(
        data_dir: PathBuf,
        grammar_api_url: String,
        require_auth: bool,
    ) -> NoteResult<Self> {
        if grammar_api_url.trim().is_empty() {
            return Err(NoteError::InvalidInput(
                "grammar_api_url cannot be empty".into(),
            ));
        }

        Ok(Self {
            data_dir,
            grammar_api_url,
            require_auth,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Directory holding one JSON document per note.
    pub fn store_dir(&self) -> PathBuf {
        self.data_dir.join(STORE_DIR_NAME)
    }

    /// Directory holding the exported `.md` files.
    pub fn mirror_dir(&self) -> PathBuf {
        self.data_dir.join(MIRROR_DIR_NAME)
    }

    pub fn users_dir(&self) -> PathBuf {
        self.data_dir.join(USERS_DIR_NAME)
    }

    pub fn sessions_dir(&self) -> PathBuf {
        self.data_dir.join(SESSIONS_DIR_NAME)
    }

    pub fn grammar_api_url(&self) -> &str {
        &self.grammar_api_url
    }

    /// Whether note/file/tool routes should require a bearer token.
    pub fn require_auth(&self) -> bool {
        self.require_auth
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_GRAMMAR_API_URL;

    #[test]
    fn test_directory_accessors_nest_under_data_dir() {
        let cfg = CoreConfig::new(
            PathBuf::from("/tmp/nd"),
            DEFAULT_GRAMMAR_API_URL.to_string(),
            false,
        )
        .unwrap();

        assert_eq!(cfg.store_dir(), Path::new("/tmp/nd/store"));
        assert_eq!(cfg.mirror_dir(), Path::new("/tmp/nd/notes"));
        assert_eq!(cfg.users_dir(), Path::new("/tmp/nd/users"));
        assert_eq!(cfg.sessions_dir(), Path::new("/tmp/nd/sessions"));
    }

    #[test]
    fn test_rejects_empty_grammar_url() {
        let result = CoreConfig::new(PathBuf::from("/tmp/nd"), "  ".into(), false);
        assert!(matches!(result, Err(NoteError::InvalidInput(_))));
    }
}
