//! Bearer-token sessions.
//!
//! A login issues an opaque token: 32 random bytes, URL-safe base64 without
//! padding. The token text doubles as the session's document name:
//!
//! ```text
//! <data_dir>/sessions/<token>.json
//! ```
//!
//! Tokens expire after one hour. Expired documents are removed lazily when
//! verification encounters them; there is no background sweeper.

use crate::config::CoreConfig;
use crate::constants::SESSION_TTL_SECS;
use crate::error::{NoteError, NoteResult};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

/// Stored session document.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Session {
    username: String,
    issued_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

/// Service issuing and verifying bearer tokens.
#[derive(Clone, Debug)]
pub struct SessionService {
    cfg: Arc<CoreConfig>,
}

impl SessionService {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self { cfg }
    }

    /// Issues a fresh token for `username`, valid for one hour.
    pub fn issue(&self, username: &str) -> NoteResult<String> {
        let mut bytes = [0u8; 32];
        OsRng.fill_bytes(&mut bytes);
        let token = URL_SAFE_NO_PAD.encode(bytes);

        let now = Utc::now();
        let session = Session {
            username: username.to_string(),
            issued_at: now,
            expires_at: now + Duration::seconds(SESSION_TTL_SECS),
        };

        fs::create_dir_all(self.cfg.sessions_dir()).map_err(NoteError::StorageDirCreation)?;
        let json = serde_json::to_string_pretty(&session).map_err(NoteError::Serialization)?;
        fs::write(self.document_path(&token), json).map_err(NoteError::FileWrite)?;

        Ok(token)
    }

    /// Verifies a token, returning the username it was issued to.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::InvalidToken` for malformed, unknown and expired
    /// tokens. An expired session document is deleted on the way out.
    pub fn verify(&self, token: &str) -> NoteResult<String> {
        if !is_token_shaped(token) {
            return Err(NoteError::InvalidToken);
        }

        let path = self.document_path(token);
        if !path.is_file() {
            return Err(NoteError::InvalidToken);
        }

        let contents = fs::read_to_string(&path).map_err(NoteError::FileRead)?;
        let session: Session =
            serde_json::from_str(&contents).map_err(NoteError::Deserialization)?;

        if session.expires_at <= Utc::now() {
            if let Err(e) = fs::remove_file(&path) {
                tracing::warn!("failed to remove expired session {}: {}", path.display(), e);
            }
            return Err(NoteError::InvalidToken);
        }

        Ok(session.username)
    }

    fn document_path(&self, token: &str) -> PathBuf {
        self.cfg.sessions_dir().join(format!("{}.json", token))
    }
}

/// Tokens are exactly 43 characters of the URL-safe base64 alphabet
/// (32 bytes, no padding). Anything else never reaches the filesystem.
fn is_token_shaped(token: &str) -> bool {
    token.len() == 43
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_GRAMMAR_API_URL;
    use std::path::Path;
    use tempfile::TempDir;

    fn test_service(data_dir: &Path) -> SessionService {
        let cfg = Arc::new(
            CoreConfig::new(
                data_dir.to_path_buf(),
                DEFAULT_GRAMMAR_API_URL.to_string(),
                false,
            )
            .expect("CoreConfig::new should succeed"),
        );
        SessionService::new(cfg)
    }

    #[test]
    fn test_issue_then_verify() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let service = test_service(temp.path());

        let token = service.issue("alice").expect("issue should succeed");

        assert_eq!(token.len(), 43);
        assert_eq!(service.verify(&token).unwrap(), "alice");
    }

    #[test]
    fn test_tokens_are_unique() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let service = test_service(temp.path());

        let first = service.issue("alice").unwrap();
        let second = service.issue("alice").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_garbage_token_rejected() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let service = test_service(temp.path());

        let wrong_alphabet = "!".repeat(43);
        let unknown = "A".repeat(43);
        for token in ["", "short", "../../../etc/passwd", &wrong_alphabet, &unknown] {
            assert!(
                matches!(service.verify(token), Err(NoteError::InvalidToken)),
                "token {:?} should be rejected",
                token
            );
        }
    }

    #[test]
    fn test_expired_token_rejected_and_removed() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let service = test_service(temp.path());

        let token = service.issue("alice").unwrap();
        let path = service.document_path(&token);

        // Rewrite the session document with a past expiry.
        let stale = Session {
            username: "alice".into(),
            issued_at: Utc::now() - Duration::seconds(7200),
            expires_at: Utc::now() - Duration::seconds(3600),
        };
        std::fs::write(&path, serde_json::to_string_pretty(&stale).unwrap()).unwrap();

        let result = service.verify(&token);

        assert!(matches!(result, Err(NoteError::InvalidToken)));
        assert!(!path.exists(), "expired session document should be removed");
    }
}
