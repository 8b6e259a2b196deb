//! User registration and credential verification.
//!
//! Users are stored one JSON document per user:
//!
//! ```text
//! <data_dir>/users/<username>.json
//! ```
//!
//! Passwords are hashed with argon2; the clear text never touches disk.
//! This module only answers "are these credentials valid"; token issuance
//! lives in [`sessions`](super::sessions).

use crate::config::CoreConfig;
use crate::error::{NoteError, NoteResult};
use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

const MAX_USERNAME_LEN: usize = 64;

/// Stored user document.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct User {
    username: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

/// Service for user registration and login checks.
#[derive(Clone, Debug)]
pub struct UserService {
    cfg: Arc<CoreConfig>,
}

impl UserService {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self { cfg }
    }

    /// Registers a new user with an argon2 password hash.
    ///
    /// # Errors
    ///
    /// - `NoteError::MissingCredentials` when either field is empty
    /// - `NoteError::InvalidUsername` when the username contains characters
    ///   outside `[A-Za-z0-9._-]`, starts with a dot, or is too long
    /// - `NoteError::UserExists` when the username is taken
    pub fn register(&self, username: &str, password: &str) -> NoteResult<()> {
        validate_credentials(username, password)?;

        let path = self.document_path(username);
        if path.exists() {
            return Err(NoteError::UserExists);
        }

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| NoteError::PasswordHash(e.to_string()))?
            .to_string();

        let user = User {
            username: username.to_string(),
            password_hash,
            created_at: Utc::now(),
        };

        fs::create_dir_all(self.cfg.users_dir()).map_err(NoteError::StorageDirCreation)?;
        let json = serde_json::to_string_pretty(&user).map_err(NoteError::Serialization)?;
        fs::write(&path, json).map_err(NoteError::FileWrite)?;

        tracing::info!(username, "user registered");
        Ok(())
    }

    /// Verifies a username/password pair.
    ///
    /// Unknown users and wrong passwords both return
    /// `NoteError::InvalidCredentials`, so callers cannot distinguish the
    /// two cases.
    pub fn login(&self, username: &str, password: &str) -> NoteResult<()> {
        validate_credentials(username, password)?;

        let path = self.document_path(username);
        if !path.is_file() {
            return Err(NoteError::InvalidCredentials);
        }

        let contents = fs::read_to_string(&path).map_err(NoteError::FileRead)?;
        let user: User = serde_json::from_str(&contents).map_err(NoteError::Deserialization)?;

        let parsed = PasswordHash::new(&user.password_hash)
            .map_err(|e| NoteError::PasswordHash(e.to_string()))?;

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .map_err(|_| NoteError::InvalidCredentials)
    }

    fn document_path(&self, username: &str) -> PathBuf {
        self.cfg.users_dir().join(format!("{}.json", username))
    }
}

fn validate_credentials(username: &str, password: &str) -> NoteResult<()> {
    if username.trim().is_empty() || password.is_empty() {
        return Err(NoteError::MissingCredentials);
    }

    // The username doubles as a file name.
    let safe = username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
    if !safe || username.starts_with('.') || username.len() > MAX_USERNAME_LEN {
        return Err(NoteError::InvalidUsername);
    }

    Ok(())
}
