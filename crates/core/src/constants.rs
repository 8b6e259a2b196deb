/// Default data directory when `NOTEDOWN_DATA_DIR` is not set.
pub const DEFAULT_DATA_DIR: &str = "notedown_data";

/// Subdirectory of the data directory holding note documents.
pub const STORE_DIR_NAME: &str = "store";

/// Subdirectory of the data directory holding exported `.md` files.
pub const MIRROR_DIR_NAME: &str = "notes";

/// Subdirectory of the data directory holding user documents.
pub const USERS_DIR_NAME: &str = "users";

/// Subdirectory of the data directory holding session documents.
pub const SESSIONS_DIR_NAME: &str = "sessions";

/// Title given to notes created without one.
pub const UNTITLED: &str = "Untitled";

/// Default page number for note listings.
pub const DEFAULT_PAGE: usize = 1;

/// Default page size for note listings.
pub const DEFAULT_LIMIT: usize = 5;

/// Grammar-check endpoint used when `NOTEDOWN_GRAMMAR_URL` is not set.
pub const DEFAULT_GRAMMAR_API_URL: &str = "https://api.languagetoolplus.com/v2/check";

/// How long an issued bearer token stays valid.
pub const SESSION_TTL_SECS: i64 = 3600;
