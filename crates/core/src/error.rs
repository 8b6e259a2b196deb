#[derive(Debug, thiserror::Error)]
pub enum NoteError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("note content is required")]
    MissingContent,
    #[error("note not found: {0}")]
    NotFound(uuid::Uuid),
    #[error("file not found: {0}")]
    FileNotFound(String),
    #[error("invalid file name: {0}")]
    InvalidFilename(String),
    #[error("username and password are required")]
    MissingCredentials,
    #[error("invalid username")]
    InvalidUsername,
    #[error("username already exists")]
    UserExists,
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("invalid or expired token")]
    InvalidToken,
    #[error("failed to create storage directory: {0}")]
    StorageDirCreation(std::io::Error),
    #[error("failed to write document: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to read document: {0}")]
    FileRead(std::io::Error),
    #[error("failed to delete document: {0}")]
    FileDelete(std::io::Error),
    #[error("failed to serialize document: {0}")]
    Serialization(serde_json::Error),
    #[error("failed to deserialize document: {0}")]
    Deserialization(serde_json::Error),
    #[error("failed to hash password: {0}")]
    PasswordHash(String),
    #[error("grammar check failed: {0}")]
    GrammarCheck(String),
    #[error("file storage error: {0}")]
    Files(notedown_files::FilesError),
}

impl From<notedown_files::FilesError> for NoteError {
    fn from(err: notedown_files::FilesError) -> Self {
        match err {
            notedown_files::FilesError::FileNotFound(name) => NoteError::FileNotFound(name),
            notedown_files::FilesError::InvalidFileName(name) => NoteError::InvalidFilename(name),
            other => NoteError::Files(other),
        }
    }
}

pub type NoteResult<T> = std::result::Result<T, NoteError>;
