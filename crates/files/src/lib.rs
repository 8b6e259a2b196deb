//! Notedown file storage
//!
//! This crate provides the filesystem layer behind Notedown's note export
//! directory: a flat folder of `.md` files named after sanitized note titles.
//!
//! ## Design principles
//!
//! - One directory, no nesting: exported notes live side by side
//! - File names are validated before any path is built, so request-supplied
//!   names can never escape the directory
//! - Writes overwrite silently; the export is a point-in-time copy, not a
//!   synchronized replica
//!
//! ## Example Usage
//!
//! ```no_run
//! use notedown_files::MarkdownDir;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = MarkdownDir::create(Path::new("notedown_data/notes"))?;
//! dir.write("shopping_list.md", "# Shopping\n\n- milk\n")?;
//! let names = dir.list()?;
//! # Ok(())
//! # }
//! ```

mod constants;
mod files;

pub use constants::MARKDOWN_EXTENSION;
pub use files::MarkdownDir;

/// Errors that can occur during file operations
#[derive(Debug, thiserror::Error)]
pub enum FilesError {
    /// Root directory does not exist, is not a directory, or cannot be created
    #[error("Invalid notes directory: {0}")]
    InvalidRootDirectory(String),

    /// File name validation failed (potential directory traversal or unsafe name)
    #[error("Invalid file name: {0}")]
    InvalidFileName(String),

    /// Requested file does not exist in the directory
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
