//! Markdown directory service implementation
//!
//! This module provides the [`MarkdownDir`] type, a scoped handle on the flat
//! directory where Notedown exports notes as `.md` files.
//!
//! # Security model
//!
//! File names arrive from HTTP request paths and bodies, so every operation
//! validates the name before joining it onto the root:
//!
//! - no path separators (`/`, `\`)
//! - no parent references (`..`) and no leading dot
//! - only ASCII letters, digits, space, `.`, `_` and `-`
//!
//! The root directory is canonicalised at construction time, which also
//! defeats symlinked roots pointing outside the intended tree.
//!
//! # Implementation notes
//!
//! - The handle is cheap to construct; `create` performs the only up-front
//!   I/O (mkdir -p plus canonicalisation)
//! - Writes overwrite existing files of the same name without warning

use crate::{FilesError, MARKDOWN_EXTENSION};
use std::fs;
use std::path::{Path, PathBuf};

/// A validated handle on the directory holding exported markdown notes.
///
/// All operations are scoped to the root directory passed at construction.
#[derive(Debug, Clone)]
pub struct MarkdownDir {
    root: PathBuf,
}

impl MarkdownDir {
    /// Opens the directory, creating it (and its parents) when absent.
    ///
    /// # Errors
    ///
    /// Returns `FilesError::InvalidRootDirectory` if the path exists but is
    /// not a directory, or if creation/canonicalisation fails.
    pub fn create(root: &Path) -> Result<Self, FilesError> {
        if root.exists() && !root.is_dir() {
            return Err(FilesError::InvalidRootDirectory(format!(
                "Path is not a directory: {}",
                root.display()
            )));
        }

        fs::create_dir_all(root).map_err(|e| {
            FilesError::InvalidRootDirectory(format!(
                "Cannot create directory {}: {}",
                root.display(),
                e
            ))
        })?;

        let root = root.canonicalize().map_err(|e| {
            FilesError::InvalidRootDirectory(format!(
                "Cannot canonicalize path {}: {}",
                root.display(),
                e
            ))
        })?;

        Ok(Self { root })
    }

    /// Writes `content` to `file_name` inside the directory, overwriting any
    /// existing file of that name.
    ///
    /// Returns the absolute path of the written file.
    ///
    /// # Errors
    ///
    /// Returns `FilesError` if the name fails validation or the write fails.
    pub fn write(&self, file_name: &str, content: &str) -> Result<PathBuf, FilesError> {
        let path = self.resolve(file_name)?;

        fs::write(&path, content).map_err(|e| {
            FilesError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write file {}: {}", path.display(), e),
            ))
        })?;

        Ok(path)
    }

    /// Reads the content of `file_name` as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns `FilesError::FileNotFound` when the file does not exist, or an
    /// I/O error when it cannot be read.
    pub fn read(&self, file_name: &str) -> Result<String, FilesError> {
        let path = self.resolve(file_name)?;

        if !path.is_file() {
            return Err(FilesError::FileNotFound(file_name.to_string()));
        }

        fs::read_to_string(&path).map_err(|e| {
            FilesError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read file {}: {}", path.display(), e),
            ))
        })
    }

    /// Lists the names of all `.md` files in the directory, sorted.
    ///
    /// Subdirectories and files with other extensions are ignored.
    pub fn list(&self) -> Result<Vec<String>, FilesError> {
        let mut names = Vec::new();

        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some(MARKDOWN_EXTENSION) {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                names.push(name.to_string());
            }
        }

        names.sort();
        Ok(names)
    }

    /// Resolves `file_name` to an absolute path inside the directory,
    /// verifying that the file exists.
    ///
    /// # Errors
    ///
    /// Returns `FilesError::FileNotFound` when absent, or
    /// `FilesError::InvalidFileName` when the name fails validation.
    pub fn existing_path(&self, file_name: &str) -> Result<PathBuf, FilesError> {
        let path = self.resolve(file_name)?;
        if !path.is_file() {
            return Err(FilesError::FileNotFound(file_name.to_string()));
        }
        Ok(path)
    }

    /// Returns the root directory this handle is scoped to.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Validates `file_name` and joins it onto the root.
    fn resolve(&self, file_name: &str) -> Result<PathBuf, FilesError> {
        validate_file_name(file_name)?;
        Ok(self.root.join(file_name))
    }
}

/// Checks that a request-supplied file name is safe to join onto a directory.
///
/// Rejects empty names, path separators, parent references, hidden-file
/// prefixes and characters outside `[A-Za-z0-9. _-]`.
pub fn validate_file_name(file_name: &str) -> Result<(), FilesError> {
    if file_name.is_empty() {
        return Err(FilesError::InvalidFileName("empty name".to_string()));
    }

    if file_name.starts_with('.') {
        return Err(FilesError::InvalidFileName(file_name.to_string()));
    }

    if file_name.contains("..") {
        return Err(FilesError::InvalidFileName(file_name.to_string()));
    }

    let safe = file_name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-' | ' '));
    if !safe {
        return Err(FilesError::InvalidFileName(file_name.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_create_makes_missing_directory() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("notes");

        let dir = MarkdownDir::create(&root).unwrap();

        assert!(root.is_dir());
        assert!(dir.root().ends_with("notes"));
    }

    #[test]
    fn test_create_rejects_file_as_root() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("notes");
        fs::write(&root, "not a directory").unwrap();

        let result = MarkdownDir::create(&root);

        assert!(matches!(result, Err(FilesError::InvalidRootDirectory(_))));
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let temp = TempDir::new().unwrap();
        let dir = MarkdownDir::create(temp.path()).unwrap();

        let path = dir.write("groceries.md", "# Groceries\n\n- eggs\n").unwrap();

        assert!(path.is_file());
        assert_eq!(dir.read("groceries.md").unwrap(), "# Groceries\n\n- eggs\n");
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let temp = TempDir::new().unwrap();
        let dir = MarkdownDir::create(temp.path()).unwrap();

        dir.write("draft.md", "first").unwrap();
        dir.write("draft.md", "second").unwrap();

        assert_eq!(dir.read("draft.md").unwrap(), "second");
        assert_eq!(dir.list().unwrap().len(), 1);
    }

    #[test]
    fn test_read_missing_file() {
        let temp = TempDir::new().unwrap();
        let dir = MarkdownDir::create(temp.path()).unwrap();

        let result = dir.read("missing.md");

        assert!(matches!(result, Err(FilesError::FileNotFound(_))));
    }

    #[test]
    fn test_list_only_markdown_files() {
        let temp = TempDir::new().unwrap();
        let dir = MarkdownDir::create(temp.path()).unwrap();

        dir.write("b.md", "b").unwrap();
        dir.write("a.md", "a").unwrap();
        fs::write(temp.path().join("notes.txt"), "ignored").unwrap();
        fs::create_dir(temp.path().join("sub.md")).unwrap();

        assert_eq!(dir.list().unwrap(), vec!["a.md", "b.md"]);
    }

    #[test]
    fn test_existing_path_checks_presence() {
        let temp = TempDir::new().unwrap();
        let dir = MarkdownDir::create(temp.path()).unwrap();

        dir.write("real.md", "x").unwrap();

        assert!(dir.existing_path("real.md").is_ok());
        assert!(matches!(
            dir.existing_path("fake.md"),
            Err(FilesError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_validate_rejects_traversal_names() {
        for name in ["../etc/passwd", "a/b.md", "a\\b.md", "..", ".hidden.md", ""] {
            assert!(
                matches!(validate_file_name(name), Err(FilesError::InvalidFileName(_))),
                "name {:?} should be rejected",
                name
            );
        }
    }

    #[test]
    fn test_validate_accepts_plain_names() {
        for name in ["note.md", "my note 2.md", "a_b-c.md", "UPPER.md"] {
            assert!(validate_file_name(name).is_ok(), "name {:?} should pass", name);
        }
    }

    #[test]
    fn test_operations_reject_unsafe_names() {
        let temp = TempDir::new().unwrap();
        let dir = MarkdownDir::create(temp.path()).unwrap();

        assert!(matches!(
            dir.write("../escape.md", "x"),
            Err(FilesError::InvalidFileName(_))
        ));
        assert!(matches!(
            dir.read("../../etc/hosts"),
            Err(FilesError::InvalidFileName(_))
        ));
        assert!(matches!(
            dir.existing_path("a/b.md"),
            Err(FilesError::InvalidFileName(_))
        ));
    }
}
