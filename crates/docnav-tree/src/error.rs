//! Error types for directory classification and tree building.
//!
//! Every error is fatal to a generation run: there is no partial tree and
//! no retry guidance, so [`NavError`] only carries a semantic kind, the
//! offending path and the underlying source.

use std::path::{Path, PathBuf};

/// Semantic error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum NavErrorKind {
    /// Path does not exist.
    NotFound,
    /// Path exists but is not a directory.
    NotADirectory,
    /// Entry name cannot be decoded as UTF-8.
    MalformedEntry,
    /// Permission denied while listing or inspecting an entry.
    PermissionDenied,
    /// Other I/O or serialization failure.
    Other,
}

/// Navigation error with semantic kind and optional source.
#[derive(Debug)]
pub struct NavError {
    /// Semantic error category.
    pub kind: NavErrorKind,
    /// Path context (if applicable).
    pub path: Option<PathBuf>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl NavError {
    /// Create a new error of the given kind.
    #[must_use]
    pub fn new(kind: NavErrorKind) -> Self {
        Self {
            kind,
            path: None,
            source: None,
        }
    }

    /// Attach path context.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Create a not found error with path.
    #[must_use]
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::new(NavErrorKind::NotFound).with_path(path)
    }

    /// Create a not-a-directory error with path.
    #[must_use]
    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        Self::new(NavErrorKind::NotADirectory).with_path(path)
    }

    /// Create a malformed entry error for a name that is not valid UTF-8.
    #[must_use]
    pub fn malformed_entry(path: impl Into<PathBuf>) -> Self {
        Self::new(NavErrorKind::MalformedEntry).with_path(path)
    }

    /// Create an error from an I/O error encountered at `path`.
    #[must_use]
    pub fn io(err: std::io::Error, path: &Path) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => NavErrorKind::NotFound,
            std::io::ErrorKind::NotADirectory => NavErrorKind::NotADirectory,
            std::io::ErrorKind::PermissionDenied => NavErrorKind::PermissionDenied,
            _ => NavErrorKind::Other,
        };
        Self::new(kind).with_path(path).with_source(err)
    }
}

impl std::fmt::Display for NavError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "Kind: message (path: /foo/bar)"
        let kind_str = match self.kind {
            NavErrorKind::NotFound => "Not found",
            NavErrorKind::NotADirectory => "Not a directory",
            NavErrorKind::MalformedEntry => "Malformed entry name",
            NavErrorKind::PermissionDenied => "Permission denied",
            NavErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }

        Ok(())
    }
}

impl std::error::Error for NavError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}
