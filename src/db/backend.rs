use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::AppResult;

/// Storage abstraction for the persisted user file
///
/// The store reads its backend once at startup and rewrites it in full after
/// every mutation, so implementations only need whole-content I/O.
#[cfg_attr(test, mockall::automock)]
pub trait UserBackend {
    /// Returns the persisted contents, or `None` if nothing has been stored yet
    fn read(&self) -> AppResult<Option<String>>;

    /// Replaces the persisted contents
    fn write(&mut self, contents: &str) -> AppResult<()>;
}

/// Backend storing users in a flat file on disk
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl UserBackend for FileBackend {
    fn read(&self) -> AppResult<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "User file not found, starting empty");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, contents: &str) -> AppResult<()> {
        std::fs::write(&self.path, contents)?;
        tracing::debug!(path = %self.path.display(), bytes = contents.len(), "User file rewritten");
        Ok(())
    }
}

/// Backend keeping the persisted contents in memory
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryBackend {
    contents: Option<String>,
}

impl MemoryBackend {
    /// Creates a backend that behaves as if nothing was ever stored
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl UserBackend for MemoryBackend {
    fn read(&self) -> AppResult<Option<String>> {
        Ok(self.contents.clone())
    }

    fn write(&mut self, contents: &str) -> AppResult<()> {
        self.contents = Some(contents.to_string());
        Ok(())
    }
}
