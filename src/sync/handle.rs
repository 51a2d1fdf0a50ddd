//! File handles for ledger persistence
//!
//! The session never touches storage media directly. It reads and writes
//! whole-file text through a [`FileHandle`], which the file picker provides.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{LedgerError, LedgerResult};
use crate::storage::write_text_atomic;

/// A readable and writable text file bound to the session
pub trait FileHandle: fmt::Debug {
    /// Read the full contents as text
    fn read_all(&self) -> LedgerResult<String>;

    /// Replace the full contents
    fn write_all(&self, contents: &str) -> LedgerResult<()>;

    /// Location on disk, when the handle has one
    fn path(&self) -> Option<&Path> {
        None
    }

    /// Short description for messages and logs
    fn describe(&self) -> String;
}

/// A CSV file on local disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    path: PathBuf,
}

impl LocalFile {
    /// Bind a path that will be created or overwritten on first write
    pub fn create(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Bind an existing file
    pub fn open(path: impl Into<PathBuf>) -> LedgerResult<Self> {
        let path = path.into();
        if !path.is_file() {
            return Err(LedgerError::Io(format!(
                "File not found: {}",
                path.display()
            )));
        }
        Ok(Self { path })
    }
}

impl FileHandle for LocalFile {
    fn read_all(&self) -> LedgerResult<String> {
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            LedgerError::Io(format!("Failed to read {}: {}", self.path.display(), e))
        })?;
        info!(path = %self.path.display(), bytes = contents.len(), "Read ledger file");
        Ok(contents)
    }

    fn write_all(&self, contents: &str) -> LedgerResult<()> {
        // Temp file + rename: the writable is always closed, and a failed write
        // leaves the previous contents in place
        write_text_atomic(&self.path, contents)?;
        info!(path = %self.path.display(), bytes = contents.len(), "Wrote ledger file");
        Ok(())
    }

    fn path(&self) -> Option<&Path> {
        Some(&self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
