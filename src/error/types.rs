//! Error types
//!
//! All failures originate in the operating system; this crate adds no
//! interpretation of its own. Each variant carries the underlying OS error
//! so callers get the OS-supplied message text and the numeric error code.

use std::fmt;
use std::io;

/// Working-directory operation errors
#[derive(Debug)]
pub enum WorkdirError {
    /// The current working directory could not be determined (e.g. it was
    /// deleted from under the process). The change is never attempted in
    /// this case.
    QueryFailed(io::Error),
    /// The target could not be made the current working directory
    /// (nonexistent path, not a directory, permission denied, ...).
    ChangeFailed(io::Error),
}

impl WorkdirError {
    /// The OS error code (POSIX `errno` value), or 0 when the underlying
    /// error carries no OS code.
    pub fn code(&self) -> i32 {
        self.source_io().raw_os_error().unwrap_or(0)
    }

    /// The underlying OS error.
    pub fn source_io(&self) -> &io::Error {
        match self {
            WorkdirError::QueryFailed(e) => e,
            WorkdirError::ChangeFailed(e) => e,
        }
    }
}

impl fmt::Display for WorkdirError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkdirError::QueryFailed(e) => {
                write!(f, "Failed to query current directory: {}", e)
            }
            WorkdirError::ChangeFailed(e) => write!(f, "Failed to change directory: {}", e),
        }
    }
}

impl std::error::Error for WorkdirError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source_io())
    }
}
