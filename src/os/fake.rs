//! In-memory working directory for tests
//!
//! Tracks a directory set and a current directory without touching the real
//! process state, and counts change attempts so callers can assert that a
//! failed query short-circuits before any change is tried.

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::WorkingDir;

// POSIX errno values used by the fake.
const ENOENT: i32 = 2;

/// Fake [`WorkingDir`] backed by in-memory state.
pub struct FakeWorkingDir {
    dirs: Mutex<HashSet<PathBuf>>,
    cwd: Mutex<PathBuf>,
    query_error: Mutex<Option<i32>>,
    change_attempts: AtomicUsize,
}

impl FakeWorkingDir {
    /// Create a fake whose current directory is `cwd`. The directory is
    /// registered as existing.
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        let cwd = cwd.into();
        let mut dirs = HashSet::new();
        dirs.insert(cwd.clone());
        Self {
            dirs: Mutex::new(dirs),
            cwd: Mutex::new(cwd),
            query_error: Mutex::new(None),
            change_attempts: AtomicUsize::new(0),
        }
    }

    /// Register a directory that `set_current_dir` will accept.
    pub fn add_dir(&self, path: impl Into<PathBuf>) {
        self.dirs.lock().unwrap().insert(path.into());
    }

    /// Make every subsequent `current_dir` call fail with the given errno.
    pub fn fail_queries_with(&self, code: i32) {
        *self.query_error.lock().unwrap() = Some(code);
    }

    /// Number of times `set_current_dir` has been called, successful or not.
    pub fn change_attempts(&self) -> usize {
        self.change_attempts.load(Ordering::SeqCst)
    }
}

impl WorkingDir for FakeWorkingDir {
    fn current_dir(&self) -> io::Result<PathBuf> {
        if let Some(code) = *self.query_error.lock().unwrap() {
            return Err(io::Error::from_raw_os_error(code));
        }
        Ok(self.cwd.lock().unwrap().clone())
    }

    fn set_current_dir(&self, path: &Path) -> io::Result<()> {
        self.change_attempts.fetch_add(1, Ordering::SeqCst);
        if !self.dirs.lock().unwrap().contains(path) {
            return Err(io::Error::from_raw_os_error(ENOENT));
        }
        *self.cwd.lock().unwrap() = path.to_path_buf();
        Ok(())
    }
}
