//! Real OS working directory

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use super::WorkingDir;

/// The operating system's working directory, via `std::env`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemWorkingDir;

impl WorkingDir for SystemWorkingDir {
    fn current_dir(&self) -> io::Result<PathBuf> {
        env::current_dir()
    }

    fn set_current_dir(&self, path: &Path) -> io::Result<()> {
        env::set_current_dir(path)
    }
}
