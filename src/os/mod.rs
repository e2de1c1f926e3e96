//! OS abstraction
//!
//! The process working directory is a single process-wide mutable pointer.
//! Rather than reaching for `std::env` ambiently, operations take an explicit
//! handle implementing [`WorkingDir`], so the global state is visible at the
//! call site and tests can substitute [`FakeWorkingDir`].

mod fake;
mod real;

pub use fake::FakeWorkingDir;
pub use real::SystemWorkingDir;

use std::io;
use std::path::{Path, PathBuf};

/// Access to the process-wide working directory.
///
/// Implementations perform no locking; the underlying OS primitive is itself
/// global and unsynchronized, so concurrent use interleaves with no ordering
/// guarantee. Serialization, where needed, belongs to the caller.
pub trait WorkingDir {
    /// Query the current working directory.
    fn current_dir(&self) -> io::Result<PathBuf>;

    /// Make `path` the current working directory.
    fn set_current_dir(&self, path: &Path) -> io::Result<()>;
}
