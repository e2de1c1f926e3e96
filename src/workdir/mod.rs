//! Workdir module
//!
//! Changes the process working directory and reports the previous one,
//! so the caller can restore it later.

mod operations;
mod results;

// Re-export public types and functions
pub use operations::{change_directory, change_directory_with};
pub use results::ChangeDirectoryReply;
