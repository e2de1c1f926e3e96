pub mod error;
pub mod os;
pub mod utils;
pub mod workdir;

pub use error::WorkdirError;
pub use os::{SystemWorkingDir, WorkingDir};
pub use workdir::{change_directory, change_directory_with, ChangeDirectoryReply};
