//! Host-facing reply shape
//!
//! Host scripting runtimes see this operation as "previous path, or
//! (nil, message, code)". The binding layer that registers the function is
//! external to this crate; [`ChangeDirectoryReply`] is the shape it hands
//! across, produced from the library result with no logic of its own.

use std::path::PathBuf;

use crate::error::WorkdirError;

/// Outcome of a change-directory call as the host sees it.
///
/// Exactly one form per call: a previous path on success, or a
/// message/code pair on failure. The host's `nil` marker for the failure
/// case is the discriminant itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeDirectoryReply {
    /// The working directory before the switch.
    Previous(String),
    /// The OS-supplied message and error code for the failed call.
    Failure { message: String, code: i32 },
}

impl From<Result<PathBuf, WorkdirError>> for ChangeDirectoryReply {
    fn from(result: Result<PathBuf, WorkdirError>) -> Self {
        match result {
            Ok(previous) => {
                ChangeDirectoryReply::Previous(previous.to_string_lossy().into_owned())
            }
            Err(err) => ChangeDirectoryReply::Failure {
                message: err.source_io().to_string(),
                code: err.code(),
            },
        }
    }
}
