//! Directory change implementation

use std::path::{Path, PathBuf};

use crate::error::WorkdirError;
use crate::os::{SystemWorkingDir, WorkingDir};

/// Changes the process working directory to `target` and returns the
/// directory that was current immediately before the switch.
///
/// The target is handed to the OS as-is: no validation, canonicalization or
/// symlink policy beyond what the OS itself enforces. An empty path or one
/// exceeding the OS limit simply surfaces the OS error unmodified.
///
/// The working directory is process-wide state, shared with every thread and
/// inherited by child processes. This function performs no locking; callers
/// that run concurrently with other cwd-dependent code must serialize
/// externally.
pub fn change_directory(target: &Path) -> Result<PathBuf, WorkdirError> {
    change_directory_with(&SystemWorkingDir, target)
}

/// [`change_directory`] against an explicit [`WorkingDir`] handle.
///
/// The previous directory is queried before the change is attempted; if the
/// query fails (e.g. the current directory was deleted from under the
/// process), the change is not attempted at all. Success here promises the
/// previous directory, and that promise cannot be honored without it.
pub fn change_directory_with<O: WorkingDir>(
    os: &O,
    target: &Path,
) -> Result<PathBuf, WorkdirError> {
    let previous = os.current_dir().map_err(WorkdirError::QueryFailed)?;
    os.set_current_dir(target)
        .map_err(WorkdirError::ChangeFailed)?;
    Ok(previous)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::os::FakeWorkingDir;

    #[test]
    fn test_change_returns_previous_directory() {
        let os = FakeWorkingDir::new("/home/user");
        os.add_dir("/tmp");

        let previous = change_directory_with(&os, Path::new("/tmp")).unwrap();

        assert_eq!(previous, PathBuf::from("/home/user"));
        assert_eq!(os.current_dir().unwrap(), PathBuf::from("/tmp"));
    }

    #[test]
    fn test_change_to_current_directory_still_reports_previous() {
        let os = FakeWorkingDir::new("/home/user");

        let previous = change_directory_with(&os, Path::new("/home/user")).unwrap();

        assert_eq!(previous, PathBuf::from("/home/user"));
        assert_eq!(os.current_dir().unwrap(), PathBuf::from("/home/user"));
    }

    #[test]
    fn test_missing_target_surfaces_os_error_and_leaves_cwd() {
        let os = FakeWorkingDir::new("/home/user");

        let err = change_directory_with(&os, Path::new("/no/such/dir")).unwrap_err();

        assert!(matches!(err, WorkdirError::ChangeFailed(_)));
        assert_eq!(err.code(), 2); // ENOENT
        assert!(!err.to_string().is_empty());
        assert_eq!(os.current_dir().unwrap(), PathBuf::from("/home/user"));
    }

    #[test]
    fn test_query_failure_aborts_before_change_is_attempted() {
        let os = FakeWorkingDir::new("/home/user");
        os.add_dir("/tmp");
        os.fail_queries_with(2); // cwd deleted from under the process

        let err = change_directory_with(&os, Path::new("/tmp")).unwrap_err();

        assert!(matches!(err, WorkdirError::QueryFailed(_)));
        assert_eq!(err.code(), 2);
        assert_eq!(os.change_attempts(), 0);
    }

    #[test]
    fn test_round_trip_restores_original_directory() {
        let os = FakeWorkingDir::new("/a");
        os.add_dir("/b");
        os.add_dir("/c");

        change_directory_with(&os, Path::new("/b")).unwrap();
        let previous = change_directory_with(&os, Path::new("/c")).unwrap();
        assert_eq!(previous, PathBuf::from("/b"));

        change_directory_with(&os, Path::new("/a")).unwrap();
        assert_eq!(os.current_dir().unwrap(), PathBuf::from("/a"));
    }
}
