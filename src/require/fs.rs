//! File-system existence guards
//!
//! Best-effort checks: existence is evaluated at call time and can be stale
//! by the time the path is used (the classic TOCTOU window). These guards
//! catch obviously missing resources early; they are not a reservation.

use std::path::Path;

use crate::{Error, Result};

/// Fails when `value` does not currently name an existing file, otherwise
/// passes the path through.
///
/// # Errors
/// Returns [`Error::NotFound`] carrying the probed path
///
/// # Examples
///
/// ```rust
/// use guardpost::require::fs;
///
/// assert!(fs::file_exists("/definitely/not/here.toml").is_err());
/// ```
pub fn file_exists<P>(value: P) -> Result<P>
where
    P: AsRef<Path>,
{
    if !value.as_ref().is_file() {
        return Err(Error::not_found(value.as_ref()));
    }

    Ok(value)
}

/// Fails when `value` does not currently name an existing directory,
/// otherwise passes the path through.
///
/// # Errors
/// Returns [`Error::NotFound`] carrying the probed path
pub fn directory_exists<P>(value: P) -> Result<P>
where
    P: AsRef<Path>,
{
    if !value.as_ref().is_dir() {
        return Err(Error::not_found(value.as_ref()));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_temp_file_is_found() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file_exists(file.path()).unwrap();
        assert_eq!(path, file.path());
    }

    #[test]
    fn deleted_path_reports_not_found() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_path_buf();
        drop(file);

        match file_exists(&path).unwrap_err() {
            Error::NotFound { path: reported } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn directories_and_files_are_distinguished() {
        let dir = tempfile::tempdir().unwrap();
        assert!(directory_exists(dir.path()).is_ok());
        assert!(file_exists(dir.path()).is_err());
        assert!(directory_exists(dir.path().join("missing")).is_err());
    }
}
