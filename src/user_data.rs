//! Launch user-data resolution.
//!
//! User data reaches a `RunInstances` request either inline or from a file.
//! Both paths go through here so the CLI and configuration defaults apply
//! the same rules.

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8::Dir};
use thiserror::Error;

/// Errors raised while resolving user data.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum UserDataError {
    /// Raised when both inline and file sources are provided.
    #[error("user data cannot be provided both inline and via file")]
    BothProvided,
    /// Raised when an inline payload is empty or only whitespace.
    #[error("user data must not be empty")]
    InlineEmpty,
    /// Raised when a file path is empty or only whitespace.
    #[error("user data file path must not be empty")]
    FilePathEmpty,
    /// Raised when a file resolves to empty or only whitespace.
    #[error("user data file must not be empty")]
    FileEmpty,
    /// Raised when reading the file fails.
    #[error("failed to read user data file `{path}`: {message}")]
    FileRead {
        /// Expanded path that failed to read.
        path: String,
        /// Underlying error message.
        message: String,
    },
}

/// Resolves user data from either an inline value or a file path.
///
/// The returned payload preserves the original content; only emptiness is
/// checked on a trimmed copy.
///
/// # Errors
///
/// Returns [`UserDataError`] when both sources are set, a source is empty,
/// or the file cannot be read.
pub fn resolve_user_data(
    inline: Option<&str>,
    file: Option<&str>,
) -> Result<Option<String>, UserDataError> {
    if inline.is_some() && file.is_some() {
        return Err(UserDataError::BothProvided);
    }

    if let Some(payload) = inline {
        if payload.trim().is_empty() {
            return Err(UserDataError::InlineEmpty);
        }
        return Ok(Some(payload.to_owned()));
    }

    let Some(path) = file else {
        return Ok(None);
    };

    if path.trim().is_empty() {
        return Err(UserDataError::FilePathEmpty);
    }

    let expanded = expand_tilde(path);
    let content = read_to_string_ambient(&expanded).map_err(|message| UserDataError::FileRead {
        path: expanded.clone(),
        message,
    })?;

    if content.trim().is_empty() {
        return Err(UserDataError::FileEmpty);
    }

    Ok(Some(content))
}

/// Expands a leading `~/` using `HOME`. Other paths are returned unchanged.
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match (path.strip_prefix("~/"), std::env::var("HOME")) {
        (Some(rest), Ok(home)) => format!("{}/{rest}", home.trim_end_matches('/')),
        _ => path.to_owned(),
    }
}

fn read_to_string_ambient(path: &str) -> Result<String, String> {
    let path_buf = Utf8Path::new(path);

    let (dir_path, file_path) = if path_buf.is_absolute() {
        let parent = path_buf
            .parent()
            .ok_or_else(|| format!("path has no parent directory: {path_buf}"))?;
        let file_name = path_buf
            .file_name()
            .ok_or_else(|| format!("path has no file name: {path_buf}"))?;
        (parent, Utf8Path::new(file_name))
    } else {
        (Utf8Path::new("."), path_buf)
    };

    let dir =
        Dir::open_ambient_dir(dir_path, ambient_authority()).map_err(|err| err.to_string())?;
    dir.read_to_string(file_path).map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    #[rstest]
    fn returns_none_without_sources() {
        assert_eq!(resolve_user_data(None, None), Ok(None));
    }

    #[rstest]
    fn rejects_both_sources() {
        assert_eq!(
            resolve_user_data(Some("#!/bin/sh"), Some("/tmp/user-data")),
            Err(UserDataError::BothProvided)
        );
    }

    #[rstest]
    #[case(Some("  "), None, UserDataError::InlineEmpty)]
    #[case(None, Some(" "), UserDataError::FilePathEmpty)]
    fn rejects_blank_sources(
        #[case] inline: Option<&str>,
        #[case] file: Option<&str>,
        #[case] expected: UserDataError,
    ) {
        assert_eq!(resolve_user_data(inline, file), Err(expected));
    }

    #[rstest]
    fn reads_file_payload_verbatim() {
        let tmp = TempDir::new().unwrap_or_else(|err| panic!("tempdir: {err}"));
        let path = tmp.path().join("user-data.sh");
        std::fs::write(&path, "#!/bin/sh\necho ready\n")
            .unwrap_or_else(|err| panic!("write: {err}"));
        let path_str = path.to_string_lossy().into_owned();

        let payload = resolve_user_data(None, Some(&path_str))
            .unwrap_or_else(|err| panic!("resolve: {err}"));

        assert_eq!(payload.as_deref(), Some("#!/bin/sh\necho ready\n"));
    }

    #[rstest]
    fn rejects_whitespace_file() {
        let tmp = TempDir::new().unwrap_or_else(|err| panic!("tempdir: {err}"));
        let path = tmp.path().join("empty.txt");
        std::fs::write(&path, " \n\t").unwrap_or_else(|err| panic!("write: {err}"));
        let path_str = path.to_string_lossy().into_owned();

        assert_eq!(
            resolve_user_data(None, Some(&path_str)),
            Err(UserDataError::FileEmpty)
        );
    }

    #[rstest]
    fn reports_missing_file_path() {
        let tmp = TempDir::new().unwrap_or_else(|err| panic!("tempdir: {err}"));
        let missing = tmp.path().join("missing.txt").to_string_lossy().into_owned();

        let err = resolve_user_data(None, Some(&missing)).expect_err("missing file should fail");

        assert!(
            matches!(err, UserDataError::FileRead { ref path, .. } if *path == missing),
            "unexpected error: {err}"
        );
    }
}
