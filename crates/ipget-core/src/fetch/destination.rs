//! Destination path resolution and directory preparation.

use super::DownloadRequest;
use crate::error::FetchError;
use std::fs;
use std::path::{Path, PathBuf};

/// Where a download lands on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDestination {
    /// Empty when the file goes to the working directory.
    pub directory: PathBuf,
    pub file_name: String,
    pub full_path: PathBuf,
}

/// Substring after the last `/` of `url` (the whole string when there is none).
pub fn file_name_from_url(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

/// Resolves the request's file name and full path. Pure; touches nothing on disk.
pub fn resolve(request: &DownloadRequest) -> ResolvedDestination {
    let file_name = if request.file_name.is_empty() {
        file_name_from_url(&request.source_url).to_string()
    } else {
        request.file_name.clone()
    };
    let directory = PathBuf::from(&request.directory);
    let full_path = if request.directory.is_empty() {
        PathBuf::from(&file_name)
    } else {
        directory.join(&file_name)
    };
    ResolvedDestination {
        directory,
        file_name,
        full_path,
    }
}

/// Ensures `dir` is a directory, creating it (and ancestors) owner-only when missing.
pub fn prepare_directory(dir: &Path) -> Result<(), FetchError> {
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(FetchError::NotADirectory {
            path: dir.to_path_buf(),
        }),
        Err(_) => {
            tracing::warn!(dir = %dir.display(), "directory does not exist, creating it");
            create_private_dir_all(dir).map_err(|source| FetchError::DirectoryCreate {
                path: dir.to_path_buf(),
                source,
            })
        }
    }
}

#[cfg(unix)]
fn create_private_dir_all(dir: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new().recursive(true).mode(0o700).create(dir)
}

#[cfg(not(unix))]
fn create_private_dir_all(dir: &Path) -> std::io::Result<()> {
    fs::DirBuilder::new().recursive(true).create(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchErrorKind;

    fn request(url: &str, name: &str, dir: &str) -> DownloadRequest {
        DownloadRequest::new(url).with_file_name(name).in_directory(dir)
    }

    #[test]
    fn name_from_last_segment() {
        assert_eq!(file_name_from_url("http://gw.example/ipfs/Qm123"), "Qm123");
        assert_eq!(file_name_from_url("http://gw.example/a/b/seg"), "seg");
        assert_eq!(file_name_from_url("no-slash"), "no-slash");
        assert_eq!(file_name_from_url("http://gw.example/ipfs/"), "");
    }

    #[test]
    fn bare_name_in_working_dir() {
        let d = resolve(&request("http://gw.example/ipfs/Qm123", "", ""));
        assert_eq!(d.file_name, "Qm123");
        assert_eq!(d.directory, PathBuf::new());
        assert_eq!(d.full_path, PathBuf::from("Qm123"));
    }

    #[test]
    fn explicit_name_and_directory() {
        let d = resolve(&request("http://gw.example/ipfs/Qm123", "notes.txt", "out/docs"));
        assert_eq!(d.file_name, "notes.txt");
        assert_eq!(d.full_path, Path::new("out/docs").join("notes.txt"));
    }

    #[test]
    fn existing_directory_accepted() {
        let dir = tempfile::tempdir().unwrap();
        prepare_directory(dir.path()).unwrap();
    }

    #[test]
    fn regular_file_is_not_a_directory() {
        let f = tempfile::NamedTempFile::new().unwrap();
        let err = prepare_directory(f.path()).unwrap_err();
        assert_eq!(err.kind(), FetchErrorKind::NotADirectory);
    }

    #[test]
    fn missing_ancestors_created() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a").join("b").join("c");
        prepare_directory(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn created_directory_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("private");
        prepare_directory(&dir).unwrap();
        let mode = fs::metadata(&dir).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o700);
    }

    #[test]
    fn create_under_a_file_fails() {
        let f = tempfile::NamedTempFile::new().unwrap();
        let err = prepare_directory(&f.path().join("sub")).unwrap_err();
        assert_eq!(err.kind(), FetchErrorKind::DirectoryCreate);
    }
}
