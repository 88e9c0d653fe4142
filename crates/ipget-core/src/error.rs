//! Error types for downloads and daemon API calls.
//!
//! Every variant carries the path or URL it failed on so the CLI can print
//! something actionable. Nothing here is retried internally.

use std::io;
use std::path::{Path, PathBuf};

/// Failure of a single [`fetch`](crate::fetch::fetch) call.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Proxy string did not parse as an absolute URL with a host.
    #[error("invalid proxy URL {proxy:?}: {reason}")]
    InvalidProxyUrl { proxy: String, reason: String },

    /// Missing destination directory could not be created.
    #[error("error making directory {}, check your permissions: {source}", path.display())]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Destination directory exists but is not a directory.
    #[error("{} is not a directory, please enter a directory", path.display())]
    NotADirectory { path: PathBuf },

    /// Destination file could not be created or truncated.
    #[error("create {}: {source}", path.display())]
    FileCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Connect, DNS, TLS, proxy or HTTP status failure reported by curl.
    #[error("GET {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },

    /// Local write failed while streaming the body. Bytes already written stay on disk.
    #[error("write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The just-written file could not be read back for validation.
    #[error("read back {}: {source}", path.display())]
    ReadBack {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Daemon answered 200 with its path-resolve timeout text instead of content.
    #[error(
        "a timeout occurred while trying to reach IPFS ({}); run `ipget cat {}` to warm the node, wait 5-10 seconds, then retry",
        path.display(),
        retry_target(path)
    )]
    RemoteTimeout { path: PathBuf },
}

/// Last component of a download path, usually the hash that was requested.
fn retry_target(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Discriminant of [`FetchError`] for callers that branch on the failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    InvalidProxyUrl,
    DirectoryCreate,
    NotADirectory,
    FileCreate,
    Transport,
    Write,
    ReadBack,
    RemoteTimeout,
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::InvalidProxyUrl { .. } => FetchErrorKind::InvalidProxyUrl,
            FetchError::DirectoryCreate { .. } => FetchErrorKind::DirectoryCreate,
            FetchError::NotADirectory { .. } => FetchErrorKind::NotADirectory,
            FetchError::FileCreate { .. } => FetchErrorKind::FileCreate,
            FetchError::Transport { .. } => FetchErrorKind::Transport,
            FetchError::Write { .. } => FetchErrorKind::Write,
            FetchError::ReadBack { .. } => FetchErrorKind::ReadBack,
            FetchError::RemoteTimeout { .. } => FetchErrorKind::RemoteTimeout,
        }
    }
}

/// Failure of a POST call against the daemon API or of decoding its answer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("POST {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },

    #[error("decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// `ls` answered without any object for the requested hash.
    #[error("no objects listed for {hash}")]
    EmptyListing { hash: String },
}
