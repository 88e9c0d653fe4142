//! Download-to-file.
//!
//! Resolves the destination, prepares its directory, creates the file,
//! builds a per-call transport, streams the GET body to disk, then reads
//! the file back and rejects the daemon's path-resolve timeout text.
//! Blocking; call from `spawn_blocking` if used from async code.

mod destination;
mod stream;
mod validate;

pub use destination::{file_name_from_url, prepare_directory, resolve, ResolvedDestination};
pub use validate::{validate_download, REMOTE_TIMEOUT_SENTINEL};

use crate::error::FetchError;
use crate::transport::{Transport, DEFAULT_CONNECT_TIMEOUT};
use std::fs::{self, File};
use std::path::Path;
use std::time::Duration;

/// One download. Empty strings mean "use the default" for every optional field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    /// Absolute HTTP URL to GET.
    pub source_url: String,
    /// Local file name; empty = last `/` segment of `source_url`.
    pub file_name: String,
    /// Target directory; empty = current working directory.
    pub directory: String,
    /// Proxy URL; empty = direct connection.
    pub proxy_url: String,
    /// Connect-phase bound for direct connections.
    pub connect_timeout: Duration,
}

impl DownloadRequest {
    pub fn new(source_url: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            file_name: String::new(),
            directory: String::new(),
            proxy_url: String::new(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn in_directory(mut self, directory: impl Into<String>) -> Self {
        self.directory = directory.into();
        self
    }

    pub fn via_proxy(mut self, proxy_url: impl Into<String>) -> Self {
        self.proxy_url = proxy_url.into();
        self
    }

    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }
}

/// Downloads `request.source_url` to its resolved destination.
///
/// Returns the number of bytes written. No retries; a failed call leaves
/// whatever was already written on disk.
pub fn fetch(request: &DownloadRequest) -> Result<u64, FetchError> {
    let dest = resolve(request);
    tracing::info!(
        from = %request.source_url,
        to = %dest.full_path.display(),
        "downloading"
    );

    if !request.directory.is_empty() {
        prepare_directory(&dest.directory)?;
    }

    let mut file = File::create(&dest.full_path).map_err(|source| FetchError::FileCreate {
        path: dest.full_path.clone(),
        source,
    })?;

    let transport = Transport::build(&request.proxy_url, request.connect_timeout)?;
    let written = stream::stream_to_file(&transport, &request.source_url, &mut file, &dest.full_path)?;
    drop(file);

    let body = read_back(&dest.full_path)?;
    validate_download(&body, &dest.full_path)?;

    tracing::debug!(bytes = written, path = %dest.full_path.display(), "download complete");
    Ok(written)
}

/// Reads the finished download back from disk for validation.
fn read_back(path: &Path) -> Result<Vec<u8>, FetchError> {
    fs::read(path).map_err(|source| FetchError::ReadBack {
        path: path.to_path_buf(),
        source,
    })
}
