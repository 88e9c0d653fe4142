//! Post-download content check.
//!
//! The daemon can answer a gateway GET with status 200 and this text as the
//! whole body when path resolution times out. Only an exact match counts.

use crate::error::FetchError;
use std::path::Path;

/// Exact body the daemon sends on a path-resolve timeout.
pub const REMOTE_TIMEOUT_SENTINEL: &str = "Path Resolve error: context deadline exceeded";

/// Rejects `body` (read back from `path`) when it is exactly the timeout sentinel.
pub fn validate_download(body: &[u8], path: &Path) -> Result<(), FetchError> {
    if body == REMOTE_TIMEOUT_SENTINEL.as_bytes() {
        return Err(FetchError::RemoteTimeout {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}
