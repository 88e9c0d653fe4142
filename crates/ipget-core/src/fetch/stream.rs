//! Streams a GET response body into an open file.

use crate::error::FetchError;
use crate::transport::Transport;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// GETs `url` through `transport`, writing every body chunk to `file`.
/// Returns the number of bytes written. On failure, bytes already written stay.
pub(crate) fn stream_to_file(
    transport: &Transport,
    url: &str,
    file: &mut File,
    path: &Path,
) -> Result<u64, FetchError> {
    let transport_err = |source: curl::Error| FetchError::Transport {
        url: url.to_string(),
        source,
    };

    let mut easy = transport.get(url).map_err(transport_err)?;
    let mut written = 0u64;
    let mut write_err: Option<io::Error> = None;

    let performed = {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| match file.write_all(data) {
                Ok(()) => {
                    written += data.len() as u64;
                    Ok(data.len())
                }
                Err(e) => {
                    write_err = Some(e);
                    Ok(0) // short write aborts the transfer
                }
            })
            .map_err(transport_err)?;
        transfer.perform()
    };

    if let Some(source) = write_err {
        return Err(FetchError::Write {
            path: path.to_path_buf(),
            source,
        });
    }
    performed.map_err(transport_err)?;

    file.flush().map_err(|source| FetchError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(written)
}
