//! Raw POST against the daemon API.

use crate::error::ApiError;
use crate::transport::Transport;
use std::time::Duration;

/// POSTs an empty body to `url` and returns the whole response body.
///
/// Dials directly with `connect_timeout`. HTTP statuses >= 400 surface as
/// [`ApiError::Transport`].
pub fn post_api_call(url: &str, connect_timeout: Duration) -> Result<Vec<u8>, ApiError> {
    let transport_err = |source: curl::Error| ApiError::Transport {
        url: url.to_string(),
        source,
    };

    let mut easy = Transport::direct(connect_timeout)
        .post(url)
        .map_err(transport_err)?;
    let mut body = Vec::new();
    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(transport_err)?;
        transfer.perform().map_err(transport_err)?;
    }
    tracing::debug!(url, bytes = body.len(), "api call complete");
    Ok(body)
}
