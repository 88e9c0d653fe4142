//! IPFS operations on top of the gateway and the daemon API.
//!
//! `get` downloads through the gateway with [`fetch`]. `cat` returns the
//! daemon's raw bytes; `ls` and `pinned` decode its JSON and format it as text.

mod call;
mod types;

pub use call::post_api_call;
pub use types::{format_links, format_pins, LsLink, LsObject, LsResponse, PinInfo, PinLsResponse};

use crate::config::IpgetConfig;
use crate::error::{ApiError, FetchError};
use crate::fetch::{fetch, DownloadRequest};
use serde::de::DeserializeOwned;

/// Downloads `hash` from the gateway into `directory` (empty = working dir).
/// Empty `file_name` keeps the hash as the file name. Never proxied.
pub fn get(
    cfg: &IpgetConfig,
    hash: &str,
    file_name: &str,
    directory: &str,
) -> Result<u64, FetchError> {
    let url = format!("{}{}", cfg.gateway_base(), hash);
    tracing::info!(file = file_name, hash, "getting file from IPFS");
    let request = DownloadRequest::new(url)
        .with_file_name(file_name)
        .in_directory(directory)
        .with_connect_timeout(cfg.connect_timeout());
    fetch(&request)
}

/// Raw contents of `hash`, byte for byte.
pub fn cat(cfg: &IpgetConfig, hash: &str) -> Result<Vec<u8>, ApiError> {
    let url = format!("{}cat?arg={}", cfg.api_base(), hash);
    tracing::info!(hash, "catting file from IPFS");
    post_api_call(&url, cfg.connect_timeout())
}

/// Links of `hash`, one `"<hash> <name>"` per line.
pub fn ls(cfg: &IpgetConfig, hash: &str) -> Result<String, ApiError> {
    let url = format!("{}ls?arg={}", cfg.api_base(), hash);
    tracing::info!(hash, "listing object from IPFS");
    let resp: LsResponse = decode(&url, &post_api_call(&url, cfg.connect_timeout())?)?;
    let object = resp.objects.first().ok_or_else(|| ApiError::EmptyListing {
        hash: hash.to_string(),
    })?;
    Ok(format_links(&object.links))
}

/// Locally pinned hashes, sorted, one per line.
pub fn pinned(cfg: &IpgetConfig) -> Result<String, ApiError> {
    let url = format!("{}pin/ls", cfg.api_base());
    tracing::info!("listing files pinned locally");
    let resp: PinLsResponse = decode(&url, &post_api_call(&url, cfg.connect_timeout())?)?;
    Ok(format_pins(&resp))
}

fn decode<T: DeserializeOwned>(url: &str, body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|source| ApiError::Decode {
        url: url.to_string(),
        source,
    })
}
