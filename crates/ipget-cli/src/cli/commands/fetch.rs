//! `ipget fetch <url>` – download any HTTP URL, optionally proxied.

use anyhow::{Context, Result};
use ipget_core::config::IpgetConfig;
use ipget_core::fetch::{self, DownloadRequest};

/// Builds the request for `fetch`; an explicit `--proxy` wins over the config.
pub(crate) fn build_request(
    cfg: &IpgetConfig,
    url: String,
    name: Option<String>,
    dir: Option<String>,
    proxy: Option<String>,
) -> DownloadRequest {
    let proxy = proxy.unwrap_or_else(|| cfg.proxy_url().to_string());
    DownloadRequest::new(url)
        .with_file_name(name.unwrap_or_default())
        .in_directory(dir.unwrap_or_default())
        .via_proxy(proxy)
        .with_connect_timeout(cfg.connect_timeout())
}

pub async fn run_fetch(
    cfg: &IpgetConfig,
    url: String,
    name: Option<String>,
    dir: Option<String>,
    proxy: Option<String>,
) -> Result<()> {
    let request = build_request(cfg, url, name, dir, proxy);
    let dest = fetch::resolve(&request).full_path;
    let written = tokio::task::spawn_blocking({
        let request = request.clone();
        move || fetch::fetch(&request)
    })
    .await
    .context("fetch task join")?
    .with_context(|| format!("fetch {}", request.source_url))?;
    println!("Saved {} ({written} bytes)", dest.display());
    Ok(())
}
