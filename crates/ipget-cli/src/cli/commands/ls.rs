//! `ipget ls <hash>` – list object links.

use anyhow::{Context, Result};
use ipget_core::api;
use ipget_core::config::IpgetConfig;

pub async fn run_ls(cfg: &IpgetConfig, hash: String) -> Result<()> {
    let listing = tokio::task::spawn_blocking({
        let cfg = cfg.clone();
        let hash = hash.clone();
        move || api::ls(&cfg, &hash)
    })
    .await
    .context("ls task join")?
    .with_context(|| format!("ls {}", hash))?;
    if !listing.is_empty() {
        println!("{listing}");
    }
    Ok(())
}
