//! `ipget pinned` – list locally pinned hashes.

use anyhow::{Context, Result};
use ipget_core::api;
use ipget_core::config::IpgetConfig;

pub async fn run_pinned(cfg: &IpgetConfig) -> Result<()> {
    let pins = tokio::task::spawn_blocking({
        let cfg = cfg.clone();
        move || api::pinned(&cfg)
    })
    .await
    .context("pinned task join")?
    .context("pin ls")?;
    if pins.is_empty() {
        println!("No pinned hashes.");
    } else {
        println!("{pins}");
    }
    Ok(())
}
