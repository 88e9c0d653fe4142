//! `ipget get <hash>` – download a hash from the gateway.

use anyhow::{Context, Result};
use ipget_core::api;
use ipget_core::config::IpgetConfig;

pub async fn run_get(
    cfg: &IpgetConfig,
    hash: String,
    name: Option<String>,
    dir: Option<String>,
) -> Result<()> {
    let written = tokio::task::spawn_blocking({
        let cfg = cfg.clone();
        let hash = hash.clone();
        move || {
            api::get(
                &cfg,
                &hash,
                name.as_deref().unwrap_or(""),
                dir.as_deref().unwrap_or(""),
            )
        }
    })
    .await
    .context("get task join")?
    .with_context(|| format!("get {}", hash))?;
    println!("Fetched {hash} ({written} bytes)");
    Ok(())
}
