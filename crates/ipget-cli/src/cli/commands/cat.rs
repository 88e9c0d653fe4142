//! `ipget cat <hash>` – print object contents.

use anyhow::{Context, Result};
use ipget_core::api;
use ipget_core::config::IpgetConfig;
use std::io::Write;

pub async fn run_cat(cfg: &IpgetConfig, hash: String) -> Result<()> {
    let bytes = tokio::task::spawn_blocking({
        let cfg = cfg.clone();
        let hash = hash.clone();
        move || api::cat(&cfg, &hash)
    })
    .await
    .context("cat task join")?
    .with_context(|| format!("cat {}", hash))?;
    let mut out = std::io::stdout().lock();
    out.write_all(&bytes).context("write to stdout")?;
    out.flush().context("flush stdout")?;
    Ok(())
}
