//! CLI for ipget.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use ipget_core::{config, logging};

use commands::{run_cat, run_completions, run_fetch, run_get, run_ls, run_pinned};

/// Top-level CLI for ipget.
#[derive(Debug, Parser)]
#[command(name = "ipget")]
#[command(about = "ipget: fetch and inspect IPFS content via the local gateway and daemon", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download a content hash from the gateway.
    Get {
        /// Content hash (or path below the gateway base).
        hash: String,
        /// Local file name (default: the hash).
        #[arg(long, short = 'n', value_name = "FILE")]
        name: Option<String>,
        /// Target directory, created owner-only if missing (default: current directory).
        #[arg(long, short = 'd', value_name = "DIR")]
        dir: Option<String>,
    },

    /// Download an arbitrary HTTP URL, optionally through a proxy.
    Fetch {
        /// Absolute HTTP/HTTPS URL.
        url: String,
        /// Local file name (default: last path segment of the URL).
        #[arg(long, short = 'n', value_name = "FILE")]
        name: Option<String>,
        /// Target directory, created owner-only if missing (default: current directory).
        #[arg(long, short = 'd', value_name = "DIR")]
        dir: Option<String>,
        /// Proxy URL (default: `proxy` from config, else direct).
        #[arg(long, value_name = "URL")]
        proxy: Option<String>,
    },

    /// Print the contents of a hash.
    Cat {
        /// Content hash.
        hash: String,
    },

    /// List the links of a directory-like object.
    Ls {
        /// Object hash.
        hash: String,
    },

    /// List locally pinned hashes.
    Pinned,

    /// Print shell completions to stdout.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        logging::log_session(&cfg);

        match cli.command {
            CliCommand::Get { hash, name, dir } => run_get(&cfg, hash, name, dir).await?,
            CliCommand::Fetch {
                url,
                name,
                dir,
                proxy,
            } => run_fetch(&cfg, url, name, dir, proxy).await?,
            CliCommand::Cat { hash } => run_cat(&cfg, hash).await?,
            CliCommand::Ls { hash } => run_ls(&cfg, hash).await?,
            CliCommand::Pinned => run_pinned(&cfg).await?,
            CliCommand::Completions { shell } => run_completions(shell)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
