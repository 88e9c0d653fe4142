//! Logging: `tracing` events go to `$XDG_STATE_HOME/ipget/ipget.log`, or to
//! stderr when the state dir is unusable.
//!
//! `RUST_LOG` overrides [`DEFAULT_FILTER`]. Each CLI run opens with a
//! [`log_session`] line naming the gateway, API and proxy in effect, so a
//! failed download in the log can be traced to the node it talked to.

use crate::config::IpgetConfig;
use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid. Our crates log their
/// transport and destination decisions at debug.
pub const DEFAULT_FILTER: &str = "info,ipget=debug,ipget_core=debug";

const LOG_FILE_NAME: &str = "ipget.log";

/// One writer per event: a clone of the log file, or stderr when cloning fails.
enum LogSink {
    File(fs::File),
    Stderr,
}

impl io::Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogSink::File(f) => f.write(buf),
            LogSink::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogSink::File(f) => f.flush(),
            LogSink::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct AppendLog(fs::File);

impl<'a> MakeWriter<'a> for AppendLog {
    type Writer = LogSink;

    fn make_writer(&'a self) -> Self::Writer {
        self.0.try_clone().map(LogSink::File).unwrap_or(LogSink::Stderr)
    }
}

/// `$XDG_STATE_HOME/ipget/ipget.log`.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ipget")?;
    Ok(xdg_dirs.get_state_home().join("ipget").join(LOG_FILE_NAME))
}

/// Installs the file subscriber. Errors (unwritable state dir, subscriber
/// already set) are returned so the caller can fall back to [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let path = log_file_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create log dir {}", dir.display()))?;
    }

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(BoxMakeWriter::new(AppendLog(file)))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install subscriber: {}", e))?;

    tracing::info!(log = %path.display(), "ipget logging initialized");
    Ok(())
}

/// Stderr-only logging. An already-installed subscriber is left in place.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}

/// Records the endpoints this run talks to.
pub fn log_session(cfg: &IpgetConfig) {
    tracing::info!(
        gateway = %cfg.gateway_base(),
        api = %cfg.api_base(),
        proxy = cfg.proxy.as_deref().unwrap_or("none"),
        connect_timeout_secs = cfg.connect_timeout_secs,
        "ipget session"
    );
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
