pub mod config;
pub mod logging;

pub mod api;
pub mod error;
pub mod fetch;
pub mod transport;

pub use error::{ApiError, FetchError, FetchErrorKind};
pub use fetch::{fetch, DownloadRequest, ResolvedDestination};
pub use transport::{Transport, TransportConfig};
