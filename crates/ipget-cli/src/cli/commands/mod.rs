//! CLI command handlers. Each command is in its own file.

mod cat;
mod completions;
mod fetch;
mod get;
mod ls;
mod pinned;

pub use cat::run_cat;
pub use completions::run_completions;
pub use fetch::run_fetch;
#[cfg(test)]
pub(crate) use fetch::build_request as build_fetch_request;
pub use get::run_get;
pub use ls::run_ls;
pub use pinned::run_pinned;
