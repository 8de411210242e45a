//! CLI command implementations.
//!
//! Each submodule implements one command group:
//! - [`keywords`] - Keyword watchlist management
//! - [`alerts`] - Alert listing
//! - [`sources`] - Ingestion source management
//! - [`status`] - Service health check

pub mod alerts;
pub mod keywords;
pub mod sources;
pub mod status;

pub use alerts::AlertCommand;
pub use keywords::KeywordCommand;
pub use sources::SourceCommand;
pub use status::StatusCommand;
