//! wiki_collect library: research data collection from Wikipedia
//!
//! This library retrieves two kinds of data from the MediaWiki APIs:
//! - the revision history of a set of articles, optionally with the location
//!   of anonymous editors looked up in a local GeoIP database
//! - the images embedded in every language version of one article, rendered
//!   as a side-by-side HTML report
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use tokio_util::sync::CancellationToken;
//! use wiki_collect::{run_revisions, LogStatus, RevisionsConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = RevisionsConfig {
//!     urls: "https://en.wikipedia.org/wiki/Rust_(programming_language)".to_string(),
//!     limit: 100,
//!     ..Default::default()
//! };
//!
//! let report = run_revisions(config, Arc::new(LogStatus), CancellationToken::new()).await?;
//! println!("Retrieved {} revisions for {} page(s)", report.revisions, report.articles);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod config;
pub mod error_handling;
pub mod export;
pub mod gateway;
pub mod images;
pub mod initialization;
pub mod languages;
pub mod resolver;
pub mod revisions;
mod run;
pub mod status;

// Re-export public API
pub use config::{
    ClientConfig, Endpoints, ImagesConfig, LogFormat, LogLevel, RevisionFormat, RevisionsConfig,
};
pub use error_handling::{CollectError, InputError};
pub use gateway::ApiGateway;
pub use run::{
    parse_url_list, read_urls, run_images, run_revisions, validate_revision_query, ImagesReport,
    RevisionsReport,
};
pub use status::{LogStatus, RecordingStatus, StatusSink};
