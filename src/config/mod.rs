//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (API limits, endpoint templates, defaults)
//! - Upstream endpoint locations
//! - Collector configuration and CLI option types

mod cli;
mod constants;
mod types;

// Re-export all constants
pub use cli::{Cli, Command, ImagesArgs, RevisionsArgs};
pub use constants::*;
pub use types::{
    ClientConfig, Endpoints, ImagesConfig, LogFormat, LogLevel, RevisionFormat, RevisionsConfig,
};
