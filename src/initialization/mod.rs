//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Logger
//! - HTTP client
//! - Geolocation database

mod client;
mod logger;

use std::path::Path;

use log::warn;

use crate::error_handling::InitializationError;
use crate::revisions::MaxMindLocator;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;

/// Opens the geolocation database when geolocation is requested.
///
/// Returns `Ok(None)` when geolocation is disabled, when no database path is
/// configured, or when the configured file does not exist (logged as a
/// warning). A file that exists but cannot be parsed is an error.
pub fn init_geolocator(
    path: Option<&Path>,
    enabled: bool,
) -> Result<Option<MaxMindLocator>, InitializationError> {
    let path = match (enabled, path) {
        (true, Some(path)) => path,
        (true, None) => {
            warn!("Geolocation requested but no GeoIP database configured; disabled");
            return Ok(None);
        }
        (false, _) => return Ok(None),
    };

    if !path.exists() {
        warn!(
            "GeoIP database {} not found; geolocation disabled",
            path.display()
        );
        return Ok(None);
    }

    MaxMindLocator::open(path).map(Some)
}
