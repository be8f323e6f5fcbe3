//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Error opening the geolocation database.
    #[error("GeoIP database error ({path}): {source}")]
    GeoIpError {
        /// Database path
        path: String,
        /// Underlying reader error
        #[source]
        source: maxminddb::MaxMindDBError,
    },
}

/// Failures observed at the API Gateway boundary.
///
/// These never escape [`crate::gateway::ApiGateway::request`]; they are logged
/// to the status channel and turned into an absent result.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The request could not be sent or its body could not be read.
    #[error("{0}")]
    Transport(#[from] ReqwestError),

    /// The API answered with a non-200 status.
    #[error("Wikipedia API request failed ({0})")]
    Status(u16),

    /// The body was not valid JSON.
    #[error("Wikipedia API returned malformed JSON ({0})")]
    Decode(#[from] serde_json::Error),

    /// The API reported an error payload in an otherwise successful response.
    #[error("Wikipedia API request failed ({0})")]
    Api(String),
}

/// Reasons an input URL cannot be turned into a page reference.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlRejection {
    /// The string has no recognisable hostname.
    #[error("{url} is not a valid URL, skipping")]
    Unparseable {
        /// Offending input
        url: String,
    },

    /// The hostname is not a Wikipedia host.
    #[error("{url} is not a Wikipedia URL ({host}), skipping")]
    NotWikipedia {
        /// Offending input
        url: String,
        /// Hostname found in the input
        host: String,
    },

    /// Neither a `/wiki/` path nor a `title=` parameter was found.
    #[error("{url} is not a Wikipedia article URL, skipping")]
    NoTitle {
        /// Offending input
        url: String,
    },
}

/// Conditions that stop a collector before it finishes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectError {
    /// The run was cancelled; the whole run must abort.
    #[error("Interrupted while {0}")]
    Interrupted(String),

    /// The API reported the title as invalid; only this article is affected.
    #[error("Could not fetch revisions for page {title} (Wikipedia said: '{reason}')")]
    InvalidPage {
        /// Title as requested
        title: String,
        /// Reason given by the API
        reason: String,
    },
}

impl CollectError {
    /// Whether this error must abort the entire run.
    pub fn is_interrupted(&self) -> bool {
        matches!(self, CollectError::Interrupted(_))
    }
}

/// Input problems caught before any network activity.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// No article URL was supplied.
    #[error("You need to provide at least one Wikipedia article URL")]
    NoUrls,

    /// The revision limit is outside the accepted range.
    #[error("Revision limit {limit} is out of range ({min}-{max})")]
    LimitOutOfRange {
        /// Requested limit
        limit: usize,
        /// Smallest accepted limit
        min: usize,
        /// Largest accepted limit
        max: usize,
    },
}
