//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::constants::{
    DEFAULT_ACTION_API_TEMPLATE, DEFAULT_CORE_API_BASE, DEFAULT_REVISION_LIMIT,
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Output format for collected revisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RevisionFormat {
    /// One JSON object per revision (raw attributes plus derived fields)
    Ndjson,
    /// Flattened export rows
    Csv,
}

impl RevisionFormat {
    /// File extension used for default output paths.
    pub fn extension(self) -> &'static str {
        match self {
            RevisionFormat::Ndjson => "ndjson",
            RevisionFormat::Csv => "csv",
        }
    }
}

/// Locations of the upstream APIs.
///
/// The action API is per-language; its template contains a `{lang}`
/// placeholder. The core REST API has a single base shared by all languages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Action API template, e.g. `https://{lang}.wikipedia.org/w/api.php`
    pub action_api_template: String,
    /// Core REST API base, e.g. `https://api.wikimedia.org/core/v1/wikipedia`
    pub core_api_base: String,
}

impl Endpoints {
    /// Creates endpoints from an action API template and a core API base.
    pub fn new(action_api_template: impl Into<String>, core_api_base: impl Into<String>) -> Self {
        Self {
            action_api_template: action_api_template.into(),
            core_api_base: core_api_base.into(),
        }
    }

    /// Action API URL for one language edition.
    pub fn action_api(&self, language: &str) -> String {
        self.action_api_template.replace("{lang}", language)
    }

    /// Cross-lingual links URL for one article.
    ///
    /// Spaces in the title are replaced with underscores; the remaining
    /// characters are percent-encoded as a single path segment.
    pub fn language_links(&self, language: &str, title: &str) -> String {
        let title = title.replace(' ', "_");
        format!(
            "{}/{}/page/{}/links/language",
            self.core_api_base.trim_end_matches('/'),
            language,
            urlencoding::encode(&title)
        )
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_ACTION_API_TEMPLATE, DEFAULT_CORE_API_BASE)
    }
}

/// Settings shared by both collectors.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API bearer token; `None` or empty means unauthenticated requests
    pub api_token: Option<String>,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Upstream API locations
    pub endpoints: Endpoints,
}

impl ClientConfig {
    /// Token to attach to requests, if a non-empty one is configured.
    pub fn token(&self) -> Option<&str> {
        self.api_token.as_deref().filter(|t| !t.is_empty())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            endpoints: Endpoints::default(),
        }
    }
}

/// Revision collection configuration.
///
/// # Examples
///
/// ```no_run
/// use wiki_collect::RevisionsConfig;
///
/// let config = RevisionsConfig {
///     urls: "https://en.wikipedia.org/wiki/Rust_(programming_language)".to_string(),
///     limit: 200,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct RevisionsConfig {
    /// Shared client settings
    pub client: ClientConfig,

    /// Newline-separated article URLs
    pub urls: String,

    /// Maximum number of revisions per article
    pub limit: usize,

    /// Path to a MaxMind GeoLite2-City database
    pub geoip_database: Option<PathBuf>,

    /// Geolocate anonymous editors (requires `geoip_database`)
    pub geolocate: bool,

    /// Output format
    pub format: RevisionFormat,

    /// Output file
    pub output: PathBuf,
}

impl Default for RevisionsConfig {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            urls: String::new(),
            limit: DEFAULT_REVISION_LIMIT,
            geoip_database: None,
            geolocate: false,
            format: RevisionFormat::Ndjson,
            output: PathBuf::from("revisions.ndjson"),
        }
    }
}

/// Image collection configuration.
#[derive(Debug, Clone)]
pub struct ImagesConfig {
    /// Shared client settings
    pub client: ClientConfig,

    /// Newline-separated article URLs; only the first is used
    pub urls: String,

    /// Output HTML report
    pub output: PathBuf,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            urls: String::new(),
            output: PathBuf::from("images.html"),
        }
    }
}
