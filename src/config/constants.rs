//! Configuration constants.
//!
//! This module defines the constants used throughout the collectors: API
//! limits, endpoint templates, and default request settings.

/// Hostname suffix every accepted article URL must end with.
pub const WIKI_DOMAIN_SUFFIX: &str = "wikipedia.org";

/// Language assumed for bare `wikipedia.org` and `www.wikipedia.org` hosts.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Maximum number of titles the query API accepts in one request.
pub const TITLE_BATCH_SIZE: usize = 50;

/// Maximum number of revisions the API returns per request for
/// unprivileged clients.
pub const REVISIONS_PER_REQUEST: usize = 500;

/// Revision properties requested for every revision.
pub const REVISION_PROPERTIES: &str = "ids|timestamp|flags|comment|user";

/// Lower bound of the per-article revision limit.
pub const MIN_REVISION_LIMIT: usize = 1;
/// Upper bound of the per-article revision limit.
pub const MAX_REVISION_LIMIT: usize = 25_000;
/// Per-article revision limit used when none is given.
pub const DEFAULT_REVISION_LIMIT: usize = 50;

/// Action API location; `{lang}` is replaced with the language code.
pub const DEFAULT_ACTION_API_TEMPLATE: &str = "https://{lang}.wikipedia.org/w/api.php";

/// Core REST API base used for cross-lingual links.
pub const DEFAULT_CORE_API_BASE: &str = "https://api.wikimedia.org/core/v1/wikipedia";

/// Per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default User-Agent string for API requests.
///
/// Wikimedia asks API clients to identify themselves with a descriptive
/// agent; override via `--user-agent` with contact details for heavy use.
pub const DEFAULT_USER_AGENT: &str = concat!(
    "wiki_collect/",
    env!("CARGO_PKG_VERSION"),
    " (Wikipedia research data collector)"
);

/// Environment variable holding the API bearer token.
pub const API_TOKEN_ENV: &str = "WIKIPEDIA_API_TOKEN";
