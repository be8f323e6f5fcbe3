//! Command-line interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::constants::{
    API_TOKEN_ENV, DEFAULT_REVISION_LIMIT, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
use crate::config::types::{
    ClientConfig, Endpoints, ImagesConfig, LogFormat, LogLevel, RevisionFormat, RevisionsConfig,
};

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Last 200 revisions of every article listed in urls.txt
/// wiki_collect revisions --urls urls.txt --limit 200
///
/// # With anonymous editors geolocated, as CSV
/// wiki_collect revisions --urls urls.txt --geoip GeoLite2-City.mmdb --geolocate --format csv
///
/// # Image report for one article
/// wiki_collect images --url https://en.wikipedia.org/wiki/Lighthouse --output lighthouse.html
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "wiki_collect",
    version,
    about = "Collects Wikipedia revision histories and cross-lingual image inventories."
)]
pub struct Cli {
    /// Wikimedia API bearer token (unauthenticated if absent)
    #[arg(long, global = true, env = API_TOKEN_ENV, hide_env_values = true)]
    pub token: Option<String>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Per-request timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// HTTP User-Agent header value.
    ///
    /// Wikimedia asks heavy API users to include contact details here.
    #[arg(long, global = true, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Collection mode
    #[command(subcommand)]
    pub command: Command,
}

/// Collection modes.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Collect the revision history of a list of articles
    Revisions(RevisionsArgs),
    /// Compare the images of all language versions of one article
    Images(ImagesArgs),
}

/// Options of the `revisions` command.
#[derive(Debug, Args)]
pub struct RevisionsArgs {
    /// File with one article URL per line (`-` for stdin)
    #[arg(long, value_parser)]
    pub urls: PathBuf,

    /// Maximum number of revisions per article (1-25000)
    #[arg(long, default_value_t = DEFAULT_REVISION_LIMIT)]
    pub limit: usize,

    /// MaxMind GeoLite2-City database for locating anonymous editors
    #[arg(long, value_parser)]
    pub geoip: Option<PathBuf>,

    /// Geolocate anonymous editors (requires --geoip)
    #[arg(long, requires = "geoip")]
    pub geolocate: bool,

    /// Output format: ndjson|csv
    #[arg(long, value_enum, default_value_t = RevisionFormat::Ndjson)]
    pub format: RevisionFormat,

    /// Output file (`-` for stdout); defaults to revisions.<format>
    #[arg(long, value_parser)]
    pub output: Option<PathBuf>,
}

/// Options of the `images` command.
#[derive(Debug, Args)]
pub struct ImagesArgs {
    /// Article URL
    #[arg(long)]
    pub url: String,

    /// Output HTML report (`-` for stdout)
    #[arg(long, value_parser, default_value = "images.html")]
    pub output: PathBuf,
}

impl Cli {
    /// Client settings shared by both commands.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            api_token: self.token.clone(),
            timeout_seconds: self.timeout,
            user_agent: self.user_agent.clone(),
            endpoints: Endpoints::default(),
        }
    }
}

impl RevisionsArgs {
    /// Builds the library configuration from the URL list text.
    pub fn into_config(self, client: ClientConfig, urls: String) -> RevisionsConfig {
        let output = self
            .output
            .unwrap_or_else(|| PathBuf::from(format!("revisions.{}", self.format.extension())));
        RevisionsConfig {
            client,
            urls,
            limit: self.limit,
            geoip_database: self.geoip,
            geolocate: self.geolocate,
            format: self.format,
            output,
        }
    }
}

impl ImagesArgs {
    /// Builds the library configuration.
    pub fn into_config(self, client: ClientConfig) -> ImagesConfig {
        ImagesConfig {
            client,
            urls: self.url,
            output: self.output,
        }
    }
}
