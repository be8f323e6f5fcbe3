//! Run orchestration.
//!
//! Validates the input, wires the gateway and collectors together, and writes
//! the output file for each of the two collection modes.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;
use tokio::io::AsyncReadExt;
use tokio_util::sync::CancellationToken;

use crate::config::{ImagesConfig, RevisionsConfig, MAX_REVISION_LIMIT, MIN_REVISION_LIMIT};
use crate::error_handling::{CollectError, InputError};
use crate::export::{open_output, write_revisions};
use crate::gateway::ApiGateway;
use crate::images::{render_report, ImageCollector};
use crate::initialization::{init_client, init_geolocator};
use crate::resolver::TitleResolver;
use crate::revisions::{GeoLocator, RevisionCollector};
use crate::status::StatusSink;

/// Results of a revision collection run.
#[derive(Debug, Clone)]
pub struct RevisionsReport {
    /// Articles whose history was collected (possibly partially)
    pub articles: usize,
    /// Articles skipped because the API reported them invalid
    pub skipped_articles: usize,
    /// Revisions written
    pub revisions: usize,
    /// Distinct anonymous editor addresses geolocated
    pub geolocated_addresses: usize,
    /// Output file
    pub output: PathBuf,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Results of an image collection run.
#[derive(Debug, Clone)]
pub struct ImagesReport {
    /// Article versions whose markup was processed
    pub language_versions: usize,
    /// Distinct images
    pub distinct_images: usize,
    /// Image occurrences, duplicates included
    pub occurrences: usize,
    /// Output file
    pub output: PathBuf,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Splits a newline-separated URL list.
///
/// Entries are trimmed; blank lines and `#` comments are dropped.
pub fn parse_url_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Checks a revision query before any request is made.
///
/// # Errors
///
/// `InputError::NoUrls` for an empty URL list, `InputError::LimitOutOfRange`
/// for a limit outside the accepted bounds.
pub fn validate_revision_query(urls: &[String], limit: usize) -> Result<(), InputError> {
    if urls.is_empty() {
        return Err(InputError::NoUrls);
    }
    if !(MIN_REVISION_LIMIT..=MAX_REVISION_LIMIT).contains(&limit) {
        return Err(InputError::LimitOutOfRange {
            limit,
            min: MIN_REVISION_LIMIT,
            max: MAX_REVISION_LIMIT,
        });
    }
    Ok(())
}

/// Reads a URL list from a file, or from stdin for `-`.
pub async fn read_urls(source: &Path) -> Result<String> {
    if source.as_os_str() == "-" {
        info!("Reading URLs from stdin");
        let mut text = String::new();
        tokio::io::stdin()
            .read_to_string(&mut text)
            .await
            .context("Failed to read URLs from stdin")?;
        return Ok(text);
    }
    tokio::fs::read_to_string(source)
        .await
        .with_context(|| format!("Failed to open input file: {}", source.display()))
}

/// Collects the revision history of every article in `config.urls` and
/// writes it to `config.output`.
///
/// An article the API reports as invalid is skipped; cancellation aborts the
/// run without writing output.
///
/// # Errors
///
/// Returns an error for invalid input, for initialization failures, on
/// cancellation, or when the output cannot be written.
pub async fn run_revisions(
    config: RevisionsConfig,
    status: Arc<dyn StatusSink>,
    cancel: CancellationToken,
) -> Result<RevisionsReport> {
    let start = Instant::now();
    let urls = parse_url_list(&config.urls);
    validate_revision_query(&urls, config.limit)?;

    let client = init_client(&config.client).context("Failed to initialize HTTP client")?;
    let gateway = ApiGateway::new(client, status.clone());
    let endpoints = &config.client.endpoints;
    let token = config.client.token();
    let locator = init_geolocator(config.geoip_database.as_deref(), config.geolocate)
        .context("Failed to open GeoIP database")?;

    let titles = TitleResolver::new(&gateway, endpoints)
        .resolve(token, &urls)
        .await;

    let mut collector = RevisionCollector::new(&gateway, endpoints, &cancel);
    if let Some(locator) = locator.as_ref() {
        collector = collector.with_geolocator(locator as &dyn GeoLocator);
    }

    let mut revisions = Vec::new();
    let mut articles = 0;
    let mut skipped_articles = 0;
    for (language, pages) in &titles {
        for title in pages {
            match collector.collect(token, language, title, config.limit).await {
                Ok(batch) => {
                    articles += 1;
                    revisions.extend(batch);
                }
                Err(e @ CollectError::InvalidPage { .. }) => {
                    log::warn!("{}", e);
                    skipped_articles += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    let written = write_revisions(&config.output, config.format, &revisions)?;
    status.update_status(
        &format!("Retrieved {written} revisions for {articles} page(s)"),
        true,
    );

    Ok(RevisionsReport {
        articles,
        skipped_articles,
        revisions: written,
        geolocated_addresses: collector.geolocated_addresses(),
        output: config.output,
        elapsed_seconds: start.elapsed().as_secs_f64(),
    })
}

/// Builds the cross-lingual image report for the first URL in
/// `config.urls` and writes it to `config.output`.
///
/// # Errors
///
/// Returns an error for an empty URL list, for initialization failures, on
/// cancellation, or when the report cannot be written.
pub async fn run_images(
    config: ImagesConfig,
    status: Arc<dyn StatusSink>,
    cancel: CancellationToken,
) -> Result<ImagesReport> {
    let start = Instant::now();
    let url = parse_url_list(&config.urls)
        .into_iter()
        .next()
        .ok_or(InputError::NoUrls)?;

    let client = init_client(&config.client).context("Failed to initialize HTTP client")?;
    let gateway = ApiGateway::new(client, status.clone());
    let index = ImageCollector::new(&gateway, &config.client.endpoints, &cancel)
        .collect(config.client.token(), &url)
        .await?;

    let subject = index
        .articles()
        .first()
        .map_or(url.as_str(), |article| article.title.as_str());
    let html = render_report(subject, &index);
    let mut writer = open_output(&config.output)?;
    writer
        .write_all(html.as_bytes())
        .and_then(|()| writer.flush())
        .with_context(|| format!("Failed to write report to {}", config.output.display()))?;

    status.update_status(
        &format!(
            "Found {} image occurrences ({} distinct) across {} language version(s)",
            index.occurrences(),
            index.distinct_images(),
            index.articles().len()
        ),
        true,
    );

    Ok(ImagesReport {
        language_versions: index.articles().len(),
        distinct_images: index.distinct_images(),
        occurrences: index.occurrences(),
        output: config.output,
        elapsed_seconds: start.elapsed().as_secs_f64(),
    })
}
