//! Title resolution.
//!
//! Parses article URLs, groups the page names per language edition, and asks
//! the query API for canonical (redirect-resolved) titles in batches.

mod page_url;

pub use page_url::{language_from_host, parse_wiki_url, PageRef};

use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;

use crate::config::{Endpoints, TITLE_BATCH_SIZE};
use crate::gateway::ApiGateway;
use crate::languages::language_name;
use crate::status::StatusSink;

/// Canonical titles per language code, in the order the API returned them.
pub type ResolvedTitles = BTreeMap<String, Vec<String>>;

/// Parses every URL and groups the page names by language.
///
/// Rejected URLs are reported to `status` and skipped. Duplicate page names
/// within one language collapse into one entry.
pub fn group_by_language<S: AsRef<str>>(
    urls: &[S],
    status: &dyn StatusSink,
) -> BTreeMap<String, BTreeSet<String>> {
    let mut grouped: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for url in urls {
        match parse_wiki_url(url.as_ref()) {
            Ok(page) => {
                grouped.entry(page.language).or_default().insert(page.title);
            }
            Err(rejection) => status.update_status(&rejection.to_string(), false),
        }
    }
    grouped
}

/// Resolves article URLs to canonical titles via the API gateway.
pub struct TitleResolver<'a> {
    gateway: &'a ApiGateway,
    endpoints: &'a Endpoints,
}

impl<'a> TitleResolver<'a> {
    /// Creates a resolver using `gateway` for requests against `endpoints`.
    pub fn new(gateway: &'a ApiGateway, endpoints: &'a Endpoints) -> Self {
        Self { gateway, endpoints }
    }

    /// Resolves `urls` to canonical titles, grouped by language.
    ///
    /// Titles are sent in batches of at most [`TITLE_BATCH_SIZE`] with
    /// redirects followed. A failed batch is skipped; languages that yield
    /// no title are left out. An input with no valid URL yields an empty map.
    pub async fn resolve<S: AsRef<str>>(&self, token: Option<&str>, urls: &[S]) -> ResolvedTitles {
        let status = self.gateway.status();
        let grouped = group_by_language(urls, status);

        let total: usize = grouped.values().map(BTreeSet::len).sum();
        status.update_status(
            &format!("Collecting canonical article names for {total} Wikipedia article(s)"),
            false,
        );

        let mut resolved = ResolvedTitles::new();
        for (language, pages) in grouped {
            status.update_status(
                &format!(
                    "Collecting canonical article names for articles on {language}.wikipedia.org ({})",
                    language_name(&language)
                ),
                false,
            );

            let pages: Vec<String> = pages.into_iter().collect();
            let mut canonical: Vec<String> = Vec::new();
            for batch in pages.chunks(TITLE_BATCH_SIZE) {
                match self.resolve_batch(token, &language, batch).await {
                    Some(titles) => {
                        for title in titles {
                            if !canonical.contains(&title) {
                                canonical.push(title);
                            }
                        }
                    }
                    None => status.update_status(
                        "Could not get canonical name for article batch - skipping",
                        false,
                    ),
                }
            }

            if !canonical.is_empty() {
                resolved.insert(language, canonical);
            }
        }

        resolved
    }

    async fn resolve_batch(
        &self,
        token: Option<&str>,
        language: &str,
        batch: &[String],
    ) -> Option<Vec<String>> {
        let titles = batch.join("|");
        let params = [
            ("action", "query"),
            ("format", "json"),
            ("redirects", "1"),
            ("titles", titles.as_str()),
        ];
        let response = self
            .gateway
            .request(token, &self.endpoints.action_api(language), &params)
            .await?;
        canonical_titles(&response)
    }
}

/// Extracts page titles from a `action=query` response, in response order.
fn canonical_titles(response: &Value) -> Option<Vec<String>> {
    let pages = response.get("query")?.get("pages")?.as_object()?;
    Some(
        pages
            .values()
            .filter_map(|page| page.get("title").and_then(Value::as_str))
            .map(str::to_string)
            .collect(),
    )
}
