//! Revision collection.
//!
//! Pages through an article's edit history via `prop=revisions`, carrying the
//! API's `continue` object from one response into the next request, and stops
//! at the configured limit, at the last page, or at the first failed fetch.
//! Anonymous edits can be annotated with a location from a local database.

mod geo;
mod mapping;
mod types;

pub use geo::{GeoCache, GeoLocator, MaxMindLocator};
pub use mapping::{
    is_probably_bot, permalink, revision_key, section_label, MappedRevision, RevisionRecord,
};
pub use types::{GeoLocation, Revision};

use serde_json::{Map, Value};
use tokio_util::sync::CancellationToken;

use crate::config::{Endpoints, REVISIONS_PER_REQUEST, REVISION_PROPERTIES};
use crate::error_handling::CollectError;
use crate::gateway::ApiGateway;
use crate::languages::language_name;
use types::RawRevision;

/// Collects the revision history of one article at a time.
pub struct RevisionCollector<'a> {
    gateway: &'a ApiGateway,
    endpoints: &'a Endpoints,
    cancel: &'a CancellationToken,
    geo: Option<GeoCache<'a>>,
}

impl<'a> RevisionCollector<'a> {
    /// Creates a collector without geolocation.
    pub fn new(
        gateway: &'a ApiGateway,
        endpoints: &'a Endpoints,
        cancel: &'a CancellationToken,
    ) -> Self {
        Self {
            gateway,
            endpoints,
            cancel,
            geo: None,
        }
    }

    /// Enables geolocation of anonymous editors through `locator`.
    ///
    /// Lookups are memoized per IP string for the lifetime of the collector,
    /// across all articles it collects.
    pub fn with_geolocator(mut self, locator: &'a dyn GeoLocator) -> Self {
        self.geo = Some(GeoCache::new(locator));
        self
    }

    /// Number of distinct addresses geolocated so far.
    pub fn geolocated_addresses(&self) -> usize {
        self.geo.as_ref().map_or(0, GeoCache::len)
    }

    /// Fetches up to `limit` revisions of `title`, newest first.
    ///
    /// A failed fetch ends collection for the title and keeps what was
    /// already gathered.
    ///
    /// # Errors
    ///
    /// - `CollectError::Interrupted` if the cancellation token fires before a
    ///   request; the whole run should stop.
    /// - `CollectError::InvalidPage` if the API reports the title as invalid
    ///   or missing (page id `-1`); only this title is affected.
    pub async fn collect(
        &mut self,
        token: Option<&str>,
        language: &str,
        title: &str,
        limit: usize,
    ) -> Result<Vec<Revision>, CollectError> {
        let gateway = self.gateway;
        let status = gateway.status();
        let url = self.endpoints.action_api(language);
        let page_size = limit.clamp(1, REVISIONS_PER_REQUEST);
        let page_size_param = page_size.to_string();

        let mut revisions: Vec<Revision> = Vec::new();
        let mut continuation: Option<Map<String, Value>> = None;

        while revisions.len() < limit {
            if self.cancel.is_cancelled() {
                return Err(CollectError::Interrupted("fetching revisions".to_string()));
            }

            let first = revisions.len() + 1;
            status.update_status(
                &format!(
                    "Fetching revision {}-{} for '{}' ({}/{})",
                    first,
                    (first + page_size - 1).min(limit),
                    title,
                    language_name(language),
                    language
                ),
                false,
            );

            let mut params: Vec<(String, String)> = vec![
                ("action".into(), "query".into()),
                ("format".into(), "json".into()),
                ("prop".into(), "revisions".into()),
                ("rvprop".into(), REVISION_PROPERTIES.into()),
                ("rvlimit".into(), page_size_param.clone()),
                ("titles".into(), title.to_string()),
            ];
            if let Some(cont) = &continuation {
                params.extend(cont.iter().map(|(k, v)| (k.clone(), continuation_value(v))));
            }
            let params: Vec<(&str, &str)> = params
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();

            let pages = gateway
                .request(token, &url, &params)
                .await
                .and_then(|response| {
                    let pages = response.get("query")?.get("pages")?.as_object()?.clone();
                    let next = response.get("continue").and_then(Value::as_object).cloned();
                    Some((pages, next))
                });
            let Some((pages, next)) = pages else {
                status.update_status(
                    &format!("Could not get revisions for {title} from Wikipedia API - skipping"),
                    false,
                );
                break;
            };

            if let Some(invalid) = pages.get("-1") {
                let reason = invalid_reason(invalid);
                status.update_status(
                    &format!(
                        "Could not fetch revisions for page {title} (Wikipedia said: '{reason}') - halting. Double-check the URL and try again."
                    ),
                    true,
                );
                return Err(CollectError::InvalidPage {
                    title: title.to_string(),
                    reason,
                });
            }

            for page in pages.values() {
                let Some(items) = page.get("revisions").and_then(Value::as_array) else {
                    continue;
                };
                for item in items {
                    let raw: RawRevision = match serde_json::from_value(item.clone()) {
                        Ok(raw) => raw,
                        Err(e) => {
                            log::debug!("Skipping malformed revision of '{}': {}", title, e);
                            continue;
                        }
                    };
                    let location = if raw.is_anonymous() {
                        self.geo.as_mut().and_then(|geo| geo.locate(&raw.user))
                    } else {
                        None
                    };
                    revisions.push(raw.into_revision(title, language, location));
                }
            }

            match next {
                Some(next) if continuation.as_ref() == Some(&next) => {
                    log::warn!(
                        "Continuation for '{}' did not advance, stopping pagination",
                        title
                    );
                    break;
                }
                Some(next) => continuation = Some(next),
                None => break,
            }
        }

        revisions.truncate(limit);
        status.update_status(
            &format!(
                "Collected {} revisions for article '{}' on {}.wikipedia.org",
                revisions.len(),
                title,
                language
            ),
            false,
        );
        Ok(revisions)
    }
}

/// Query-string form of a continuation value.
fn continuation_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Reason the API gave for a page id of `-1`.
fn invalid_reason(page: &Value) -> String {
    if let Some(reason) = page.get("invalidreason").and_then(Value::as_str) {
        return reason.to_string();
    }
    if page.get("missing").is_some() {
        return "The page does not exist".to_string();
    }
    "unknown error".to_string()
}
