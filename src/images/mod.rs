//! Cross-lingual image collection.
//!
//! For one seed article: resolve its canonical title, list its language
//! versions, fetch each version's rendered markup, and index the images it
//! embeds by filename.

mod extract;
mod index;
mod report;

pub use extract::{absolute_image_url, extract_images, image_filename, ImageOccurrence};
pub use index::{ArticleImages, ImageEntry, ImageIndex};
pub use report::{escape_html, render_report};

use serde::Deserialize;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::config::Endpoints;
use crate::error_handling::CollectError;
use crate::gateway::ApiGateway;
use crate::languages::language_name;
use crate::resolver::TitleResolver;

/// A version of the article in one language edition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LanguageVariant {
    /// Language edition code
    pub code: String,
    /// Title in that edition
    pub title: String,
}

/// Title as a `/wiki/` path: underscores for spaces, each segment
/// percent-encoded.
pub fn wiki_path(title: &str) -> String {
    title
        .replace(' ', "_")
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Public URL of an article version.
pub fn article_url(language: &str, title: &str) -> String {
    format!("https://{}.wikipedia.org/wiki/{}", language, wiki_path(title))
}

/// Collects the images of every language version of one article.
pub struct ImageCollector<'a> {
    gateway: &'a ApiGateway,
    endpoints: &'a Endpoints,
    cancel: &'a CancellationToken,
}

impl<'a> ImageCollector<'a> {
    /// Creates a collector that stops once `cancel` fires.
    pub fn new(
        gateway: &'a ApiGateway,
        endpoints: &'a Endpoints,
        cancel: &'a CancellationToken,
    ) -> Self {
        Self {
            gateway,
            endpoints,
            cancel,
        }
    }

    /// Builds the image index for the article at `url`.
    ///
    /// Returns an empty index when the seed URL cannot be resolved or its
    /// language versions cannot be listed. A version whose markup cannot be
    /// fetched is skipped.
    ///
    /// # Errors
    ///
    /// Returns `CollectError::Interrupted` if the cancellation token fires
    /// before a version is fetched.
    pub async fn collect(&self, token: Option<&str>, url: &str) -> Result<ImageIndex, CollectError> {
        let status = self.gateway.status();
        let mut index = ImageIndex::new();

        let resolved = TitleResolver::new(self.gateway, self.endpoints)
            .resolve(token, &[url])
            .await;
        let Some((language, title)) = resolved
            .into_iter()
            .find_map(|(language, titles)| titles.into_iter().next().map(|t| (language, t)))
        else {
            status.update_status(&format!("Could not resolve article {url}, skipping"), false);
            return Ok(index);
        };

        let Some(mut variants) = self.language_variants(token, &language, &title).await else {
            status.update_status(
                &format!("Cannot get language versions for page {title} - may not exist, skipping"),
                false,
            );
            return Ok(index);
        };
        variants.insert(
            0,
            LanguageVariant {
                code: language,
                title: title.clone(),
            },
        );
        status.update_status(
            &format!(
                "Found {} language versions for Wikipedia page {}",
                variants.len(),
                title
            ),
            false,
        );

        let total = variants.len();
        for (done, variant) in variants.into_iter().enumerate() {
            if self.cancel.is_cancelled() {
                return Err(CollectError::Interrupted("fetching article images".to_string()));
            }

            status.update_status(
                &format!(
                    "Getting images for article {} ({}/{})",
                    variant.title,
                    language_name(&variant.code),
                    variant.code
                ),
                false,
            );
            status.update_progress((done + 1) as f64 / total as f64);

            let Some(markup) = self.rendered_markup(token, &variant).await else {
                status.update_status(
                    &format!(
                        "Cannot get images for article {} for language '{}' - skipping",
                        variant.title, variant.code
                    ),
                    false,
                );
                continue;
            };

            let images = extract_images(&markup);
            log::debug!(
                "Found {} images on {}.wikipedia.org/wiki/{}",
                images.len(),
                variant.code,
                variant.title
            );
            index.record(ArticleImages {
                page_url: article_url(&variant.code, &variant.title),
                language: variant.code,
                title: variant.title,
                images,
            });
        }

        Ok(index)
    }

    /// Other language versions of `title`, without the article itself.
    ///
    /// An empty list counts as unavailable.
    async fn language_variants(
        &self,
        token: Option<&str>,
        language: &str,
        title: &str,
    ) -> Option<Vec<LanguageVariant>> {
        let response = self
            .gateway
            .request(token, &self.endpoints.language_links(language, title), &[])
            .await?;
        match serde_json::from_value::<Vec<LanguageVariant>>(response) {
            Ok(variants) if variants.is_empty() => {
                log::debug!("No other language versions listed for {}", title);
                None
            }
            Ok(variants) => Some(variants),
            Err(e) => {
                log::warn!("Unexpected language links payload for {}: {}", title, e);
                None
            }
        }
    }

    /// Rendered HTML of one article version.
    async fn rendered_markup(&self, token: Option<&str>, variant: &LanguageVariant) -> Option<String> {
        let params = [
            ("action", "parse"),
            ("page", variant.title.as_str()),
            ("format", "json"),
        ];
        let response = self
            .gateway
            .request(token, &self.endpoints.action_api(&variant.code), &params)
            .await?;
        response
            .get("parse")?
            .get("text")?
            .get("*")
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}
