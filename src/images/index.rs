//! Cross-reference between article versions and the images they embed.

use std::collections::HashMap;

use super::extract::ImageOccurrence;

/// Images of one article version, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleImages {
    /// Language edition code
    pub language: String,
    /// Title in that edition
    pub title: String,
    /// Public URL of the article version
    pub page_url: String,
    /// Images in document order, repeats included
    pub images: Vec<ImageOccurrence>,
}

/// An image and the article versions that embed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    /// De-duplication key
    pub filename: String,
    /// Most recently seen absolute URL for this filename
    pub url: String,
    /// Distinct article page URLs, first reference first
    pub pages: Vec<String>,
}

impl ImageEntry {
    /// Number of distinct article versions referencing the image.
    pub fn reference_count(&self) -> usize {
        self.pages.len()
    }

    /// Whether the article at `page_url` embeds this image.
    pub fn is_referenced_by(&self, page_url: &str) -> bool {
        self.pages.iter().any(|p| p == page_url)
    }
}

/// Running article/image association for one collection.
#[derive(Debug, Default)]
pub struct ImageIndex {
    articles: Vec<ArticleImages>,
    entries: Vec<ImageEntry>,
    positions: HashMap<String, usize>,
    occurrences: usize,
}

impl ImageIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one processed article version.
    pub fn record(&mut self, article: ArticleImages) {
        for image in &article.images {
            self.occurrences += 1;
            let position = match self.positions.get(&image.filename) {
                Some(&position) => position,
                None => {
                    self.entries.push(ImageEntry {
                        filename: image.filename.clone(),
                        url: image.url.clone(),
                        pages: Vec::new(),
                    });
                    self.positions
                        .insert(image.filename.clone(), self.entries.len() - 1);
                    self.entries.len() - 1
                }
            };
            let entry = &mut self.entries[position];
            entry.url = image.url.clone();
            if !entry.is_referenced_by(&article.page_url) {
                entry.pages.push(article.page_url.clone());
            }
        }
        self.articles.push(article);
    }

    /// Processed article versions, in processing order.
    pub fn articles(&self) -> &[ArticleImages] {
        &self.articles
    }

    /// Images by descending reference count; equal counts keep discovery
    /// order.
    pub fn ranked(&self) -> Vec<&ImageEntry> {
        let mut ranked: Vec<&ImageEntry> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.reference_count().cmp(&a.reference_count()));
        ranked
    }

    /// Looks up an image by filename.
    pub fn get(&self, filename: &str) -> Option<&ImageEntry> {
        self.positions.get(filename).map(|&i| &self.entries[i])
    }

    /// Number of distinct images.
    pub fn distinct_images(&self) -> usize {
        self.entries.len()
    }

    /// Total image occurrences across all article versions, duplicates
    /// included.
    pub fn occurrences(&self) -> usize {
        self.occurrences
    }

    /// Whether no article version has been recorded.
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}
