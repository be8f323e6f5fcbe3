//! Image extraction from rendered article markup.

use std::sync::LazyLock;

use scraper::{Html, Selector};

const IMG_SELECTOR_STR: &str = "img";

static IMG_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(IMG_SELECTOR_STR).unwrap_or_else(|e| {
        log::error!("Failed to parse image selector '{}': {}", IMG_SELECTOR_STR, e);
        Selector::parse("*:not(*)").unwrap_or_else(|e| {
            panic!("Fallback selector '*:not(*)' failed to parse: {e}. This is a programming error.")
        })
    })
});

/// One `<img>` element found in an article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageOccurrence {
    /// De-duplication key derived from the source URL
    pub filename: String,
    /// Absolute image URL
    pub url: String,
}

/// Extracts all images from an HTML fragment, in document order.
///
/// Elements without a `src`, or whose source has no filename segment, are
/// skipped.
pub fn extract_images(markup: &str) -> Vec<ImageOccurrence> {
    let fragment = Html::parse_fragment(markup);
    fragment
        .select(&IMG_SELECTOR)
        .filter_map(|element| {
            let src = element.value().attr("src")?;
            let Some(filename) = image_filename(src) else {
                log::debug!("Skipping image without a filename segment: {}", src);
                return None;
            };
            Some(ImageOccurrence {
                filename,
                url: absolute_image_url(src),
            })
        })
        .collect()
}

/// Filename of an image from its source URL.
///
/// Follows the upload server's thumbnail layout
/// (`.../thumb/a/ab/Name.jpg/220px-Name.jpg`), where the second-to-last path
/// segment names the original file. The segment is percent-decoded so that
/// differently encoded references to one file share a key.
pub fn image_filename(src: &str) -> Option<String> {
    let path = src.split(['?', '#']).next().unwrap_or(src);
    let mut segments = path.rsplit('/');
    segments.next()?;
    let segment = segments.next().filter(|s| !s.is_empty())?;
    Some(String::from_utf8_lossy(&urlencoding::decode_binary(segment.as_bytes())).into_owned())
}

/// Normalizes a protocol-relative URL (`//host/...`) to https.
pub fn absolute_image_url(src: &str) -> String {
    if src.starts_with("//") {
        format!("https:{src}")
    } else {
        src.to_string()
    }
}
