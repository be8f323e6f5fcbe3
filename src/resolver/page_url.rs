//! Wikipedia URL parsing.
//!
//! Turns an arbitrary article URL into a language code and a raw page name.

use crate::config::{DEFAULT_LANGUAGE, WIKI_DOMAIN_SUFFIX};
use crate::error_handling::UrlRejection;

/// A page in one language edition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageRef {
    /// Language edition code, e.g. `en`
    pub language: String,
    /// Page title, raw (from a URL) or canonical (after resolution)
    pub title: String,
}

impl PageRef {
    /// Creates a page reference.
    pub fn new(language: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            title: title.into(),
        }
    }
}

/// Infers the language edition from a Wikipedia hostname.
///
/// Bare `wikipedia.org` and `www.` hosts map to English; otherwise the first
/// dot-separated label is the language (`nl.m.wikipedia.org` is `nl`).
pub fn language_from_host(host: &str) -> String {
    if host.starts_with("www.") || host.split('.').count() == 2 {
        DEFAULT_LANGUAGE.to_string()
    } else {
        host.split('.').next().unwrap_or(DEFAULT_LANGUAGE).to_string()
    }
}

/// Parses a Wikipedia article URL into a [`PageRef`].
///
/// The title comes from the last `/wiki/<title>` path segment, or from the
/// `title=` parameter of an `/w/index.php` URL. Percent-encoding is decoded;
/// spaces and underscores are kept as given. URLs without a scheme are read
/// as `https://`.
///
/// # Errors
///
/// Returns a [`UrlRejection`] when the URL cannot be parsed, is not on a
/// Wikipedia host, or names no article.
pub fn parse_wiki_url(url: &str) -> Result<PageRef, UrlRejection> {
    let normalized = if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    };

    let parsed = url::Url::parse(&normalized).map_err(|_| UrlRejection::Unparseable {
        url: url.to_string(),
    })?;
    let host = parsed
        .host_str()
        .ok_or_else(|| UrlRejection::Unparseable {
            url: url.to_string(),
        })?
        .to_ascii_lowercase();

    let on_wiki_domain = host
        .strip_suffix(WIKI_DOMAIN_SUFFIX)
        .is_some_and(|prefix| prefix.is_empty() || prefix.ends_with('.'));
    if !on_wiki_domain {
        return Err(UrlRejection::NotWikipedia {
            url: url.to_string(),
            host,
        });
    }

    let language = language_from_host(&host);

    let title = if let Some((_, page)) = parsed.path().rsplit_once("/wiki/") {
        String::from_utf8_lossy(&urlencoding::decode_binary(page.as_bytes())).into_owned()
    } else if parsed.path().contains("/w/index.php") {
        parsed
            .query_pairs()
            .find(|(key, _)| key == "title")
            .map(|(_, value)| value.into_owned())
            .unwrap_or_default()
    } else {
        String::new()
    };

    if title.is_empty() {
        return Err(UrlRejection::NoTitle {
            url: url.to_string(),
        });
    }

    Ok(PageRef { language, title })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_language_subdomain() {
        let page = parse_wiki_url("https://nl.wikipedia.org/wiki/Amsterdam").unwrap();
        assert_eq!(page, PageRef::new("nl", "Amsterdam"));
    }

    #[test]
    fn test_parse_bare_and_www_hosts_default_to_english() {
        let bare = parse_wiki_url("https://wikipedia.org/wiki/Example").unwrap();
        assert_eq!(bare.language, "en");
        let www = parse_wiki_url("https://www.wikipedia.org/wiki/Example").unwrap();
        assert_eq!(www.language, "en");
    }

    #[test]
    fn test_parse_mobile_host() {
        let page = parse_wiki_url("https://de.m.wikipedia.org/wiki/Berlin").unwrap();
        assert_eq!(page, PageRef::new("de", "Berlin"));
    }

    #[test]
    fn test_parse_strips_fragment_and_query() {
        let page =
            parse_wiki_url("https://en.wikipedia.org/wiki/Rust_(programming_language)?oldid=1#History")
                .unwrap();
        assert_eq!(page.title, "Rust_(programming_language)");
    }

    #[test]
    fn test_parse_decodes_percent_encoding() {
        let page = parse_wiki_url("https://fr.wikipedia.org/wiki/Caf%C3%A9").unwrap();
        assert_eq!(page.title, "Café");
    }

    #[test]
    fn test_parse_keeps_slashes_in_title() {
        let page = parse_wiki_url("https://en.wikipedia.org/wiki/AC/DC").unwrap();
        assert_eq!(page.title, "AC/DC");
    }

    #[test]
    fn test_parse_index_php_title() {
        let page = parse_wiki_url(
            "https://en.wikipedia.org/w/index.php?title=Man_in_Business_Suit_Levitating_emoji&action=history",
        )
        .unwrap();
        assert_eq!(
            page,
            PageRef::new("en", "Man_in_Business_Suit_Levitating_emoji")
        );
    }

    #[test]
    fn test_parse_without_scheme() {
        let page = parse_wiki_url("en.wikipedia.org/wiki/Example").unwrap();
        assert_eq!(page, PageRef::new("en", "Example"));
    }

    #[test]
    fn test_reject_foreign_host() {
        let err = parse_wiki_url("https://example.com/wiki/Example").unwrap_err();
        assert!(matches!(err, UrlRejection::NotWikipedia { ref host, .. } if host == "example.com"));
    }

    #[test]
    fn test_reject_lookalike_host() {
        assert!(matches!(
            parse_wiki_url("https://notwikipedia.org/wiki/Example"),
            Err(UrlRejection::NotWikipedia { .. })
        ));
    }

    #[test]
    fn test_reject_missing_title() {
        assert!(matches!(
            parse_wiki_url("https://en.wikipedia.org/"),
            Err(UrlRejection::NoTitle { .. })
        ));
        assert!(matches!(
            parse_wiki_url("https://en.wikipedia.org/wiki/"),
            Err(UrlRejection::NoTitle { .. })
        ));
        assert!(matches!(
            parse_wiki_url("https://en.wikipedia.org/w/index.php?action=history"),
            Err(UrlRejection::NoTitle { .. })
        ));
    }

    #[test]
    fn test_reject_garbage() {
        assert!(matches!(
            parse_wiki_url("not a url at all"),
            Err(UrlRejection::Unparseable { .. })
        ));
    }

    proptest! {
        #[test]
        fn test_title_and_language_recovered(
            language in "[a-z]{2,3}",
            title in "[A-Z][A-Za-z0-9_ ]{0,30}[A-Za-z0-9]",
        ) {
            let encoded = title.replace(' ', "%20");
            let url = format!("https://{language}.wikipedia.org/wiki/{encoded}");
            let page = parse_wiki_url(&url).unwrap();
            prop_assert_eq!(page.language, language);
            prop_assert_eq!(page.title, title);
        }

        #[test]
        fn test_www_host_is_english(title in "[A-Z][a-z_]{1,20}") {
            let url = format!("https://www.wikipedia.org/wiki/{title}");
            let page = parse_wiki_url(&url).unwrap();
            prop_assert_eq!(page.language, "en");
            prop_assert_eq!(page.title, title);
        }

        #[test]
        fn test_foreign_hosts_rejected(host in "[a-z]{3,12}\\.(com|net|org)") {
            prop_assume!(!host.ends_with("wikipedia.org"));
            let url = format!("https://{host}/wiki/Example");
            let rejected = matches!(parse_wiki_url(&url), Err(UrlRejection::NotWikipedia { .. }));
            prop_assert!(rejected);
        }
    }
}
