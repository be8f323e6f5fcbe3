//! Error handling.
//!
//! Errors are grouped by where they stop work:
//! - **Gateway errors**: transport, status, decode, and API-reported failures;
//!   always absorbed at the gateway and reported as "no data"
//! - **URL rejections**: one input URL is skipped
//! - **Collect errors**: cancellation (aborts the run) or an invalid page
//!   (aborts one article)
//! - **Input errors**: rejected before any request is made

mod types;

// Re-export public API
pub use types::{CollectError, GatewayError, InitializationError, InputError, UrlRejection};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_error_messages() {
        assert_eq!(
            GatewayError::Status(503).to_string(),
            "Wikipedia API request failed (503)"
        );
        assert_eq!(
            GatewayError::Api("The page you specified doesn't exist.".into()).to_string(),
            "Wikipedia API request failed (The page you specified doesn't exist.)"
        );
    }

    #[test]
    fn test_collect_error_interrupted() {
        let interrupted = CollectError::Interrupted("fetching revisions".into());
        assert!(interrupted.is_interrupted());
        assert_eq!(
            interrupted.to_string(),
            "Interrupted while fetching revisions"
        );

        let invalid = CollectError::InvalidPage {
            title: "Foo|Bar".into(),
            reason: "The requested page title contains invalid characters".into(),
        };
        assert!(!invalid.is_interrupted());
        assert!(invalid.to_string().contains("Wikipedia said"));
    }

    #[test]
    fn test_url_rejection_messages() {
        let rejection = UrlRejection::NotWikipedia {
            url: "https://example.com/wiki/Foo".into(),
            host: "example.com".into(),
        };
        assert_eq!(
            rejection.to_string(),
            "https://example.com/wiki/Foo is not a Wikipedia URL (example.com), skipping"
        );
    }

    #[test]
    fn test_input_error_messages() {
        let err = InputError::LimitOutOfRange {
            limit: 0,
            min: 1,
            max: 25_000,
        };
        assert_eq!(err.to_string(), "Revision limit 0 is out of range (1-25000)");
    }
}
