//! Revision data structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Geographic location derived from an IP address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// ISO 3166-1 alpha-2 code
    pub country_code: Option<String>,
    /// English country name
    pub country_name: Option<String>,
    /// First subdivision, e.g. a state or province
    pub region: Option<String>,
    /// City name
    pub city: Option<String>,
}

impl GeoLocation {
    /// Renders the location as `CC / Country / Region / City`.
    ///
    /// Unknown parts are left empty so the four slots stay aligned.
    pub fn label(&self) -> String {
        [
            &self.country_code,
            &self.country_name,
            &self.region,
            &self.city,
        ]
        .iter()
        .map(|part| part.as_deref().unwrap_or(""))
        .collect::<Vec<_>>()
        .join(" / ")
    }
}

/// One revision of one article.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Revision {
    /// Revision id, unique within a language edition
    pub revision_id: u64,
    /// Previous revision; `None` for the revision that created the page
    pub parent_id: Option<u64>,
    /// Username, or the IP address for anonymous edits
    pub author: String,
    /// Edit made without an account
    pub is_anonymous: bool,
    /// Edit flagged as minor by its author
    pub is_minor: bool,
    /// When the revision was saved
    pub timestamp: DateTime<Utc>,
    /// Edit summary
    pub comment: String,
    /// Canonical article title
    pub title: String,
    /// Language edition code
    pub language: String,
    /// Location of an anonymous editor, when geolocation is enabled and the
    /// address is in the database
    pub location: Option<GeoLocation>,
}

/// Revision as returned by `prop=revisions` (format version 1).
///
/// Flags such as `anon` and `minor` are signalled by the key being present.
#[derive(Debug, Deserialize)]
pub(crate) struct RawRevision {
    pub revid: u64,
    #[serde(default)]
    pub parentid: Option<u64>,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub anon: Option<Value>,
    #[serde(default)]
    pub minor: Option<Value>,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub comment: String,
}

/// Whether a presence flag is set.
fn flag_set(flag: &Option<Value>) -> bool {
    !matches!(flag, None | Some(Value::Null) | Some(Value::Bool(false)))
}

impl RawRevision {
    pub fn is_anonymous(&self) -> bool {
        flag_set(&self.anon)
    }

    /// Converts into a [`Revision`] for `title` in `language`.
    pub fn into_revision(
        self,
        title: &str,
        language: &str,
        location: Option<GeoLocation>,
    ) -> Revision {
        let is_anonymous = self.is_anonymous();
        let is_minor = flag_set(&self.minor);
        Revision {
            revision_id: self.revid,
            parent_id: self.parentid.filter(|id| *id != 0),
            author: self.user,
            is_anonymous,
            is_minor,
            timestamp: self.timestamp,
            comment: self.comment,
            title: title.to_string(),
            language: language.to_string(),
            location,
        }
    }
}
