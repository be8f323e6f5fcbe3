//! Projection of revisions into export rows.
//!
//! Derives the permalink, section label, and bot heuristic that downstream
//! tooling expects next to the raw revision attributes.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::types::Revision;

/// MediaWiki's auto-generated section annotation: `/* Section */ summary`.
static SECTION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/\*\s*([^*]+?)\s*\*/").unwrap_or_else(|e| {
        log::error!("Failed to compile section pattern: {}", e);
        // Matches nothing
        Regex::new(r"[^\s\S]").expect("valid fallback pattern")
    })
});

/// Stable identifier of a revision across language editions.
pub fn revision_key(revision: &Revision) -> String {
    format!("{}-{}", revision.language, revision.revision_id)
}

/// Permalink to the exact revision.
pub fn permalink(language: &str, title: &str, revision_id: u64) -> String {
    let title = title.replace(' ', "_");
    format!(
        "https://{}.wikipedia.org/w/index.php?title={}&oldid={}",
        language,
        urlencoding::encode(&title),
        revision_id
    )
}

/// Whether the author name looks like an automated account.
///
/// Heuristic only: the name ends in "bot", case-insensitively. Accounts such
/// as "Abbot" are false positives and unflagged bots are missed.
pub fn is_probably_bot(author: &str) -> bool {
    author.to_lowercase().ends_with("bot")
}

/// Section named in an edit summary, if the summary has a `/* ... */` part.
pub fn section_label(comment: &str) -> Option<String> {
    SECTION_PATTERN
        .captures(comment)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .filter(|s| !s.is_empty())
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Flattened export row for one revision.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MappedRevision {
    /// `{language}-{revision id}`
    pub id: String,
    /// Parent revision id
    pub thread_id: Option<u64>,
    /// Article title
    pub page: String,
    /// Language edition code
    pub language: String,
    /// Permalink to the revision
    pub url: String,
    /// Username or IP address
    pub author: String,
    /// Location label of an anonymous editor, empty when unknown
    pub author_anonymous_location: String,
    /// "yes" or "no"
    pub is_anonymous: &'static str,
    /// "yes" or "no"
    pub is_minor_edit: &'static str,
    /// "yes" or "no", from [`is_probably_bot`]
    pub is_probably_bot: &'static str,
    /// UTC, `%Y-%m-%d %H:%M:%S`
    pub timestamp: String,
    /// Section label, empty when the summary names none
    pub section: String,
    /// Full edit summary
    pub body: String,
    /// Seconds since the Unix epoch
    pub unix_timestamp: i64,
}

impl From<&Revision> for MappedRevision {
    fn from(revision: &Revision) -> Self {
        Self {
            id: revision_key(revision),
            thread_id: revision.parent_id,
            page: revision.title.clone(),
            language: revision.language.clone(),
            url: permalink(&revision.language, &revision.title, revision.revision_id),
            author: revision.author.clone(),
            author_anonymous_location: revision
                .location
                .as_ref()
                .map(|l| l.label())
                .unwrap_or_default(),
            is_anonymous: yes_no(revision.is_anonymous),
            is_minor_edit: yes_no(revision.is_minor),
            is_probably_bot: yes_no(is_probably_bot(&revision.author)),
            timestamp: revision.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            section: section_label(&revision.comment).unwrap_or_default(),
            body: revision.comment.clone(),
            unix_timestamp: revision.timestamp.timestamp(),
        }
    }
}

/// NDJSON record: the revision's own attributes plus the derived fields.
#[derive(Debug, Serialize)]
pub struct RevisionRecord<'a> {
    /// Revision attributes, flattened into the record
    #[serde(flatten)]
    pub revision: &'a Revision,
    /// `{language}-{revision id}`
    pub id: String,
    /// Permalink to the revision
    pub url: String,
    /// See [`is_probably_bot`]
    pub is_probably_bot: bool,
    /// Section label from the edit summary
    pub section: Option<String>,
    /// Seconds since the Unix epoch
    pub unix_timestamp: i64,
}

impl<'a> From<&'a Revision> for RevisionRecord<'a> {
    fn from(revision: &'a Revision) -> Self {
        Self {
            revision,
            id: revision_key(revision),
            url: permalink(&revision.language, &revision.title, revision.revision_id),
            is_probably_bot: is_probably_bot(&revision.author),
            section: section_label(&revision.comment),
            unix_timestamp: revision.timestamp.timestamp(),
        }
    }
}
