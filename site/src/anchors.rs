//! In-page anchor contract.
//!
//! Every `href="#name"` in the document must resolve to exactly one element
//! with `id="name"`. The bare `href="#"` placeholder is ignored.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

static HREF_FRAGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r##"\shref="#([^"]*)""##).expect("valid href regex"));

static ELEMENT_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\sid="([^"]*)""#).expect("valid id regex"));

/// A broken in-page link.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnchorError {
    /// No element carries the referenced id.
    #[error("anchor #{0} has no matching element id")]
    Missing(String),
    /// More than one element carries the referenced id.
    #[error("anchor #{anchor} matches {count} elements")]
    Duplicate {
        /// Fragment without `#`
        anchor: String,
        /// Number of elements with that id
        count: usize,
    },
}

/// Fragment targets linked from `html`, sorted and deduplicated.
pub fn linked_anchors(html: &str) -> BTreeSet<String> {
    HREF_FRAGMENT
        .captures_iter(html)
        .map(|caps| caps[1].to_string())
        .filter(|anchor| !anchor.is_empty())
        .collect()
}

/// How many elements carry each id.
pub fn element_ids(html: &str) -> BTreeMap<String, usize> {
    let mut ids = BTreeMap::new();
    for caps in ELEMENT_ID.captures_iter(html) {
        *ids.entry(caps[1].to_string()).or_insert(0) += 1;
    }
    ids
}

/// Check that every linked anchor resolves to exactly one element.
///
/// Returns the resolved anchors on success, or the first broken one in
/// alphabetical order.
///
/// ```rust
/// use novelus_site::anchors::{verify_anchors, AnchorError};
///
/// let ok = r##"<a href="#faq">FAQ</a> <section id="faq"></section>"##;
/// assert_eq!(verify_anchors(ok).unwrap(), vec!["faq".to_string()]);
///
/// let broken = r##"<a href="#faq">FAQ</a>"##;
/// assert_eq!(verify_anchors(broken), Err(AnchorError::Missing("faq".into())));
/// ```
pub fn verify_anchors(html: &str) -> Result<Vec<String>, AnchorError> {
    verify_anchors_with(html, &[])
}

/// Like [`verify_anchors`], also requiring each of `required` to resolve
/// even when nothing links to it.
///
/// ```rust
/// use novelus_site::anchors::{verify_anchors_with, AnchorError};
///
/// let html = r##"<a href="#faq">FAQ</a> <section id="faq"></section>"##;
/// assert_eq!(verify_anchors_with(html, &["top"]), Err(AnchorError::Missing("top".into())));
/// ```
pub fn verify_anchors_with(html: &str, required: &[&str]) -> Result<Vec<String>, AnchorError> {
    let ids = element_ids(html);
    let mut anchors = linked_anchors(html);
    anchors.extend(required.iter().map(|id| id.to_string()));
    let mut resolved = Vec::new();
    for anchor in anchors {
        match ids.get(&anchor).copied().unwrap_or(0) {
            0 => return Err(AnchorError::Missing(anchor)),
            1 => resolved.push(anchor),
            count => return Err(AnchorError::Duplicate { anchor, count }),
        }
    }
    Ok(resolved)
}
