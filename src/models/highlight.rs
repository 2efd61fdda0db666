//! Highlight output models.

use serde::Serialize;

/// A half-open `[start, end)` character span in combined-text coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: usize,
    pub end: usize,
}

impl Interval {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// A document's abstract passages reconstructed into one text with a
/// sorted, disjoint set of highlight intervals
#[derive(Debug, Clone, Default)]
pub struct CombinedAbstract {
    pub text: String,
    pub intervals: Vec<Interval>,
}

/// Final per-document result: the identifier, display title, and the
/// entity-highlighted abstract markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightedAbstract {
    pub pmid: String,
    pub title: String,
    pub abstract_html: String,
}
