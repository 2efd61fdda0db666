//! The annotation merge-and-render engine.
//!
//! A strictly sequential pipeline over one document's passages:
//!
//! 1. [`combine`] concatenates the abstract passages into a single text and
//!    translates every annotation span into combined-text coordinates
//! 2. [`filter`] decides, per annotation, whether it participates at all
//! 3. [`merge`] resolves the translated spans into a minimal sorted,
//!    disjoint interval set
//! 4. [`render`] emits the escaped, highlighted markup
//!
//! Input documents are never mutated; the combined text and interval set
//! are freshly allocated outputs.

pub mod combine;
pub mod filter;
pub mod merge;
pub mod render;

pub use combine::combine_passages;
pub use filter::{accept, is_core_type, CORE_ENTITY_TYPES};
pub use merge::merge_intervals;
pub use render::{escape_html, render_highlight, HIGHLIGHT_END, HIGHLIGHT_START};

use crate::models::{BioCPassage, HighlightedAbstract};

/// Run the whole engine over one document's passages.
///
/// The first passage with the `"title"` role supplies the display title;
/// passages with the `"abstract"` role feed the combiner in delivered
/// order. Returns `None` when the document has no abstract passages.
pub fn highlight_passages(pmid: &str, passages: &[BioCPassage]) -> Option<HighlightedAbstract> {
    let title = passages
        .iter()
        .find(|p| p.is_title())
        .and_then(|p| p.text.clone())
        .unwrap_or_default();

    let abstracts: Vec<&BioCPassage> = passages.iter().filter(|p| p.is_abstract()).collect();
    if abstracts.is_empty() {
        return None;
    }

    let combined = combine_passages(&abstracts);
    let abstract_html = render_highlight(&combined.text, &combined.intervals);

    Some(HighlightedAbstract {
        pmid: pmid.to_string(),
        title,
        abstract_html,
    })
}
