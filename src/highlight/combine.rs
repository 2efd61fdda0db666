//! Passage combination and offset translation.
//!
//! Upstream documents arrive as independently-offset text fragments.
//! Concatenating them without adjusting annotation offsets misaligns every
//! highlight after the first passage, so each passage records the combined
//! text position at which its raw text begins and every surviving
//! annotation location is translated onto that base.

use crate::highlight::filter;
use crate::highlight::merge::merge_intervals;
use crate::models::{BioCPassage, CombinedAbstract, Interval};

/// Separator inserted between originally-distinct passages to preserve a
/// sentence boundary; accounted for in the offset arithmetic
const PASSAGE_SEPARATOR: char = ' ';

/// Combination state threaded through the passage fold.
///
/// `len` is the running length of `text` in characters; all interval
/// arithmetic happens in character coordinates.
#[derive(Default)]
struct Accumulator {
    text: String,
    len: usize,
    intervals: Vec<Interval>,
    any_contributed: bool,
}

/// Combine a document's abstract passages, in delivered order, into one
/// text with all surviving annotation spans translated into combined-text
/// coordinates, merged, and clamped.
pub fn combine_passages(passages: &[&BioCPassage]) -> CombinedAbstract {
    let acc = passages
        .iter()
        .fold(Accumulator::default(), |acc, passage| push_passage(acc, passage));

    let intervals = merge_intervals(acc.intervals, acc.len);
    CombinedAbstract {
        text: acc.text,
        intervals,
    }
}

fn push_passage(mut acc: Accumulator, passage: &BioCPassage) -> Accumulator {
    let text = passage.text.as_deref().unwrap_or("");
    let annotations = passage.annotations.as_deref().unwrap_or(&[]);

    // A passage with neither text nor annotations contributes nothing,
    // including no separator.
    if text.is_empty() && annotations.is_empty() {
        return acc;
    }

    if acc.any_contributed {
        acc.text.push(PASSAGE_SEPARATOR);
        acc.len += 1;
    }
    acc.any_contributed = true;

    let base = acc.len;
    acc.text.push_str(text);
    acc.len += text.chars().count();

    for annotation in annotations.iter().filter(|a| filter::accept(a)) {
        for location in annotation.locations.as_deref().unwrap_or(&[]) {
            let (Some(offset), Some(length)) = (location.offset, location.length) else {
                continue;
            };
            if offset < 0 || length <= 0 {
                continue;
            }

            let start = base + offset as usize;
            acc.intervals.push(Interval::new(start, start + length as usize));
        }
    }

    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Annotation, Infons, Location};

    fn gene_annotation(text: &str, offset: i64, length: i64) -> Annotation {
        Annotation {
            locations: Some(vec![Location {
                offset: Some(offset),
                length: Some(length),
            }]),
            text: Some(text.to_string()),
            infons: Some(Infons {
                kind: Some("Gene".to_string()),
                identifier: Some("HGNC:613".to_string()),
                valid: None,
            }),
        }
    }

    fn passage(text: &str, annotations: Vec<Annotation>) -> BioCPassage {
        BioCPassage {
            infons: None,
            text: Some(text.to_string()),
            annotations: Some(annotations),
        }
    }

    #[test]
    fn test_single_passage_offsets_are_unchanged() {
        let p = passage("APOE4 causes risk.", vec![gene_annotation("APOE4", 0, 5)]);
        let combined = combine_passages(&[&p]);

        assert_eq!(combined.text, "APOE4 causes risk.");
        assert_eq!(combined.intervals, vec![Interval::new(0, 5)]);
    }

    #[test]
    fn test_second_passage_offsets_shift_by_length_plus_separator() {
        // Passage A of length n, annotation in B at raw offset k:
        // combined offset must equal n + 1 + k.
        let a_text = "First passage text";
        let n = a_text.chars().count();
        let k = 4;

        let a = passage(a_text, vec![]);
        let b = passage("the BRCA1 gene", vec![gene_annotation("BRCA1", k as i64, 5)]);
        let combined = combine_passages(&[&a, &b]);

        assert_eq!(combined.text, "First passage text the BRCA1 gene");
        assert_eq!(combined.intervals, vec![Interval::new(n + 1 + k, n + 1 + k + 5)]);
    }

    #[test]
    fn test_empty_passage_contributes_nothing_not_even_separator() {
        let a = passage("Alpha", vec![]);
        let empty = passage("", vec![]);
        let b = passage("Beta", vec![]);
        let combined = combine_passages(&[&a, &empty, &b]);

        assert_eq!(combined.text, "Alpha Beta");
    }

    #[test]
    fn test_leading_empty_passages_do_not_produce_separator() {
        let empty = passage("", vec![]);
        let a = passage("Alpha", vec![]);
        let combined = combine_passages(&[&empty, &a]);

        assert_eq!(combined.text, "Alpha");
    }

    #[test]
    fn test_empty_passage_with_annotations_still_claims_a_base() {
        // No text, but the annotation list keeps the passage contributing;
        // the next passage must still be preceded by a separator.
        let a = passage("", vec![gene_annotation("GHOST", 0, 5)]);
        let b = passage("Beta", vec![]);
        let combined = combine_passages(&[&a, &b]);

        assert_eq!(combined.text, " Beta");
        // The phantom interval lands past its passage's empty text and is
        // clamped by the merger, never panicking the renderer.
        for iv in &combined.intervals {
            assert!(iv.end <= combined.text.chars().count());
        }
    }

    #[test]
    fn test_degenerate_locations_are_discarded() {
        let zero_len = gene_annotation("APOE4", 0, 0);
        let negative_offset = gene_annotation("APOE4", -3, 5);
        let missing_length = Annotation {
            locations: Some(vec![Location {
                offset: Some(0),
                length: None,
            }]),
            ..gene_annotation("APOE4", 0, 5)
        };

        let p = passage(
            "APOE4 causes risk.",
            vec![zero_len, negative_offset, missing_length],
        );
        let combined = combine_passages(&[&p]);

        assert!(combined.intervals.is_empty());
    }

    #[test]
    fn test_annotation_without_locations_is_not_an_error() {
        let mut ann = gene_annotation("APOE4", 0, 5);
        ann.locations = None;
        let p = passage("APOE4 causes risk.", vec![ann]);
        let combined = combine_passages(&[&p]);

        assert!(combined.intervals.is_empty());
        assert_eq!(combined.text, "APOE4 causes risk.");
    }

    #[test]
    fn test_rejected_annotations_contribute_no_intervals() {
        let mut no_identifier = gene_annotation("APOE4", 0, 5);
        no_identifier.infons.as_mut().unwrap().identifier = Some("-".to_string());

        let p = passage("APOE4 causes risk.", vec![no_identifier]);
        let combined = combine_passages(&[&p]);

        assert!(combined.intervals.is_empty());
    }

    #[test]
    fn test_overlaps_across_annotations_are_merged() {
        let p = passage(
            "amyloid beta accumulation",
            vec![
                gene_annotation("amyloid beta", 0, 12),
                gene_annotation("beta accumulation", 8, 17),
            ],
        );
        let combined = combine_passages(&[&p]);

        assert_eq!(combined.intervals, vec![Interval::new(0, 25)]);
    }

    #[test]
    fn test_offsets_count_characters_not_bytes() {
        // "βββ" is 6 bytes but 3 characters; the annotation in the second
        // passage must land at char coordinates.
        let a = passage("βββ", vec![]);
        let b = passage("the BRCA1 gene", vec![gene_annotation("BRCA1", 4, 5)]);
        let combined = combine_passages(&[&a, &b]);

        // base = 3 chars + 1 separator
        assert_eq!(combined.intervals, vec![Interval::new(8, 13)]);

        let rendered =
            crate::highlight::render::render_highlight(&combined.text, &combined.intervals);
        assert!(rendered.contains("<mark class='highlight'>BRCA1</mark>"));
    }
}
