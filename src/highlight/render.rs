//! Highlight rendering.

use crate::models::Interval;

/// Opening marker wrapped around a highlighted span
pub const HIGHLIGHT_START: &str = "<mark class='highlight'>";
/// Closing marker
pub const HIGHLIGHT_END: &str = "</mark>";

/// Neutralize markup-significant characters.
///
/// Entity text comes from an external service and must never inject markup
/// into the rendered output.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render combined text with the given sorted, disjoint intervals wrapped
/// in highlight markers.
///
/// Every emitted segment is escaped, including the highlighted ones.
/// Intervals are indexed in characters, so a span can never split a
/// multi-byte code point. A residual overlap with the previously emitted
/// region is clamped away; an interval empty after clamping is skipped.
pub fn render_highlight(text: &str, intervals: &[Interval]) -> String {
    if text.is_empty() {
        return String::new();
    }
    if intervals.is_empty() {
        return escape_html(text);
    }

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut last = 0usize;

    for iv in intervals {
        let start = iv.start.max(last);
        let end = iv.end.min(chars.len());
        if start >= end {
            continue;
        }

        out.push_str(&escape_html(&collect(&chars[last..start])));
        out.push_str(HIGHLIGHT_START);
        out.push_str(&escape_html(&collect(&chars[start..end])));
        out.push_str(HIGHLIGHT_END);
        last = end;
    }

    if last < chars.len() {
        out.push_str(&escape_html(&collect(&chars[last..])));
    }

    out
}

fn collect(chars: &[char]) -> String {
    chars.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(start: usize, end: usize) -> Interval {
        Interval::new(start, end)
    }

    #[test]
    fn test_empty_text_yields_empty_output() {
        assert_eq!(render_highlight("", &[iv(0, 5)]), "");
    }

    #[test]
    fn test_no_intervals_yields_escaped_text() {
        assert_eq!(render_highlight("a < b & c", &[]), "a &lt; b &amp; c");
    }

    #[test]
    fn test_single_interval() {
        let out = render_highlight("APOE4 causes risk.", &[iv(0, 5)]);
        assert_eq!(out, "<mark class='highlight'>APOE4</mark> causes risk.");
    }

    #[test]
    fn test_adjacent_intervals_render_as_separate_marks() {
        let out = render_highlight("abcdef", &[iv(0, 3), iv(3, 6)]);
        assert_eq!(
            out,
            "<mark class='highlight'>abc</mark><mark class='highlight'>def</mark>"
        );
    }

    #[test]
    fn test_rendering_is_idempotent_over_interval_set() {
        let text = "one two three four";
        let intervals = [iv(0, 3), iv(8, 13)];
        let first = render_highlight(text, &intervals);
        let second = render_highlight(text, &intervals);
        assert_eq!(first, second);
    }

    #[test]
    fn test_script_tag_is_escaped_everywhere() {
        let text = "<script>alert(1)</script> and <script>";
        // One span over the leading tag, the trailing one stays plain
        let out = render_highlight(text, &[iv(0, 8)]);
        assert!(!out.contains("<script>"));
        assert!(out.contains("<mark class='highlight'>&lt;script&gt;</mark>"));
        assert!(out.ends_with("&lt;script&gt;"));
    }

    #[test]
    fn test_residual_overlap_is_clamped() {
        // Second interval starts before the first one ended
        let out = render_highlight("abcdefgh", &[iv(0, 5), iv(3, 8)]);
        assert_eq!(
            out,
            "<mark class='highlight'>abcde</mark><mark class='highlight'>fgh</mark>"
        );
    }

    #[test]
    fn test_degenerate_interval_is_skipped() {
        let out = render_highlight("abcdef", &[iv(2, 2), iv(4, 3)]);
        assert_eq!(out, "abcdef");
    }

    #[test]
    fn test_out_of_range_end_is_clamped() {
        let out = render_highlight("short", &[iv(2, 100)]);
        assert_eq!(out, "sh<mark class='highlight'>ort</mark>");
    }

    #[test]
    fn test_multibyte_text_is_sliced_by_characters() {
        let out = render_highlight("αβγδε", &[iv(1, 3)]);
        assert_eq!(out, "α<mark class='highlight'>βγ</mark>δε");
    }
}
