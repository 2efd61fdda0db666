//! Interval merging.

use crate::models::Interval;

/// Merge overlapping intervals into a minimal sorted, disjoint set and
/// clamp every endpoint into `[0, text_len]`.
///
/// Intervals that only touch (one's end equals the next one's start) stay
/// separate: two adjacent entity mentions remain two highlight spans. Only
/// a genuine overlap (`cur.start < last.end`) extends the previous span.
pub fn merge_intervals(mut intervals: Vec<Interval>, text_len: usize) -> Vec<Interval> {
    if intervals.is_empty() {
        return Vec::new();
    }

    intervals.sort_by_key(|iv| iv.start);

    let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
    for cur in intervals {
        if let Some(last) = merged.last_mut() {
            if cur.start < last.end {
                last.end = last.end.max(cur.end);
                continue;
            }
        }
        merged.push(cur);
    }

    for iv in &mut merged {
        iv.start = iv.start.min(text_len);
        iv.end = iv.end.min(text_len);
    }

    merged
}
