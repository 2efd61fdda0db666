//! FASTA sequence statistics.
//!
//! Parses FASTA text and computes per-record length, GC content, and codon
//! usage. Purely in-memory O(n) scans; no alignment or translation.

use std::collections::HashMap;

use crate::models::FastaAnalysis;

/// Errors that can occur when parsing FASTA input
#[derive(Debug, thiserror::Error)]
pub enum FastaError {
    /// Sequence data appeared before the first `>` header
    #[error("sequence data before the first header (line {line})")]
    MissingHeader { line: usize },
}

/// One parsed FASTA record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    /// Identifier: the first word of the header line
    pub id: String,
    /// Remainder of the header line, if any
    pub description: Option<String>,
    /// Concatenated sequence with whitespace stripped
    pub sequence: String,
}

/// Parse FASTA text into records.
///
/// Headers start with `>`; the id is the first whitespace-delimited token.
/// Sequence lines are concatenated verbatim minus surrounding whitespace.
/// Blank lines are ignored. Empty input yields an empty list.
pub fn parse_fasta(input: &str) -> Result<Vec<FastaRecord>, FastaError> {
    let mut records: Vec<FastaRecord> = Vec::new();

    for (index, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('>') {
            let mut parts = header.splitn(2, char::is_whitespace);
            let id = parts.next().unwrap_or("").to_string();
            let description = parts
                .next()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string);

            records.push(FastaRecord {
                id,
                description,
                sequence: String::new(),
            });
        } else {
            let record = records
                .last_mut()
                .ok_or(FastaError::MissingHeader { line: index + 1 })?;
            record.sequence.push_str(line);
        }
    }

    Ok(records)
}

/// GC content as a percentage of the full sequence, case-insensitive.
/// An empty sequence has a GC content of zero.
pub fn gc_content(sequence: &str) -> f64 {
    if sequence.is_empty() {
        return 0.0;
    }

    let gc = sequence
        .bytes()
        .map(|b| b.to_ascii_uppercase())
        .filter(|&b| b == b'G' || b == b'C')
        .count();

    gc as f64 / sequence.len() as f64 * 100.0
}

/// Count codons over non-overlapping triplets from frame 0.
/// A trailing partial codon is ignored.
pub fn codon_usage(sequence: &str) -> HashMap<String, u32> {
    let bytes = sequence.as_bytes();
    let mut usage = HashMap::new();

    let mut pos = 0;
    while pos + 3 <= bytes.len() {
        let codon = String::from_utf8_lossy(&bytes[pos..pos + 3]).into_owned();
        *usage.entry(codon).or_insert(0) += 1;
        pos += 3;
    }

    usage
}

/// Parse FASTA text and compute statistics for every record
pub fn analyze_fasta(input: &str) -> Result<Vec<FastaAnalysis>, FastaError> {
    let records = parse_fasta(input)?;

    Ok(records
        .into_iter()
        .map(|record| {
            let analysis = FastaAnalysis {
                length: record.sequence.len(),
                gc_content: gc_content(&record.sequence),
                codon_usage: codon_usage(&record.sequence),
                id: record.id,
                sequence: record.sequence,
            };
            tracing::debug!(
                id = %analysis.id,
                length = analysis.length,
                gc_content = analysis.gc_content,
                "Analyzed FASTA record"
            );
            analysis
        })
        .collect())
}
