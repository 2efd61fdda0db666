//! FASTA analysis result model.

use serde::Serialize;
use std::collections::HashMap;

/// Per-record statistics for an uploaded FASTA sequence
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FastaAnalysis {
    /// Record identifier from the FASTA header
    pub id: String,

    /// Sequence length in bases
    pub length: usize,

    /// GC content as a percentage of the full sequence
    pub gc_content: f64,

    /// The raw sequence
    pub sequence: String,

    /// Codon counts over non-overlapping triplets from frame 0
    pub codon_usage: HashMap<String, u32>,
}
