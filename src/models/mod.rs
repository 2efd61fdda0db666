//! Core data models.

mod bioc;
mod fasta;
mod highlight;

pub use bioc::{
    Annotation, BioCDocument, BioCPassage, ExportEnvelope, IdValue, Infons, Location, SearchHit,
    SearchEnvelope,
};
pub use fasta::FastaAnalysis;
pub use highlight::{CombinedAbstract, HighlightedAbstract, Interval};
