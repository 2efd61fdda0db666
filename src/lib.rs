//! # PubTator Highlight
//!
//! Search PubTator3 for biomedical literature and render entity-highlighted
//! abstracts.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`]: Core data structures (BioC wire types, highlight output)
//! - [`sources`]: The annotation-source boundary and the PubTator3 client
//! - [`highlight`]: The annotation merge-and-render engine
//! - [`service`]: Pipeline orchestration (search, export, highlight)
//! - [`fasta`]: FASTA sequence statistics (GC content, codon usage)
//! - [`utils`]: HTTP client and other utilities
//! - [`config`]: Configuration management

pub mod config;
pub mod fasta;
pub mod highlight;
pub mod models;
pub mod service;
pub mod sources;
pub mod utils;

// Re-export commonly used types
pub use models::{BioCDocument, HighlightedAbstract};
pub use service::HighlightService;
pub use sources::{AnnotationSource, PubTatorClient, SourceError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
