//! The annotation-source boundary.
//!
//! This module defines the [`AnnotationSource`] trait that upstream
//! literature services implement. The production implementation is
//! [`PubTatorClient`]; tests script a [`MockSource`] instead so the
//! pipeline can be exercised without network access.

mod pubtator;

pub mod mock;

pub use mock::MockSource;
pub use pubtator::PubTatorClient;

use crate::models::BioCDocument;
use async_trait::async_trait;

/// Interface of an upstream annotation service.
///
/// Two calls, strictly sequential: a keyword search yielding document
/// identifiers, then an export of those documents in BioC JSON shape.
/// Neither call is retried internally.
#[async_trait]
pub trait AnnotationSource: Send + Sync + std::fmt::Debug {
    /// Search for documents matching free-text keywords.
    ///
    /// Returns the matching identifiers in relevance order; an empty list
    /// is a valid, non-error outcome.
    async fn search_ids(&self, keywords: &str, limit: usize) -> Result<Vec<String>, SourceError>;

    /// Fetch annotated documents for the given identifiers.
    ///
    /// A success response that parses under neither known envelope shape
    /// degrades to an empty list rather than an error.
    async fn export_documents(&self, pmids: &[String]) -> Result<Vec<BioCDocument>, SourceError>;
}

/// Errors that can occur when talking to an annotation source
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Network or HTTP transport error
    #[error("Network error: {0}")]
    Network(String),

    /// The upstream returned a non-success status; carries status and body
    /// for diagnostics
    #[error("API error: upstream returned status {status}: {body}")]
    Api { status: u16, body: String },

    /// Response body could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        SourceError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Parse(format!("JSON: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_carries_status_and_body() {
        let err = SourceError::Api {
            status: 502,
            body: "bad gateway".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("502"));
        assert!(msg.contains("bad gateway"));
    }
}
