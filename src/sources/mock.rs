//! Mock annotation source for testing purposes.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::models::BioCDocument;
use crate::sources::{AnnotationSource, SourceError};

/// A mock source that returns predefined responses.
#[derive(Debug, Default)]
pub struct MockSource {
    search_ids: Mutex<Vec<String>>,
    documents: Mutex<Vec<BioCDocument>>,
}

impl MockSource {
    /// Create a new mock source with empty responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the PMID list returned by the search call.
    pub fn set_search_ids(&self, ids: Vec<String>) {
        *self.search_ids.lock().unwrap() = ids;
    }

    /// Set the document list returned by the export call.
    pub fn set_documents(&self, documents: Vec<BioCDocument>) {
        *self.documents.lock().unwrap() = documents;
    }
}

#[async_trait]
impl AnnotationSource for MockSource {
    async fn search_ids(&self, _keywords: &str, _limit: usize) -> Result<Vec<String>, SourceError> {
        Ok(self.search_ids.lock().unwrap().clone())
    }

    async fn export_documents(&self, _pmids: &[String]) -> Result<Vec<BioCDocument>, SourceError> {
        Ok(self.documents.lock().unwrap().clone())
    }
}
