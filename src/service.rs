//! Pipeline orchestration: search, export, highlight.

use std::sync::Arc;

use crate::highlight;
use crate::models::HighlightedAbstract;
use crate::sources::{AnnotationSource, SourceError};

/// Runs the whole pipeline for one keyword query.
///
/// Strictly sequential per request: one search call, one export call, then
/// the in-memory highlight stages per document. Instances hold no mutable
/// state, so concurrent queries need no coordination beyond the shared
/// HTTP connection pool inside the source.
#[derive(Debug, Clone)]
pub struct HighlightService {
    source: Arc<dyn AnnotationSource>,
    max_results: usize,
}

impl HighlightService {
    /// Create a service over an annotation source
    pub fn new(source: Arc<dyn AnnotationSource>) -> Self {
        Self {
            source,
            max_results: crate::config::SearchConfig::default().max_results,
        }
    }

    /// Set the maximum number of documents requested from the search call
    pub fn max_results(mut self, max: usize) -> Self {
        self.max_results = max;
        self
    }

    /// Search for documents matching the keywords and return their
    /// entity-highlighted abstracts.
    ///
    /// An empty search result is a valid outcome and yields an empty list;
    /// only upstream failures surface as errors.
    pub async fn search_and_highlight(
        &self,
        keywords: &str,
    ) -> Result<Vec<HighlightedAbstract>, SourceError> {
        let pmids = self.source.search_ids(keywords, self.max_results).await?;
        if pmids.is_empty() {
            tracing::info!(%keywords, "No matching documents, skipping export");
            return Ok(Vec::new());
        }

        let documents = self.source.export_documents(&pmids).await?;

        let mut results = Vec::with_capacity(documents.len());
        for document in &documents {
            let pmid = document.id_string();
            let Some(passages) = document.passages.as_deref() else {
                tracing::warn!(%pmid, "Document has no passage list, skipping");
                continue;
            };

            if let Some(result) = highlight::highlight_passages(&pmid, passages) {
                results.push(result);
            }
        }

        tracing::info!(
            %keywords,
            documents = documents.len(),
            highlighted = results.len(),
            "Finished highlighting"
        );

        Ok(results)
    }
}
