//! PubTator3 annotation source implementation.
//!
//! Two-stage API: a free-text search returning PMIDs, then a BioC JSON
//! export of those documents.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::ApiConfig;
use crate::models::{BioCDocument, ExportEnvelope, IdValue, SearchEnvelope};
use crate::sources::{AnnotationSource, SourceError};
use crate::utils::HttpClient;

/// PubTator3 annotation source
///
/// Uses the NCBI PubTator3 API for keyword search and BioC JSON export.
#[derive(Debug, Clone)]
pub struct PubTatorClient {
    client: Arc<HttpClient>,
    search_url: String,
    export_url: String,
}

impl PubTatorClient {
    /// Create a new PubTator3 client
    pub fn new(config: &ApiConfig) -> Result<Self, SourceError> {
        Ok(Self {
            client: Arc::new(HttpClient::new(config)?),
            search_url: config.search_url.clone(),
            export_url: config.export_url.clone(),
        })
    }

    /// Create with a custom HTTP client (for testing)
    pub fn with_client(client: Arc<HttpClient>, config: &ApiConfig) -> Self {
        Self {
            client,
            search_url: config.search_url.clone(),
            export_url: config.export_url.clone(),
        }
    }

    /// Build the search URL (keywords -> PMIDs)
    fn build_search_url(&self, keywords: &str, limit: usize) -> String {
        format!(
            "{}?text={}&limit={}",
            self.search_url,
            urlencoding::encode(keywords),
            limit
        )
    }

    /// Build the export URL for specific PMIDs
    fn build_export_url(&self, pmids: &[String]) -> String {
        format!(
            "{}?pmids={}",
            self.export_url,
            urlencoding::encode(&pmids.join(","))
        )
    }

    /// Parse the search response JSON into a PMID list
    fn parse_search_response(json: &str) -> Result<Vec<String>, SourceError> {
        let envelope: SearchEnvelope = serde_json::from_str(json)
            .map_err(|e| SourceError::Parse(format!("Failed to parse search JSON: {}", e)))?;

        Ok(envelope
            .results
            .iter()
            .filter_map(|hit| hit.pmid.as_ref())
            .map(IdValue::as_string)
            .filter(|pmid| !pmid.is_empty())
            .collect())
    }

    /// Parse the export response JSON into a document list.
    ///
    /// Two envelope shapes are tolerated: an object keyed `"PubTator3"`
    /// holding the document list, or a bare top-level list. The list is
    /// empty only if both shapes fail to parse; that condition is logged,
    /// never surfaced as an error.
    fn parse_export_response(json: &str) -> Vec<BioCDocument> {
        match serde_json::from_str::<ExportEnvelope>(json) {
            Ok(envelope) => envelope.documents,
            Err(envelope_err) => match serde_json::from_str::<Vec<BioCDocument>>(json) {
                Ok(documents) => {
                    tracing::debug!("Export response used bare-list envelope");
                    documents
                }
                Err(list_err) => {
                    tracing::warn!(
                        %envelope_err,
                        %list_err,
                        "Export response parsed under neither envelope shape, treating as empty"
                    );
                    Vec::new()
                }
            },
        }
    }

    async fn fetch(&self, url: &str, call: &str) -> Result<String, SourceError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SourceError::Network(format!("Failed to reach PubTator3 {}: {}", call, e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::Api {
                status: status.as_u16(),
                body,
            });
        }

        response
            .text()
            .await
            .map_err(|e| SourceError::Network(format!("Failed to read {} response: {}", call, e)))
    }
}

#[async_trait]
impl AnnotationSource for PubTatorClient {
    async fn search_ids(&self, keywords: &str, limit: usize) -> Result<Vec<String>, SourceError> {
        let url = self.build_search_url(keywords, limit);
        tracing::info!(%keywords, limit, "Issuing PubTator3 search call");

        let json = self.fetch(&url, "search").await?;
        let pmids = Self::parse_search_response(&json)?;

        if pmids.is_empty() {
            tracing::info!(%keywords, "PubTator3 search returned no results");
        } else {
            tracing::debug!(count = pmids.len(), "PubTator3 search returned PMIDs");
        }

        Ok(pmids)
    }

    async fn export_documents(&self, pmids: &[String]) -> Result<Vec<BioCDocument>, SourceError> {
        let url = self.build_export_url(pmids);
        tracing::info!(count = pmids.len(), "Issuing PubTator3 export call");

        let json = self.fetch(&url, "export").await?;
        Ok(Self::parse_export_response(&json))
    }
}
