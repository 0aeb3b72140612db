//! HTTP implementation of [`IndexService`].

use super::IndexService;
use crate::domain::{IndexedDocument, Phase, RagdeskError, Result, SearchQuery, SearchResult, TransportError};
use crate::transfer::{encode_query, UploadPayload};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

const INDEX_PATH: &str = "/index/";
const DOCUMENTS_PATH: &str = "/documents";
const SEARCH_PATH: &str = "/search";
const HEALTH_PATH: &str = "/health/";

/// Health probes use their own short timeout so startup never hangs.
const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

/// Maximum number of body characters kept in a status error.
const ERROR_BODY_LIMIT: usize = 200;

/// Acknowledgement the backend sends after indexing. Only logged.
#[derive(Debug, Deserialize)]
struct ProcessingReceipt {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: String,
    document_count: Option<u64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SearchBody {
    Bare(Vec<SearchResult>),
    Wrapped { documents: Vec<SearchResult> },
}

impl SearchBody {
    fn into_results(self) -> Vec<SearchResult> {
        match self {
            Self::Bare(results) | Self::Wrapped { documents: results } => results,
        }
    }
}

/// Talks to the indexing backend under a single base URL.
///
/// No request timeout is configured unless one is passed in; the transport's
/// default applies otherwise.
#[derive(Debug, Clone)]
pub struct HttpIndexService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpIndexService {
    /// Creates a client for the backend at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`RagdeskError::Config`] for an empty base URL and
    /// [`RagdeskError::Client`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(RagdeskError::Config("base_url must not be empty".to_string()));
        }

        let mut builder = reqwest::Client::builder().user_agent(concat!("ragdesk/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| RagdeskError::Client(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends a request and returns the body of a 2xx response.
    async fn exchange(&self, phase: Phase, request: reqwest::RequestBuilder) -> std::result::Result<Vec<u8>, TransportError> {
        let response = request
            .send()
            .await
            .map_err(|e| TransportError::network(phase, e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::network(phase, e.to_string()))?;

        if !status.is_success() {
            let snippet: String = String::from_utf8_lossy(&body).chars().take(ERROR_BODY_LIMIT).collect();
            return Err(TransportError::status(phase, status.as_u16(), snippet.trim()));
        }

        debug!(phase = %phase, status = status.as_u16(), bytes = body.len(), "backend responded");
        Ok(body.to_vec())
    }
}

fn parse_json<T: DeserializeOwned>(phase: Phase, body: &[u8]) -> std::result::Result<T, TransportError> {
    serde_json::from_slice(body).map_err(|e| TransportError::malformed(phase, e.to_string()))
}

#[async_trait]
impl IndexService for HttpIndexService {
    async fn submit_for_indexing(&self, payload: UploadPayload) -> std::result::Result<(), TransportError> {
        debug!(files = payload.field_count(), bytes = payload.total_bytes(), "submitting for indexing");
        let form = payload
            .into_form()
            .map_err(|e| TransportError::encoding(Phase::Upload, e.to_string()))?;

        let body = self
            .exchange(Phase::Upload, self.client.post(self.url(INDEX_PATH)).multipart(form))
            .await?;

        match serde_json::from_slice::<ProcessingReceipt>(&body) {
            Ok(receipt) => debug!(
                success = receipt.success,
                message = %receipt.message,
                document_count = ?receipt.document_count,
                "indexing receipt"
            ),
            Err(_) => debug!(bytes = body.len(), "upload accepted without a receipt"),
        }

        Ok(())
    }

    async fn list_indexed_documents(&self) -> std::result::Result<Vec<IndexedDocument>, TransportError> {
        let body = self
            .exchange(Phase::ListDocuments, self.client.get(self.url(DOCUMENTS_PATH)))
            .await?;
        let documents: Vec<IndexedDocument> = parse_json(Phase::ListDocuments, &body)?;
        debug!(count = documents.len(), "documents listed");
        Ok(documents)
    }

    async fn run_query(&self, query: &SearchQuery) -> std::result::Result<Vec<SearchResult>, TransportError> {
        let request_body = encode_query(query).map_err(|e| TransportError::encoding(Phase::Search, e.to_string()))?;
        let body = self
            .exchange(Phase::Search, self.client.post(self.url(SEARCH_PATH)).json(&request_body))
            .await?;
        let results = parse_json::<SearchBody>(Phase::Search, &body)?.into_results();
        debug!(count = results.len(), limit = query.limit(), "query answered");
        Ok(results)
    }

    async fn check_health(&self) -> bool {
        match self
            .client
            .get(self.url(HEALTH_PATH))
            .timeout(HEALTH_TIMEOUT)
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                warn!(error = %e, base_url = %self.base_url, "backend health check failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let service = HttpIndexService::new(" http://localhost:56165/ ", None).unwrap();
        assert_eq!(service.base_url(), "http://localhost:56165");
        assert_eq!(service.url(INDEX_PATH), "http://localhost:56165/index/");
        assert_eq!(service.url(SEARCH_PATH), "http://localhost:56165/search");
    }

    #[test]
    fn empty_base_url_is_a_config_error() {
        assert!(matches!(HttpIndexService::new("  / ", None), Err(RagdeskError::Config(_))));
    }

    #[test]
    fn search_body_accepts_both_shapes() {
        let bare: SearchBody = serde_json::from_str(r#"["a", "b"]"#).unwrap();
        assert_eq!(bare.into_results(), ["a", "b"]);

        let wrapped: SearchBody = serde_json::from_str(r#"{"documents": ["c"]}"#).unwrap();
        assert_eq!(wrapped.into_results(), ["c"]);

        assert!(serde_json::from_str::<SearchBody>(r#"{"results": []}"#).is_err());
    }

    #[test]
    fn malformed_body_is_tagged_with_phase() {
        let err = parse_json::<Vec<IndexedDocument>>(Phase::ListDocuments, b"{\"oops\": 1}").unwrap_err();
        assert_eq!(err.phase, Phase::ListDocuments);
        assert!(matches!(err.cause, crate::domain::TransportCause::Malformed(_)));
    }
}
