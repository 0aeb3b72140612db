//! Remote indexing/search service abstraction.
//!
//! This module defines the [`IndexService`] trait that the coordinator talks
//! to, and [`HttpIndexService`], its implementation over HTTP. Keeping the
//! trait narrow lets tests substitute an in-memory backend.
//!
//! Each operation is a single request/response exchange: no retries, no
//! cancellation once issued, and every failure normalized into a
//! [`TransportError`] tagged with the phase that issued it.

pub mod http;

pub use http::HttpIndexService;

use crate::domain::{IndexedDocument, SearchQuery, SearchResult, TransportError};
use crate::transfer::UploadPayload;
use async_trait::async_trait;

/// The three network operations the dashboard depends on.
///
/// # Examples
///
/// ```no_run
/// use ragdesk::service::{HttpIndexService, IndexService};
///
/// # async fn run() -> ragdesk::Result<()> {
/// let service = HttpIndexService::new("http://localhost:56165", None)?;
/// let documents = service.list_indexed_documents().await?;
/// println!("{} documents indexed", documents.len());
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait IndexService: Send + Sync {
    /// Submits files for indexing. Any 2xx response counts as success.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] with phase `Upload` on network failure or
    /// a non-2xx status.
    async fn submit_for_indexing(&self, payload: UploadPayload) -> Result<(), TransportError>;

    /// Fetches every indexed document, in server order.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] with phase `ListDocuments` on network
    /// failure, a non-2xx status, or a body that is not an array of records.
    async fn list_indexed_documents(&self) -> Result<Vec<IndexedDocument>, TransportError>;

    /// Runs a query and returns snippets in relevance order.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] with phase `Search` on network failure, a
    /// non-2xx status, or a body that is not an array of strings.
    async fn run_query(&self, query: &SearchQuery) -> Result<Vec<SearchResult>, TransportError>;

    /// Reports whether the backend answers its health probe.
    ///
    /// Every implementation answers for itself; there is no default, so an
    /// unprobed backend is never reported as healthy.
    async fn check_health(&self) -> bool;
}
