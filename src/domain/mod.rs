//! Domain layer for ragdesk.
//!
//! Core types shared by every other layer, independent of HTTP, terminal or
//! runtime concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`phase`]: The three independent network phases
//! - [`file`]: Locally selected files awaiting upload
//! - [`document`]: Indexed document records reported by the backend
//! - [`query`]: Search queries and results
//!
//! # Examples
//!
//! ```
//! use ragdesk::domain::{Phase, SearchQuery};
//!
//! let query = SearchQuery::new("invoice totals", 3).unwrap();
//! assert_eq!(query.limit(), 3);
//! assert_eq!(Phase::Search.to_string(), "search");
//! ```

pub mod document;
pub mod error;
pub mod file;
pub mod phase;
pub mod query;

pub use document::{IndexedDocument, PageLabel, TextChunk};
pub use error::{RagdeskError, Result, TransportCause, TransportError};
pub use file::PendingFile;
pub use phase::Phase;
pub use query::{SearchQuery, SearchResult, DEFAULT_LIMIT, MAX_LIMIT, MIN_LIMIT};
