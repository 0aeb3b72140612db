//! Request body encoding for the indexing backend.
//!
//! Turns domain values into wire payloads: selected files become a multipart
//! upload, queries become a JSON body. Encoding is kept separate from the HTTP
//! client so payloads can be inspected by test doubles without a network.
//!
//! # Modules
//!
//! - [`multipart`]: File selection → multipart upload payload
//! - [`json`]: Search query → JSON request body

pub mod json;
pub mod multipart;

pub use json::encode_query;
pub use multipart::{encode_upload, UploadPart, UploadPayload, UPLOAD_FIELD};

use thiserror::Error;

/// Failure to build a request body.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// No files were given to an upload.
    #[error("no files to upload")]
    Empty,

    /// A selected file could not be read.
    #[error("could not read {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// A file's MIME type was rejected by the multipart encoder.
    #[error("invalid MIME type {mime_type:?} for {name}")]
    Mime { name: String, mime_type: String },

    /// A JSON body could not be serialized.
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}
