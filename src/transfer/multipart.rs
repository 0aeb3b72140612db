//! Multipart upload payloads.
//!
//! An [`UploadPayload`] is an owned, inspectable list of file parts. It is
//! converted into a `reqwest` form only at the moment the request is sent,
//! which keeps the field layout observable in tests.

use super::EncodeError;
use crate::domain::PendingFile;
use reqwest::multipart::{Form, Part};

/// Field key every uploaded file is attached under.
pub const UPLOAD_FIELD: &str = "files";

/// One file inside an upload payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPart {
    pub field: &'static str,
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Encoded upload body: one part per file, in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadPayload {
    parts: Vec<UploadPart>,
}

impl UploadPayload {
    /// Builds a payload from already loaded parts.
    #[must_use]
    pub const fn from_parts(parts: Vec<UploadPart>) -> Self {
        Self { parts }
    }

    #[must_use]
    pub fn parts(&self) -> &[UploadPart] {
        &self.parts
    }

    /// Number of multipart fields the payload will produce.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.parts.len()
    }

    /// Sum of all part sizes in bytes.
    #[must_use]
    pub fn total_bytes(&self) -> u64 {
        self.parts.iter().map(|p| p.bytes.len() as u64).sum()
    }

    /// Converts the payload into a `reqwest` multipart form.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::Mime`] if a part carries a MIME type that is not
    /// a valid media type.
    pub fn into_form(self) -> Result<Form, EncodeError> {
        self.parts.into_iter().try_fold(Form::new(), |form, part| {
            let UploadPart {
                field,
                file_name,
                mime_type,
                bytes,
            } = part;

            let body = Part::bytes(bytes)
                .file_name(file_name.clone())
                .mime_str(&mime_type)
                .map_err(|_| EncodeError::Mime {
                    name: file_name,
                    mime_type: mime_type.clone(),
                })?;

            Ok(form.part(field, body))
        })
    }
}

/// Reads the selected files and attaches each under [`UPLOAD_FIELD`].
///
/// Files are attached in the order given. No size limit is applied; the
/// backend decides what it accepts.
///
/// # Errors
///
/// Returns [`EncodeError::Empty`] for an empty selection and
/// [`EncodeError::Read`] if any file cannot be read.
pub async fn encode_upload(files: &[PendingFile]) -> Result<UploadPayload, EncodeError> {
    if files.is_empty() {
        return Err(EncodeError::Empty);
    }

    let mut parts = Vec::with_capacity(files.len());
    for file in files {
        let bytes = tokio::fs::read(&file.path)
            .await
            .map_err(|source| EncodeError::Read {
                name: file.name.clone(),
                source,
            })?;

        parts.push(UploadPart {
            field: UPLOAD_FIELD,
            file_name: file.name.clone(),
            mime_type: file.mime_type.clone(),
            bytes,
        });
    }

    tracing::debug!(
        files = parts.len(),
        total_bytes = parts.iter().map(|p| p.bytes.len()).sum::<usize>(),
        "encoded upload payload"
    );

    Ok(UploadPayload::from_parts(parts))
}
