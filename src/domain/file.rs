//! Locally selected files awaiting upload.

use super::error::Result;
use std::path::{Path, PathBuf};

const FALLBACK_MIME: &str = "application/octet-stream";

/// A file the user picked for indexing.
///
/// Only metadata is captured on selection; the bytes are read when the upload
/// payload is encoded, so a selection stays cheap even for large files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFile {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
    pub path: PathBuf,
}

impl PendingFile {
    /// Creates a pending file from explicit metadata.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>, size_bytes: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            mime_type: mime_type.into(),
            path: path.into(),
        }
    }

    /// Builds a pending file by inspecting a path on disk.
    ///
    /// The display name is the final path component and the MIME type is
    /// guessed from the extension.
    ///
    /// # Errors
    ///
    /// Returns [`RagdeskError::Io`](super::RagdeskError::Io) if the path does
    /// not exist or is not a regular file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let metadata = std::fs::metadata(path)?;
        if !metadata.is_file() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("{} is not a regular file", path.display()),
            )
            .into());
        }

        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());

        Ok(Self {
            mime_type: guess_mime_type(&name).to_string(),
            name,
            size_bytes: metadata.len(),
            path: path.to_path_buf(),
        })
    }
}

/// Guesses a MIME type from a file name's extension.
#[must_use]
pub fn guess_mime_type(file_name: &str) -> &'static str {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("txt") => "text/plain",
        Some("md" | "markdown") => "text/markdown",
        Some("html" | "htm") => "text/html",
        Some("csv") => "text/csv",
        Some("json") => "application/json",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        Some("doc") => "application/msword",
        _ => FALLBACK_MIME,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn guesses_common_types() {
        assert_eq!(guess_mime_type("a.PDF"), "application/pdf");
        assert_eq!(guess_mime_type("notes.md"), "text/markdown");
        assert_eq!(guess_mime_type("archive"), FALLBACK_MIME);
    }

    #[test]
    fn from_path_reads_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("invoice.pdf");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"%PDF-1.7 test").unwrap();

        let pending = PendingFile::from_path(&path).unwrap();
        assert_eq!(pending.name, "invoice.pdf");
        assert_eq!(pending.size_bytes, 13);
        assert_eq!(pending.mime_type, "application/pdf");
        assert_eq!(pending.path, path);
    }

    #[test]
    fn from_path_rejects_directories_and_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        assert!(PendingFile::from_path(dir.path()).is_err());
        assert!(PendingFile::from_path(dir.path().join("missing.pdf")).is_err());
    }
}
