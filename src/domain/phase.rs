//! Network phases of the dashboard workflow.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An independent unit of network interaction with its own status.
///
/// Phases never block each other: an upload can be in flight while the
/// document list is refreshed and a query is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Submitting selected files for indexing.
    Upload,
    /// Fetching the list of indexed documents.
    ListDocuments,
    /// Running a natural-language query.
    Search,
}

impl Phase {
    /// All phases, in display order.
    pub const ALL: [Self; 3] = [Self::Upload, Self::ListDocuments, Self::Search];

    /// Short identifier used in logs and error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Upload => "upload",
            Self::ListDocuments => "list",
            Self::Search => "search",
        }
    }

    /// Human-readable label used by the status bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Upload => "Upload",
            Self::ListDocuments => "Documents",
            Self::Search => "Search",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
