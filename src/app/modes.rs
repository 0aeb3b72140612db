//! Phase status and view state types.
//!
//! This module defines the small state-machine enums the coordinator is built
//! from. [`PhaseStatus`] tracks one network phase; [`View`] is the visible tab
//! and carries no network meaning.
//!
//! # State Machine
//!
//! Every phase moves through the same cycle:
//!
//! ```text
//! Idle ──trigger──▶ InFlight ──ok──▶ Succeeded
//!                      │
//!                      └──err──▶ Failed
//! Succeeded / Failed ──trigger──▶ InFlight
//! ```
//!
//! A trigger while `InFlight` is ignored.

use std::fmt;
use std::str::FromStr;

/// Status of one network phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PhaseStatus {
    /// No operation has been started yet.
    #[default]
    Idle,

    /// An operation is outstanding; new triggers are ignored.
    InFlight,

    /// The last operation completed and its result was applied.
    Succeeded,

    /// The last operation failed; cached data was left untouched.
    Failed,
}

impl PhaseStatus {
    /// Whether the phase currently blocks new triggers.
    #[must_use]
    pub const fn is_in_flight(self) -> bool {
        matches!(self, Self::InFlight)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::InFlight => "working",
            Self::Succeeded => "ok",
            Self::Failed => "failed",
        }
    }
}

/// The visible dashboard tab.
///
/// Switching tabs never starts a network operation; in particular, entering
/// [`View::Documents`] does not refresh the list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    /// File selection and upload.
    #[default]
    Upload,

    /// The cached list of indexed documents.
    Documents,

    /// Query input and cached results.
    Search,
}

impl View {
    /// All views, in tab order.
    pub const ALL: [Self; 3] = [Self::Upload, Self::Documents, Self::Search];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Upload => "Upload Documents",
            Self::Documents => "Indexed Documents",
            Self::Search => "Search",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "upload" | "u" => Ok(Self::Upload),
            "2" | "documents" | "docs" | "d" => Ok(Self::Documents),
            "3" | "search" | "s" => Ok(Self::Search),
            other => Err(format!("unknown tab {other:?} (expected upload, documents or search)")),
        }
    }
}
