//! View model types representing renderable dashboard state.
//!
//! View models are immutable snapshots computed from
//! [`CoordinatorState`](crate::app::CoordinatorState) by
//! [`project`](crate::ui::project). They hold display-ready strings only; the
//! renderer never looks at domain types.
//!
//! # Example
//!
//! ```
//! use ragdesk::app::CoordinatorState;
//! use ragdesk::ui::project;
//!
//! let vm = project(&CoordinatorState::new());
//! assert!(!vm.busy.any());
//! assert!(vm.empty_state.is_some());
//! ```

use crate::app::{PhaseStatus, View};

/// Complete dashboard view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardViewModel {
    /// Header information (title, counts).
    pub header: HeaderInfo,

    /// Tab strip, one entry per view.
    pub tabs: Vec<TabItem>,

    /// The view whose body is rendered.
    pub active_view: View,

    /// Per-phase busy flags (`status == InFlight`).
    pub busy: BusyFlags,

    /// One status line per phase.
    pub phases: Vec<PhaseLine>,

    /// Files selected for upload, with formatted sizes.
    pub selection: Vec<SelectionItem>,

    /// Cached indexed documents.
    pub documents: Vec<DocumentItem>,

    /// Cached search results in server order.
    pub results: Vec<ResultItem>,

    /// The query the current results belong to.
    pub query: Option<QueryInfo>,

    /// Message shown instead of the active view's body when it has no data.
    pub empty_state: Option<EmptyState>,

    /// Footer information (available commands).
    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

/// One tab in the tab strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabItem {
    /// 1-based position, also accepted by the `tab` command.
    pub number: usize,
    pub label: String,
    pub is_active: bool,
}

/// Which phases currently have an outstanding request.
///
/// A busy phase's trigger is disabled in the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BusyFlags {
    pub upload: bool,
    pub list: bool,
    pub search: bool,
}

impl BusyFlags {
    #[must_use]
    pub const fn any(&self) -> bool {
        self.upload || self.list || self.search
    }
}

/// Status of one phase for the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseLine {
    pub label: &'static str,
    pub status: PhaseStatus,
    /// Completion time or last error, when there is one.
    pub detail: Option<String>,
}

/// A selected file awaiting upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionItem {
    pub name: String,
    /// Human-readable size, e.g. `"1.50 KB"`.
    pub size: String,
    pub mime_type: String,
}

/// Display information for one indexed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentItem {
    pub filename: String,
    pub size: String,
    pub file_type: String,
    /// Page numbers joined with `", "`.
    pub pages: String,
    pub created: String,
    pub modified: String,
    pub path: String,
    pub chunks: Vec<ChunkPreview>,
}

/// A truncated text chunk shown under its document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkPreview {
    /// Page label, `"-"` when unknown.
    pub page: String,
    pub text: String,
}

/// One search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultItem {
    /// 1-based position in server order.
    pub rank: usize,
    pub text: String,
}

/// The query shown above the results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryInfo {
    pub text: String,
    pub limit: u8,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No documents have been indexed yet.").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Command hints for the active view.
    pub keybindings: String,
}
