//! Coordinator state and view model computation.
//!
//! This module defines [`CoordinatorState`], the single source of truth for the
//! dashboard: the pending selection, the cached documents and results, one
//! [`PhaseState`] per network phase, and the active view.
//!
//! # Architecture
//!
//! State is only mutated by [`handle_event`](super::handle_event). Each cache
//! (`documents`, `results`) is replaced wholesale by a successful completion of
//! its phase and left untouched by a failed one. View models are computed on
//! demand from state snapshots and never feed back into state.
//!
//! # State Components
//!
//! - **Selection**: Files chosen for the next upload, owned until replaced
//! - **Documents**: Last successfully fetched document list
//! - **Results**: Last successful search results, with the query that produced them
//! - **Phases**: Status, last error and completion time for each phase
//! - **Active View**: Which tab is rendered
//!
//! # Example
//!
//! ```
//! use ragdesk::app::{CoordinatorState, PhaseStatus};
//! use ragdesk::domain::Phase;
//!
//! let state = CoordinatorState::new();
//! assert_eq!(state.phase(Phase::Search).status, PhaseStatus::Idle);
//! let viewmodel = state.compute_viewmodel();
//! assert_eq!(viewmodel.tabs.len(), 3);
//! ```

use super::modes::{PhaseStatus, View};
use crate::domain::{IndexedDocument, PendingFile, Phase, SearchQuery, SearchResult, TransportError};
use crate::ui::helpers::{format_file_size, format_pages, truncate_preview};
use crate::ui::viewmodel::{
    BusyFlags, ChunkPreview, DashboardViewModel, DocumentItem, EmptyState, FooterInfo, HeaderInfo, PhaseLine,
    QueryInfo, ResultItem, SelectionItem, TabItem,
};
use chrono::{DateTime, Utc};

/// Maximum characters of a text chunk shown in the documents view.
const CHUNK_PREVIEW_CHARS: usize = 200;

/// Status of one network phase plus what its last completion left behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhaseState {
    pub status: PhaseStatus,

    /// Message of the most recent failure, cleared by the next success.
    pub last_error: Option<String>,

    /// When the most recent operation of this phase completed.
    pub finished_at: Option<DateTime<Utc>>,
}

impl PhaseState {
    pub(crate) fn begin(&mut self) {
        self.status = PhaseStatus::InFlight;
    }

    pub(crate) fn succeed(&mut self, at: DateTime<Utc>) {
        self.status = PhaseStatus::Succeeded;
        self.last_error = None;
        self.finished_at = Some(at);
    }

    pub(crate) fn fail(&mut self, error: &TransportError, at: DateTime<Utc>) {
        self.status = PhaseStatus::Failed;
        self.last_error = Some(error.to_string());
        self.finished_at = Some(at);
    }
}

/// Central dashboard state container.
///
/// Holds the selection, the server-derived caches and per-phase status. All
/// server-derived data lives here in memory only; nothing survives a restart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoordinatorState {
    /// Files selected for the next upload.
    ///
    /// Replaced wholesale by `SelectFiles`, cleared by `ClearSelection`.
    /// Frozen while an upload is in flight.
    pub pending_files: Vec<PendingFile>,

    /// Last successfully fetched document list, in server order.
    pub documents: Vec<IndexedDocument>,

    /// Last successful search results, in server order.
    pub results: Vec<SearchResult>,

    /// Query that produced `results`, or the one currently in flight.
    pub last_query: Option<SearchQuery>,

    /// Tab currently rendered.
    pub active_view: View,

    pub upload: PhaseState,
    pub list: PhaseState,
    pub search: PhaseState,
}

impl CoordinatorState {
    /// Creates an empty state: nothing selected, nothing cached, every phase idle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn phase(&self, phase: Phase) -> &PhaseState {
        match phase {
            Phase::Upload => &self.upload,
            Phase::ListDocuments => &self.list,
            Phase::Search => &self.search,
        }
    }

    pub fn phase_mut(&mut self, phase: Phase) -> &mut PhaseState {
        match phase {
            Phase::Upload => &mut self.upload,
            Phase::ListDocuments => &mut self.list,
            Phase::Search => &mut self.search,
        }
    }

    /// Whether `phase` has an outstanding request.
    #[must_use]
    pub const fn is_busy(&self, phase: Phase) -> bool {
        self.phase(phase).status.is_in_flight()
    }

    /// Computes a renderable view model from the current state.
    ///
    /// The computation is pure: the same state always yields the same view
    /// model, and nothing is mutated.
    ///
    /// # Returns
    ///
    /// A [`DashboardViewModel`] with tabs, per-phase status lines, the data of
    /// every view and an optional empty state for the active one.
    #[must_use]
    pub fn compute_viewmodel(&self) -> DashboardViewModel {
        let _span = tracing::trace_span!("compute_viewmodel", view = ?self.active_view).entered();

        DashboardViewModel {
            header: self.compute_header(),
            tabs: self.compute_tabs(),
            active_view: self.active_view,
            busy: BusyFlags {
                upload: self.is_busy(Phase::Upload),
                list: self.is_busy(Phase::ListDocuments),
                search: self.is_busy(Phase::Search),
            },
            phases: Phase::ALL.iter().map(|&phase| self.compute_phase_line(phase)).collect(),
            selection: self
                .pending_files
                .iter()
                .map(|file| SelectionItem {
                    name: file.name.clone(),
                    size: format_file_size(file.size_bytes),
                    mime_type: file.mime_type.clone(),
                })
                .collect(),
            documents: self.documents.iter().map(Self::compute_document_item).collect(),
            results: self
                .results
                .iter()
                .enumerate()
                .map(|(idx, text)| ResultItem {
                    rank: idx + 1,
                    text: text.clone(),
                })
                .collect(),
            query: self.last_query.as_ref().map(|query| QueryInfo {
                text: query.text().to_string(),
                limit: query.limit(),
            }),
            empty_state: self.compute_empty_state(),
            footer: self.compute_footer(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let count = match self.active_view {
            View::Upload => self.pending_files.len(),
            View::Documents => self.documents.len(),
            View::Search => self.results.len(),
        };
        HeaderInfo {
            title: format!(" {} ({count}) ", self.active_view.title()),
        }
    }

    fn compute_tabs(&self) -> Vec<TabItem> {
        View::ALL
            .iter()
            .enumerate()
            .map(|(idx, &view)| TabItem {
                number: idx + 1,
                label: view.title().to_string(),
                is_active: view == self.active_view,
            })
            .collect()
    }

    fn compute_phase_line(&self, phase: Phase) -> PhaseLine {
        let state = self.phase(phase);
        let detail = match state.status {
            PhaseStatus::Failed => state.last_error.clone(),
            PhaseStatus::Succeeded => state
                .finished_at
                .map(|at| format!("at {}", at.format("%H:%M:%S UTC"))),
            PhaseStatus::Idle | PhaseStatus::InFlight => None,
        };
        PhaseLine {
            label: phase.label(),
            status: state.status,
            detail,
        }
    }

    fn compute_document_item(document: &IndexedDocument) -> DocumentItem {
        DocumentItem {
            filename: document.filename.clone(),
            size: format_file_size(document.file_size_bytes),
            file_type: document.file_type.clone(),
            pages: format_pages(&document.pages),
            created: document.creation_date.clone(),
            modified: document.last_modified_date.clone(),
            path: document.storage_path.clone(),
            chunks: document
                .text_chunks
                .iter()
                .map(|chunk| ChunkPreview {
                    page: chunk.page.as_ref().map_or_else(|| "-".to_string(), ToString::to_string),
                    text: truncate_preview(&chunk.text, CHUNK_PREVIEW_CHARS),
                })
                .collect(),
        }
    }

    /// Picks the empty state for the active view, if its body has no data.
    ///
    /// An empty but successful listing is not an error: it gets the plain
    /// "nothing indexed" message, distinct from a listing that never loaded.
    fn compute_empty_state(&self) -> Option<EmptyState> {
        let (message, subtitle) = match self.active_view {
            View::Upload if self.pending_files.is_empty() => {
                ("No files selected", "Use `select <path>...` to choose files to index")
            }
            View::Documents if self.documents.is_empty() => match self.list.status {
                PhaseStatus::Idle => ("Documents have not been loaded yet", "Use `refresh` to fetch the list"),
                PhaseStatus::InFlight => ("Loading documents...", "The list will appear when the server answers"),
                PhaseStatus::Failed => ("Could not load documents", "Use `refresh` to try again"),
                PhaseStatus::Succeeded => {
                    ("No documents have been indexed yet.", "Upload files from the Upload tab")
                }
            },
            View::Search if self.results.is_empty() => match self.search.status {
                PhaseStatus::Succeeded => ("No results found.", "Try a different query or a higher limit"),
                PhaseStatus::InFlight => ("Searching...", "Results will appear when the server answers"),
                PhaseStatus::Failed => ("Search failed", "Use `search <text>` to try again"),
                PhaseStatus::Idle => ("Enter a query to search", "Use `search [-n <limit>] <text>`"),
            },
            _ => return None,
        };

        Some(EmptyState {
            message: message.to_string(),
            subtitle: subtitle.to_string(),
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let view_commands = match self.active_view {
            View::Upload => "select <path>...  clear  upload",
            View::Documents => "refresh",
            View::Search => "search [-n <limit>] <text>",
        };
        FooterInfo {
            keybindings: format!("{view_commands}  tab 1|2|3  help  quit"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PageLabel, TextChunk};

    fn document(name: &str) -> IndexedDocument {
        IndexedDocument {
            filename: name.to_string(),
            file_size_bytes: 1536,
            file_type: "application/pdf".to_string(),
            storage_path: format!("/data/{name}"),
            creation_date: "2024-01-01".to_string(),
            last_modified_date: "2024-01-02".to_string(),
            pages: vec![PageLabel::Label("ii".to_string()), 1.into(), 2.into()],
            text_chunks: vec![
                TextChunk {
                    page: Some(PageLabel::Label("ii".to_string())),
                    text: "x".repeat(250),
                },
                TextChunk {
                    page: None,
                    text: "short".to_string(),
                },
            ],
        }
    }

    #[test]
    fn fresh_state_projects_idle_dashboard() {
        let vm = CoordinatorState::new().compute_viewmodel();

        assert_eq!(vm.active_view, View::Upload);
        assert!(!vm.busy.any());
        assert_eq!(vm.phases.len(), 3);
        assert!(vm.phases.iter().all(|line| line.status == PhaseStatus::Idle && line.detail.is_none()));
        assert_eq!(vm.empty_state.map(|e| e.message), Some("No files selected".to_string()));
        assert!(vm.tabs[0].is_active);
    }

    #[test]
    fn busy_flags_follow_in_flight_phases() {
        let mut state = CoordinatorState::new();
        state.list.begin();

        let vm = state.compute_viewmodel();
        assert!(vm.busy.list);
        assert!(!vm.busy.upload);
        assert!(!vm.busy.search);
    }

    #[test]
    fn failed_phase_shows_its_error() {
        let mut state = CoordinatorState::new();
        state.search.begin();
        state.search.fail(&TransportError::status(Phase::Search, 500, "boom"), Utc::now());

        let vm = state.compute_viewmodel();
        let line = &vm.phases[2];
        assert_eq!(line.status, PhaseStatus::Failed);
        assert!(line.detail.as_deref().is_some_and(|d| d.contains("500")));
    }

    #[test]
    fn documents_are_formatted_for_display() {
        let mut state = CoordinatorState::new();
        state.documents = vec![document("report.pdf")];
        state.list.succeed(Utc::now());
        state.active_view = View::Documents;

        let vm = state.compute_viewmodel();
        assert!(vm.empty_state.is_none());
        let item = &vm.documents[0];
        assert_eq!(item.size, "1.50 KB");
        assert_eq!(item.pages, "ii, 1, 2");
        assert_eq!(item.chunks[0].page, "ii");
        assert_eq!(item.chunks[0].text.chars().count(), 203);
        assert!(item.chunks[0].text.ends_with("..."));
        assert_eq!(item.chunks[1].page, "-");
        assert_eq!(item.chunks[1].text, "short");
    }

    #[test]
    fn empty_listing_after_success_is_not_an_error() {
        let mut state = CoordinatorState::new();
        state.list.succeed(Utc::now());
        state.active_view = View::Documents;

        let vm = state.compute_viewmodel();
        assert_eq!(
            vm.empty_state.map(|e| e.message),
            Some("No documents have been indexed yet.".to_string())
        );
    }

    #[test]
    fn results_keep_server_order_with_ranks() {
        let mut state = CoordinatorState::new();
        state.results = vec!["b".to_string(), "a".to_string()];
        state.last_query = SearchQuery::new("cats", 2);
        state.active_view = View::Search;

        let vm = state.compute_viewmodel();
        assert_eq!(vm.results[0], ResultItem { rank: 1, text: "b".to_string() });
        assert_eq!(vm.results[1].rank, 2);
        assert_eq!(vm.query, Some(QueryInfo { text: "cats".to_string(), limit: 2 }));
    }

    #[test]
    fn projection_is_idempotent() {
        let mut state = CoordinatorState::new();
        state.documents = vec![document("a.txt")];
        state.upload.succeed(Utc::now());

        assert_eq!(state.compute_viewmodel(), state.compute_viewmodel());
    }
}
