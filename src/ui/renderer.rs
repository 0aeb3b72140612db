//! Top-level rendering coordinator.
//!
//! This module provides the rendering entry points. Rendering produces a
//! `String` rather than writing to stdout, so the binary decides where the
//! frame goes and tests can inspect it.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `CoordinatorState` into `DashboardViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers
//!
//! # Example
//!
//! ```
//! use ragdesk::app::CoordinatorState;
//! use ragdesk::ui::{project, render, Theme};
//!
//! let frame = render(&project(&CoordinatorState::new()), &Theme::plain());
//! assert!(frame.contains("No files selected"));
//! ```

use crate::app::CoordinatorState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DashboardViewModel;

/// Width used by [`render`].
pub const DEFAULT_WIDTH: usize = 80;

/// Projects the coordinator state into a view model.
///
/// Pure and idempotent; see
/// [`CoordinatorState::compute_viewmodel`](crate::app::CoordinatorState::compute_viewmodel).
#[must_use]
pub fn project(state: &CoordinatorState) -> DashboardViewModel {
    state.compute_viewmodel()
}

/// Renders a view model at [`DEFAULT_WIDTH`] columns.
#[must_use]
pub fn render(vm: &DashboardViewModel, theme: &Theme) -> String {
    render_with_width(vm, theme, DEFAULT_WIDTH)
}

/// Renders a view model at `cols` columns.
#[must_use]
pub fn render_with_width(vm: &DashboardViewModel, theme: &Theme, cols: usize) -> String {
    let mut out = String::new();
    components::render_dashboard(&mut out, vm, theme, cols);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{PhaseStatus, View};
    use crate::domain::{IndexedDocument, PendingFile, SearchQuery};

    fn plain(state: &CoordinatorState) -> String {
        render(&project(state), &Theme::plain())
    }

    #[test]
    fn plain_render_has_no_escapes() {
        let frame = plain(&CoordinatorState::new());
        assert!(!frame.contains('\u{1b}'));
        assert!(frame.contains("[1] Upload Documents"));
        assert!(frame.contains("quit"));
    }

    #[test]
    fn colored_render_uses_escapes() {
        let frame = render(&project(&CoordinatorState::new()), &Theme::default());
        assert!(frame.contains("\u{1b}[38;2;"));
    }

    #[test]
    fn selection_is_listed_with_sizes() {
        let mut state = CoordinatorState::new();
        state.pending_files = vec![PendingFile::new("/tmp/a.pdf", "a.pdf", 2048, "application/pdf")];

        let frame = plain(&state);
        assert!(frame.contains("a.pdf"));
        assert!(frame.contains("2.00 KB"));
        assert!(frame.contains("1 file(s) ready"));
    }

    #[test]
    fn in_flight_upload_locks_selection_notice() {
        let mut state = CoordinatorState::new();
        state.pending_files = vec![PendingFile::new("/tmp/a.pdf", "a.pdf", 10, "application/pdf")];
        state.upload.status = PhaseStatus::InFlight;

        let frame = plain(&state);
        assert!(frame.contains("Uploading..."));
        assert!(frame.contains("working"));
    }

    #[test]
    fn documents_view_renders_table() {
        let mut state = CoordinatorState::new();
        state.active_view = View::Documents;
        state.list.status = PhaseStatus::Succeeded;
        state.documents = vec![IndexedDocument {
            filename: "report.pdf".to_string(),
            file_size_bytes: 10,
            file_type: "application/pdf".to_string(),
            storage_path: "/srv/report.pdf".to_string(),
            creation_date: "2024-01-01".to_string(),
            last_modified_date: "2024-02-02".to_string(),
            pages: vec![1.into(), 2.into()],
            text_chunks: vec![],
        }];

        let frame = plain(&state);
        assert!(frame.contains("NAME"));
        assert!(frame.contains("report.pdf"));
        assert!(frame.contains("1, 2"));
        assert!(frame.contains("/srv/report.pdf"));
    }

    #[test]
    fn search_view_renders_ranked_results() {
        let mut state = CoordinatorState::new();
        state.active_view = View::Search;
        state.search.status = PhaseStatus::Succeeded;
        state.last_query = SearchQuery::new("invoice totals", 3);
        state.results = vec!["first".to_string(), "second".to_string()];

        let frame = plain(&state);
        assert!(frame.contains("\"invoice totals\" (limit 3)"));
        assert!(frame.contains("  1. first"));
        assert!(frame.contains("  2. second"));
    }

    #[test]
    fn empty_search_after_success_says_no_results() {
        let mut state = CoordinatorState::new();
        state.active_view = View::Search;
        state.search.status = PhaseStatus::Succeeded;

        assert!(plain(&state).contains("No results found."));
    }
}
