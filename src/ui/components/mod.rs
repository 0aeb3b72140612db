//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for different UI
//! elements. Each component appends its lines to a shared `String` buffer.
//!
//! # Components
//!
//! - [`header`]: Title bar and tab strip
//! - [`status`]: One status line per network phase
//! - [`selection`]: Upload view (selected files)
//! - [`table`]: Documents view (cached document list)
//! - [`search`]: Search view (query and ranked results)
//! - [`empty`]: Empty state message for a view without data
//! - [`footer`]: Command hints
//!
//! # Layout
//!
//! [`render_dashboard`] composes every component:
//!
//! ```text
//! [Header]
//! [Tabs]
//! [Border]
//! [Phase status lines]
//! [Border]
//! [Active view body or empty state]
//! [Border]
//! [Footer]
//! ```

mod empty;
mod footer;
mod header;
mod search;
mod selection;
mod status;
mod table;

pub use empty::render_empty_state;

use crate::app::View;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DashboardViewModel;
use std::fmt::Write;

use footer::render_footer;
use header::{render_header, render_tabs};
use search::{render_query, render_results};
use selection::render_selection;
use status::render_status;
use table::{render_table_headers, render_table_rows};

/// Appends a horizontal border line used to separate UI sections.
fn render_border(out: &mut String, theme: &Theme, cols: usize) {
    let _ = writeln!(out, "{}", theme.paint(&theme.colors.border, &"─".repeat(cols)));
}

/// Renders the full dashboard for the active view.
pub fn render_dashboard(out: &mut String, vm: &DashboardViewModel, theme: &Theme, cols: usize) {
    render_header(out, &vm.header, theme, cols);
    render_tabs(out, &vm.tabs, theme);
    render_border(out, theme, cols);
    render_status(out, &vm.phases, theme);
    render_border(out, theme, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(out, empty, theme, cols);
    } else {
        match vm.active_view {
            View::Upload => render_selection(out, &vm.selection, vm.busy.upload, theme, cols),
            View::Documents => {
                render_table_headers(out, theme, cols);
                render_table_rows(out, &vm.documents, theme, cols);
            }
            View::Search => {
                if let Some(query) = &vm.query {
                    render_query(out, query, theme);
                }
                render_results(out, &vm.results, theme);
            }
        }
    }

    render_border(out, theme, cols);
    render_footer(out, &vm.footer, theme, cols);
}
