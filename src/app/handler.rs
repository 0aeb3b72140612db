//! Event handling and state transition logic.
//!
//! This module implements the coordinator's transition function. It turns
//! user triggers and network completions into state changes and action
//! sequences, and is the only place [`CoordinatorState`] is mutated.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the REPL or from the dispatcher
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations happen in place
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! Events fall into several categories:
//! - **Selection**: `SelectFiles`, `ClearSelection`
//! - **Triggers**: `StartUpload`, `RefreshDocuments`, `RunSearch`
//! - **Navigation**: `SwitchView`, `Quit`
//! - **Completions**: `Completed` with one typed variant per phase
//!
//! # Guards
//!
//! A trigger for a phase that is already in flight is dropped without
//! touching state, so each cache has exactly one writer at a time. A
//! completion for a phase that is not in flight is dropped as well.

use super::state::CoordinatorState;
use super::{Action, View};
use crate::domain::error::Result;
use crate::domain::{IndexedDocument, PendingFile, Phase, SearchQuery, SearchResult, TransportError};
use chrono::Utc;

/// Result of an executed [`Action`], fed back to the handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Upload(std::result::Result<(), TransportError>),
    Documents(std::result::Result<Vec<IndexedDocument>, TransportError>),
    Search(std::result::Result<Vec<SearchResult>, TransportError>),
}

impl Completion {
    #[must_use]
    pub const fn phase(&self) -> Phase {
        match self {
            Self::Upload(_) => Phase::Upload,
            Self::Documents(_) => Phase::ListDocuments,
            Self::Search(_) => Phase::Search,
        }
    }

    #[must_use]
    pub const fn is_ok(&self) -> bool {
        match self {
            Self::Upload(result) => result.is_ok(),
            Self::Documents(result) => result.is_ok(),
            Self::Search(result) => result.is_ok(),
        }
    }
}

/// Events triggered by user input or by completed network operations.
///
/// The handler processes these sequentially, in the order they are received,
/// so completions are applied in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Replaces the selection with the given files.
    SelectFiles(Vec<PendingFile>),
    /// Empties the selection.
    ClearSelection,

    /// Submits the given files for indexing.
    StartUpload {
        files: Vec<PendingFile>,
    },
    /// Fetches the indexed document list.
    RefreshDocuments,
    /// Runs a query. `limit` is clamped and `text` trimmed before dispatch.
    RunSearch {
        text: String,
        limit: i64,
    },

    /// Changes the visible tab without any network effect.
    SwitchView(View),

    /// Delivers the outcome of a dispatched action.
    Completed(Completion),

    /// Leaves the dashboard.
    Quit,
}

/// Processes an event, mutates coordinator state, and returns actions to execute.
///
/// # Parameters
///
/// * `state` - Mutable reference to coordinator state
/// * `event` - Event to process
///
/// # Returns
///
/// `(rerender, actions)`: whether the view must be redrawn, and the side
/// effects to execute. Ignored triggers return `(false, vec![])`.
///
/// # Errors
///
/// Transport failures are never returned here; they are folded into the
/// phase state.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
///
/// # Example
///
/// ```
/// use ragdesk::app::{handle_event, Action, CoordinatorState, Event};
///
/// let mut state = CoordinatorState::new();
/// let (_, actions) = handle_event(&mut state, &Event::RunSearch { text: "cats".into(), limit: 0 })?;
/// assert!(matches!(&actions[..], [Action::RunQuery { query }] if query.limit() == 1));
///
/// // A second trigger while the first is in flight is ignored.
/// let (rerender, actions) = handle_event(&mut state, &Event::RunSearch { text: "dogs".into(), limit: 5 })?;
/// assert!(!rerender && actions.is_empty());
/// # Ok::<(), ragdesk::RagdeskError>(())
/// ```
pub fn handle_event(state: &mut CoordinatorState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event_name(event)).entered();

    match event {
        Event::SelectFiles(files) => {
            if state.is_busy(Phase::Upload) {
                tracing::debug!("selection locked while upload is in flight");
                return Ok((false, vec![]));
            }
            tracing::debug!(files = files.len(), "selection replaced");
            state.pending_files.clone_from(files);
            Ok((true, vec![]))
        }
        Event::ClearSelection => {
            if state.is_busy(Phase::Upload) {
                tracing::debug!("selection locked while upload is in flight");
                return Ok((false, vec![]));
            }
            state.pending_files.clear();
            Ok((true, vec![]))
        }
        Event::StartUpload { files } => {
            if state.is_busy(Phase::Upload) {
                tracing::debug!("upload already in flight, trigger ignored");
                return Ok((false, vec![]));
            }
            if files.is_empty() {
                tracing::debug!("no files selected, upload not started");
                return Ok((false, vec![]));
            }

            tracing::debug!(files = files.len(), "upload started");
            state.pending_files.clone_from(files);
            state.upload.begin();
            Ok((true, vec![Action::SubmitForIndexing { files: files.clone() }]))
        }
        Event::RefreshDocuments => {
            if state.is_busy(Phase::ListDocuments) {
                tracing::debug!("document listing already in flight, trigger ignored");
                return Ok((false, vec![]));
            }

            tracing::debug!("document listing started");
            state.list.begin();
            Ok((true, vec![Action::ListDocuments]))
        }
        Event::RunSearch { text, limit } => {
            if state.is_busy(Phase::Search) {
                tracing::debug!("search already in flight, trigger ignored");
                return Ok((false, vec![]));
            }
            let Some(query) = SearchQuery::new(text, *limit) else {
                tracing::debug!("blank query, search not started");
                return Ok((false, vec![]));
            };

            tracing::debug!(query = %query.text(), limit = query.limit(), "search started");
            state.last_query = Some(query.clone());
            state.search.begin();
            Ok((true, vec![Action::RunQuery { query }]))
        }
        Event::SwitchView(view) => {
            if state.active_view == *view {
                return Ok((false, vec![]));
            }
            state.active_view = *view;
            Ok((true, vec![]))
        }
        Event::Completed(completion) => Ok((apply_completion(state, completion), vec![])),
        Event::Quit => Ok((false, vec![Action::Exit])),
    }
}

/// Applies a completion to its phase. Returns whether state changed.
fn apply_completion(state: &mut CoordinatorState, completion: &Completion) -> bool {
    let phase = completion.phase();
    if !state.is_busy(phase) {
        tracing::debug!(phase = %phase, "completion for a phase that is not in flight, ignored");
        return false;
    }

    let now = Utc::now();
    match completion {
        Completion::Upload(Ok(())) => {
            tracing::debug!(files = state.pending_files.len(), "upload succeeded");
            state.pending_files.clear();
            state.active_view = View::Documents;
            state.upload.succeed(now);
        }
        Completion::Documents(Ok(documents)) => {
            tracing::debug!(count = documents.len(), "document cache replaced");
            state.documents.clone_from(documents);
            state.list.succeed(now);
        }
        Completion::Search(Ok(results)) => {
            tracing::debug!(count = results.len(), "result cache replaced");
            state.results.clone_from(results);
            state.search.succeed(now);
        }
        Completion::Upload(Err(error)) | Completion::Documents(Err(error)) | Completion::Search(Err(error)) => {
            tracing::warn!(phase = %phase, error = %error, "operation failed, cache kept");
            state.phase_mut(phase).fail(error, now);
        }
    }
    true
}

const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::SelectFiles(_) => "select_files",
        Event::ClearSelection => "clear_selection",
        Event::StartUpload { .. } => "start_upload",
        Event::RefreshDocuments => "refresh_documents",
        Event::RunSearch { .. } => "run_search",
        Event::SwitchView(_) => "switch_view",
        Event::Completed(_) => "completed",
        Event::Quit => "quit",
    }
}
