//! Sequential façade over the transition function.
//!
//! [`Coordinator`] runs one operation at a time: it applies the trigger,
//! executes the resulting actions against an [`IndexService`], and applies
//! the completions before returning. The interactive binary instead feeds
//! actions to the concurrent [`Dispatcher`](crate::runtime::Dispatcher); both
//! share [`execute`], so an action means the same thing in either mode.
//!
//! # Example
//!
//! ```no_run
//! use ragdesk::app::Coordinator;
//! use ragdesk::service::HttpIndexService;
//! use std::sync::Arc;
//!
//! # async fn run() -> ragdesk::Result<()> {
//! let service = Arc::new(HttpIndexService::new("http://localhost:56165", None)?);
//! let mut coordinator = Coordinator::new(service);
//! coordinator.run_search("invoice totals", 3).await?;
//! for (rank, result) in coordinator.state().results.iter().enumerate() {
//!     println!("{}. {result}", rank + 1);
//! }
//! # Ok(())
//! # }
//! ```

use super::handler::{handle_event, Completion, Event};
use super::state::CoordinatorState;
use super::{Action, View};
use crate::domain::error::Result;
use crate::domain::{PendingFile, Phase, TransportError};
use crate::service::IndexService;
use crate::transfer::encode_upload;
use crate::ui::viewmodel::DashboardViewModel;
use std::sync::Arc;

/// Executes one action against the service and returns its completion.
///
/// Upload payloads are encoded here, so a file that cannot be read fails the
/// Upload phase with an encoding cause instead of reaching the network.
/// Returns `None` for actions without a network effect.
pub async fn execute<S: IndexService + ?Sized>(service: &S, action: Action) -> Option<Completion> {
    match action {
        Action::SubmitForIndexing { files } => {
            let result = match encode_upload(&files).await {
                Ok(payload) => service.submit_for_indexing(payload).await,
                Err(e) => Err(TransportError::encoding(Phase::Upload, e.to_string())),
            };
            Some(Completion::Upload(result))
        }
        Action::ListDocuments => Some(Completion::Documents(service.list_indexed_documents().await)),
        Action::RunQuery { query } => Some(Completion::Search(service.run_query(&query).await)),
        Action::Exit => None,
    }
}

/// Drives the coordinator state against a service, one operation at a time.
pub struct Coordinator<S: IndexService + ?Sized> {
    service: Arc<S>,
    state: CoordinatorState,
}

impl<S: IndexService + ?Sized> Coordinator<S> {
    #[must_use]
    pub fn new(service: Arc<S>) -> Self {
        Self {
            service,
            state: CoordinatorState::new(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &CoordinatorState {
        &self.state
    }

    /// Projects the current state for rendering.
    #[must_use]
    pub fn view(&self) -> DashboardViewModel {
        self.state.compute_viewmodel()
    }

    /// Replaces the selection. Ignored while an upload is in flight.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`handle_event`].
    pub fn select_files(&mut self, files: Vec<PendingFile>) -> Result<()> {
        handle_event(&mut self.state, &Event::SelectFiles(files)).map(|_| ())
    }

    /// Uploads `files` and waits for the outcome.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`handle_event`]. Transport failures are not
    /// errors: they leave the Upload phase `Failed`.
    pub async fn start_upload(&mut self, files: Vec<PendingFile>) -> Result<()> {
        self.dispatch(Event::StartUpload { files }).await
    }

    /// Fetches the document list and waits for the outcome.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`handle_event`].
    pub async fn refresh_documents(&mut self) -> Result<()> {
        self.dispatch(Event::RefreshDocuments).await
    }

    /// Runs a query and waits for the outcome.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`handle_event`].
    pub async fn run_search(&mut self, text: &str, limit: i64) -> Result<()> {
        self.dispatch(Event::RunSearch {
            text: text.to_string(),
            limit,
        })
        .await
    }

    /// Switches the visible tab. Never touches the network.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`handle_event`].
    pub fn switch_view(&mut self, view: View) -> Result<()> {
        handle_event(&mut self.state, &Event::SwitchView(view)).map(|_| ())
    }

    async fn dispatch(&mut self, event: Event) -> Result<()> {
        let (_, actions) = handle_event(&mut self.state, &event)?;
        for action in actions {
            if let Some(completion) = execute(self.service.as_ref(), action).await {
                handle_event(&mut self.state, &Event::Completed(completion))?;
            }
        }
        Ok(())
    }
}
