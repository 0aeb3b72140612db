//! Actions representing side effects to be executed by the runtime.
//!
//! The event handler never performs I/O. It returns a `Vec<Action>` describing
//! the network requests to issue, and the runtime (or the [`Coordinator`]
//! façade) executes them and feeds the outcomes back as
//! [`Event::Completed`](super::Event::Completed).
//!
//! [`Coordinator`]: super::Coordinator
//!
//! # Example
//!
//! ```
//! use ragdesk::app::{handle_event, Action, CoordinatorState, Event};
//!
//! let mut state = CoordinatorState::new();
//! let (_, actions) = handle_event(&mut state, &Event::RefreshDocuments)?;
//! assert_eq!(actions, vec![Action::ListDocuments]);
//! # Ok::<(), ragdesk::RagdeskError>(())
//! ```

use crate::domain::{PendingFile, Phase, SearchQuery};

/// Commands representing side effects to be executed outside the handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Encode the files into a multipart payload and submit it for indexing.
    SubmitForIndexing {
        /// Snapshot of the selection at trigger time.
        files: Vec<PendingFile>,
    },

    /// Fetch the list of indexed documents.
    ListDocuments,

    /// Run a validated query.
    RunQuery {
        query: SearchQuery,
    },

    /// Leave the dashboard.
    Exit,
}

impl Action {
    /// The phase whose completion this action will produce, if any.
    #[must_use]
    pub const fn phase(&self) -> Option<Phase> {
        match self {
            Self::SubmitForIndexing { .. } => Some(Phase::Upload),
            Self::ListDocuments => Some(Phase::ListDocuments),
            Self::RunQuery { .. } => Some(Phase::Search),
            Self::Exit => None,
        }
    }
}
