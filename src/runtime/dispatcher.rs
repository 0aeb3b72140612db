//! Spawns one task per action and returns completions over a channel.

use crate::app::{execute, Action, Completion};
use crate::service::IndexService;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::Instrument;

/// Runs actions in the background against a shared service.
///
/// Completions are delivered in the order the requests finish, which is not
/// necessarily the order they were dispatched.
#[derive(Clone)]
pub struct Dispatcher {
    service: Arc<dyn IndexService>,
    completions: UnboundedSender<Completion>,
}

impl Dispatcher {
    /// Creates a dispatcher and the receiving end of its completion channel.
    #[must_use]
    pub fn new(service: Arc<dyn IndexService>) -> (Self, UnboundedReceiver<Completion>) {
        let (completions, receiver) = mpsc::unbounded_channel();
        (Self { service, completions }, receiver)
    }

    /// Spawns `action` on the current runtime.
    ///
    /// The task runs inside a span parented to the caller's, so the request
    /// shows up under the event that triggered it. Returns `None` for actions
    /// without a network effect.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn dispatch(&self, action: Action) -> Option<JoinHandle<()>> {
        let phase = action.phase()?;
        let span = tracing::debug_span!("dispatch", phase = %phase);
        let service = Arc::clone(&self.service);
        let completions = self.completions.clone();

        let task = async move {
            let Some(completion) = execute(service.as_ref(), action).await else {
                return;
            };
            tracing::debug!(ok = completion.is_ok(), "request finished");
            if completions.send(completion).is_err() {
                tracing::debug!("completion receiver dropped, outcome discarded");
            }
        };

        Some(tokio::spawn(task.instrument(span)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{IndexedDocument, Phase, SearchQuery, SearchResult, TransportError};
    use crate::transfer::UploadPayload;
    use async_trait::async_trait;

    struct Canned;

    #[async_trait]
    impl IndexService for Canned {
        async fn submit_for_indexing(&self, _payload: UploadPayload) -> Result<(), TransportError> {
            Ok(())
        }

        async fn list_indexed_documents(&self) -> Result<Vec<IndexedDocument>, TransportError> {
            Err(TransportError::network(Phase::ListDocuments, "connection refused"))
        }

        async fn run_query(&self, query: &SearchQuery) -> Result<Vec<SearchResult>, TransportError> {
            Ok(vec![format!("{}:{}", query.text(), query.limit())])
        }

        async fn check_health(&self) -> bool {
            true
        }
    }

    #[tokio::test]
    async fn completions_arrive_on_the_channel() {
        let (dispatcher, mut completions) = Dispatcher::new(Arc::new(Canned));
        let query = SearchQuery::new("cats", 3).unwrap();

        dispatcher.dispatch(Action::RunQuery { query }).unwrap().await.unwrap();
        dispatcher.dispatch(Action::ListDocuments).unwrap().await.unwrap();

        assert_eq!(completions.recv().await, Some(Completion::Search(Ok(vec!["cats:3".to_string()]))));
        let Some(Completion::Documents(Err(error))) = completions.recv().await else {
            panic!("expected a failed listing");
        };
        assert_eq!(error.phase, Phase::ListDocuments);
    }

    #[tokio::test]
    async fn unreadable_upload_fails_before_the_network() {
        let (dispatcher, mut completions) = Dispatcher::new(Arc::new(Canned));
        let files = vec![crate::domain::PendingFile::new(
            "/definitely/missing.pdf",
            "missing.pdf",
            1,
            "application/pdf",
        )];

        dispatcher.dispatch(Action::SubmitForIndexing { files }).unwrap().await.unwrap();

        let Some(Completion::Upload(Err(error))) = completions.recv().await else {
            panic!("expected a failed upload");
        };
        assert!(matches!(error.cause, crate::domain::TransportCause::Encoding(_)));
    }

    #[tokio::test]
    async fn exit_spawns_nothing() {
        let (dispatcher, _completions) = Dispatcher::new(Arc::new(Canned));
        assert!(dispatcher.dispatch(Action::Exit).is_none());
    }
}
