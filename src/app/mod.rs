//! Application layer coordinating state, events, and actions.
//!
//! This module is the workflow coordinator. It sits between the binary's REPL
//! and the service/transfer layers and owns every piece of dashboard state.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! REPL Input → Events → Event Handler → State Mutations → Actions → Service Calls
//!                           ↑                                            ↓
//!                           └──────────────── Completions ───────────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and per-phase state transitions
//! - [`modes`]: Phase status and view state machine types
//! - [`state`]: Central coordinator state container and view model computation
//! - [`coordinator`]: Sequential async façade and the shared action executor
//! - [`input`]: REPL command parsing
//!
//! # Example
//!
//! ```
//! use ragdesk::app::{handle_event, Completion, CoordinatorState, Event, PhaseStatus};
//!
//! let mut state = CoordinatorState::new();
//! handle_event(&mut state, &Event::RefreshDocuments)?;
//! handle_event(&mut state, &Event::Completed(Completion::Documents(Ok(vec![]))))?;
//! assert_eq!(state.list.status, PhaseStatus::Succeeded);
//! # Ok::<(), ragdesk::RagdeskError>(())
//! ```

pub mod actions;
pub mod coordinator;
pub mod handler;
pub mod input;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use coordinator::{execute, Coordinator};
pub use handler::{handle_event, Completion, Event};
pub use input::{parse_command, Command};
pub use modes::{PhaseStatus, View};
pub use state::{CoordinatorState, PhaseState};
