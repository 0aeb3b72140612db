//! Concurrent execution of coordinator actions.
//!
//! The handler describes side effects as [`Action`](crate::app::Action)s; the
//! [`Dispatcher`] runs each one as its own task and reports the outcome over a
//! channel. The interactive loop keeps reading input while requests are
//! outstanding, so one slow phase never blocks the others.

pub mod dispatcher;

pub use dispatcher::Dispatcher;
