//! User interface rendering layer with component-based architecture.
//!
//! This module turns coordinator state into ANSI-styled text frames through
//! composable rendering components. It provides theme support and the pure
//! view projection the dashboard is drawn from.
//!
//! # Architecture
//!
//! The UI layer follows a declarative rendering model:
//!
//! ```text
//! CoordinatorState → project → DashboardViewModel → render → String
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable dashboard state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared formatting utilities (sizes, previews, padding)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{project, render, render_with_width, DEFAULT_WIDTH};
pub use theme::Theme;
pub use viewmodel::{
    BusyFlags, ChunkPreview, DashboardViewModel, DocumentItem, EmptyState, FooterInfo, HeaderInfo, PhaseLine,
    QueryInfo, ResultItem, SelectionItem, TabItem,
};
