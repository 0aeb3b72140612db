//! Ragdesk: a terminal dashboard for a document-indexing and semantic-search backend.
//!
//! Ragdesk drives three independent workflows against a single HTTP backend:
//! - Uploading local files for indexing (multipart `POST /index/`)
//! - Listing the documents the backend has indexed (`GET /documents`)
//! - Running semantic queries (`POST /search`)
//!
//! Each workflow is a separate phase with its own status, so a slow upload
//! never blocks a search. All server-derived data lives in memory only.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  REPL binary (main.rs)                              │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Phase state machines
//! │  - Event handling                                   │
//! │  - Action execution                                 │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Service Layer │   │ Runtime       │
//! │ (ui/)         │   │ (service/)    │   │ (runtime/)    │
//! │ - Rendering   │   │ - HTTP client │   │ - Dispatcher  │
//! │ - Theming     │   │ - Trait seam  │   │ - Completions │
//! │ - Components  │   ├───────────────┤   └───────────────┘
//! └───────────────┘   │ Transfer      │
//!                     │ (transfer/)   │
//!                     │ - Multipart   │
//!                     │ - JSON bodies │
//!                     └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Records, queries, errors (domain/)               │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Coordinator state machine with event/action model
//! - [`domain`]: Core domain types (documents, files, queries, errors)
//! - [`transfer`]: Request body encoding (multipart upload, JSON query)
//! - [`service`]: The backend client trait and its HTTP implementation
//! - [`runtime`]: Background execution of actions
//! - [`ui`]: Text rendering with theme support
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`observability`]: OpenTelemetry tracing
//!
//! # Configuration
//!
//! Read from `<config dir>/ragdesk/config.toml` (or `--config <path>`):
//!
//! ```toml
//! base_url = "http://localhost:56165"
//! request_timeout_secs = 120
//! default_limit = 5
//! theme = "catppuccin-latte"
//! theme_file = "~/.config/ragdesk/theme.toml"
//! trace_level = "debug"
//! ```
//!
//! `RAGDESK_BASE_URL` and `RAGDESK_TRACE_LEVEL` override the file; command
//! line flags override both.
//!
//! # Examples
//!
//! ```no_run
//! use ragdesk::app::Coordinator;
//! use ragdesk::domain::PendingFile;
//! use ragdesk::{initialize, Config};
//!
//! # async fn run() -> ragdesk::Result<()> {
//! let dashboard = initialize(&Config::default())?;
//! let mut coordinator = Coordinator::new(dashboard.service);
//!
//! coordinator.start_upload(vec![PendingFile::from_path("report.pdf")?]).await?;
//! coordinator.refresh_documents().await?;
//! println!("{}", ragdesk::ui::render(&coordinator.view(), &dashboard.theme));
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod runtime;
pub mod service;
pub mod transfer;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, Completion, Coordinator, CoordinatorState, Event, PhaseStatus, View};
pub use domain::{RagdeskError, Result};
pub use ui::Theme;

use domain::query::clamp_limit;
use serde::Deserialize;
use service::HttpIndexService;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Default backend address.
pub const DEFAULT_BASE_URL: &str = "http://localhost:56165";

/// Dashboard configuration.
///
/// Every field is optional in the TOML file; missing keys take the defaults
/// below.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the backend; every endpoint hangs off it.
    ///
    /// Default: `"http://localhost:56165"`
    pub base_url: String,

    /// Per-request timeout in seconds. Unset means no client-side timeout.
    pub request_timeout_secs: Option<u64>,

    /// Result limit used when `search` is given no `-n`.
    ///
    /// Clamped to `1..=20` when loaded. Default: 5
    pub default_limit: u8,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`. Ignored if
    /// `theme_file` is set.
    pub theme: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Tracing level for OpenTelemetry spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. `RUST_LOG` wins
    /// when set. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: None,
            default_limit: domain::DEFAULT_LIMIT,
            theme: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`RagdeskError::Config`] if the text is not valid TOML or a
    /// key has the wrong type.
    ///
    /// # Example
    ///
    /// ```
    /// use ragdesk::Config;
    ///
    /// let config = Config::from_toml_str("base_url = \"http://rag.local:8000\"\ndefault_limit = 50")?;
    /// assert_eq!(config.base_url, "http://rag.local:8000");
    /// assert_eq!(config.default_limit, 20);
    /// # Ok::<(), ragdesk::RagdeskError>(())
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(text).map_err(|e| RagdeskError::Config(e.to_string()))?;
        config.default_limit = clamp_limit(i64::from(config.default_limit));
        Ok(config)
    }

    /// Loads configuration from `path`, or from the default location.
    ///
    /// A missing file at the default location yields [`Config::default`]; a
    /// missing file that was asked for explicitly is an error.
    ///
    /// # Errors
    ///
    /// Returns [`RagdeskError::Config`] if the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (infrastructure::get_config_path(), false),
        };

        match std::fs::read_to_string(&path) {
            Ok(text) => {
                tracing::debug!(path = %path.display(), "loading configuration");
                Self::from_toml_str(&text)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && !explicit => Ok(Self::default()),
            Err(e) => Err(RagdeskError::Config(format!("cannot read {}: {e}", path.display()))),
        }
    }

    /// Applies `RAGDESK_BASE_URL` and `RAGDESK_TRACE_LEVEL` from `lookup`.
    ///
    /// Blank values are ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use ragdesk::Config;
    ///
    /// let config = Config::default().with_env_overrides(|key| {
    ///     (key == "RAGDESK_BASE_URL").then(|| "http://10.0.0.5:56165".to_string())
    /// });
    /// assert_eq!(config.base_url, "http://10.0.0.5:56165");
    /// ```
    #[must_use]
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(base_url) = non_blank("RAGDESK_BASE_URL") {
            self.base_url = base_url;
        }
        if let Some(level) = non_blank("RAGDESK_TRACE_LEVEL") {
            self.trace_level = Some(level);
        }
        self
    }

    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// Everything the dashboard needs to start.
#[derive(Debug)]
pub struct Dashboard {
    pub state: CoordinatorState,
    pub theme: Theme,
    pub service: Arc<HttpIndexService>,
}

/// Builds the initial state, the theme and the backend client.
///
/// An unreadable theme file or unknown theme name falls back to the default
/// theme with a warning; it never prevents startup.
///
/// # Errors
///
/// Returns [`RagdeskError::Config`] for an empty base URL and
/// [`RagdeskError::Client`] if the HTTP client cannot be built.
pub fn initialize(config: &Config) -> Result<Dashboard> {
    tracing::debug!(base_url = %config.base_url, "initializing ragdesk");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    let service = HttpIndexService::new(&config.base_url, config.request_timeout())?;

    Ok(Dashboard {
        state: CoordinatorState::new(),
        theme,
        service: Arc::new(service),
    })
}
