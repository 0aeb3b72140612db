//! OpenTelemetry-based observability with file-based trace export.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! # Features
//!
//! - **File-Based Export**: Traces written to `<data dir>/ragdesk/ragdesk-otlp.json`
//! - **Automatic Rotation**: Files rotate at 10MB with 3 numbered backups
//! - **OTLP Format**: Standard OpenTelemetry Protocol JSON format
//! - **Resource Metadata**: Service name and version
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option (or `RAGDESK_TRACE_LEVEL` / `--trace-level`)
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! ```no_run
//! use ragdesk::observability::init_tracing;
//! use ragdesk::Config;
//!
//! if let Some(path) = init_tracing(&Config::default()) {
//!     tracing::info!(trace_file = %path.display(), "tracing initialized");
//! }
//! ```
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `tracer`: Tracer provider with a file span exporter
//! - `span_formatter`: OTLP JSON encoding
//! - `file_writer`: Size-rotated output file

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, TRACE_FILE_NAME};
