//! Tracing initialization and subscriber setup.
//!
//! Wires `tracing` macros through `tracing-opentelemetry` into the file
//! exporter. Nothing is printed to the terminal: stdout belongs to the
//! dashboard.

use super::file_writer::RotationPolicy;
use super::tracer::{self, SCOPE};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use std::path::PathBuf;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name of the OTLP trace log inside the data directory.
pub const TRACE_FILE_NAME: &str = "ragdesk-otlp.json";

/// Installs the global subscriber with file-based OTLP export.
///
/// # Trace Level Resolution
///
/// 1. `RUST_LOG`, when set and valid
/// 2. `config.trace_level`
/// 3. Default: `"info"`
///
/// # Returns
///
/// The trace file path, or `None` if the data directory could not be
/// created. Tracing is optional; the dashboard runs either way. Calling this
/// twice keeps the first subscriber.
pub fn init_tracing(config: &Config) -> Option<PathBuf> {
    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return None;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = config.trace_level.as_deref().unwrap_or("info");
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
    });

    let resource = Resource::new(vec![
        opentelemetry::KeyValue::new("service.name", "ragdesk"),
        opentelemetry::KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);

    let trace_file = data_dir.join(TRACE_FILE_NAME);
    let provider = tracer::create_tracer_provider(trace_file.clone(), resource, RotationPolicy::default());
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SCOPE));

    let _ = tracing_subscriber::registry().with(filter).with(otel_layer).try_init();
    Some(trace_file)
}
