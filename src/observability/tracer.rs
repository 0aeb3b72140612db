//! Tracer provider whose spans are exported to a local file.
//!
//! [`FileSpanExporter`] implements the SDK's `SpanExporter` by encoding each
//! batch with [`SpanFormatter`] and appending it to a [`RotatingWriter`]. No
//! collector or network endpoint is involved.

use super::file_writer::{RotatingWriter, RotationPolicy};
use super::span_formatter::SpanFormatter;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// Instrumentation scope recorded on every exported batch.
pub const SCOPE: &str = "ragdesk";

#[derive(Debug)]
struct FileSpanExporter {
    writer: RotatingWriter,
    formatter: SpanFormatter,
    is_shutdown: AtomicBool,
}

impl SpanExporter for FileSpanExporter {
    /// Writes the batch as one OTLP JSON line.
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.is_shutdown.load(Ordering::SeqCst) {
            Err(TraceError::from("file exporter is shut down"))
        } else {
            let line = self.formatter.format_batch(&batch).to_string();
            self.writer
                .write_line(&line)
                .map_err(|e| TraceError::from(e.to_string()))
        };
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }
}

/// Builds a provider that exports every finished span to `file_path`.
///
/// Spans are exported synchronously as they end; the file rotates according
/// to `policy`.
pub fn create_tracer_provider(file_path: PathBuf, resource: Resource, policy: RotationPolicy) -> TracerProvider {
    let exporter = FileSpanExporter {
        writer: RotatingWriter::new(file_path, policy),
        formatter: SpanFormatter::new(resource.clone(), SCOPE),
        is_shutdown: AtomicBool::new(false),
    };

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
