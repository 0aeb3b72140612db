//! OTLP JSON encoding of finished spans.
//!
//! Each exported batch becomes one `resourceSpans` document, written as a
//! single line. The layout follows the OTLP/JSON mapping: ids are lowercase
//! hex, timestamps are decimal nanosecond strings, 64-bit integers are
//! strings.

use opentelemetry::trace::{Event, Link, SpanId, SpanKind, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde_json::{json, Value as JsonValue};
use std::time::{SystemTime, UNIX_EPOCH};

/// Encodes span batches for one resource and instrumentation scope.
pub struct SpanFormatter {
    resource: Resource,
    scope: &'static str,
}

impl SpanFormatter {
    pub const fn new(resource: Resource, scope: &'static str) -> Self {
        Self { resource, scope }
    }

    pub fn format_batch(&self, batch: &[SpanData]) -> JsonValue {
        let resource_attributes: Vec<JsonValue> = self
            .resource
            .iter()
            .map(|(key, value)| attribute(key.as_str(), value))
            .collect();

        json!({
            "resourceSpans": [{
                "resource": { "attributes": resource_attributes },
                "scopeSpans": [{
                    "scope": { "name": self.scope },
                    "spans": batch.iter().map(encode_span).collect::<Vec<_>>(),
                }],
            }],
        })
    }
}

impl std::fmt::Debug for SpanFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpanFormatter").field("scope", &self.scope).finish_non_exhaustive()
    }
}

fn encode_span(span: &SpanData) -> JsonValue {
    let parent = if span.parent_span_id == SpanId::INVALID {
        String::new()
    } else {
        format!("{:016x}", span.parent_span_id)
    };
    let (code, message) = status(&span.status);

    json!({
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": parent,
        "name": span.name,
        "kind": kind(&span.span_kind),
        "startTimeUnixNano": unix_nanos(span.start_time),
        "endTimeUnixNano": unix_nanos(span.end_time),
        "attributes": attributes(&span.attributes),
        "events": span.events.iter().map(encode_event).collect::<Vec<_>>(),
        "links": span.links.iter().map(encode_link).collect::<Vec<_>>(),
        "status": { "code": code, "message": message },
    })
}

fn encode_event(event: &Event) -> JsonValue {
    json!({
        "timeUnixNano": unix_nanos(event.timestamp),
        "name": event.name,
        "attributes": attributes(&event.attributes),
    })
}

fn encode_link(link: &Link) -> JsonValue {
    json!({
        "traceId": format!("{:032x}", link.span_context.trace_id()),
        "spanId": format!("{:016x}", link.span_context.span_id()),
        "attributes": attributes(&link.attributes),
    })
}

fn attributes(pairs: &[KeyValue]) -> Vec<JsonValue> {
    pairs.iter().map(|kv| attribute(kv.key.as_str(), &kv.value)).collect()
}

fn attribute(key: &str, value: &Value) -> JsonValue {
    json!({ "key": key, "value": any_value(value) })
}

/// OTLP `AnyValue` for an attribute value. Arrays keep their element type.
fn any_value(value: &Value) -> JsonValue {
    use opentelemetry::Array;

    match value {
        Value::Bool(b) => json!({ "boolValue": b }),
        Value::I64(i) => json!({ "intValue": i.to_string() }),
        Value::F64(f) => json!({ "doubleValue": f }),
        Value::String(s) => json!({ "stringValue": s.as_str() }),
        Value::Array(array) => {
            let values: Vec<JsonValue> = match array {
                Array::Bool(items) => items.iter().map(|b| json!({ "boolValue": b })).collect(),
                Array::I64(items) => items.iter().map(|i| json!({ "intValue": i.to_string() })).collect(),
                Array::F64(items) => items.iter().map(|f| json!({ "doubleValue": f })).collect(),
                Array::String(items) => items.iter().map(|s| json!({ "stringValue": s.as_str() })).collect(),
            };
            json!({ "arrayValue": { "values": values } })
        }
    }
}

const fn kind(kind: &SpanKind) -> u8 {
    match kind {
        SpanKind::Internal => 1,
        SpanKind::Server => 2,
        SpanKind::Client => 3,
        SpanKind::Producer => 4,
        SpanKind::Consumer => 5,
    }
}

fn status(status: &Status) -> (u8, String) {
    match status {
        Status::Unset => (0, String::new()),
        Status::Ok => (1, String::new()),
        Status::Error { description } => (2, description.to_string()),
    }
}

fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn integers_are_strings() {
        assert_eq!(any_value(&Value::I64(42)), json!({ "intValue": "42" }));
        assert_eq!(any_value(&Value::Bool(true)), json!({ "boolValue": true }));
    }

    #[test]
    fn arrays_keep_element_types() {
        let value = Value::Array(opentelemetry::Array::I64(vec![1, 2]));
        assert_eq!(
            any_value(&value),
            json!({ "arrayValue": { "values": [{ "intValue": "1" }, { "intValue": "2" }] } })
        );
    }

    #[test]
    fn timestamps_are_nanoseconds() {
        assert_eq!(unix_nanos(UNIX_EPOCH + Duration::from_millis(3)), "3000000");
        assert_eq!(unix_nanos(UNIX_EPOCH), "0");
    }

    #[test]
    fn empty_batch_keeps_resource_and_scope() {
        let resource = Resource::new(vec![KeyValue::new("service.name", "ragdesk")]);
        let document = SpanFormatter::new(resource, "ragdesk").format_batch(&[]);

        let scope_spans = &document["resourceSpans"][0]["scopeSpans"][0];
        assert_eq!(scope_spans["scope"]["name"], "ragdesk");
        assert_eq!(scope_spans["spans"], json!([]));
        assert_eq!(
            document["resourceSpans"][0]["resource"]["attributes"][0]["value"]["stringValue"],
            "ragdesk"
        );
    }
}
