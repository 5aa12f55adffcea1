//! `tracing` layer that mirrors events into a [`ServiceLogWriter`].

use std::fmt::Write as _;
use std::path::Path;
use std::sync::Arc;

use serde_json::{Map, Number, Value};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

use super::entry::LogEntry;
use super::writer::ServiceLogWriter;

pub struct JsonlLayer {
    writer: Arc<ServiceLogWriter>,
}

impl JsonlLayer {
    pub fn new(log_dir: impl AsRef<Path>, service: impl Into<String>) -> std::io::Result<Self> {
        Ok(Self {
            writer: Arc::new(ServiceLogWriter::open(log_dir, service)?),
        })
    }

    pub fn log_path(&self) -> &Path {
        self.writer.path()
    }
}

impl<S> Layer<S> for JsonlLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let meta = event.metadata();
        let mut fields = FieldCollector::default();
        event.record(&mut fields);

        let mut entry = LogEntry::now(
            meta.level().as_str().to_ascii_lowercase(),
            self.writer.service(),
            meta.target(),
            fields.message.unwrap_or_default(),
        );
        if !fields.values.is_empty() {
            entry = entry.with_fields(Value::Object(fields.values));
        }
        if let Some(scope) = ctx.event_scope(event) {
            let names: Vec<&str> = scope.from_root().map(|span| span.name()).collect();
            if !names.is_empty() {
                entry = entry.with_span(names.join(" > "));
            }
        }

        // Logging must never take the process down.
        let _ = self.writer.append(&entry);
    }
}

#[derive(Default)]
struct FieldCollector {
    message: Option<String>,
    values: Map<String, Value>,
}

impl FieldCollector {
    fn put(&mut self, field: &Field, value: Value) {
        self.values.insert(field.name().to_string(), value);
    }
}

impl Visit for FieldCollector {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let mut text = String::new();
        let _ = write!(text, "{:?}", value);
        if field.name() == "message" {
            self.message = Some(text);
        } else {
            self.put(field, Value::String(text));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.put(field, Value::String(value.to_string()));
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.put(field, Value::Number(value.into()));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.put(field, Value::Number(value.into()));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.put(field, Value::Bool(value));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if let Some(n) = Number::from_f64(value) {
            self.put(field, Value::Number(n));
        }
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.put(field, Value::String(value.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::writer::read_entries;
    use tempfile::TempDir;
    use tracing_subscriber::prelude::*;

    #[test]
    fn events_land_in_jsonl_with_fields() {
        let temp = TempDir::new().unwrap();
        let layer = JsonlLayer::new(temp.path(), "desktop").unwrap();
        let path = layer.log_path().to_path_buf();

        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, || {
            let span = tracing::info_span!("presence");
            let _guard = span.enter();
            tracing::warn!(subject_id = 7u64, status = 503, "endpoint failed");
        });

        let entries = read_entries(&path).unwrap();
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.level, "warn");
        assert_eq!(entry.service, "desktop");
        assert_eq!(entry.msg, "endpoint failed");
        assert_eq!(entry.span.as_deref(), Some("presence"));
        let fields = entry.fields.as_ref().unwrap();
        assert_eq!(fields["subject_id"], 7);
        assert_eq!(fields["status"], 503);
    }
}
