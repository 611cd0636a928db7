//! Bridge from tracing to timber

use crate::binder::FacadeBinder;
use crate::error::Result;
use std::error::Error as StdError;
use std::fmt::{self, Write};
use std::sync::Arc;
use timber::{Cause, Field, Level, LoggerFactory, Record};
use tracing::field::{Field as TracingField, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::{Layer, layer::Context, registry::LookupSpan};

/// A tracing layer that forwards events to timber loggers
///
/// The event target names the logger. Events inside spans get the span
/// path prepended to their message (`outer::inner: message`).
pub struct TimberLayer {
    factory: Arc<dyn LoggerFactory>,
}

impl TimberLayer {
    /// Create a new tracing bridge
    pub fn new(factory: Arc<dyn LoggerFactory>) -> Self {
        Self { factory }
    }
}

impl fmt::Debug for TimberLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimberLayer").finish_non_exhaustive()
    }
}

impl<S> Layer<S> for TimberLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        // Map tracing levels to our levels
        let level = match *event.metadata().level() {
            tracing::Level::ERROR => Level::Error,
            tracing::Level::WARN => Level::Warn,
            tracing::Level::INFO => Level::Info,
            tracing::Level::DEBUG => Level::Debug,
            tracing::Level::TRACE => Level::Trace,
        };

        let logger = self.factory.get_logger(event.metadata().target());
        if !logger.is_enabled(level) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let mut span_path = Vec::new();
        if let Some(scope) = ctx.event_scope(event) {
            for span in scope.from_root() {
                span_path.push(span.name());
            }
        }

        let message = if span_path.is_empty() {
            visitor.message
        } else {
            format!("{}: {}", span_path.join("::"), visitor.message)
        };

        let mut record = Record::new(level, message).with_fields(visitor.fields);
        if let (Some(file), Some(line)) = (event.metadata().file(), event.metadata().line()) {
            record = record.with_location(file, line);
        }
        if let Some(cause) = visitor.cause {
            record = record.with_cause(cause);
        }

        logger.log_record(record);
    }
}

/// Collects the message, the structured fields and any cause of an event
#[derive(Default)]
struct EventVisitor {
    message: String,
    fields: Vec<Field>,
    cause: Option<Cause>,
}

impl EventVisitor {
    fn is_cause(field: &TracingField) -> bool {
        matches!(field.name(), "error" | "cause")
    }

    fn push(&mut self, field: &TracingField, value: impl fmt::Display) {
        self.fields.push(Field::new(field.name(), value));
    }
}

impl Visit for EventVisitor {
    fn record_str(&mut self, field: &TracingField, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else if Self::is_cause(field) {
            self.cause = Some(Cause::new(value));
        } else {
            self.push(field, value);
        }
    }

    fn record_error(&mut self, field: &TracingField, value: &(dyn StdError + 'static)) {
        if Self::is_cause(field) {
            self.cause = Some(Cause::from_error(value));
        } else {
            self.push(field, value);
        }
    }

    fn record_debug(&mut self, field: &TracingField, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message.clear();
            let _ = write!(self.message, "{value:?}");
        } else if Self::is_cause(field) {
            self.cause = Some(Cause::new(format!("{value:?}")));
        } else {
            self.push(field, format_args!("{value:?}"));
        }
    }

    fn record_i64(&mut self, field: &TracingField, value: i64) {
        self.push(field, value);
    }

    fn record_u64(&mut self, field: &TracingField, value: u64) {
        self.push(field, value);
    }

    fn record_bool(&mut self, field: &TracingField, value: bool) {
        self.push(field, value);
    }
}

/// Route `tracing` events to timber through the facade binder
///
/// This sets up a global subscriber that captures all tracing events.
///
/// # Example
/// ```no_run
/// timber_bridge::install_tracing().expect("Failed to set tracing bridge");
/// tracing::info!(target: "ABC", "Hello, world!");
/// ```
pub fn install_tracing() -> Result<()> {
    use tracing_subscriber::prelude::*;

    let layer = TimberLayer::new(FacadeBinder::singleton().factory_handle());
    tracing::subscriber::set_global_default(tracing_subscriber::registry().with(layer))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use timber::TimberLoggerFactory;
    use timber::test_support::CaptureDispatcher;
    use tracing_subscriber::prelude::*;

    fn scoped() -> (impl Subscriber + Send + Sync, CaptureDispatcher) {
        let capture = CaptureDispatcher::new();
        let factory = TimberLoggerFactory::with_dispatcher(Arc::new(capture.clone()));
        let subscriber = tracing_subscriber::registry().with(TimberLayer::new(Arc::new(factory)));
        (subscriber, capture)
    }

    #[test]
    fn test_event_fields_and_target() {
        let (subscriber, capture) = scoped();

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(target: "ABC", count = 42, ready = true, "Message with field");
        });

        let records = capture.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].logger, "ABC");
        assert_eq!(records[0].level, Level::Info);
        assert_eq!(records[0].message, "Message with field");
        assert_eq!(records[0].field("count"), Some("42"));
        assert_eq!(records[0].field("ready"), Some("true"));
    }

    #[test]
    fn test_span_path_prefixes_message() {
        let (subscriber, capture) = scoped();

        tracing::subscriber::with_default(subscriber, || {
            let outer = tracing::info_span!("outer");
            let _outer = outer.enter();
            let inner = tracing::info_span!("inner");
            let _inner = inner.enter();
            tracing::debug!("Inside span");
        });

        assert_eq!(capture.records()[0].message, "outer::inner: Inside span");
    }

    #[test]
    fn test_error_field_becomes_cause() {
        let (subscriber, capture) = scoped();
        let error = std::io::Error::other("psych");

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(error = &error as &(dyn StdError + 'static), "Goodbye, world!");
            tracing::warn!(cause = "plain text", "second");
        });

        let records = capture.records();
        assert_eq!(records[0].cause.as_ref().map(|c| c.message.as_str()), Some("psych"));
        assert!(records[0].fields.is_empty());
        assert_eq!(records[1].cause, Some(Cause::new("plain text")));
    }

    #[test]
    fn test_other_error_fields_stay_fields() {
        let (subscriber, capture) = scoped();
        let error = std::io::Error::other("disk full");

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(failure = &error as &(dyn StdError + 'static), "write failed");
        });

        let record = &capture.records()[0];
        assert!(record.cause.is_none());
        assert_eq!(record.field("failure"), Some("disk full"));
    }
}
