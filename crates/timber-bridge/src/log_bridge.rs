//! Bridge from the `log` crate to timber

use crate::binder::FacadeBinder;
use crate::error::Result;
use log::kv::{self, Key, Value, VisitSource};
use log::{Log, Metadata, Record as LogRecord};
use std::borrow::Cow;
use std::fmt;
use std::sync::{Arc, OnceLock};
use timber::{Cause, Field, Level, LoggerFactory, Record};

/// Key/value pair treated as the record's cause when it is not an error value
pub const CAUSE_KEY: &str = "cause";

/// Implements the log crate's Log trait on top of a timber logger factory
///
/// Each `log` target becomes the name of a timber logger.
pub struct LogBridge {
    factory: Arc<dyn LoggerFactory>,
}

impl LogBridge {
    /// Create a new log bridge
    pub fn new(factory: Arc<dyn LoggerFactory>) -> Self {
        Self { factory }
    }
}

impl fmt::Debug for LogBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogBridge").finish_non_exhaustive()
    }
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.factory
            .get_logger(metadata.target())
            .is_enabled(map_level(metadata.level()))
    }

    fn log(&self, record: &LogRecord) {
        let logger = self.factory.get_logger(record.target());
        let level = map_level(record.level());
        if !logger.is_enabled(level) {
            return;
        }

        let mut pairs = KeyValues::default();
        // Our visitor never fails
        let _ = record.key_values().visit(&mut pairs);

        let message = match record.args().as_str() {
            Some(literal) => Cow::Borrowed(literal),
            None => Cow::Owned(record.args().to_string()),
        };

        let mut entry = Record::new(level, message).with_fields(pairs.fields);
        if let (Some(file), Some(line)) = (record.file(), record.line()) {
            entry = entry.with_location(file, line);
        }
        if let Some(cause) = pairs.cause {
            entry = entry.with_cause(cause);
        }

        logger.log_record(entry);
    }

    fn flush(&self) {
        self.factory.flush();
    }
}

/// Splits `log` key/values into structured fields and a cause
#[derive(Default)]
struct KeyValues {
    fields: Vec<Field>,
    cause: Option<Cause>,
}

impl<'kvs> VisitSource<'kvs> for KeyValues {
    fn visit_pair(
        &mut self,
        key: Key<'kvs>,
        value: Value<'kvs>,
    ) -> std::result::Result<(), kv::Error> {
        if let Some(error) = value.to_borrowed_error() {
            self.cause = Some(Cause::from_error(error));
        } else if key.as_str() == CAUSE_KEY {
            self.cause = Some(Cause::new(value.to_string()));
        } else {
            self.fields.push(Field::new(key.as_str(), value));
        }
        Ok(())
    }
}

/// Map log levels to our levels
fn map_level(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::Error,
        log::Level::Warn => Level::Warn,
        log::Level::Info => Level::Info,
        log::Level::Debug => Level::Debug,
        log::Level::Trace => Level::Trace,
    }
}

/// The `log` filter matching timber's compile-time ceiling
pub fn max_level_filter() -> log::LevelFilter {
    match Level::static_max() {
        None => log::LevelFilter::Off,
        Some(Level::Error) => log::LevelFilter::Error,
        Some(Level::Warn) => log::LevelFilter::Warn,
        Some(Level::Info) => log::LevelFilter::Info,
        Some(Level::Debug) => log::LevelFilter::Debug,
        Some(Level::Trace) => log::LevelFilter::Trace,
    }
}

/// Route the `log` crate to timber through the facade binder
///
/// Succeeds once per process; afterwards every `log::info!` and friends
/// reaches timber's global dispatcher.
///
/// # Example
/// ```no_run
/// timber_bridge::install().expect("Failed to set log bridge");
/// log::info!(target: "ABC", "Hello, world!");
/// ```
pub fn install() -> Result<()> {
    log::set_logger(FacadeBinder::singleton().log_bridge())?;
    log::set_max_level(max_level_filter());
    tracing::debug!(
        "log facade bound to {}",
        FacadeBinder::singleton().logger_factory_class_name()
    );
    Ok(())
}

static INJECTED: OnceLock<LogBridge> = OnceLock::new();

/// Route the `log` crate to an explicitly supplied factory
///
/// Only the first call's factory is ever kept. `log` accepts one logger
/// per process, so every later call fails with [`Error::SetLogger`](crate::Error::SetLogger).
pub fn install_with(factory: Arc<dyn LoggerFactory>) -> Result<()> {
    let bridge = INJECTED.get_or_init(|| LogBridge::new(factory));
    log::set_logger(bridge)?;
    log::set_max_level(max_level_filter());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use timber::TimberLoggerFactory;
    use timber::test_support::CaptureDispatcher;

    fn bridge() -> (LogBridge, CaptureDispatcher) {
        let capture = CaptureDispatcher::new();
        let factory = TimberLoggerFactory::with_dispatcher(Arc::new(capture.clone()));
        (LogBridge::new(Arc::new(factory)), capture)
    }

    #[test]
    fn test_level_mapping() {
        assert_eq!(map_level(log::Level::Error), Level::Error);
        assert_eq!(map_level(log::Level::Warn), Level::Warn);
        assert_eq!(map_level(log::Level::Info), Level::Info);
        assert_eq!(map_level(log::Level::Debug), Level::Debug);
        assert_eq!(map_level(log::Level::Trace), Level::Trace);
    }

    #[test]
    fn test_record_is_forwarded_unchanged() {
        let (bridge, capture) = bridge();

        bridge.log(
            &LogRecord::builder()
                .level(log::Level::Debug)
                .target("ABC")
                .args(format_args!("Hello, world!"))
                .file(Some("src/main.rs"))
                .line(Some(3))
                .build(),
        );

        let records = capture.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level, Level::Debug);
        assert_eq!(records[0].logger, "ABC");
        assert_eq!(records[0].message, "Hello, world!");
        assert_eq!(records[0].file.as_deref(), Some("src/main.rs"));
        assert_eq!(records[0].line, Some(3));
    }

    #[test]
    fn test_formatted_arguments_are_rendered() {
        let (bridge, capture) = bridge();

        bridge.log(
            &LogRecord::builder()
                .level(log::Level::Debug)
                .target("ABC")
                .args(format_args!("{}, {}!", "Hello again", "world"))
                .build(),
        );

        assert_eq!(capture.records()[0].message, "Hello again, world!");
    }

    #[test]
    fn test_key_values_become_fields_and_cause() {
        let (bridge, capture) = bridge();
        let pairs: Vec<(&str, Value<'_>)> = vec![
            ("user", Value::from("alice")),
            ("attempt", Value::from(2)),
            (CAUSE_KEY, Value::from("psych")),
        ];

        bridge.log(
            &LogRecord::builder()
                .level(log::Level::Warn)
                .target("kv")
                .args(format_args!("retrying"))
                .key_values(&pairs)
                .build(),
        );

        let records = capture.records();
        assert_eq!(records[0].field("user"), Some("alice"));
        assert_eq!(records[0].field("attempt"), Some("2"));
        assert_eq!(records[0].field(CAUSE_KEY), None);
        assert_eq!(records[0].cause, Some(Cause::new("psych")));
    }

    #[test]
    fn test_enabled_follows_dispatcher_threshold() {
        let capture = CaptureDispatcher::new().with_level(Level::Info);
        let factory = TimberLoggerFactory::with_dispatcher(Arc::new(capture.clone()));
        let bridge = LogBridge::new(Arc::new(factory));

        let debug = Metadata::builder().level(log::Level::Debug).target("t").build();
        let info = Metadata::builder().level(log::Level::Info).target("t").build();
        assert!(!bridge.enabled(&debug));
        assert!(bridge.enabled(&info));

        bridge.log(
            &LogRecord::builder()
                .metadata(debug)
                .args(format_args!("filtered"))
                .build(),
        );
        assert!(capture.records().is_empty());
    }

    #[test]
    fn test_max_level_filter_matches_static_max() {
        let filter = max_level_filter();
        match Level::static_max() {
            Some(Level::Trace) => assert_eq!(filter, log::LevelFilter::Trace),
            None => assert_eq!(filter, log::LevelFilter::Off),
            Some(_) => assert!(filter < log::LevelFilter::Trace),
        }
    }
}
