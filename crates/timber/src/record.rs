//! Log record type optimized for performance

use crate::Level;
use crate::mdc::ContextMap;
#[cfg(feature = "timestamps")]
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

/// One structured argument attached to a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Argument name
    pub key: String,
    /// Rendered argument value
    pub value: String,
}

impl Field {
    /// Create a field from anything displayable
    pub fn new(key: impl Into<String>, value: impl fmt::Display) -> Self {
        Self {
            key: key.into(),
            value: value.to_string(),
        }
    }
}

/// The error payload of a record, flattened so it can cross threads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cause {
    /// Display form of the error itself
    pub message: String,
    /// Display forms of `source()`, outermost first
    pub chain: Vec<String>,
}

impl Cause {
    /// A cause with no source chain
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            chain: Vec::new(),
        }
    }

    /// Capture an error and walk its `source()` chain
    pub fn from_error(error: &(dyn StdError + 'static)) -> Self {
        let mut chain = Vec::new();
        let mut source = error.source();
        while let Some(inner) = source {
            chain.push(inner.to_string());
            source = inner.source();
        }

        Self {
            message: error.to_string(),
            chain,
        }
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        for inner in &self.chain {
            write!(f, ": caused by: {inner}")?;
        }
        Ok(())
    }
}

/// A log record - designed to minimize allocations
#[derive(Debug, Clone, Serialize)]
pub struct Record<'a> {
    /// Log level
    pub level: Level,
    /// The log message
    pub message: Cow<'a, str>,
    /// When the log was created (can be disabled for performance)
    #[cfg(feature = "timestamps")]
    pub timestamp: DateTime<Utc>,
    /// Name of the logger that produced the record
    pub logger: Cow<'a, str>,
    /// File location
    pub file: Option<Cow<'a, str>>,
    /// Line number
    pub line: Option<u32>,
    /// Structured arguments, in the order they were supplied
    pub fields: Vec<Field>,
    /// Attached error, if any
    pub cause: Option<Cause>,
    /// Mapped context of the emitting thread
    pub context: ContextMap,
}

impl<'a> Record<'a> {
    /// Create a new record with minimal allocations
    #[inline]
    pub fn new(level: Level, message: impl Into<Cow<'a, str>>) -> Self {
        Self {
            level,
            message: message.into(),
            #[cfg(feature = "timestamps")]
            timestamp: Utc::now(),
            logger: Cow::Borrowed(""),
            file: None,
            line: None,
            fields: Vec::new(),
            cause: None,
            context: ContextMap::new(),
        }
    }

    /// Builder-style method for setting the logger name
    #[inline]
    pub fn with_logger(mut self, logger: impl Into<Cow<'a, str>>) -> Self {
        self.logger = logger.into();
        self
    }

    /// Builder-style method for setting location
    #[inline]
    pub fn with_location(mut self, file: impl Into<Cow<'a, str>>, line: u32) -> Self {
        self.file = Some(file.into());
        self.line = Some(line);
        self
    }

    /// Append one structured argument
    #[inline]
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Replace the structured arguments
    #[inline]
    pub fn with_fields(mut self, fields: Vec<Field>) -> Self {
        self.fields = fields;
        self
    }

    /// Attach an error payload
    #[inline]
    pub fn with_cause(mut self, cause: Cause) -> Self {
        self.cause = Some(cause);
        self
    }

    /// Builder-style method for setting context
    #[inline]
    pub fn with_context(mut self, context: ContextMap) -> Self {
        self.context = context;
        self
    }

    /// Convert to owned version (for sending across threads)
    pub fn to_owned(self) -> OwnedRecord {
        OwnedRecord {
            level: self.level,
            message: self.message.into_owned(),
            #[cfg(feature = "timestamps")]
            timestamp: self.timestamp,
            logger: self.logger.into_owned(),
            file: self.file.map(Cow::into_owned),
            line: self.line,
            fields: self.fields,
            cause: self.cause,
            context: self.context,
        }
    }
}

/// Owned version of Record for cross-thread sending
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnedRecord {
    /// Log level
    pub level: Level,
    /// The log message
    pub message: String,
    /// When the log was created
    #[cfg(feature = "timestamps")]
    pub timestamp: DateTime<Utc>,
    /// Name of the logger that produced the record
    pub logger: String,
    /// File location
    pub file: Option<String>,
    /// Line number
    pub line: Option<u32>,
    /// Structured arguments
    pub fields: Vec<Field>,
    /// Attached error, if any
    pub cause: Option<Cause>,
    /// Mapped context of the emitting thread
    pub context: ContextMap,
}

impl OwnedRecord {
    /// Look up a structured argument by key
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.key == key)
            .map(|field| field.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Outer(Inner);

    #[derive(Debug)]
    struct Inner;

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "request failed")
        }
    }

    impl fmt::Display for Inner {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "connection reset")
        }
    }

    impl StdError for Outer {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(&self.0)
        }
    }

    impl StdError for Inner {}

    #[test]
    fn test_cause_walks_source_chain() {
        let cause = Cause::from_error(&Outer(Inner));
        assert_eq!(cause.message, "request failed");
        assert_eq!(cause.chain, vec!["connection reset".to_string()]);
        assert_eq!(
            cause.to_string(),
            "request failed: caused by: connection reset"
        );
    }

    #[test]
    fn test_builder_and_owned_conversion() {
        let mut context = ContextMap::new();
        context.insert("request".into(), "42".into());

        let owned = Record::new(Level::Info, "hello")
            .with_logger("ABC")
            .with_location("src/main.rs", 7)
            .with_field(Field::new("user", "alice"))
            .with_field(Field::new("attempt", 2))
            .with_cause(Cause::new("psych"))
            .with_context(context)
            .to_owned();

        assert_eq!(owned.logger, "ABC");
        assert_eq!(owned.message, "hello");
        assert_eq!(owned.file.as_deref(), Some("src/main.rs"));
        assert_eq!(owned.line, Some(7));
        assert_eq!(owned.field("user"), Some("alice"));
        assert_eq!(owned.field("attempt"), Some("2"));
        assert_eq!(owned.field("missing"), None);
        assert_eq!(owned.cause, Some(Cause::new("psych")));
        assert_eq!(owned.context.get("request").map(String::as_str), Some("42"));
    }

    #[test]
    fn test_owned_record_serializes() {
        let owned = Record::new(Level::Warn, "disk low")
            .with_logger("storage")
            .to_owned();

        let json = serde_json::to_value(&owned).unwrap();
        assert_eq!(json["level"], "warn");
        assert_eq!(json["logger"], "storage");
        assert_eq!(json["message"], "disk low");
    }
}
