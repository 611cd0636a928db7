//! Plain-text record rendering shared by the built-in dispatchers

use crate::{Record, TimberConfig};
use std::fmt::Write;

/// Render a record as a single line, without the trailing newline
///
/// Layout: `LEVEL [logger] file:line message key=value {ctx=..} caused by: ..`
pub fn render(record: &Record<'_>, config: &TimberConfig) -> String {
    let mut line = String::with_capacity(64 + record.message.len());

    #[cfg(feature = "timestamps")]
    let _ = write!(line, "{} ", record.timestamp.format("%Y-%m-%dT%H:%M:%S%.3fZ"));

    let _ = write!(line, "{:<5} [{}]", record.level, record.logger);

    if config.show_location
        && let (Some(file), Some(number)) = (&record.file, record.line)
    {
        let _ = write!(line, " {file}:{number}");
    }

    let _ = write!(line, " {}", record.message);

    if config.show_fields {
        for field in &record.fields {
            let _ = write!(line, " {}={}", field.key, field.value);
        }
    }

    if config.show_context && !record.context.is_empty() {
        line.push_str(" {");
        for (index, (key, value)) in record.context.iter().enumerate() {
            if index > 0 {
                line.push_str(", ");
            }
            let _ = write!(line, "{key}={value}");
        }
        line.push('}');
    }

    if let Some(cause) = &record.cause {
        let _ = write!(line, " caused by: {cause}");
    }

    line
}
