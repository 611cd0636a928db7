//! Simple stdout dispatcher for development

use crate::{Dispatcher, Level, Record, TimberConfig, format};
use parking_lot::Mutex;
use std::fmt;
use std::io::Write;
use std::sync::Arc;

#[cfg(feature = "color")]
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Simple dispatcher that writes one line per record to stdout
#[derive(Clone)]
pub struct StdoutDispatcher {
    config: TimberConfig,
    /// Lock for stdout (to prevent interleaving)
    #[cfg(not(feature = "color"))]
    stdout: Arc<Mutex<std::io::Stdout>>,
    #[cfg(feature = "color")]
    stdout: Arc<Mutex<StandardStream>>,
}

impl StdoutDispatcher {
    /// Create a new stdout dispatcher
    pub fn new() -> Self {
        Self::from_config(TimberConfig::default())
    }

    /// Create from a configuration
    pub fn from_config(config: TimberConfig) -> Self {
        #[cfg(feature = "color")]
        let choice = if config.color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };

        Self {
            config,
            #[cfg(not(feature = "color"))]
            stdout: Arc::new(Mutex::new(std::io::stdout())),
            #[cfg(feature = "color")]
            stdout: Arc::new(Mutex::new(StandardStream::stdout(choice))),
        }
    }

    /// Create with a specific minimum level
    pub fn with_level(mut self, level: Level) -> Self {
        self.config.min_level = level;
        self
    }

    /// The active configuration
    pub fn config(&self) -> &TimberConfig {
        &self.config
    }
}

impl fmt::Debug for StdoutDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdoutDispatcher")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for StdoutDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher for StdoutDispatcher {
    fn dispatch(&self, record: Record<'_>) {
        let line = format::render(&record, &self.config);
        let mut stdout = self.stdout.lock();

        #[cfg(feature = "color")]
        {
            let level_color = match record.level {
                Level::Error => Color::Red,
                Level::Warn => Color::Yellow,
                Level::Info => Color::Green,
                Level::Debug => Color::Blue,
                Level::Trace => Color::Magenta,
            };

            let _ = stdout.set_color(ColorSpec::new().set_fg(Some(level_color)));
            let _ = writeln!(stdout, "{line}");
            let _ = stdout.reset();
        }

        #[cfg(not(feature = "color"))]
        {
            let _ = writeln!(stdout, "{line}");
        }

        let _ = stdout.flush();
    }

    fn flush(&self) {
        let _ = self.stdout.lock().flush();
    }

    #[inline(always)]
    fn is_enabled(&self, level: Level) -> bool {
        level >= self.config.min_level && level.is_enabled_static()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_threshold() {
        let dispatcher = StdoutDispatcher::new().with_level(Level::Info);
        assert!(!dispatcher.is_enabled(Level::Debug));
        assert!(dispatcher.is_enabled(Level::Info));
        assert!(dispatcher.is_enabled(Level::Error));
    }

    #[test]
    fn test_from_config_keeps_settings() {
        let config = TimberConfig::default().with_min_level(Level::Warn);
        let dispatcher = StdoutDispatcher::from_config(config.clone());
        assert_eq!(dispatcher.config(), &config);
        assert!(!dispatcher.is_enabled(Level::Info));
    }

    #[test]
    fn test_dispatch_does_not_panic() {
        let dispatcher = StdoutDispatcher::new();
        dispatcher.dispatch(Record::new(Level::Info, "stdout smoke test").with_logger("test"));
        dispatcher.flush();
    }
}
