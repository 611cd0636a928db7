//! Dispatcher configuration
//!
//! Usually embedded in an application's own config file:
//!
//! ```toml
//! min_level = "debug"
//! show_location = false
//! color = true
//! ```

use crate::Level;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Configuration for the built-in dispatchers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimberConfig {
    /// Records below this level are dropped
    pub min_level: Level,
    /// Render `file:line` when the record carries it
    pub show_location: bool,
    /// Render structured fields as `key=value`
    pub show_fields: bool,
    /// Render the mapped context as `{key=value, ...}`
    pub show_context: bool,
    /// Colour output when the terminal supports it (feature `color`)
    pub color: bool,
}

impl Default for TimberConfig {
    fn default() -> Self {
        Self {
            min_level: Level::Trace,
            show_location: true,
            show_fields: true,
            show_context: true,
            color: true,
        }
    }
}

impl TimberConfig {
    /// Parse a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that can never produce output
    pub fn validate(&self) -> Result<()> {
        if !self.min_level.is_enabled_static() {
            return Err(Error::Configuration(format!(
                "min_level {} is below the compiled-in maximum level",
                self.min_level
            )));
        }
        Ok(())
    }

    /// Builder-style method for setting the minimum level
    pub fn with_min_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }
}
