//! Log severity levels

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log record, ordered from most to least verbose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Level {
    /// Very fine-grained diagnostics
    Trace,
    /// Debugging information
    Debug,
    /// Normal operational messages
    Info,
    /// Something unexpected that the program recovered from
    Warn,
    /// A failure
    Error,
}

impl Level {
    /// All levels, most verbose first
    pub const ALL: [Level; 5] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
    ];

    /// The most verbose level compiled in, or `None` when logging is
    /// compiled out entirely (`max-level-off`).
    ///
    /// When several `max-level-*` features are enabled the most
    /// restrictive one wins.
    #[inline(always)]
    pub const fn static_max() -> Option<Level> {
        if cfg!(feature = "max-level-off") {
            None
        } else if cfg!(feature = "max-level-error") {
            Some(Level::Error)
        } else if cfg!(feature = "max-level-warn") {
            Some(Level::Warn)
        } else if cfg!(feature = "max-level-info") {
            Some(Level::Info)
        } else if cfg!(feature = "max-level-debug") {
            Some(Level::Debug)
        } else {
            Some(Level::Trace)
        }
    }

    /// Whether this level survives the compile-time ceiling
    #[inline(always)]
    pub const fn is_enabled_static(self) -> bool {
        match Self::static_max() {
            Some(max) => self as u8 >= max as u8,
            None => false,
        }
    }

    /// Upper-case name used in rendered output
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .or_else(|| s.trim().eq_ignore_ascii_case("warning").then_some(Level::Warn))
            .ok_or_else(|| Error::InvalidLevel(s.to_string()))
    }
}

impl TryFrom<String> for Level {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, <Level as TryFrom<String>>::Error> {
        s.parse()
    }
}
