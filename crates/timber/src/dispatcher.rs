//! Core dispatcher trait

use crate::{Level, Record};

/// The sink that finished records are handed to - designed for performance
///
/// A dispatcher owns everything the bridge deliberately does not do:
/// rendering, filtering and output.
pub trait Dispatcher: Send + Sync + 'static {
    /// Deliver a record
    fn dispatch(&self, record: Record<'_>);

    /// Flush any buffered output
    fn flush(&self);

    /// Check if a level is enabled (for fast filtering)
    #[inline(always)]
    fn is_enabled(&self, level: Level) -> bool {
        level.is_enabled_static()
    }
}

/// Dispatcher that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpDispatcher;

impl Dispatcher for NoOpDispatcher {
    #[inline(always)]
    fn dispatch(&self, _record: Record<'_>) {}

    #[inline(always)]
    fn flush(&self) {}

    #[inline(always)]
    fn is_enabled(&self, _level: Level) -> bool {
        false
    }
}
