//! The logger factory the facade binder hands out

use std::sync::Arc;
use timber::{Logger, LoggerFactory, TimberLoggerFactory};

/// Logger factory bound to the facade
///
/// Loggers follow timber's global dispatcher, so `timber::init` may run
/// before or after the first logger is requested.
#[derive(Debug)]
pub struct BridgeLoggerFactory {
    inner: TimberLoggerFactory,
}

impl BridgeLoggerFactory {
    pub(crate) fn new() -> Self {
        Self {
            inner: TimberLoggerFactory::new(),
        }
    }
}

impl LoggerFactory for BridgeLoggerFactory {
    #[inline]
    fn get_logger(&self, name: &str) -> Arc<Logger> {
        self.inner.get_logger(name)
    }

    fn flush(&self) {
        self.inner.flush();
    }
}
