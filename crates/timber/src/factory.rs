//! Logger factories

use crate::Dispatcher;
use crate::logger::{DispatchTarget, Logger};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Produces named loggers
pub trait LoggerFactory: Send + Sync {
    /// The logger registered under `name`
    fn get_logger(&self, name: &str) -> Arc<Logger>;

    /// Flush whatever the produced loggers write to
    fn flush(&self) {}
}

/// Timber's own factory; hands out one cached [`Logger`] per name
pub struct TimberLoggerFactory {
    target: DispatchTarget,
    loggers: RwLock<HashMap<String, Arc<Logger>>>,
}

impl TimberLoggerFactory {
    /// Factory whose loggers follow the global dispatcher
    pub fn new() -> Self {
        Self {
            target: DispatchTarget::Global,
            loggers: RwLock::new(HashMap::new()),
        }
    }

    /// Factory whose loggers all write to `dispatcher`
    pub fn with_dispatcher(dispatcher: Arc<dyn Dispatcher>) -> Self {
        Self {
            target: DispatchTarget::Fixed(dispatcher),
            loggers: RwLock::new(HashMap::new()),
        }
    }

    /// Number of distinct loggers handed out so far
    pub fn len(&self) -> usize {
        self.loggers.read().len()
    }

    /// Whether no logger has been requested yet
    pub fn is_empty(&self) -> bool {
        self.loggers.read().is_empty()
    }
}

impl Default for TimberLoggerFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerFactory for TimberLoggerFactory {
    fn get_logger(&self, name: &str) -> Arc<Logger> {
        if let Some(logger) = self.loggers.read().get(name) {
            return logger.clone();
        }

        self.loggers
            .write()
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(Logger::with_target(name, self.target.clone())))
            .clone()
    }

    fn flush(&self) {
        self.target.get().flush();
    }
}

impl fmt::Debug for TimberLoggerFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimberLoggerFactory")
            .field("loggers", &self.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NoOpDispatcher;
    use std::thread;

    #[test]
    fn test_same_name_same_logger() {
        let factory = TimberLoggerFactory::with_dispatcher(Arc::new(NoOpDispatcher));
        let first = factory.get_logger("ABC");
        let second = factory.get_logger("ABC");
        let other = factory.get_logger("XYZ");

        assert!(Arc::ptr_eq(&first, &second));
        assert!(!Arc::ptr_eq(&first, &other));
        assert_eq!(first.name(), "ABC");
        assert_eq!(factory.len(), 2);
    }

    #[test]
    fn test_concurrent_lookups_share_one_logger() {
        let factory = TimberLoggerFactory::new();
        assert!(factory.is_empty());

        let loggers: Vec<Arc<Logger>> = thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| factory.get_logger("shared")))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert!(loggers.windows(2).all(|pair| Arc::ptr_eq(&pair[0], &pair[1])));
        assert_eq!(factory.len(), 1);
    }

    #[test]
    fn test_factory_is_object_safe() {
        let factory: Arc<dyn LoggerFactory> = Arc::new(TimberLoggerFactory::new());
        assert_eq!(factory.get_logger("dyn").name(), "dyn");
    }
}
