//! Facade binder: the process-wide logger factory binding

use crate::factory::BridgeLoggerFactory;
use crate::log_bridge::LogBridge;
use std::sync::{Arc, LazyLock};
use timber::LoggerFactory;

/// Name reported for the bound logger factory
///
/// Must name [`BridgeLoggerFactory`]; a unit test keeps the two in step.
pub const LOGGER_FACTORY_CLASS_NAME: &str = "timber_bridge::factory::BridgeLoggerFactory";

static SINGLETON: LazyLock<FacadeBinder> = LazyLock::new(FacadeBinder::new);

/// Binds the `log` facade to timber
///
/// There is exactly one per process, created on first access. Creating it
/// does not touch timber's configuration.
#[derive(Debug)]
pub struct FacadeBinder {
    factory: Arc<BridgeLoggerFactory>,
    log_bridge: LogBridge,
}

impl FacadeBinder {
    fn new() -> Self {
        let factory = Arc::new(BridgeLoggerFactory::new());
        Self {
            log_bridge: LogBridge::new(factory.clone()),
            factory,
        }
    }

    /// The process-wide binder
    #[inline]
    pub fn singleton() -> &'static FacadeBinder {
        &SINGLETON
    }

    /// The bound logger factory; the same object on every call
    #[inline]
    pub fn logger_factory(&self) -> &dyn LoggerFactory {
        &*self.factory
    }

    /// The bound factory as a shareable handle
    pub fn factory_handle(&self) -> Arc<BridgeLoggerFactory> {
        self.factory.clone()
    }

    /// Name of the bound factory implementation, for diagnostics
    #[inline]
    pub fn logger_factory_class_name(&self) -> &'static str {
        LOGGER_FACTORY_CLASS_NAME
    }

    /// The `log::Log` implementation registered by [`crate::install`]
    #[inline]
    pub fn log_bridge(&self) -> &LogBridge {
        &self.log_bridge
    }
}
