//! Explicitly wired logging capabilities

use crate::binder::FacadeBinder;
use crate::error::Result;
use crate::mdc_binder::ContextAdapterBinder;
use crate::spi::MappedContext;
use std::fmt;
use std::sync::Arc;
use timber::{Logger, LoggerFactory};

/// The logger factory and mapped context an application runs with
///
/// Built once at startup and passed to whatever needs to log, instead of
/// reaching for the binders from everywhere.
#[derive(Clone)]
pub struct LoggingRegistry {
    factory: Arc<dyn LoggerFactory>,
    context: Arc<dyn MappedContext>,
}

impl LoggingRegistry {
    /// Wire a backend directly
    pub fn new(factory: Arc<dyn LoggerFactory>, context: Arc<dyn MappedContext>) -> Self {
        Self { factory, context }
    }

    /// Use whatever the process-wide binders are bound to
    pub fn from_binders() -> Self {
        Self {
            factory: FacadeBinder::singleton().factory_handle(),
            context: Arc::new(ContextAdapterBinder::singleton().context_adapter()),
        }
    }

    /// The logger registered under `name`
    pub fn logger(&self, name: &str) -> Arc<Logger> {
        self.factory.get_logger(name)
    }

    /// The wired logger factory
    pub fn factory(&self) -> &Arc<dyn LoggerFactory> {
        &self.factory
    }

    /// The wired mapped context
    pub fn context(&self) -> &dyn MappedContext {
        &*self.context
    }

    /// Route the `log` crate to this registry's factory
    pub fn install_log(&self) -> Result<()> {
        crate::log_bridge::install_with(self.factory.clone())
    }
}

impl fmt::Debug for LoggingRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggingRegistry").finish_non_exhaustive()
    }
}
