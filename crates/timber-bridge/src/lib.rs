//! Binds the `log` and `tracing` facades to the timber backend
//!
//! Two process-wide binders describe what the facades are bound to:
//!
//! - [`FacadeBinder`]: the logger factory and its implementation name
//! - [`ContextAdapterBinder`]: the mapped-context adapter and its name
//!
//! Neither facade can discover a backend on its own, so the application
//! registers the bridge once at startup:
//!
//! ```no_run
//! use std::sync::Arc;
//! use timber::{Level, StdoutDispatcher};
//!
//! // Optional: pick the dispatcher; otherwise timber writes to stdout
//! timber::init(Arc::new(StdoutDispatcher::new().with_level(Level::Debug))).unwrap();
//! timber_bridge::install().unwrap();
//!
//! log::debug!(target: "ABC", "Hello, world!");
//! ```
//!
//! Code that would rather not depend on globals can build a
//! [`LoggingRegistry`] and pass it around.

#![warn(missing_docs, unreachable_pub)]
#![forbid(unsafe_code)]

mod binder;
mod error;
mod factory;
mod log_bridge;
mod mdc_binder;
mod registry;
mod spi;
mod tracing_bridge;

pub use binder::{FacadeBinder, LOGGER_FACTORY_CLASS_NAME};
pub use error::{Error, Result};
pub use factory::BridgeLoggerFactory;
pub use log_bridge::{CAUSE_KEY, LogBridge, install, install_with, max_level_filter};
pub use mdc_binder::{CONTEXT_ADAPTER_CLASS_NAME, ContextAdapterBinder, TimberMdcAdapter};
pub use registry::LoggingRegistry;
pub use spi::MappedContext;
pub use tracing_bridge::{TimberLayer, install_tracing};

/// Install both the `log` and the `tracing` bridge
pub fn install_all() -> Result<()> {
    install()?;
    install_tracing()?;
    Ok(())
}
