//! Timber: a small logging backend
//!
//! Application code normally talks to a facade such as `log` or `tracing`;
//! `timber-bridge` routes those facades here. Timber itself provides:
//!
//! - [`Logger`] / [`LoggerFactory`]: named loggers, one per name
//! - [`Dispatcher`]: the sink that renders and writes records
//! - [`mdc`]: the thread-local mapped diagnostic context
//! - a process-wide dispatcher slot set once with [`init`]
//!
//! ```
//! use std::sync::Arc;
//! use timber::{Level, LoggerFactory, StdoutDispatcher, TimberLoggerFactory};
//!
//! let factory = TimberLoggerFactory::with_dispatcher(Arc::new(
//!     StdoutDispatcher::new().with_level(Level::Info),
//! ));
//! factory.get_logger("ABC").info("Hello, world!");
//! ```

#![warn(missing_docs, unreachable_pub)]
#![forbid(unsafe_code)]

mod config;
mod dispatcher;
mod error;
mod factory;
mod level;
mod logger;
mod record;

#[cfg(feature = "stdout")]
mod stdout;

#[cfg(feature = "test-support")]
mod capture;

pub mod format;
pub mod mdc;

pub use config::TimberConfig;
pub use dispatcher::{Dispatcher, NoOpDispatcher};
pub use error::{Error, Result};
pub use factory::{LoggerFactory, TimberLoggerFactory};
pub use level::Level;
pub use logger::Logger;
pub use mdc::ContextMap;
pub use record::{Cause, Field, OwnedRecord, Record};

#[cfg(feature = "stdout")]
pub use stdout::StdoutDispatcher;

/// Test support utilities
#[cfg(feature = "test-support")]
pub mod test_support {
    pub use crate::capture::CaptureDispatcher;
}

use std::sync::{Arc, LazyLock, OnceLock};

static DISPATCHER: OnceLock<Arc<dyn Dispatcher>> = OnceLock::new();

static FALLBACK: LazyLock<Arc<dyn Dispatcher>> = LazyLock::new(default_dispatcher);

#[cfg(feature = "stdout")]
fn default_dispatcher() -> Arc<dyn Dispatcher> {
    Arc::new(StdoutDispatcher::new())
}

#[cfg(not(feature = "stdout"))]
fn default_dispatcher() -> Arc<dyn Dispatcher> {
    Arc::new(NoOpDispatcher)
}

/// Install the process-wide dispatcher
///
/// Can succeed once per process. Until it is called, [`dispatcher`]
/// returns a default stdout dispatcher (or a no-op one without the
/// `stdout` feature).
pub fn init(dispatcher: Arc<dyn Dispatcher>) -> Result<()> {
    DISPATCHER
        .set(dispatcher)
        .map_err(|_| Error::DispatcherAlreadySet)
}

/// The process-wide dispatcher
pub fn dispatcher() -> &'static Arc<dyn Dispatcher> {
    DISPATCHER.get().unwrap_or_else(|| &*FALLBACK)
}

/// Whether [`init`] has been called successfully
pub fn is_initialized() -> bool {
    DISPATCHER.get().is_some()
}
