//! Named logger handles

use crate::{Cause, Dispatcher, Field, Level, Record, mdc};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Where a logger sends its records
#[derive(Clone)]
pub(crate) enum DispatchTarget {
    /// Whatever [`crate::dispatcher`] returns at the time of the call
    Global,
    /// A dispatcher fixed at construction
    Fixed(Arc<dyn Dispatcher>),
}

impl DispatchTarget {
    #[inline]
    pub(crate) fn get(&self) -> &dyn Dispatcher {
        match self {
            DispatchTarget::Global => crate::dispatcher().as_ref(),
            DispatchTarget::Fixed(dispatcher) => dispatcher.as_ref(),
        }
    }
}

/// A named logger
///
/// Stamps its name and the calling thread's mapped context onto every
/// record, then hands the record to its dispatcher.
#[derive(Clone)]
pub struct Logger {
    name: Arc<str>,
    target: DispatchTarget,
}

impl Logger {
    /// Logger that writes to a specific dispatcher
    pub fn new(name: impl Into<Arc<str>>, dispatcher: Arc<dyn Dispatcher>) -> Self {
        Self {
            name: name.into(),
            target: DispatchTarget::Fixed(dispatcher),
        }
    }

    /// Logger that follows the global dispatcher
    pub fn global(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            target: DispatchTarget::Global,
        }
    }

    pub(crate) fn with_target(name: &str, target: DispatchTarget) -> Self {
        Self {
            name: Arc::from(name),
            target,
        }
    }

    /// The logger's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check if a level is enabled (for fast filtering)
    #[inline(always)]
    pub fn is_enabled(&self, level: Level) -> bool {
        level.is_enabled_static() && self.target.get().is_enabled(level)
    }

    /// Log a fully built record
    ///
    /// The record's logger name is overwritten with this logger's name.
    /// Context entries already on the record take precedence over the
    /// thread's mapped context.
    pub fn log_record<'a>(&'a self, record: Record<'a>) {
        if !self.is_enabled(record.level) {
            return;
        }

        let mut context = mdc::snapshot();
        let mut record = record;
        context.append(&mut record.context);

        let record = record
            .with_logger(Cow::Borrowed(&*self.name))
            .with_context(context);

        self.target.get().dispatch(record);
    }

    /// Log a message with structured arguments and an optional cause
    pub fn log<'a>(
        &'a self,
        level: Level,
        message: impl Into<Cow<'a, str>>,
        fields: Vec<Field>,
        cause: Option<Cause>,
    ) {
        if !self.is_enabled(level) {
            return;
        }

        let mut record = Record::new(level, message).with_fields(fields);
        record.cause = cause;
        self.log_record(record);
    }

    /// Flush the dispatcher
    pub fn flush(&self) {
        self.target.get().flush();
    }

    /// Log an error
    #[inline(always)]
    pub fn error<'a>(&'a self, msg: impl Into<Cow<'a, str>>) {
        self.log(Level::Error, msg, Vec::new(), None);
    }

    /// Log a warning
    #[inline(always)]
    pub fn warn<'a>(&'a self, msg: impl Into<Cow<'a, str>>) {
        self.log(Level::Warn, msg, Vec::new(), None);
    }

    /// Log info
    #[inline(always)]
    pub fn info<'a>(&'a self, msg: impl Into<Cow<'a, str>>) {
        self.log(Level::Info, msg, Vec::new(), None);
    }

    /// Log debug
    #[inline(always)]
    pub fn debug<'a>(&'a self, msg: impl Into<Cow<'a, str>>) {
        self.log(Level::Debug, msg, Vec::new(), None);
    }

    /// Log trace
    #[inline(always)]
    pub fn trace<'a>(&'a self, msg: impl Into<Cow<'a, str>>) {
        self.log(Level::Trace, msg, Vec::new(), None);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let target = match self.target {
            DispatchTarget::Global => "global",
            DispatchTarget::Fixed(_) => "fixed",
        };
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("dispatcher", &target)
            .finish()
    }
}
