//! Context adapter binder: the process-wide mapped-context binding

use crate::spi::MappedContext;
use std::sync::LazyLock;
use timber::{ContextMap, mdc};

/// Name reported for the bound context adapter
///
/// Must name [`TimberMdcAdapter`]; a unit test keeps the two in step.
pub const CONTEXT_ADAPTER_CLASS_NAME: &str = "timber_bridge::mdc_binder::TimberMdcAdapter";

static SINGLETON: LazyLock<ContextAdapterBinder> =
    LazyLock::new(|| ContextAdapterBinder { _private: () });

/// Binds the facade's mapped context to timber's thread-local store
#[derive(Debug)]
pub struct ContextAdapterBinder {
    _private: (),
}

impl ContextAdapterBinder {
    /// The process-wide binder
    #[inline]
    pub fn singleton() -> &'static ContextAdapterBinder {
        &SINGLETON
    }

    /// A view over the calling thread's mapped context
    ///
    /// Every call returns a new adapter. They are interchangeable: all
    /// state lives in timber's thread-local store.
    #[inline]
    pub fn context_adapter(&self) -> TimberMdcAdapter {
        TimberMdcAdapter
    }

    /// Name of the adapter implementation, for diagnostics
    #[inline]
    pub fn context_adapter_class_name(&self) -> &'static str {
        CONTEXT_ADAPTER_CLASS_NAME
    }
}

/// Stateless [`MappedContext`] over [`timber::mdc`]
#[derive(Debug, Clone, Copy, Default)]
pub struct TimberMdcAdapter;

impl MappedContext for TimberMdcAdapter {
    fn get(&self, key: &str) -> Option<String> {
        mdc::get(key)
    }

    fn put(&self, key: &str, value: &str) {
        mdc::put(key, value);
    }

    fn remove(&self, key: &str) {
        mdc::remove(key);
    }

    fn clear(&self) {
        mdc::clear();
    }

    fn copy_of_context_map(&self) -> ContextMap {
        mdc::snapshot()
    }

    fn set_context_map(&self, map: ContextMap) {
        mdc::replace(map);
    }
}
