//! Mapped diagnostic context
//!
//! A key/value map attached to every record emitted by the current thread.
//! The store is thread-local: a value put on one thread is never visible
//! from another. Each [`Logger`](crate::Logger) takes a snapshot of the
//! calling thread's map when it builds a record.
//!
//! ```
//! use timber::mdc;
//!
//! let _guard = mdc::put_scoped("request_id", "42");
//! assert_eq!(mdc::get("request_id").as_deref(), Some("42"));
//! drop(_guard);
//! assert_eq!(mdc::get("request_id"), None);
//! ```

use std::cell::RefCell;
use std::collections::BTreeMap;

/// Snapshot of a thread's mapped context, sorted by key
pub type ContextMap = BTreeMap<String, String>;

thread_local! {
    static CONTEXT: RefCell<ContextMap> = const { RefCell::new(BTreeMap::new()) };
}

/// Value stored under `key` on the current thread
///
/// Returns `None` once the thread's context has been torn down.
pub fn get(key: &str) -> Option<String> {
    CONTEXT
        .try_with(|context| context.borrow().get(key).cloned())
        .ok()
        .flatten()
}

/// Store `value` under `key` on the current thread, returning the old value
pub fn put(key: impl Into<String>, value: impl Into<String>) -> Option<String> {
    CONTEXT
        .try_with(|context| context.borrow_mut().insert(key.into(), value.into()))
        .ok()
        .flatten()
}

/// Remove `key` from the current thread's context
pub fn remove(key: &str) -> Option<String> {
    CONTEXT
        .try_with(|context| context.borrow_mut().remove(key))
        .ok()
        .flatten()
}

/// Remove every entry from the current thread's context
pub fn clear() {
    let _ = CONTEXT.try_with(|context| context.borrow_mut().clear());
}

/// Copy of the current thread's context
///
/// Empty during thread teardown, so records logged from other
/// thread-local destructors still go out.
pub fn snapshot() -> ContextMap {
    CONTEXT
        .try_with(|context| context.borrow().clone())
        .unwrap_or_default()
}

/// Replace the current thread's context wholesale
pub fn replace(map: ContextMap) -> ContextMap {
    CONTEXT
        .try_with(|context| std::mem::replace(&mut *context.borrow_mut(), map))
        .unwrap_or_default()
}

/// Whether the current thread's context is empty
pub fn is_empty() -> bool {
    CONTEXT
        .try_with(|context| context.borrow().is_empty())
        .unwrap_or(true)
}

/// Put `key` for the lifetime of the returned guard
///
/// Dropping the guard restores whatever value `key` held before.
pub fn put_scoped(key: impl Into<String>, value: impl Into<String>) -> MdcGuard {
    let key = key.into();
    let previous = put(key.clone(), value);
    MdcGuard { key, previous }
}

/// Restores a context entry when dropped
///
/// Must be dropped on the thread that created it.
#[must_use = "the entry is removed as soon as the guard is dropped"]
#[derive(Debug)]
pub struct MdcGuard {
    key: String,
    previous: Option<String>,
}

impl Drop for MdcGuard {
    fn drop(&mut self) {
        match self.previous.take() {
            Some(previous) => {
                put(std::mem::take(&mut self.key), previous);
            }
            None => {
                remove(&self.key);
            }
        }
    }
}
