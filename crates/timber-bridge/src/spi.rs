//! Capabilities a facade consumes from its backend binding

use timber::ContextMap;

/// A key/value store scoped to the calling thread
///
/// Implementations are views over backend-owned state; the adapter value
/// itself holds nothing, so any number of them may exist.
pub trait MappedContext: Send + Sync {
    /// Value stored under `key`
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`
    fn put(&self, key: &str, value: &str);

    /// Remove `key`
    fn remove(&self, key: &str);

    /// Remove every entry
    fn clear(&self);

    /// Copy of every entry
    fn copy_of_context_map(&self) -> ContextMap;

    /// Replace every entry with `map`
    fn set_context_map(&self, map: ContextMap);
}
