//! ValueChain — chained transform over an owned value.
//!
//! Each hook receives the current value (plus a fixed context) and returns
//! a new one, which feeds the next hook. Appropriate when the value's
//! representation favors copy-and-transform, e.g. strings.

use std::any::TypeId;
use std::sync::Arc;

use crate::observer::Observer;
use crate::registry::Registry;

/// Capability for observers of a [`ValueChain`] topic.
///
/// `T` is the value threaded through the chain; `C` is the fixed context
/// every hook in the topic receives alongside it.
pub trait MapHook<T, C = ()>: Observer {
    /// Transform `value`, producing the input for the next hook.
    fn map(&self, value: T, ctx: &C) -> T;
}

/// A topic whose dispatch threads a value through its hooks in order.
pub struct ValueChain<T: 'static, C: 'static = ()> {
    registry: Registry<dyn MapHook<T, C>>,
}

impl<T: 'static, C: 'static> ValueChain<T, C> {
    /// Create an empty topic.
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
        }
    }

    /// Register `hook` (idempotent per identity).
    pub fn register(&self, hook: Arc<dyn MapHook<T, C>>) {
        self.registry.add(hook);
    }

    /// Unregister `hook`. A no-op if it was never registered.
    pub fn unregister(&self, hook: &Arc<dyn MapHook<T, C>>) {
        self.registry.remove(hook);
    }

    /// Unregister every hook whose concrete type is exactly `K`.
    pub fn unregister_all_of<K: MapHook<T, C>>(&self) {
        self.registry.remove_of_kind(TypeId::of::<K>());
    }

    /// Drop every hook. Full topic reset.
    pub fn reset(&self) {
        self.registry.remove_all();
    }

    /// Number of registered hooks.
    pub fn size(&self) -> usize {
        self.registry.size()
    }

    /// Thread `initial` through every hook in visitation order and return
    /// the final value. An empty topic passes the value through unchanged.
    pub fn run(&self, initial: T, ctx: &C) -> T {
        let mut value = initial;
        for hook in self.registry.observers() {
            value = hook.map(value, ctx);
        }
        value
    }
}

impl<T: 'static, C: 'static> Default for ValueChain<T, C> {
    fn default() -> Self {
        Self::new()
    }
}
