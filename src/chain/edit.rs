//! EditChain — chained in-place transform with abort.
//!
//! Each hook mutates a shared value through `&mut` and may return
//! `Err(Aborted)` to stop the remaining chain. The abort is control flow,
//! not a failure: the dispatching caller catches it one frame up and skips
//! whatever side-effecting action the chain was protecting (e.g. "do not
//! actually send this message").

use std::any::TypeId;
use std::sync::Arc;

use crate::error::Aborted;
use crate::observer::Observer;
use crate::registry::Registry;

/// Capability for observers of an [`EditChain`] topic.
pub trait EditHook<T, C = ()>: Observer {
    /// Mutate `value` in place, or return `Err(Aborted)` to terminate the
    /// remaining chain.
    fn edit(&self, value: &mut T, ctx: &C) -> Result<(), Aborted>;
}

/// A topic whose dispatch lets each hook edit a shared value, with any
/// hook able to abort the rest of the chain.
pub struct EditChain<T: 'static, C: 'static = ()> {
    registry: Registry<dyn EditHook<T, C>>,
}

impl<T: 'static, C: 'static> EditChain<T, C> {
    /// Create an empty topic.
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
        }
    }

    /// Register `hook` (idempotent per identity).
    ///
    /// A hook that aborts conventionally declares itself
    /// [`Placement::Before`](crate::Placement::Before) everything else, so
    /// an aborted pass wastes as little work as possible.
    pub fn register(&self, hook: Arc<dyn EditHook<T, C>>) {
        self.registry.add(hook);
    }

    /// Unregister `hook`. A no-op if it was never registered.
    pub fn unregister(&self, hook: &Arc<dyn EditHook<T, C>>) {
        self.registry.remove(hook);
    }

    /// Unregister every hook whose concrete type is exactly `K`.
    pub fn unregister_all_of<K: EditHook<T, C>>(&self) {
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

    /// Let every hook edit `value` in visitation order.
    ///
    /// Stops at the first `Err(Aborted)`, ends the traversal session so
    /// the next dispatch starts fresh, and hands the abort to the caller.
    /// An empty topic leaves the value untouched and returns `Ok(())`.
    pub fn run(&self, value: &mut T, ctx: &C) -> Result<(), Aborted> {
        for hook in self.registry.observers() {
            if let Err(aborted) = hook.edit(value, ctx) {
                self.registry.end_session();
                return Err(aborted);
            }
        }
        Ok(())
    }
}

impl<T: 'static, C: 'static> Default for EditChain<T, C> {
    fn default() -> Self {
        Self::new()
    }
}
