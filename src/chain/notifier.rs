//! Notifier — fire-and-forget dispatch, no payload.
//!
//! Used for "a certain point in execution was reached": each hook is
//! invoked in visitation order with no arguments and no return value.

use std::any::TypeId;
use std::sync::Arc;

use crate::observer::Observer;
use crate::registry::Registry;

/// Capability for observers of a [`Notifier`] topic.
pub trait NotifyHook: Observer {
    /// React to the notification. Side effects only.
    fn on_notify(&self);
}

/// A topic that dispatches plain "this happened" notifications.
pub struct Notifier {
    registry: Registry<dyn NotifyHook>,
}

impl Notifier {
    /// Create an empty topic.
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
        }
    }

    /// Register `hook` (idempotent per identity).
    pub fn register(&self, hook: Arc<dyn NotifyHook>) {
        self.registry.add(hook);
    }

    /// Unregister `hook`. A no-op if it was never registered.
    pub fn unregister(&self, hook: &Arc<dyn NotifyHook>) {
        self.registry.remove(hook);
    }

    /// Unregister every hook whose concrete type is exactly `K`.
    pub fn unregister_all_of<K: NotifyHook>(&self) {
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

    /// Invoke every hook in visitation order. An empty topic is a silent
    /// no-op. Hooks may register or unregister on this topic mid-pass.
    pub fn notify(&self) {
        for hook in self.registry.observers() {
            hook.on_notify();
        }
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}
