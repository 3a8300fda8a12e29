//! Registry<O> — identity-keyed observer collection with a one-shot,
//! mutation-tolerant traversal.
//!
//! # Threading model
//!
//! `Registry<O>` is `Send + Sync`. All state lives behind a single
//! `parking_lot::Mutex` and every method takes `&self`.
//!
//! The critical rule: the lock is **never held while a notification
//! callback runs**. [`Traversal::next`] pops one entry under the lock and
//! releases it before handing the observer to the dispatching shape, so a
//! callback may freely call [`add`](Registry::add),
//! [`remove`](Registry::remove), [`remove_of_kind`](Registry::remove_of_kind)
//! or [`remove_all`](Registry::remove_all) on the same registry.
//!
//! The one exception is [`Observer::placement`], which runs *under* the
//! lock while the buffer is sorted. Placement implementations are plain
//! comparisons and must not call back into the registry they are being
//! sorted in.
//!
//! # Traversal sessions
//!
//! The in-flight buffer is instance state, not iterator state. It is
//! filled (copy of the committed set, sorted) when a traversal starts, and
//! drained one entry per step; its emptiness is the signal that no
//! traversal is active. Mutation while it is non-empty touches both the
//! committed set and the unvisited remainder, which is re-sorted so a
//! late-registered observer lands where its relations put it. Entries
//! already yielded are gone and are never reconsidered.

use std::any::TypeId;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::trace;

use crate::observer::{Observer, ObserverId};

use super::order::sort_entries;

// ============================================================================
// Registry
// ============================================================================

/// One topic's observers, keyed by [`ObserverId`].
///
/// Generic over the capability trait object `O`, so each topic's registry
/// only accepts observers of that topic's shape (e.g.
/// `Registry<dyn NotifyHook>`).
pub struct Registry<O: Observer + ?Sized> {
    state: Mutex<State<O>>,
}

struct State<O: ?Sized> {
    /// All currently registered observers. Insertion order is irrelevant;
    /// re-registering an identity overwrites in place.
    committed: Vec<(ObserverId, Arc<O>)>,
    /// The traversal buffer. Non-empty exactly while a pass is live.
    in_flight: Vec<(ObserverId, Arc<O>)>,
    /// Identities already yielded in the live pass. An observer appears at
    /// most once per traversal, even if re-registered mid-pass.
    visited: Vec<ObserverId>,
}

impl<O: Observer + ?Sized> Registry<O> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                committed: Vec::new(),
                in_flight: Vec::new(),
                visited: Vec::new(),
            }),
        }
    }

    /// Register `observer`, or overwrite its registration if the same
    /// identity is already present (idempotent, no duplicates).
    ///
    /// If a traversal is live, the observer also joins the unvisited
    /// remainder of the current pass, positioned by its declared relations
    /// against the entries not yet yielded.
    pub fn add(&self, observer: Arc<O>) {
        let id = ObserverId::of(&observer);
        let mut state = self.state.lock();

        upsert(&mut state.committed, id, Arc::clone(&observer));
        if !state.in_flight.is_empty() && !state.visited.contains(&id) {
            upsert(&mut state.in_flight, id, observer);
            sort_entries(&mut state.in_flight);
        }
        trace!(?id, size = state.committed.len(), "observer registered");
    }

    /// Remove the observer with `observer`'s identity.
    ///
    /// A no-op if it was never registered. If a traversal is live and the
    /// observer has not been yielded yet, it also leaves the current pass;
    /// if it was already yielded, removal has no retroactive effect.
    pub fn remove(&self, observer: &Arc<O>) {
        self.remove_id(ObserverId::of(observer));
    }

    /// Remove by identity. A no-op if the identity is not registered.
    pub fn remove_id(&self, id: ObserverId) {
        let mut state = self.state.lock();
        state.committed.retain(|(eid, _)| *eid != id);
        state.in_flight.retain(|(eid, _)| *eid != id);
        trace!(?id, size = state.committed.len(), "observer removed");
    }

    /// Remove every observer whose concrete runtime kind is exactly `kind`.
    ///
    /// Matches [`Observer::kind`] only — never a capability trait or a
    /// related type.
    pub fn remove_of_kind(&self, kind: TypeId) {
        let mut state = self.state.lock();
        state.committed.retain(|(_, obs)| obs.kind() != kind);
        state.in_flight.retain(|(_, obs)| obs.kind() != kind);
        trace!(size = state.committed.len(), "observers removed by kind");
    }

    /// Drop every observer, ending any live traversal. Full topic reset.
    pub fn remove_all(&self) {
        let mut state = self.state.lock();
        state.committed.clear();
        state.in_flight.clear();
        state.visited.clear();
        trace!("registry cleared");
    }

    /// Number of registered observers.
    pub fn size(&self) -> usize {
        self.state.lock().committed.len()
    }

    /// Whether no observers are registered.
    pub fn is_empty(&self) -> bool {
        self.state.lock().committed.is_empty()
    }

    /// Begin (or join) a traversal and return its lazy, single-pass handle.
    ///
    /// If no traversal is live, the committed set is copied into the
    /// buffer and sorted by the declared relations. If one *is* live —
    /// only possible from inside one of its own callbacks — the handle
    /// drains the same buffer; there is never more than one session per
    /// registry.
    pub fn observers(&self) -> Traversal<'_, O> {
        let mut state = self.state.lock();
        if state.in_flight.is_empty() {
            state.in_flight = state.committed.clone();
            state.visited.clear();
            sort_entries(&mut state.in_flight);
            trace!(size = state.in_flight.len(), "traversal started");
        }
        Traversal { registry: self }
    }

    /// Yield the next unvisited observer, or end the session.
    fn pop_next(&self) -> Option<Arc<O>> {
        let mut state = self.state.lock();
        if state.in_flight.is_empty() {
            return None;
        }
        let (id, observer) = state.in_flight.remove(0);
        state.visited.push(id);
        if state.in_flight.is_empty() {
            // Session over; the next observers() call starts fresh.
            state.visited.clear();
        }
        Some(observer)
    }

    /// Discard the unvisited remainder of the current pass, if any.
    ///
    /// Used when a chain aborts: the next dispatch starts a fresh session
    /// from the committed set instead of resuming mid-stream.
    pub(crate) fn end_session(&self) {
        let mut state = self.state.lock();
        state.in_flight.clear();
        state.visited.clear();
    }
}

impl<O: Observer + ?Sized> Default for Registry<O> {
    fn default() -> Self {
        Self::new()
    }
}

/// Insert or overwrite the entry with identity `id`.
fn upsert<O: ?Sized>(entries: &mut Vec<(ObserverId, Arc<O>)>, id: ObserverId, observer: Arc<O>) {
    if let Some(slot) = entries.iter_mut().find(|(eid, _)| *eid == id) {
        slot.1 = observer;
    } else {
        entries.push((id, observer));
    }
}

// ============================================================================
// Traversal
// ============================================================================

/// Lazy, single-pass handle over one traversal session.
///
/// Each `next()` removes and yields the front of the registry's in-flight
/// buffer, with the lock released in between — the buffer may shrink, grow
/// and re-sort under the handle between steps. The session ends when the
/// buffer drains; a later [`Registry::observers`] call starts a fresh one.
pub struct Traversal<'a, O: Observer + ?Sized> {
    registry: &'a Registry<O>,
}

impl<O: Observer + ?Sized> Iterator for Traversal<'_, O> {
    type Item = Arc<O>;

    fn next(&mut self) -> Option<Self::Item> {
        self.registry.pop_next()
    }
}
