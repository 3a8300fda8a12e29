//! Observer trait and registration identity.
//!
//! [`Observer`] is the one capability every registrant must carry: asked
//! about another observer, answer with a [`Placement`]. Capability traits
//! for the concrete dispatch shapes (notify / map / edit) extend it, so a
//! single registry implementation serves every topic.
//!
//! [`ObserverId`] is reference identity: the allocation address of the
//! registered `Arc`. It is stable for the lifetime of the registration,
//! never collides across live observers, and makes re-registering the same
//! `Arc` an in-place overwrite.

use std::any::{Any, TypeId};
use std::sync::Arc;

use super::Placement;

/// Object-safe bridge from any `'static` type to `&dyn Any`.
///
/// Blanket-implemented for every `T: Any`, so trait objects of any
/// capability trait can surface their *concrete* type for kind checks and
/// downcasts inside [`Observer::placement`] implementations.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// The capability every registered observer implements.
///
/// `placement` answers "where do I run relative to `other`?". The `other`
/// side is handed over as `&dyn Any` so implementations can match on its
/// concrete kind (`other.type_id()`) or downcast to inspect it. Common
/// strategies: always [`Placement::Before`] (run first), always
/// [`Placement::After`] (run last), kind-based rules, or the default
/// [`Placement::Indifferent`].
///
/// Declarations are not required to be mutual, transitive, or acyclic;
/// the registry resolves whatever is declared deterministically (see
/// [`registry::order`](crate::registry::order)).
pub trait Observer: AsAny + Send + Sync {
    /// This observer's declared order relative to `other`.
    fn placement(&self, other: &dyn Any) -> Placement {
        let _ = other;
        Placement::Indifferent
    }

    /// The concrete runtime kind of this observer.
    ///
    /// Used for exact-kind removal: a kind matches only its own concrete
    /// type, never a capability trait or wrapper.
    fn kind(&self) -> TypeId {
        self.as_any().type_id()
    }
}

/// Stable identity of a registered observer.
///
/// Derived from the `Arc` allocation address, never from observer content:
/// two clones of one `Arc` are the same observer, two separately allocated
/// observers are always distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(usize);

impl ObserverId {
    /// Identity of the observer held by `arc`.
    pub fn of<O: ?Sized>(arc: &Arc<O>) -> Self {
        Self(Arc::as_ptr(arc).cast::<()>() as usize)
    }
}
