//! # hook-chain
//!
//! An in-process notification engine. Feature code exposes an extension
//! point by owning a *topic* — a typed chain of observers — and dispatching
//! through it; consumers register observers that declare how they want to
//! run relative to each other (before / after / indifferent) instead of
//! picking absolute priority numbers.
//!
//! # Overview
//!
//! The core is [`Registry`], an identity-keyed observer collection that
//! computes a visitation order on demand from pairwise [`Placement`]
//! declarations and tolerates registration and removal from *inside* an
//! in-progress pass. Three thin dispatch shapes sit on top of it:
//!
//! - [`Notifier`] — fire-and-forget, no payload ("this point was reached").
//! - [`ValueChain`] — each hook receives the current value and returns a
//!   transformed one, threaded through the chain.
//! - [`EditChain`] — each hook mutates a shared value in place and may
//!   abort the remainder of the chain with [`Aborted`].
//!
//! Each shape owns one registry and is the typed per-topic surface: it
//! accepts only observers implementing that topic's capability trait.
//!
//! # Modules
//!
//! - [`observer`] — [`Placement`], the [`Observer`] trait, [`ObserverId`].
//! - [`registry`] — [`Registry`] and its one-shot [`Traversal`].
//! - [`chain`] — the three dispatch shapes and their capability traits.
//! - [`error`] — the [`Aborted`] control-flow signal.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use hook_chain::{MapHook, Observer, ValueChain};
//!
//! struct Suffix(&'static str);
//! impl Observer for Suffix {}
//! impl MapHook<String> for Suffix {
//!     fn map(&self, value: String, _ctx: &()) -> String {
//!         value + self.0
//!     }
//! }
//!
//! let subject: ValueChain<String> = ValueChain::new();
//! subject.register(Arc::new(Suffix(" world")));
//! assert_eq!(subject.run("hello".into(), &()), "hello world");
//! ```

pub mod chain;
pub mod error;
pub mod observer;
pub mod registry;

pub use chain::{EditChain, EditHook, MapHook, NotifyHook, Notifier, ValueChain};
pub use error::Aborted;
pub use observer::{AsAny, Observer, ObserverId, Placement};
pub use registry::{Registry, Traversal};
