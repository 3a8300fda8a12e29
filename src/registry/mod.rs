//! Registry — the core ordering engine.
//!
//! # Overview
//!
//! [`Registry<O>`] holds one topic's observers keyed by stable identity,
//! computes a visitation order on demand from pairwise [`Placement`]
//! declarations, and exposes a one-shot [`Traversal`] that tolerates
//! registration and removal from inside an in-progress pass.
//!
//! # Modules
//!
//! - [`core`] — [`Registry<O>`] and [`Traversal`].
//! - [`order`] — the pairwise comparison and the stable relation sort.
//!
//! [`Placement`]: crate::Placement

pub mod core;
pub mod order;

pub use self::core::{Registry, Traversal};
