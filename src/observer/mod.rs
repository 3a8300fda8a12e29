//! Observer vocabulary — placement declarations, the observer capability,
//! and registration identity.
//!
//! # Modules
//!
//! - [`placement`] — the three-valued [`Placement`] declaration.
//! - [`types`] — [`AsAny`], the [`Observer`] trait, [`ObserverId`].

pub mod placement;
pub mod types;

pub use placement::Placement;
pub use types::{AsAny, Observer, ObserverId};
