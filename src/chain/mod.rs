//! Dispatch shapes — the typed per-topic surface over [`Registry`].
//!
//! # Overview
//!
//! Each topic owns exactly one shape, and each shape owns one registry
//! over its capability trait, so a topic only accepts observers that
//! implement the signature its dispatch operation will invoke. The shapes
//! are thin: identity, ordering, and mid-pass mutation all live in the
//! registry.
//!
//! # Modules
//!
//! - [`notifier`] — [`Notifier`] / [`NotifyHook`]: no payload, side
//!   effects only.
//! - [`value`] — [`ValueChain`] / [`MapHook`]: each hook returns a
//!   transformed value, threaded through the chain.
//! - [`edit`] — [`EditChain`] / [`EditHook`]: each hook mutates a shared
//!   value in place and may abort the remainder.
//!
//! [`Registry`]: crate::Registry

pub mod edit;
pub mod notifier;
pub mod value;

pub use edit::{EditChain, EditHook};
pub use notifier::{Notifier, NotifyHook};
pub use value::{MapHook, ValueChain};
