//! The distinguished abort signal for edit chains.
//!
//! [`Aborted`] is control flow, not a failure: an edit hook returns
//! `Err(Aborted)` to stop the remaining chain, and the dispatching caller
//! treats it as "skip the action this chain was protecting". It is never
//! logged as a fault by the engine.

use thiserror::Error;

/// Raised by an [`EditHook`](crate::EditHook) to terminate the remaining
/// chain early.
///
/// Conventionally an aborting hook declares itself
/// [`Placement::Before`](crate::Placement::Before) everything else so the
/// chain does as little wasted work as possible before stopping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("hook chain aborted")]
pub struct Aborted;
