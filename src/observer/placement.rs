//! Placement — one observer's declared order relative to another.
//!
//! Returned by [`Observer::placement`](super::Observer::placement) when an
//! observer is asked where it wants to run relative to some other observer.
//! Declarations need not be mutual or transitive; the registry does not
//! validate consistency.

/// Relative ordering preference of one observer against another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// "I should run before the other observer."
    Before,
    /// "I should run after the other observer."
    After,
    /// No opinion either way.
    Indifferent,
}

impl Placement {
    /// Flip the direction of the declaration.
    ///
    /// Used when only the *other* side of a pair has an opinion: "b runs
    /// after a" is equivalent to "a runs before b".
    pub fn invert(self) -> Self {
        match self {
            Self::Before => Self::After,
            Self::After => Self::Before,
            Self::Indifferent => Self::Indifferent,
        }
    }

    /// Whether this declaration expresses no preference.
    pub fn is_indifferent(self) -> bool {
        matches!(self, Self::Indifferent)
    }
}
