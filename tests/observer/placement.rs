//! Tests for `Placement` and the `Observer` trait defaults.

use std::any::TypeId;

use hook_chain::{AsAny, Observer, Placement};

struct Silent;
impl Observer for Silent {}

struct Eager;
impl Observer for Eager {
    fn placement(&self, _other: &dyn std::any::Any) -> Placement {
        Placement::Before
    }
}

// ============================================================================
// Inversion
// ============================================================================

#[test]
fn invert_flips_before_and_after() {
    assert_eq!(Placement::Before.invert(), Placement::After);
    assert_eq!(Placement::After.invert(), Placement::Before);
}

#[test]
fn invert_keeps_indifferent() {
    assert_eq!(Placement::Indifferent.invert(), Placement::Indifferent);
}

#[test]
fn is_indifferent_only_for_indifferent() {
    assert!(Placement::Indifferent.is_indifferent());
    assert!(!Placement::Before.is_indifferent());
    assert!(!Placement::After.is_indifferent());
}

// ============================================================================
// Observer defaults
// ============================================================================

#[test]
fn default_placement_is_indifferent() {
    let silent = Silent;
    let eager = Eager;
    assert_eq!(silent.placement(eager.as_any()), Placement::Indifferent);
}

#[test]
fn kind_is_the_concrete_type() {
    let silent: &dyn Observer = &Silent;
    let eager: &dyn Observer = &Eager;

    assert_eq!(silent.kind(), TypeId::of::<Silent>());
    assert_eq!(eager.kind(), TypeId::of::<Eager>());
    assert_ne!(silent.kind(), eager.kind());
}
