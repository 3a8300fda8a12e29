//! Visitation-order tests for `Registry`.

use std::any::{Any, TypeId};
use std::sync::Arc;

use hook_chain::{Observer, Placement, Registry};

/// Test capability: observers that can report who they are.
trait Named: Observer {
    fn name(&self) -> &'static str;
}

/// Always declares `Before` — wants to run first.
struct RunFirst(&'static str);
impl Observer for RunFirst {
    fn placement(&self, _other: &dyn Any) -> Placement {
        Placement::Before
    }
}
impl Named for RunFirst {
    fn name(&self) -> &'static str {
        self.0
    }
}

/// Always declares `After` — wants to run last.
struct RunLast(&'static str);
impl Observer for RunLast {
    fn placement(&self, _other: &dyn Any) -> Placement {
        Placement::After
    }
}
impl Named for RunLast {
    fn name(&self) -> &'static str {
        self.0
    }
}

/// No opinion about anyone.
struct Plain(&'static str);
impl Observer for Plain {}
impl Named for Plain {
    fn name(&self) -> &'static str {
        self.0
    }
}

/// Declares `After` anything of `Plain`'s kind, indifferent otherwise.
struct AfterPlain(&'static str);
impl Observer for AfterPlain {
    fn placement(&self, other: &dyn Any) -> Placement {
        if other.type_id() == TypeId::of::<Plain>() {
            Placement::After
        } else {
            Placement::Indifferent
        }
    }
}
impl Named for AfterPlain {
    fn name(&self) -> &'static str {
        self.0
    }
}

fn drain(registry: &Registry<dyn Named>) -> Vec<&'static str> {
    registry.observers().map(|o| o.name()).collect()
}

// ============================================================================
// First / last / relation-constrained middle
// ============================================================================

#[test]
fn always_first_and_always_last_bracket_the_middle() {
    let registry: Registry<dyn Named> = Registry::new();
    registry.add(Arc::new(RunFirst("F1")));
    registry.add(Arc::new(AfterPlain("U1")));
    registry.add(Arc::new(RunLast("L1")));
    registry.add(Arc::new(Plain("U2")));
    registry.add(Arc::new(RunLast("L2")));
    registry.add(Arc::new(RunFirst("F2")));

    // Both always-firsts bracket the front and both always-lasts the
    // back; inside each pair the declarations contradict each other, so
    // registration order is kept. The one real middle constraint is that
    // U1 runs after U2's kind.
    assert_eq!(drain(&registry), vec!["F1", "F2", "U2", "U1", "L1", "L2"]);
}

#[test]
fn order_is_deterministic_across_sessions() {
    let registry: Registry<dyn Named> = Registry::new();
    registry.add(Arc::new(RunFirst("F1")));
    registry.add(Arc::new(AfterPlain("U1")));
    registry.add(Arc::new(RunLast("L1")));
    registry.add(Arc::new(Plain("U2")));

    let first = drain(&registry);
    let second = drain(&registry);
    assert_eq!(first, second);
}

// ============================================================================
// One-sided declarations
// ============================================================================

#[test]
fn one_sided_declaration_is_inverted_for_the_silent_side() {
    // Plain has no opinion; AfterPlain's "after Plain" must still place
    // Plain first even when Plain is asked about the pair first.
    let registry: Registry<dyn Named> = Registry::new();
    registry.add(Arc::new(AfterPlain("late")));
    registry.add(Arc::new(Plain("early")));

    assert_eq!(drain(&registry), vec!["early", "late"]);
}

// ============================================================================
// Indifferent pairs
// ============================================================================

#[test]
fn contradictory_pair_keeps_registration_order_without_panicking() {
    // Each claims Before the other; the cycle degrades to input order.
    let registry: Registry<dyn Named> = Registry::new();
    registry.add(Arc::new(RunFirst("x")));
    registry.add(Arc::new(RunFirst("y")));

    assert_eq!(drain(&registry), vec!["x", "y"]);
}

#[test]
fn indifferent_pairs_keep_registration_order() {
    let registry: Registry<dyn Named> = Registry::new();
    registry.add(Arc::new(Plain("a")));
    registry.add(Arc::new(Plain("b")));
    registry.add(Arc::new(Plain("c")));

    assert_eq!(drain(&registry), vec!["a", "b", "c"]);
}
