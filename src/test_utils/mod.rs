pub mod example_nets;

use crate::net::{Marking, PetriNet};
use crate::symbolic::SymbolicMarkings;
use std::collections::BTreeSet;

/// Initialize env_logger for tests. Safe to call multiple times.
pub fn init_logger() {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

/// Creates a marking from a bit pattern.
///
/// The pattern is interpreted as binary encoding (the most significant bit = place 0).
/// The number of places is inferred from the net.
///
/// # Example
///
/// For a 3-place net:
/// - `mk_marking(net, 0b100)` creates marking `(1, 0, 0)`
/// - `mk_marking(net, 0b011)` creates marking `(0, 1, 1)`
pub fn mk_marking(net: &PetriNet, bits: u32) -> Marking {
    let places = net.num_places();
    assert!(
        bits < (1u32 << places),
        "Marking {bits:#b} out of range for {places} places"
    );
    (0..places)
        .map(|place| (bits >> (places - 1 - place)) & 1)
        .collect()
}

/// Creates a set of markings from a list of bit patterns.
///
/// # Example
///
/// `mk_markings(net, &[0b100, 0b010])` creates the set `{(1, 0, 0), (0, 1, 0)}`.
pub fn mk_markings(net: &PetriNet, bits: &[u32]) -> BTreeSet<Marking> {
    bits.iter().map(|it| mk_marking(net, *it)).collect()
}

/// Collect the markings of a symbolic set into an explicit (sorted) set.
pub fn symbolic_to_explicit(set: &SymbolicMarkings) -> BTreeSet<Marking> {
    set.markings().collect()
}
