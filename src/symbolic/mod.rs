//! Symbolic reachability: markings of a 1-safe net as BDDs.
//!
//! Every place is a Boolean variable (true = the place holds a token). The net is encoded
//! as a transition relation over current- and next-state variables
//! ([`SymbolicEncoding`]), and the reachable set is the least fixed point of
//! `R := R ∨ post(R)` starting from the initial marking.
//!
//! # Algorithm Variants
//!
//! - **Saturation** (default, [`SymbolicReachability`]): each step fires a single
//!   transition (the greatest one that still produces new markings). Generally produces
//!   smaller intermediate BDDs.
//! - **BFS** ([`SymbolicReachabilityBfs`]): each step applies the global transition
//!   relation, so iteration `k` adds exactly the markings at distance `k` from the
//!   initial set.
//!
//! Both compute the same set, which is also the set found by [`crate::explicit`] under
//! [`crate::net::FiringRule::Safe`].
//!
//! # Example
//!
//! ```rust
//! use petri_reach::net::{IncidenceMatrix, Marking, PetriNet};
//! use petri_reach::symbolic::bdd_reachable;
//!
//! let input = IncidenceMatrix::from_rows(&[[1, 0, 0], [0, 1, 0], [0, 0, 1]]).unwrap();
//! let output = IncidenceMatrix::from_rows(&[[0, 1, 0], [0, 0, 1], [1, 0, 0]]).unwrap();
//! let net = PetriNet::from_matrices(
//!     &["p1", "p2", "p3"],
//!     &["t1", "t2", "t3"],
//!     input,
//!     output,
//!     [1, 0, 0],
//! )
//! .unwrap();
//!
//! let (reachable, count) = bdd_reachable(&net).unwrap();
//! assert_eq!(count, num_bigint::BigInt::from(3));
//! assert!(reachable.contains(&Marking::from([0, 0, 1])));
//! ```

use crate::net::PetriNet;
use cancel_this::Cancellable;
use computation_process::{Algorithm, Computation};
use log::{info, warn};
use num_bigint::BigInt;

#[cfg(test)]
mod tests;

mod iterative_union;
mod reachability_config;
mod reachability_state;
mod step_operators;
mod symbolic_encoding;
mod symbolic_markings;
mod symbolic_space;

pub use iterative_union::IterativeUnion;
pub use reachability_config::ReachabilityConfig;
pub use reachability_state::ReachabilityState;
pub use step_operators::{BfsSuccessors, SaturationSuccessors};
pub use symbolic_encoding::SymbolicEncoding;
pub use symbolic_markings::SymbolicMarkings;
pub use symbolic_space::SymbolicSpace;

/// A helper alias which allows us to use [`ReachabilityComputation`] as shorthand for
/// `Computation<Context = ReachabilityConfig, State = ReachabilityState>`.
pub type ReachabilityComputation<STEP> =
    Computation<ReachabilityConfig, ReachabilityState, SymbolicMarkings, STEP>;

/// The recommended symbolic reachability configuration using saturation.
pub type SymbolicReachability = ReachabilityComputation<IterativeUnion<SaturationSuccessors>>;

/// Symbolic reachability that always explores the marking graph in the BFS order.
///
/// Each step computes exactly one additional layer of markings further from the initial
/// set. This is generally slower than [`SymbolicReachability`] because it tends to produce
/// larger BDDs.
pub type SymbolicReachabilityBfs = ReachabilityComputation<IterativeUnion<BfsSuccessors>>;

/// Used to reduce code repetition in reachability-like algorithms.
///
/// Implementors define a single step of a reachability procedure, which is then
/// iterated by [`IterativeUnion`].
pub trait ReachabilityStep {
    /// Perform a single step of reachability computation.
    ///
    /// Returns the set of newly discovered markings (not already in `state`),
    /// or an empty set if no more markings can be reached.
    fn step(
        context: &ReachabilityConfig,
        state: &SymbolicMarkings,
    ) -> Cancellable<SymbolicMarkings>;
}

/// Compute the markings reachable from the initial marking of `net` symbolically.
///
/// Returns the reachable set together with its exact size.
pub fn bdd_reachable(net: &PetriNet) -> Cancellable<(SymbolicMarkings, BigInt)> {
    info!(
        "Computing symbolic reachability of a net with {} places and {} transitions.",
        net.num_places(),
        net.num_transitions()
    );
    let encoding = SymbolicEncoding::new(net);
    let initial = encoding.mk_initial();
    if initial.is_empty() {
        warn!(
            "Initial marking {} is not 1-safe and has no symbolic encoding.",
            net.initial_marking()
        );
    }
    let reachable = SymbolicReachability::run(&encoding, initial)?;
    let count = reachable.count();
    info!(
        "Symbolic reachability terminated with {count} markings ({} BDD nodes).",
        reachable.symbolic_size()
    );
    Ok((reachable, count))
}
