//! Explicit reachability: graph search over individual markings.
//!
//! Nodes of the searched graph are markings (deduplicated by value) and edges are single
//! transition firings. The search starts in the initial marking of the net and expands
//! every discovered marking exactly once, trying transitions in index order. The result
//! is the set of all discovered markings.
//!
//! # Search order
//!
//! - **BFS** ([`ExplicitBfs`]): the frontier is a FIFO queue.
//! - **DFS** ([`ExplicitDfs`]): the frontier is a stack.
//!
//! The order only affects the internal visit sequence, both produce the same set.
//!
//! # Termination
//!
//! Under the default [`crate::net::FiringRule::Safe`] the state space is bounded by
//! `2^|places|` and the search always terminates. There is no implicit iteration cap:
//! nets that are unbounded under [`crate::net::FiringRule::Standard`] are explored
//! forever unless a limit in [`ExplorationConfig`] is set or the computation is cancelled.
//!
//! # Example
//!
//! ```rust
//! use petri_reach::explicit::bfs_reachable;
//! use petri_reach::net::{IncidenceMatrix, Marking, PetriNet};
//!
//! let input = IncidenceMatrix::from_rows(&[[1, 0], [0, 1]]).unwrap();
//! let output = IncidenceMatrix::from_rows(&[[0, 1], [1, 0]]).unwrap();
//! let net = PetriNet::from_matrices(&["p1", "p2"], &["t1", "t2"], input, output, [1, 0])
//!     .unwrap();
//!
//! let reachable = bfs_reachable(&net).unwrap();
//! assert_eq!(reachable.len(), 2);
//! assert!(reachable.contains(&Marking::from([0, 1])));
//! ```

use crate::net::{Marking, PetriNet};
use cancel_this::Cancellable;
use computation_process::{Algorithm, Computation};
use log::info;
use std::collections::{BTreeSet, VecDeque};


mod exploration_config;
mod exploration_state;
mod frontier_policies;
mod iterative_expansion;

pub use exploration_config::ExplorationConfig;
pub use exploration_state::ExplorationState;
pub use frontier_policies::{BreadthFirst, DepthFirst};
pub use iterative_expansion::IterativeExpansion;

/// The explicit result of a reachability computation. The ordering of markings
/// carries no meaning beyond making the output deterministic.
pub type ReachableMarkings = BTreeSet<Marking>;

/// A helper alias which allows us to use [`ExplicitComputation`] as shorthand for
/// `Computation<Context = ExplorationConfig, State = ExplorationState>`.
pub type ExplicitComputation<STEP> =
    Computation<ExplorationConfig, ExplorationState, ReachableMarkings, STEP>;

/// Breadth-first exploration of the marking graph.
pub type ExplicitBfs = ExplicitComputation<IterativeExpansion<BreadthFirst>>;

/// Depth-first exploration of the marking graph.
pub type ExplicitDfs = ExplicitComputation<IterativeExpansion<DepthFirst>>;

/// Decides which frontier marking is expanded next.
pub trait ExplorationStep {
    /// Remove and return the next marking to expand, or `None` if the frontier is empty.
    fn next(frontier: &mut VecDeque<Marking>) -> Option<Marking>;
}

/// Compute all markings reachable from the initial marking of `net` using BFS.
pub fn bfs_reachable(net: &PetriNet) -> Cancellable<ReachableMarkings> {
    info!(
        "Computing BFS reachability of a net with {} places and {} transitions.",
        net.num_places(),
        net.num_transitions()
    );
    let result = ExplicitBfs::run(net, net)?;
    info!("BFS reachability terminated with {} markings.", result.len());
    Ok(result)
}

/// Compute all markings reachable from the initial marking of `net` using DFS.
pub fn dfs_reachable(net: &PetriNet) -> Cancellable<ReachableMarkings> {
    info!(
        "Computing DFS reachability of a net with {} places and {} transitions.",
        net.num_places(),
        net.num_transitions()
    );
    let result = ExplicitDfs::run(net, net)?;
    info!("DFS reachability terminated with {} markings.", result.len());
    Ok(result)
}
