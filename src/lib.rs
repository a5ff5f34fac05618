//! Reachability analysis of 1-safe place/transition Petri nets.
//!
//! - [`net`]: the net model, the token game, PNML import and the canonical rendering.
//! - [`explicit`]: breadth-first and depth-first exploration of individual markings.
//! - [`symbolic`]: BDD encoding of the net and fixed-point reachability.
//! - [`analysis`]: deadlocks and linear objectives over reachable markings.

use crate::symbolic::SymbolicMarkings;

#[cfg(test)]
mod test_utils;

pub mod analysis;
pub mod explicit;
pub mod net;
pub mod symbolic;

/// A utility method for printing useful metadata of symbolic sets.
fn log_set(set: &SymbolicMarkings) -> String {
    format!(
        "elements={}; BDD nodes={}",
        set.count(),
        set.symbolic_size()
    )
}

/// The last path segment of a type name, used to label log messages.
fn simple_type_name<T>() -> &'static str {
    std::any::type_name::<T>().split("::").last().unwrap_or("?")
}
