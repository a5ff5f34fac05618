//! Questions answered over an already computed reachable set.
//!
//! - Deadlocks: reachable markings in which no transition can fire, either from an
//!   explicit set ([`explicit_deadlocks`]) or symbolically ([`symbolic_deadlocks`]).
//! - Linear objectives: the reachable marking maximizing or minimizing
//!   `sum(weight[p] * M[p])` ([`Objective`]).


mod deadlocks;
mod objective;

pub use deadlocks::{explicit_deadlocks, symbolic_deadlocks};
pub use objective::{Objective, OptimizationResult};
