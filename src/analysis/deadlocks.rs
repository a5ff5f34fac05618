use crate::log_set;
use crate::net::{FiringRule, Marking, PetriNet};
use crate::symbolic::{SymbolicEncoding, SymbolicMarkings};
use log::debug;
use std::borrow::Borrow;
use std::collections::BTreeSet;

/// The markings of `markings` in which no transition of `net` can fire under `rule`.
pub fn explicit_deadlocks<M, I>(net: &PetriNet, markings: I, rule: FiringRule) -> BTreeSet<Marking>
where
    M: Borrow<Marking>,
    I: IntoIterator<Item = M>,
{
    let result: BTreeSet<Marking> = markings
        .into_iter()
        .filter(|it| net.is_deadlocked(it.borrow(), rule))
        .map(|it| it.borrow().clone())
        .collect();
    debug!("Found {} explicit deadlocks.", result.len());
    result
}

/// The markings of `reachable` in which no transition of the encoded net can fire,
/// i.e. `R ∧ ¬(∃ next. T)`.
pub fn symbolic_deadlocks(
    encoding: &SymbolicEncoding,
    reachable: &SymbolicMarkings,
) -> SymbolicMarkings {
    let result = reachable.minus(&encoding.can_fire_any());
    debug!("Found symbolic deadlocks ({}).", log_set(&result));
    result
}
