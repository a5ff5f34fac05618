use crate::net::{Marking, PetriNet};
use std::collections::{HashSet, VecDeque};

/// The state of an explicit exploration: everything discovered so far and the markings
/// that still wait for expansion.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExplorationState {
    pub iteration: usize,
    pub visited: HashSet<Marking>,
    pub frontier: VecDeque<Marking>,
}

impl From<Marking> for ExplorationState {
    fn from(value: Marking) -> Self {
        ExplorationState {
            iteration: 0,
            visited: HashSet::from([value.clone()]),
            frontier: VecDeque::from([value]),
        }
    }
}

impl From<&Marking> for ExplorationState {
    fn from(value: &Marking) -> Self {
        Self::from(value.clone())
    }
}

/// Start the exploration in the initial marking of the net.
impl From<&PetriNet> for ExplorationState {
    fn from(value: &PetriNet) -> Self {
        Self::from(value.initial_marking())
    }
}
