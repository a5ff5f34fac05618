use crate::explicit::ExplorationStep;
use crate::net::Marking;
use std::collections::VecDeque;

/// Expand markings in the order in which they were discovered (FIFO frontier).
pub struct BreadthFirst;

/// Always expand the most recently discovered marking (LIFO frontier).
pub struct DepthFirst;

impl ExplorationStep for BreadthFirst {
    fn next(frontier: &mut VecDeque<Marking>) -> Option<Marking> {
        frontier.pop_front()
    }
}

impl ExplorationStep for DepthFirst {
    fn next(frontier: &mut VecDeque<Marking>) -> Option<Marking> {
        frontier.pop_back()
    }
}
