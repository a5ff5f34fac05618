use crate::log_set;
use crate::symbolic::{ReachabilityConfig, ReachabilityStep, SymbolicMarkings};
use cancel_this::{Cancellable, is_cancelled};
use log::trace;

/// Computes the direct successors of the current reachable set under the global transition
/// relation, excluding values that are already in the reachable set.
pub struct BfsSuccessors;

/// Find the greatest transition which produces successors (excluding current reachable values)
/// in the current reachable set and return those successors (or empty set otherwise).
pub struct SaturationSuccessors;

impl ReachabilityStep for BfsSuccessors {
    fn step(
        context: &ReachabilityConfig,
        state: &SymbolicMarkings,
    ) -> Cancellable<SymbolicMarkings> {
        is_cancelled!()?;
        let post = context.encoding.post_out(state);
        trace!("Successors computed using the full relation ({}).", log_set(&post));
        Ok(post)
    }
}

impl ReachabilityStep for SaturationSuccessors {
    fn step(
        context: &ReachabilityConfig,
        state: &SymbolicMarkings,
    ) -> Cancellable<SymbolicMarkings> {
        let encoding = &context.encoding;
        for t in (0..encoding.num_transitions()).rev() {
            is_cancelled!()?;
            let step = encoding.transition_post_out(t, state);
            if !step.is_empty() {
                trace!(
                    "Found successors using `{}` ({}).",
                    encoding.transitions()[t],
                    log_set(&step)
                );
                return Ok(step);
            }
        }

        Ok(encoding.mk_empty())
    }
}
