use crate::symbolic::reachability_state::ReachabilityState;
use crate::symbolic::{ReachabilityConfig, ReachabilityStep, SymbolicMarkings};
use crate::{log_set, simple_type_name};
use cancel_this::Cancelled;
use computation_process::Incomplete::Suspended;
use computation_process::{Completable, ComputationStep};
use log::debug;
use std::marker::PhantomData;

/// Fixed-point driver: every step adds the markings produced by one [`ReachabilityStep`]
/// to the reachable set in `state`, and the computation completes once a step produces
/// nothing new.
pub struct IterativeUnion<S: ReachabilityStep>(PhantomData<S>);

impl<S: ReachabilityStep> ComputationStep<ReachabilityConfig, ReachabilityState, SymbolicMarkings>
    for IterativeUnion<S>
{
    fn step(
        context: &ReachabilityConfig,
        state: &mut ReachabilityState,
    ) -> Completable<SymbolicMarkings> {
        let name = simple_type_name::<S>();
        if state.iteration >= context.max_iterations {
            debug!(
                "[iteration:{}] Union<{name}> canceled (exceeded iteration count).",
                state.iteration
            );
            return Err(Cancelled::new("ReachabilityConfig::max_iterations").into());
        }
        state.iteration += 1;

        let discovered = S::step(context, &state.set)?;
        if discovered.is_empty() {
            debug!(
                "[iteration:{}] Union<{name}> reached a fixed point ({}).",
                state.iteration,
                log_set(&state.set)
            );
            return Ok(state.set.clone());
        }

        state.set = state.set.union(&discovered);
        if state.set.symbolic_size() > context.max_symbolic_size {
            debug!(
                "[iteration:{}] Union<{name}> canceled (exceeded symbolic size).",
                state.iteration
            );
            return Err(Cancelled::new("ReachabilityConfig::max_symbolic_size").into());
        }

        debug!(
            "[iteration:{}] Union<{name}> added {} markings ({}).",
            state.iteration,
            discovered.count(),
            log_set(&state.set)
        );
        Err(Suspended)
    }
}
