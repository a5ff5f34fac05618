use crate::explicit::{ExplorationConfig, ExplorationState, ExplorationStep, ReachableMarkings};
use crate::simple_type_name;
use cancel_this::{Cancelled, is_cancelled};
use computation_process::Incomplete::Suspended;
use computation_process::{Completable, ComputationStep};
use log::{debug, trace};
use std::marker::PhantomData;

/// A helper implementation of [`ComputationStep`] that expands one frontier marking
/// (chosen by the [`ExplorationStep`] policy) per step, collecting newly discovered
/// markings into the `state`.
pub struct IterativeExpansion<S: ExplorationStep>(PhantomData<S>);

impl<S: ExplorationStep> ComputationStep<ExplorationConfig, ExplorationState, ReachableMarkings>
    for IterativeExpansion<S>
{
    fn step(
        context: &ExplorationConfig,
        state: &mut ExplorationState,
    ) -> Completable<ReachableMarkings> {
        is_cancelled!()?;

        if state.frontier.is_empty() {
            debug!(
                "[iteration:{}] Expansion<{}> finished with {} markings.",
                state.iteration,
                simple_type_name::<S>(),
                state.visited.len()
            );

            return Ok(state.visited.iter().cloned().collect());
        }

        if state.iteration >= context.max_iterations {
            debug!(
                "[iteration:{}] Expansion<{}> canceled (exceeded iteration count).",
                state.iteration,
                simple_type_name::<S>()
            );

            return Err(Cancelled::new("ExplorationConfig::max_iterations").into());
        }
        state.iteration += 1;

        let Some(marking) = S::next(&mut state.frontier) else {
            return Err(Suspended);
        };

        for (transition, successor) in context.net.successors(&marking, context.rule) {
            if state.visited.contains(&successor) {
                continue;
            }

            trace!(
                "Discovered {successor} by firing `{}` in {marking}.",
                context.net.transitions()[transition]
            );

            state.visited.insert(successor.clone());
            state.frontier.push_back(successor);
        }

        if state.visited.len() > context.max_markings {
            debug!(
                "[iteration:{}] Expansion<{}> canceled (exceeded marking count).",
                state.iteration,
                simple_type_name::<S>()
            );

            return Err(Cancelled::new("ExplorationConfig::max_markings").into());
        }

        Err(Suspended)
    }
}
