use crate::log_set;
use crate::net::{Marking, PetriNet};
use crate::symbolic::{SymbolicMarkings, SymbolicSpace};
use biodivine_lib_bdd::Bdd;
use log::{debug, trace};
use std::sync::Arc;

/// The symbolic transition system of a [`PetriNet`] under the 1-safe firing rule.
///
/// For each transition `t` and place `p`, the relation admits exactly the pairs
/// `(current, next)` of 0/1 values with `current >= I[t][p]` and
/// `next = current - I[t][p] + O[t][p]`. The relation of `t` is the conjunction of these
/// per-place constraints, and the relation of the net is the disjunction over
/// transitions. A transition with an arc multiplicity above one has an empty relation.
#[derive(Clone)]
pub struct SymbolicEncoding {
    space: Arc<SymbolicSpace>,
    transitions: Vec<String>,
    initial: Marking,
    transition_relations: Vec<Bdd>,
    relation: Bdd,
}

impl From<&PetriNet> for SymbolicEncoding {
    fn from(value: &PetriNet) -> Self {
        SymbolicEncoding::new(value)
    }
}

impl SymbolicEncoding {
    pub fn new(net: &PetriNet) -> SymbolicEncoding {
        let space = SymbolicSpace::new(net.places());
        let vars = space.bdd_variables();

        let mut transition_relations = Vec::with_capacity(net.num_transitions());
        let mut relation = vars.mk_false();
        for t in 0..net.num_transitions() {
            let input = net.input().row(t);
            let output = net.output().row(t);
            let mut t_relation = vars.mk_true();
            for p in 0..net.num_places() {
                let mut place_relation = vars.mk_false();
                for current in [0u32, 1] {
                    if current < input[p] {
                        continue;
                    }
                    let next = u64::from(current - input[p]) + u64::from(output[p]);
                    if next > 1 {
                        continue;
                    }
                    let pair = space
                        .mk_current(p, current == 1)
                        .and(&space.mk_next(p, next == 1));
                    place_relation = place_relation.or(&pair);
                }
                t_relation = t_relation.and(&place_relation);
            }

            if t_relation.is_false() {
                debug!(
                    "Transition `{}` can never fire in a 1-safe marking.",
                    net.transitions()[t]
                );
            }
            trace!(
                "Relation of `{}` has {} BDD nodes.",
                net.transitions()[t],
                t_relation.size()
            );

            relation = relation.or(&t_relation);
            transition_relations.push(t_relation);
        }

        debug!(
            "Encoded {} places and {} transitions; transition relation has {} BDD nodes.",
            net.num_places(),
            net.num_transitions(),
            relation.size()
        );

        SymbolicEncoding {
            space: Arc::new(space),
            transitions: net.transitions().to_vec(),
            initial: net.initial_marking().clone(),
            transition_relations,
            relation,
        }
    }

    pub fn space(&self) -> &SymbolicSpace {
        &self.space
    }

    pub fn num_places(&self) -> usize {
        self.space.num_places()
    }

    pub fn num_transitions(&self) -> usize {
        self.transitions.len()
    }

    pub fn transitions(&self) -> &[String] {
        &self.transitions
    }

    /// The relation of transition `t` over current- and next-state variables.
    pub fn transition_relation(&self, t: usize) -> &Bdd {
        &self.transition_relations[t]
    }

    /// The disjunction of all transition relations.
    pub fn relation(&self) -> &Bdd {
        &self.relation
    }

    pub fn mk_empty(&self) -> SymbolicMarkings {
        self.wrap(self.space.bdd_variables().mk_false())
    }

    /// Every 1-safe marking of the net.
    pub fn mk_unit(&self) -> SymbolicMarkings {
        self.wrap(self.space.bdd_variables().mk_true())
    }

    /// A singleton set (or an empty set if `marking` is not 1-safe).
    pub fn mk_marking(&self, marking: &Marking) -> SymbolicMarkings {
        self.wrap(self.space.encode(marking))
    }

    pub fn mk_markings<'a, I: IntoIterator<Item = &'a Marking>>(
        &self,
        markings: I,
    ) -> SymbolicMarkings {
        let vars = self.space.bdd_variables();
        let bdd = markings
            .into_iter()
            .fold(vars.mk_false(), |acc, it| acc.or(&self.space.encode(it)));
        self.wrap(bdd)
    }

    /// The singleton set of the initial marking of the encoded net.
    pub fn mk_initial(&self) -> SymbolicMarkings {
        self.mk_marking(&self.initial)
    }

    /// Markings reachable from `set` by firing one transition.
    pub fn post(&self, set: &SymbolicMarkings) -> SymbolicMarkings {
        self.image(&self.relation, set)
    }

    /// Like [`SymbolicEncoding::post`], but only returns markings that are not in `set`.
    pub fn post_out(&self, set: &SymbolicMarkings) -> SymbolicMarkings {
        self.post(set).minus(set)
    }

    /// Markings reachable from `set` by firing transition `t`.
    pub fn transition_post(&self, t: usize, set: &SymbolicMarkings) -> SymbolicMarkings {
        self.image(&self.transition_relations[t], set)
    }

    /// Like [`SymbolicEncoding::transition_post`], but only returns markings that are not
    /// in `set`.
    pub fn transition_post_out(&self, t: usize, set: &SymbolicMarkings) -> SymbolicMarkings {
        self.transition_post(t, set).minus(set)
    }

    /// Markings in which transition `t` can fire.
    pub fn can_fire(&self, t: usize) -> SymbolicMarkings {
        let next = self.space.next_variables();
        self.wrap(self.transition_relations[t].exists(next))
    }

    /// Markings in which at least one transition can fire.
    pub fn can_fire_any(&self) -> SymbolicMarkings {
        let next = self.space.next_variables();
        self.wrap(self.relation.exists(next))
    }

    fn image(&self, relation: &Bdd, set: &SymbolicMarkings) -> SymbolicMarkings {
        let current = self.space.current_variables();
        let successors = set.bdd().and(relation).exists(current);
        let result = self.wrap(self.space.next_to_current(&successors));
        trace!("Computed image ({}).", log_set(&result));
        result
    }

    fn wrap(&self, bdd: Bdd) -> SymbolicMarkings {
        SymbolicMarkings::new(self.space.clone(), bdd)
    }
}
