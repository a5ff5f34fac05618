use crate::net::Marking;
use biodivine_lib_bdd::{Bdd, BddVariable, BddVariableSet, BddVariableSetBuilder};
use std::collections::HashSet;

/// The Boolean variables used to encode markings of a net.
///
/// Every place owns two variables that are adjacent in the BDD ordering: a *current-state*
/// variable named after the place, followed by a *next-state* variable named after the
/// place with an extra `'` (more primes are added if that name is taken by another place).
/// Sets of markings only ever depend on current-state variables, transition relations
/// depend on both.
#[derive(Clone)]
pub struct SymbolicSpace {
    bdd_variables: BddVariableSet,
    places: Vec<String>,
    current: Vec<BddVariable>,
    next: Vec<BddVariable>,
    /// `current(p) <=> next(p)` for every place.
    identity: Bdd,
    /// Every next-state variable is false.
    next_cleared: Bdd,
}

impl SymbolicSpace {
    /// Allocate the variables of a net with the given place identifiers.
    pub fn new(places: &[String]) -> SymbolicSpace {
        let mut taken: HashSet<String> = places.iter().cloned().collect();
        let mut builder = BddVariableSetBuilder::new();
        let mut current = Vec::with_capacity(places.len());
        let mut next = Vec::with_capacity(places.len());
        for place in places {
            let mut next_name = format!("{place}'");
            while taken.contains(&next_name) {
                next_name.push('\'');
            }
            taken.insert(next_name.clone());
            current.push(builder.make_variable(place));
            next.push(builder.make_variable(&next_name));
        }
        let bdd_variables = builder.build();

        let mut identity = bdd_variables.mk_true();
        let mut next_cleared = bdd_variables.mk_true();
        for (c, n) in current.iter().zip(&next) {
            let equal = bdd_variables.mk_var(*c).iff(&bdd_variables.mk_var(*n));
            identity = identity.and(&equal);
            next_cleared = next_cleared.and(&bdd_variables.mk_not_var(*n));
        }

        SymbolicSpace {
            bdd_variables,
            places: places.to_vec(),
            current,
            next,
            identity,
            next_cleared,
        }
    }

    pub fn bdd_variables(&self) -> &BddVariableSet {
        &self.bdd_variables
    }

    pub fn num_places(&self) -> usize {
        self.places.len()
    }

    pub fn places(&self) -> &[String] {
        &self.places
    }

    pub fn current_variables(&self) -> &[BddVariable] {
        &self.current
    }

    pub fn next_variables(&self) -> &[BddVariable] {
        &self.next
    }

    /// A literal of the current-state variable of `place`.
    pub fn mk_current(&self, place: usize, value: bool) -> Bdd {
        self.mk_literal(self.current[place], value)
    }

    /// A literal of the next-state variable of `place`.
    pub fn mk_next(&self, place: usize, value: bool) -> Bdd {
        self.mk_literal(self.next[place], value)
    }

    /// The conjunction of current-state literals describing `marking`.
    ///
    /// Markings with more than one token in some place cannot be represented and are
    /// encoded as an empty set.
    ///
    /// # Panics
    ///
    /// The marking must have one entry per place.
    pub fn encode(&self, marking: &Marking) -> Bdd {
        assert_eq!(
            marking.len(),
            self.num_places(),
            "Marking {marking} does not match {} places.",
            self.num_places()
        );
        if !marking.is_safe() {
            return self.bdd_variables.mk_false();
        }
        marking
            .iter()
            .enumerate()
            .fold(self.bdd_variables.mk_true(), |acc, (place, tokens)| {
                acc.and(&self.mk_current(place, *tokens == 1))
            })
    }

    /// Rename next-state variables to their current-state counterparts. The argument must
    /// not depend on current-state variables.
    pub(crate) fn next_to_current(&self, bdd: &Bdd) -> Bdd {
        bdd.and(&self.identity).exists(&self.next)
    }

    /// Restrict a set of markings to its canonical valuations (next-state variables false),
    /// so that every marking has exactly one satisfying valuation.
    pub(crate) fn canonical(&self, bdd: &Bdd) -> Bdd {
        bdd.and(&self.next_cleared)
    }

    fn mk_literal(&self, var: BddVariable, value: bool) -> Bdd {
        if value {
            self.bdd_variables.mk_var(var)
        } else {
            self.bdd_variables.mk_not_var(var)
        }
    }
}
