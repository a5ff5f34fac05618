use crate::net::Marking;
use crate::symbolic::SymbolicSpace;
use biodivine_lib_bdd::Bdd;
use num_bigint::BigInt;
use std::collections::BTreeSet;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// A set of markings represented as a BDD over the current-state variables of a
/// [`SymbolicSpace`].
///
/// Sets created from different spaces must not be combined.
#[derive(Clone)]
pub struct SymbolicMarkings {
    space: Arc<SymbolicSpace>,
    bdd: Bdd,
}

impl SymbolicMarkings {
    pub(crate) fn new(space: Arc<SymbolicSpace>, bdd: Bdd) -> SymbolicMarkings {
        SymbolicMarkings { space, bdd }
    }

    pub(crate) fn copy(&self, bdd: Bdd) -> SymbolicMarkings {
        SymbolicMarkings::new(self.space.clone(), bdd)
    }

    /// The underlying BDD. Its support only contains current-state variables.
    pub fn bdd(&self) -> &Bdd {
        &self.bdd
    }

    pub fn space(&self) -> &SymbolicSpace {
        &self.space
    }

    pub fn is_empty(&self) -> bool {
        self.bdd.is_false()
    }

    /// The number of BDD nodes of this set.
    pub fn symbolic_size(&self) -> usize {
        self.bdd.size()
    }

    /// The exact number of markings in this set.
    pub fn count(&self) -> BigInt {
        // Next-state variables are unconstrained and double the count once per place.
        BigInt::from(self.bdd.exact_cardinality() >> self.space.num_places())
    }

    pub fn union(&self, other: &SymbolicMarkings) -> SymbolicMarkings {
        self.copy(self.bdd.or(&other.bdd))
    }

    pub fn intersect(&self, other: &SymbolicMarkings) -> SymbolicMarkings {
        self.copy(self.bdd.and(&other.bdd))
    }

    pub fn minus(&self, other: &SymbolicMarkings) -> SymbolicMarkings {
        self.copy(self.bdd.and_not(&other.bdd))
    }

    /// True if `marking` is a member of this set. Markings that are not 1-safe are never
    /// members.
    pub fn contains(&self, marking: &Marking) -> bool {
        !self.bdd.and(&self.space.encode(marking)).is_false()
    }

    /// Enumerate the markings of this set in ascending order.
    pub fn markings(&self) -> impl Iterator<Item = Marking> + use<> {
        let current = self.space.current_variables();
        let markings: BTreeSet<Marking> = self
            .space
            .canonical(&self.bdd)
            .sat_valuations()
            .map(|valuation| {
                current
                    .iter()
                    .map(|var| u32::from(valuation.value(*var)))
                    .collect()
            })
            .collect();
        markings.into_iter()
    }

    /// Render the set as a disjunction of conjunctive clauses over place names, e.g.
    /// `(p1 & !p2) | (!p1 & p2)`.
    ///
    /// The empty set is rendered as `false` and a clause without literals as `true`.
    pub fn to_dnf_string(&self) -> String {
        if self.is_empty() {
            return "false".to_string();
        }
        let places = self.space.places();
        let current = self.space.current_variables();
        let clauses: Vec<String> = self
            .bdd
            .sat_clauses()
            .map(|clause| {
                let literals: Vec<String> = current
                    .iter()
                    .zip(places)
                    .filter_map(|(var, name)| match clause.get_value(*var) {
                        Some(true) => Some(name.clone()),
                        Some(false) => Some(format!("!{name}")),
                        None => None,
                    })
                    .collect();
                if literals.is_empty() {
                    "true".to_string()
                } else {
                    format!("({})", literals.join(" & "))
                }
            })
            .collect();
        clauses.join(" | ")
    }
}

impl PartialEq for SymbolicMarkings {
    fn eq(&self, other: &Self) -> bool {
        self.bdd == other.bdd
    }
}

impl Eq for SymbolicMarkings {}

impl Debug for SymbolicMarkings {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymbolicMarkings")
            .field("count", &self.count())
            .field("symbolic_size", &self.symbolic_size())
            .finish()
    }
}
