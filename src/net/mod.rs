//! The Petri net model: structure, markings and the token game.
//!
//! A [`PetriNet`] is immutable after construction. It provides the two primitives that
//! every reachability procedure in this crate is built on: [`PetriNet::is_enabled`] and
//! [`PetriNet::fire`].
//!
//! # Firing rules
//!
//! The analysed nets are 1-safe (every place holds at most one token). The symbolic
//! engine encodes each place as a single Boolean variable and therefore only admits
//! firings that keep the net 1-safe. The same rule is available explicitly as
//! [`FiringRule::Safe`], which is the default everywhere. [`FiringRule::Standard`] is the
//! plain token game without any capacity restriction.
//!
//! # Example
//!
//! ```rust
//! use petri_reach::net::{IncidenceMatrix, Marking, PetriNet};
//!
//! let input = IncidenceMatrix::from_rows(&[[1, 0], [0, 1]]).unwrap();
//! let output = IncidenceMatrix::from_rows(&[[0, 1], [1, 0]]).unwrap();
//! let net = PetriNet::from_matrices(&["p1", "p2"], &["t1", "t2"], input, output, [1, 0])
//!     .unwrap();
//!
//! let m0 = net.initial_marking().clone();
//! assert!(net.is_enabled(&m0, 0));
//! assert_eq!(net.fire(&m0, 0).unwrap(), Marking::from([0, 1]));
//! ```

mod display;
mod error;
mod marking;
mod matrix;
mod pnml;


pub use error::NetError;
pub use marking::Marking;
pub use matrix::IncidenceMatrix;
pub use pnml::PnmlError;

use std::collections::HashSet;

/// The rule that decides whether a transition can fire in a marking.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FiringRule {
    /// The transition must be enabled and the successor marking must keep every place
    /// at or below one token. This is the rule of the symbolic transition relation.
    #[default]
    Safe,
    /// The plain token game: the transition fires whenever it is enabled.
    Standard,
}

/// An immutable place/transition net with an initial marking.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PetriNet {
    places: Vec<String>,
    transitions: Vec<String>,
    place_labels: Vec<String>,
    transition_labels: Vec<String>,
    input: IncidenceMatrix,
    output: IncidenceMatrix,
    initial: Marking,
}

impl PetriNet {
    /// Create a new net, storing all fields as given.
    ///
    /// `place_labels` and `transition_labels` are the human readable names of places and
    /// transitions (the identifiers are used when they have no name). `input` and `output`
    /// must be `|transitions| × |places|` matrices and `initial` must have one entry per place.
    ///
    /// Fails with [`NetError::Shape`] on any dimension mismatch and with
    /// [`NetError::DuplicateName`] when an identifier repeats.
    pub fn new(
        places: Vec<String>,
        transitions: Vec<String>,
        place_labels: Vec<String>,
        transition_labels: Vec<String>,
        input: IncidenceMatrix,
        output: IncidenceMatrix,
        initial: Marking,
    ) -> Result<PetriNet, NetError> {
        let (p, t) = (places.len(), transitions.len());

        check_unique("place", &places, &mut HashSet::new())?;
        let mut seen: HashSet<&str> = places.iter().map(|it| it.as_str()).collect();
        check_unique("transition", &transitions, &mut seen)?;

        if place_labels.len() != p {
            return Err(NetError::shape("place labels", p, place_labels.len()));
        }
        if transition_labels.len() != t {
            return Err(NetError::shape(
                "transition labels",
                t,
                transition_labels.len(),
            ));
        }

        let input = check_matrix("input matrix", input, t, p)?;
        let output = check_matrix("output matrix", output, t, p)?;

        if initial.len() != p {
            return Err(NetError::shape("initial marking", p, initial.len()));
        }

        Ok(PetriNet {
            places,
            transitions,
            place_labels,
            transition_labels,
            input,
            output,
            initial,
        })
    }

    /// Create a net whose labels are equal to its identifiers.
    pub fn from_matrices<S: AsRef<str>>(
        places: &[S],
        transitions: &[S],
        input: IncidenceMatrix,
        output: IncidenceMatrix,
        initial: impl Into<Marking>,
    ) -> Result<PetriNet, NetError> {
        let places: Vec<String> = places.iter().map(|it| it.as_ref().to_string()).collect();
        let transitions: Vec<String> = transitions
            .iter()
            .map(|it| it.as_ref().to_string())
            .collect();
        PetriNet::new(
            places.clone(),
            transitions.clone(),
            places,
            transitions,
            input,
            output,
            initial.into(),
        )
    }

    pub fn num_places(&self) -> usize {
        self.places.len()
    }

    pub fn num_transitions(&self) -> usize {
        self.transitions.len()
    }

    pub fn places(&self) -> &[String] {
        &self.places
    }

    pub fn transitions(&self) -> &[String] {
        &self.transitions
    }

    pub fn place_labels(&self) -> &[String] {
        &self.place_labels
    }

    pub fn transition_labels(&self) -> &[String] {
        &self.transition_labels
    }

    /// The input (pre-set) matrix `I`.
    pub fn input(&self) -> &IncidenceMatrix {
        &self.input
    }

    /// The output (post-set) matrix `O`.
    pub fn output(&self) -> &IncidenceMatrix {
        &self.output
    }

    pub fn initial_marking(&self) -> &Marking {
        &self.initial
    }

    /// Index of the place with the given identifier.
    pub fn find_place(&self, id: &str) -> Option<usize> {
        self.places.iter().position(|it| it == id)
    }

    /// Index of the transition with the given identifier.
    pub fn find_transition(&self, id: &str) -> Option<usize> {
        self.transitions.iter().position(|it| it == id)
    }

    /// True if `marking` holds at least `I[t][p]` tokens in every place `p`.
    ///
    /// # Panics
    ///
    /// Panics if `transition` is out of range or `marking` has the wrong length.
    pub fn is_enabled(&self, marking: &Marking, transition: usize) -> bool {
        self.check_marking(marking);
        self.input
            .row(transition)
            .iter()
            .zip(marking.iter())
            .all(|(required, tokens)| tokens >= required)
    }

    /// True if firing `transition` in `marking` leaves at most one token in every place.
    ///
    /// The transition does not need to be enabled; places that would go negative are
    /// not considered here (see [`PetriNet::is_enabled`]).
    pub fn respects_capacity(&self, marking: &Marking, transition: usize) -> bool {
        self.check_marking(marking);
        let consumed = self.input.row(transition);
        let produced = self.output.row(transition);
        marking
            .iter()
            .zip(consumed.iter().zip(produced.iter()))
            .all(|(tokens, (i, o))| u64::from(tokens.saturating_sub(*i)) + u64::from(*o) <= 1)
    }

    /// True if `transition` can fire in `marking` under the given `rule`.
    pub fn can_fire(&self, marking: &Marking, transition: usize, rule: FiringRule) -> bool {
        match rule {
            FiringRule::Standard => self.is_enabled(marking, transition),
            FiringRule::Safe => {
                self.is_enabled(marking, transition) && self.respects_capacity(marking, transition)
            }
        }
    }

    /// Fire `transition` in `marking`, producing a new marking `M - I[t] + O[t]`.
    ///
    /// The input marking is never modified. Fails with [`NetError::NotEnabled`] if the
    /// transition is not enabled. No capacity is enforced here: if the net is not 1-safe,
    /// the result simply contains counts above one.
    pub fn fire(&self, marking: &Marking, transition: usize) -> Result<Marking, NetError> {
        if !self.is_enabled(marking, transition) {
            return Err(NetError::NotEnabled {
                transition: self.transitions[transition].clone(),
                marking: marking.to_string(),
            });
        }
        Ok(self.apply(marking, transition))
    }

    /// Indices of transitions that can fire in `marking`, in index order.
    pub fn enabled_transitions<'a>(
        &'a self,
        marking: &'a Marking,
        rule: FiringRule,
    ) -> impl Iterator<Item = usize> + 'a {
        (0..self.num_transitions()).filter(move |t| self.can_fire(marking, *t, rule))
    }

    /// All `(transition, successor)` pairs of `marking`, in transition index order.
    pub fn successors<'a>(
        &'a self,
        marking: &'a Marking,
        rule: FiringRule,
    ) -> impl Iterator<Item = (usize, Marking)> + 'a {
        self.enabled_transitions(marking, rule)
            .map(move |t| (t, self.apply(marking, t)))
    }

    /// True if no transition can fire in `marking`.
    pub fn is_deadlocked(&self, marking: &Marking, rule: FiringRule) -> bool {
        self.enabled_transitions(marking, rule).next().is_none()
    }

    /// The token game without the enabledness check. Callers must ensure `transition`
    /// is enabled in `marking`.
    fn apply(&self, marking: &Marking, transition: usize) -> Marking {
        let consumed = self.input.row(transition);
        let produced = self.output.row(transition);
        marking
            .iter()
            .zip(consumed.iter().zip(produced.iter()))
            .map(|(tokens, (i, o))| (tokens - i).saturating_add(*o))
            .collect()
    }

    fn check_marking(&self, marking: &Marking) {
        assert_eq!(
            marking.len(),
            self.num_places(),
            "Marking {marking} does not match {} places.",
            self.num_places()
        );
    }
}

fn check_unique<'a>(
    kind: &'static str,
    names: &'a [String],
    seen: &mut HashSet<&'a str>,
) -> Result<(), NetError> {
    for name in names {
        if !seen.insert(name.as_str()) {
            return Err(NetError::DuplicateName {
                kind,
                name: name.clone(),
            });
        }
    }
    Ok(())
}

fn check_matrix(
    what: &'static str,
    matrix: IncidenceMatrix,
    transitions: usize,
    places: usize,
) -> Result<IncidenceMatrix, NetError> {
    // A matrix without rows carries no column information.
    if transitions == 0 && matrix.rows() == 0 {
        return Ok(IncidenceMatrix::zeros(0, places));
    }
    if matrix.shape() != (transitions, places) {
        let (rows, columns) = matrix.shape();
        return Err(NetError::shape(
            what,
            format!("{transitions}x{places}"),
            format!("{rows}x{columns}"),
        ));
    }
    Ok(matrix)
}
