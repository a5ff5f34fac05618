use crate::net::{Marking, NetError, PetriNet};
use std::borrow::Borrow;
use std::fmt::{Display, Formatter};

/// A linear function `sum(weight[p] * M[p])` over markings.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Objective {
    weights: Vec<i64>,
}

/// The optimal value of an [`Objective`] and a marking which attains it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizationResult {
    pub value: i64,
    pub marking: Marking,
}

impl From<Vec<i64>> for Objective {
    fn from(value: Vec<i64>) -> Self {
        Objective { weights: value }
    }
}

impl Objective {
    /// An objective with all weights equal to zero.
    pub fn zeros(places: usize) -> Objective {
        Objective {
            weights: vec![0; places],
        }
    }

    /// Build an objective for `net` from `(place id, weight)` pairs. Places that are not
    /// mentioned have weight zero and repeated places use the last weight.
    pub fn from_named_weights<S: AsRef<str>>(
        net: &PetriNet,
        weights: &[(S, i64)],
    ) -> Result<Objective, NetError> {
        let mut objective = Objective::zeros(net.num_places());
        for (name, weight) in weights {
            let name = name.as_ref();
            let place = net
                .find_place(name)
                .or_else(|| net.place_labels().iter().position(|it| it == name))
                .ok_or_else(|| NetError::UnknownPlace(name.to_string()))?;
            objective.weights[place] = *weight;
        }
        Ok(objective)
    }

    /// Change the weight of the place with the given index.
    ///
    /// # Panics
    ///
    /// Panics if `place` is out of range.
    pub fn with_weight(mut self, place: usize, weight: i64) -> Objective {
        self.weights[place] = weight;
        self
    }

    pub fn weights(&self) -> &[i64] {
        &self.weights
    }

    /// The value of the objective in `marking`.
    ///
    /// # Panics
    ///
    /// Panics if `marking` has a different number of places.
    pub fn value(&self, marking: &Marking) -> i64 {
        assert_eq!(
            marking.len(),
            self.weights.len(),
            "Marking {marking} does not match {} weights.",
            self.weights.len()
        );
        self.weights
            .iter()
            .zip(marking.iter())
            .map(|(w, m)| w * i64::from(*m))
            .sum()
    }

    /// The marking with the greatest value, or `None` if there are no markings. Ties are
    /// resolved towards the smallest marking.
    pub fn maximize<M, I>(&self, markings: I) -> Option<OptimizationResult>
    where
        M: Borrow<Marking>,
        I: IntoIterator<Item = M>,
    {
        self.optimize(markings, |value, best| value > best)
    }

    /// The marking with the smallest value, or `None` if there are no markings. Ties are
    /// resolved towards the smallest marking.
    pub fn minimize<M, I>(&self, markings: I) -> Option<OptimizationResult>
    where
        M: Borrow<Marking>,
        I: IntoIterator<Item = M>,
    {
        self.optimize(markings, |value, best| value < best)
    }

    fn optimize<M, I, F>(&self, markings: I, better: F) -> Option<OptimizationResult>
    where
        M: Borrow<Marking>,
        I: IntoIterator<Item = M>,
        F: Fn(i64, i64) -> bool,
    {
        let mut best: Option<OptimizationResult> = None;
        for marking in markings {
            let marking = marking.borrow();
            let value = self.value(marking);
            let replace = match &best {
                None => true,
                Some(current) => {
                    better(value, current.value)
                        || (value == current.value && marking < &current.marking)
                }
            };
            if replace {
                best = Some(OptimizationResult {
                    value,
                    marking: marking.clone(),
                });
            }
        }
        best
    }
}

impl Display for OptimizationResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} in {}", self.value, self.marking)
    }
}
