use std::fmt::{Display, Formatter};
use std::ops::Deref;

/// A distribution of tokens over the places of a net, in place order.
///
/// Markings carry no identity beyond their contents: two markings are the same
/// marking iff they assign the same number of tokens to every place.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Marking(Vec<u32>);

impl Marking {
    /// A marking with no tokens in any of the `places`.
    pub fn empty(places: usize) -> Marking {
        Marking(vec![0; places])
    }

    /// Number of tokens in place `place`.
    ///
    /// # Panics
    ///
    /// Panics if `place` is out of range.
    pub fn tokens(&self, place: usize) -> u32 {
        self.0[place]
    }

    /// True if every place holds at most one token.
    pub fn is_safe(&self) -> bool {
        self.0.iter().all(|it| *it <= 1)
    }

    /// The total number of tokens in the marking.
    pub fn token_count(&self) -> u64 {
        self.0.iter().map(|it| u64::from(*it)).sum()
    }

    pub fn into_inner(self) -> Vec<u32> {
        self.0
    }
}

impl Deref for Marking {
    type Target = [u32];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<u32>> for Marking {
    fn from(value: Vec<u32>) -> Self {
        Marking(value)
    }
}

impl From<&[u32]> for Marking {
    fn from(value: &[u32]) -> Self {
        Marking(value.to_vec())
    }
}

impl<const N: usize> From<[u32; N]> for Marking {
    fn from(value: [u32; N]) -> Self {
        Marking(value.to_vec())
    }
}

impl FromIterator<u32> for Marking {
    fn from_iter<T: IntoIterator<Item = u32>>(iter: T) -> Self {
        Marking(iter.into_iter().collect())
    }
}

impl Display for Marking {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (i, tokens) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{tokens}")?;
        }
        write!(f, ")")
    }
}
