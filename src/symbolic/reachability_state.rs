use crate::symbolic::SymbolicMarkings;

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ReachabilityState {
    pub iteration: usize,
    pub set: SymbolicMarkings,
}

impl From<SymbolicMarkings> for ReachabilityState {
    fn from(value: SymbolicMarkings) -> Self {
        ReachabilityState {
            iteration: 0,
            set: value,
        }
    }
}

impl From<&SymbolicMarkings> for ReachabilityState {
    fn from(value: &SymbolicMarkings) -> Self {
        Self::from(value.clone())
    }
}

impl From<ReachabilityState> for SymbolicMarkings {
    fn from(value: ReachabilityState) -> Self {
        value.set
    }
}
