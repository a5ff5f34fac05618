use thiserror::Error;

/// Errors raised by the Petri net model.
///
/// Structural errors ([`NetError::Shape`], [`NetError::DuplicateName`]) are only ever raised
/// while a net is being constructed. [`NetError::NotEnabled`] is raised by
/// [`crate::net::PetriNet::fire`]; the reachability procedures never trigger it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NetError {
    /// A matrix, marking or label list does not match the declared number of
    /// places/transitions.
    #[error("shape mismatch in {what}: expected {expected}, found {found}")]
    Shape {
        what: &'static str,
        expected: String,
        found: String,
    },
    /// A place or transition identifier is used more than once.
    #[error("duplicate {kind} identifier `{name}`")]
    DuplicateName { kind: &'static str, name: String },
    /// Attempt to fire a transition that is not enabled in the given marking.
    #[error("transition `{transition}` is not enabled in marking {marking}")]
    NotEnabled { transition: String, marking: String },
    /// A place identifier that does not belong to the net.
    #[error("unknown place `{0}`")]
    UnknownPlace(String),
}

impl NetError {
    pub(crate) fn shape(what: &'static str, expected: impl ToString, found: impl ToString) -> Self {
        NetError::Shape {
            what,
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }
}
