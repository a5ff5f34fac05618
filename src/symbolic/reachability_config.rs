use crate::net::PetriNet;
use crate::symbolic::SymbolicEncoding;

/// A "flat" configuration object for symbolic reachability.
#[derive(Clone)]
pub struct ReachabilityConfig {
    /// The symbolic transition system used for reachability computation.
    ///
    /// # Panics
    ///
    /// The procedure is allowed to panic if initialized with markings that do not belong
    /// to this encoding.
    pub encoding: SymbolicEncoding,
    /// Cancel the procedure if it exceeds the specified number of iterations (default:
    /// `usize::MAX`).
    ///
    /// Note that the definition of "iteration" can depend on the chosen reachability operator.
    pub max_iterations: usize,
    /// Cancel the procedure if the symbolic representation exceeds the given amount of BDD nodes
    /// (default: `usize::MAX`).
    pub max_symbolic_size: usize,
}

impl From<SymbolicEncoding> for ReachabilityConfig {
    fn from(value: SymbolicEncoding) -> Self {
        ReachabilityConfig::new(value)
    }
}

impl From<&SymbolicEncoding> for ReachabilityConfig {
    fn from(value: &SymbolicEncoding) -> Self {
        ReachabilityConfig::new(value.clone())
    }
}

impl From<&PetriNet> for ReachabilityConfig {
    fn from(value: &PetriNet) -> Self {
        ReachabilityConfig::new(SymbolicEncoding::new(value))
    }
}

impl ReachabilityConfig {
    /// Create a new instance of [`ReachabilityConfig`] without any limits.
    pub fn new(encoding: SymbolicEncoding) -> ReachabilityConfig {
        ReachabilityConfig {
            encoding,
            max_iterations: usize::MAX,
            max_symbolic_size: usize::MAX,
        }
    }
}
