use crate::net::{FiringRule, PetriNet};

/// A "flat" configuration object for explicit state-space exploration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExplorationConfig {
    /// The explored net.
    pub net: PetriNet,
    /// The rule deciding which transitions can fire (default: [`FiringRule::Safe`]).
    ///
    /// Note that with [`FiringRule::Standard`], exploration of a net that is not bounded
    /// never terminates unless one of the limits below is set.
    pub rule: FiringRule,
    /// Cancel the procedure if it exceeds the specified number of expanded markings
    /// (default: `usize::MAX`).
    pub max_iterations: usize,
    /// Cancel the procedure if the number of discovered markings exceeds the given
    /// amount (default: `usize::MAX`).
    pub max_markings: usize,
}

impl From<PetriNet> for ExplorationConfig {
    fn from(value: PetriNet) -> Self {
        ExplorationConfig::new(value)
    }
}

impl From<&PetriNet> for ExplorationConfig {
    fn from(value: &PetriNet) -> Self {
        ExplorationConfig::new(value.clone())
    }
}

impl ExplorationConfig {
    /// Create a new instance of [`ExplorationConfig`] using the safe firing rule and no limits.
    pub fn new(net: PetriNet) -> ExplorationConfig {
        ExplorationConfig {
            net,
            rule: FiringRule::default(),
            max_iterations: usize::MAX,
            max_markings: usize::MAX,
        }
    }

    /// Change the firing rule of this configuration.
    pub fn with_rule(mut self, rule: FiringRule) -> ExplorationConfig {
        self.rule = rule;
        self
    }
}
