//! Maximin search configuration.

use serde::{Deserialize, Serialize};

/// Maximin search configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaximinConfig {
    /// Random seed for tie-breaking.
    /// Same seed produces the same choices.
    pub seed: u64,

    /// Break ties between equally scored moves at random instead of taking
    /// the first in enumeration order.
    pub randomize_ties: bool,

    /// Scores within this distance count as tied.
    pub tie_epsilon: f64,
}

impl Default for MaximinConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            randomize_ties: false,
            tie_epsilon: 1e-9,
        }
    }
}

impl MaximinConfig {
    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enable or disable random tie-breaking.
    pub fn with_random_ties(mut self, enabled: bool) -> Self {
        self.randomize_ties = enabled;
        self
    }
}
