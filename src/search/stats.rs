//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Counters accumulated across a player's decisions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Move or reaction decisions made.
    pub decisions: u32,

    /// Candidate moves enumerated.
    pub candidates: u64,

    /// Outcome states evaluated.
    pub evaluations: u64,

    /// Reactions chosen (subset of `decisions`).
    pub reactions: u32,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Average candidates per decision.
    #[must_use]
    pub fn avg_candidates(&self) -> f64 {
        if self.decisions == 0 {
            0.0
        } else {
            self.candidates as f64 / f64::from(self.decisions)
        }
    }

    /// Average outcome evaluations per decision.
    #[must_use]
    pub fn avg_evaluations(&self) -> f64 {
        if self.decisions == 0 {
            0.0
        } else {
            self.evaluations as f64 / f64::from(self.decisions)
        }
    }
}
