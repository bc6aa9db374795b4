//! Match configuration and fixed rule constants.
//!
//! The deck and round structure are fixed, so the rules live in constants.
//! `GameConfig` carries what varies between matches: the seed, an optional
//! round cap, and transcript recording.

use serde::{Deserialize, Serialize};

/// Cards dealt to each side at the start of a round.
pub const HAND_SIZE: usize = 6;

/// Draw/move pairs per round (4 per side).
pub const TURNS_PER_ROUND: u8 = 8;

/// Favored face weight that wins the game.
pub const WEIGHT_TO_WIN: u32 = 11;

/// Favored card types that win the game.
pub const TYPES_TO_WIN: usize = 4;

/// Configuration for a single match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for deals and draws.
    pub seed: u64,

    /// Rounds to play before stopping without a winner (`None` = unbounded).
    pub round_limit: Option<u32>,

    /// Record a structured transcript of every event.
    pub record_transcript: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            round_limit: None,
            record_transcript: false,
        }
    }
}

impl GameConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Cap the number of rounds.
    pub fn with_round_limit(mut self, rounds: u32) -> Self {
        self.round_limit = Some(rounds);
        self
    }

    /// Enable or disable transcript recording.
    pub fn with_transcript(mut self, enabled: bool) -> Self {
        self.record_transcript = enabled;
        self
    }

    /// Parse from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
