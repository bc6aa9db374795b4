//! Adversarial move selection.
//!
//! Single-ply only: the mover enumerates its legal moves, the opponent's
//! possible reactions to each, and plays the move with the best worst case.

pub mod config;
pub mod enumerate;
pub mod maximin;
pub mod policy;
pub mod players;
pub mod stats;

pub use config::MaximinConfig;
pub use enumerate::{enumerate_legal_moves, enumerate_reactions, moves_of_kind, outcomes, split_pairs, subsets, Candidate, Outcome};
pub use maximin::{choose_maximin, choose_reaction, score_moves, score_reactions, simulate_reaction, worst_case};
pub use policy::{Evaluator, FavorProjection};
pub use players::{MaximinPlayer, RandomPlayer};
pub use stats::SearchStats;
