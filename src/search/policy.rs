//! State evaluation for the search.
//!
//! An `Evaluator` scores a state from its viewpoint side ("me"). Higher is
//! better for `state.own()`. Any `Fn(&GameState) -> f64` is an evaluator.

use crate::core::{Card, Favor, GameState};
use crate::rules::{evaluate_win, update_favors};

/// Scores states from the viewpoint side's perspective.
pub trait Evaluator {
    fn evaluate(&self, state: &GameState) -> f64;
}

impl<F> Evaluator for F
where
    F: Fn(&GameState) -> f64,
{
    fn evaluate(&self, state: &GameState) -> f64 {
        self(state)
    }
}

/// Baseline evaluator: score the favors the round would produce if it ended
/// now.
///
/// Each projected `Mine` type adds its weight, each `Theirs` subtracts it.
/// A projected win or loss dominates everything else.
#[derive(Clone, Copy, Debug)]
pub struct FavorProjection {
    /// Score of a projected win (negated for a loss).
    pub win_value: f64,
}

impl Default for FavorProjection {
    fn default() -> Self {
        Self { win_value: 100.0 }
    }
}

impl Evaluator for FavorProjection {
    fn evaluate(&self, state: &GameState) -> f64 {
        let projected = update_favors(state);
        let me = state.viewpoint();

        match evaluate_win(&projected).winner() {
            Some(winner) if winner == me => return self.win_value,
            Some(_) => return -self.win_value,
            None => {}
        }

        Card::REAL
            .into_iter()
            .map(|card| {
                let weight = f64::from(card.weight());
                match projected.own().favors[card] {
                    Favor::Mine => weight,
                    Favor::Neutral => 0.0,
                    Favor::Theirs => -weight,
                }
            })
            .sum()
    }
}
