//! Single-ply maximin move selection and reaction choice.
//!
//! The mover assumes the opponent picks the reaction that is worst for it, so
//! each candidate is scored by the minimum over its outcomes. The reactor
//! scores reactions from its own frame, which means simulating the opponent's
//! move in the opponent's frame first. [`simulate_reaction`] is the only
//! place that frame change happens.

use smallvec::SmallVec;

use crate::core::{CardSet, GameState, Move};
use crate::rules::apply_move;

use super::enumerate::{enumerate_legal_moves, enumerate_reactions, Candidate};
use super::policy::Evaluator;
use super::stats::SearchStats;

/// The lowest evaluation among a candidate's outcomes.
#[must_use]
pub fn worst_case<E: Evaluator + ?Sized>(candidate: &Candidate, evaluator: &E) -> f64 {
    candidate
        .outcomes
        .iter()
        .map(|outcome| evaluator.evaluate(&outcome.state))
        .fold(f64::INFINITY, f64::min)
}

/// Every legal move for `state.own()` with its worst-case score, in
/// enumeration order.
pub fn score_moves<E: Evaluator + ?Sized>(
    state: &GameState,
    evaluator: &E,
    stats: &mut SearchStats,
) -> Vec<(Move, f64)> {
    let candidates = enumerate_legal_moves(state);
    stats.candidates += candidates.len() as u64;
    candidates
        .iter()
        .map(|candidate| {
            stats.evaluations += candidate.outcomes.len() as u64;
            (candidate.mv, worst_case(candidate, evaluator))
        })
        .collect()
}

/// The legal move with the best worst case, and that score.
///
/// Ties go to the first move in enumeration order. Returns `None` only when
/// no legal move exists.
#[must_use]
pub fn choose_maximin<E: Evaluator + ?Sized>(state: &GameState, evaluator: &E) -> Option<(Move, f64)> {
    let mut stats = SearchStats::new();
    first_best(&score_moves(state, evaluator, &mut stats))
}

/// The reactor's state after the opponent's `mv` resolves with `reaction`.
///
/// `view` is framed for the reactor, so the mover is `view.opponent()`. The
/// result is framed for the reactor again.
#[must_use]
pub fn simulate_reaction(view: &GameState, mv: &Move, reaction: &CardSet) -> GameState {
    let mover_frame = view.swapped();
    apply_move(&mover_frame, mover_frame.viewpoint(), mv, Some(reaction)).swapped()
}

/// Every legal reaction to `mv` scored from the reactor's frame.
pub fn score_reactions<E: Evaluator + ?Sized>(
    view: &GameState,
    mv: &Move,
    evaluator: &E,
    stats: &mut SearchStats,
) -> SmallVec<[(CardSet, f64); 3]> {
    let reactions = enumerate_reactions(mv);
    stats.evaluations += reactions.len() as u64;
    reactions
        .into_iter()
        .map(|reaction| {
            let after = simulate_reaction(view, mv, &reaction);
            (reaction, evaluator.evaluate(&after))
        })
        .collect()
}

/// The reaction to `mv` that the reactor values most.
///
/// `None` for moves that take no reaction.
#[must_use]
pub fn choose_reaction<E: Evaluator + ?Sized>(view: &GameState, mv: &Move, evaluator: &E) -> Option<CardSet> {
    let mut stats = SearchStats::new();
    first_best(&score_reactions(view, mv, evaluator, &mut stats)).map(|(reaction, _)| reaction)
}

pub(crate) fn first_best<T: Copy>(scored: &[(T, f64)]) -> Option<(T, f64)> {
    let mut best: Option<(T, f64)> = None;
    for &(item, score) in scored {
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((item, score));
        }
    }
    best
}
