//! Exhaustive enumeration of legal moves, reactions and their outcomes.
//!
//! Only card values matter for legality and outcome, so subsets are value
//! multisets: a hand `{Red2, Red2, Pink5}` has two distinct pairs, not three.

use smallvec::{smallvec, SmallVec};

use crate::core::{Card, CardSet, GameState, Move, MoveKind};
use crate::rules::apply_move;

/// One possible result of a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// The opponent's reaction, `None` for Offer1/Discard2.
    pub reaction: Option<CardSet>,
    /// State after the move, framed for the mover.
    pub state: GameState,
}

/// A legal move with every outcome the opponent can choose between.
#[derive(Clone, Debug, PartialEq)]
pub struct Candidate {
    pub mv: Move,
    /// Never empty; a single entry for moves without a reaction.
    pub outcomes: SmallVec<[Outcome; 3]>,
}

/// Every distinct `k`-card value multiset drawn from the real cards of `hand`.
#[must_use]
pub fn subsets(hand: &CardSet, k: usize) -> Vec<CardSet> {
    let mut out = Vec::new();
    collect_subsets(hand, 0, k, CardSet::EMPTY, &mut out);
    out
}

fn collect_subsets(hand: &CardSet, index: usize, remaining: usize, current: CardSet, out: &mut Vec<CardSet>) {
    if remaining == 0 {
        out.push(current);
        return;
    }
    let Some(&card) = Card::REAL.get(index) else {
        return;
    };
    let most = (hand.count(card) as usize).min(remaining);
    for n in (0..=most).rev() {
        collect_subsets(hand, index + 1, remaining - n, current.with(card, n as u8), out);
    }
}

/// Every unordered pair of disjoint 2-card sets that fit in `hand` together.
#[must_use]
pub fn split_pairs(hand: &CardSet) -> Vec<(CardSet, CardSet)> {
    let mut out = Vec::new();
    for four in subsets(hand, 4) {
        for a in subsets(&four, 2) {
            let b = four - a;
            // One representative per unordered pair.
            if a <= b {
                out.push((a, b));
            }
        }
    }
    out
}

/// Every legal move of `kind` for `hand`.
#[must_use]
pub fn moves_of_kind(hand: &CardSet, kind: MoveKind) -> Vec<Move> {
    match kind {
        MoveKind::Offer1 => subsets(hand, 1).into_iter().map(|cards| Move::Offer1 { cards }).collect(),
        MoveKind::Discard2 => subsets(hand, 2).into_iter().map(|cards| Move::Discard2 { cards }).collect(),
        MoveKind::Choose3 => subsets(hand, 3).into_iter().map(|cards| Move::Choose3 { cards }).collect(),
        MoveKind::Split4 => split_pairs(hand)
            .into_iter()
            .map(|(a, b)| Move::Split4 { a, b })
            .collect(),
    }
}

/// Every legal reaction to `mv`, without duplicates.
#[must_use]
pub fn enumerate_reactions(mv: &Move) -> SmallVec<[CardSet; 3]> {
    match mv {
        Move::Choose3 { cards } => cards.distinct_values().map(CardSet::single).collect(),
        Move::Split4 { a, b } if a == b => smallvec![*a],
        Move::Split4 { a, b } => smallvec![*a, *b],
        Move::Offer1 { .. } | Move::Discard2 { .. } => SmallVec::new(),
    }
}

/// Every outcome of `mv` by `state.own()`.
#[must_use]
pub fn outcomes(state: &GameState, mv: &Move) -> SmallVec<[Outcome; 3]> {
    let mover = state.viewpoint();
    if !mv.kind().needs_reaction() {
        return smallvec![Outcome {
            reaction: None,
            state: apply_move(state, mover, mv, None),
        }];
    }
    enumerate_reactions(mv)
        .into_iter()
        .map(|reaction| Outcome {
            reaction: Some(reaction),
            state: apply_move(state, mover, mv, Some(&reaction)),
        })
        .collect()
}

/// Every legal move for `state.own()` with its outcomes.
#[must_use]
pub fn enumerate_legal_moves(state: &GameState) -> Vec<Candidate> {
    let own = state.own();
    own.moves
        .unused()
        .flat_map(|kind| moves_of_kind(&own.hand, kind))
        .map(|mv| Candidate {
            mv,
            outcomes: outcomes(state, &mv),
        })
        .collect()
}
