//! Legality checks for card sets, moves and reactions.
//!
//! Every check is a pure predicate. The match driver treats a failed check
//! as a forfeit by the side that submitted the move or reaction.

use crate::core::{CardSet, GameState, Move, MoveKind};

/// Why a move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveRejection {
    /// The kind was already used this round.
    KindUsed(MoveKind),
    /// A card set has the wrong size.
    WrongSize { expected: usize, actual: usize },
    /// A card set contains a placeholder.
    ContainsUnknown,
    /// The cards are not all in the mover's hand.
    NotInHand,
}

impl std::fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveRejection::KindUsed(kind) => write!(f, "{kind:?} already used this round"),
            MoveRejection::WrongSize { expected, actual } => {
                write!(f, "expected {expected} cards, got {actual}")
            }
            MoveRejection::ContainsUnknown => f.write_str("cards include a hidden placeholder"),
            MoveRejection::NotInHand => f.write_str("cards are not in hand"),
        }
    }
}

/// Whether `cards` has the required size and, if `require_known`, no
/// placeholders.
#[must_use]
pub fn validate_cardset(cards: &CardSet, require_known: bool, required_size: Option<usize>) -> bool {
    check_cardset(cards, require_known, required_size).is_ok()
}

fn check_cardset(
    cards: &CardSet,
    require_known: bool,
    required_size: Option<usize>,
) -> Result<(), MoveRejection> {
    if let Some(expected) = required_size {
        if cards.len() != expected {
            return Err(MoveRejection::WrongSize {
                expected,
                actual: cards.len(),
            });
        }
    }
    if require_known && cards.contains_unknown() {
        return Err(MoveRejection::ContainsUnknown);
    }
    Ok(())
}

/// Check a move by `state.own()`, reporting the first failed rule.
pub fn check_move(state: &GameState, mv: &Move) -> Result<(), MoveRejection> {
    let own = state.own();
    let kind = mv.kind();
    if own.moves.is_used(kind) {
        return Err(MoveRejection::KindUsed(kind));
    }

    match mv {
        Move::Offer1 { cards } | Move::Discard2 { cards } | Move::Choose3 { cards } => {
            check_cardset(cards, true, Some(kind.card_count()))?;
        }
        Move::Split4 { a, b } => {
            check_cardset(a, true, Some(2))?;
            check_cardset(b, true, Some(2))?;
        }
    }

    if !mv.cards().is_subset(&own.hand) {
        return Err(MoveRejection::NotInHand);
    }
    Ok(())
}

/// Whether `state.own()` may play `mv`.
#[must_use]
pub fn validate_move(state: &GameState, mv: &Move) -> bool {
    check_move(state, mv).is_ok()
}

/// Whether `reaction` is a legal response to `mv`.
///
/// Choose3 needs one of the offered cards; Split4 needs one of the two
/// halves exactly. Moves without a reaction accept none.
#[must_use]
pub fn validate_reaction(mv: &Move, reaction: &CardSet) -> bool {
    match mv {
        Move::Choose3 { cards } => validate_cardset(reaction, false, Some(1)) && reaction.is_subset(cards),
        Move::Split4 { a, b } => reaction == a || reaction == b,
        Move::Offer1 { .. } | Move::Discard2 { .. } => false,
    }
}
