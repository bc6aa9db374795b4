//! Censoring: the view of a state or move a side is entitled to see.
//!
//! Censoring never changes sizes. Hidden card sets become the same number of
//! `Card::Unknown` placeholders so a recipient can still count them.

use crate::core::{GameState, Move, PlayerId};

/// How much of a state to hide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CensorMode {
    /// Hide identities, the opponent's hand/hidden/discarded, and the pile.
    Full,
    /// Hide identities only (used for the round reveal).
    KeysOnly,
}

/// Censor `state` for its viewpoint side.
#[must_use]
pub fn censor(state: &GameState, mode: CensorMode) -> GameState {
    let viewer = state.viewpoint();
    let mut view = *state;
    for id in PlayerId::both() {
        view.player_mut(id).identity = None;
    }
    if mode == CensorMode::KeysOnly {
        return view;
    }

    let opponent = view.player_mut(viewer.other());
    opponent.hand = opponent.hand.censored();
    opponent.hidden = opponent.hidden.censored();
    opponent.discarded = opponent.discarded.censored();
    view.pile = view.pile.censored();
    view
}

/// Full censored view of `state` for `viewer`.
#[must_use]
pub fn view_for(state: &GameState, viewer: PlayerId) -> GameState {
    censor(&state.seen_by(viewer), CensorMode::Full)
}

/// What the opponent learns about a move.
///
/// Offer1/Discard2 cards become placeholders. Choose3/Split4 are shown in
/// full, since the opponent has to pick from them.
#[must_use]
pub fn censor_move(mv: &Move) -> Move {
    match *mv {
        Move::Offer1 { cards } => Move::Offer1 { cards: cards.censored() },
        Move::Discard2 { cards } => Move::Discard2 { cards: cards.censored() },
        Move::Choose3 { .. } | Move::Split4 { .. } => *mv,
    }
}
