//! The capability interface the match driver calls into.
//!
//! A `Player` makes three kinds of decision (move, Choose3 reaction, Split4
//! reaction) and receives notifications it can use to model the opponent.
//! Every state it receives is a snapshot already censored for its seat and
//! framed with itself as `own`; the driver never mutates it afterwards.
//!
//! Illegal answers are not errors: the driver ends the game against the
//! offending player.

use crate::core::{Card, CardSet, GameState, Move};

/// A participant in a match.
pub trait Player {
    /// Choose a move. It must pass [`crate::rules::validate_move`] for `view`.
    fn choose_move(&mut self, view: &GameState) -> Move;

    /// Take exactly one of the three `offered` cards.
    fn react_to_choose3(&mut self, view: &GameState, mv: &Move, offered: &CardSet) -> CardSet;

    /// Take one of the two halves, returned exactly as offered.
    fn react_to_split4(&mut self, view: &GameState, mv: &Move, a: &CardSet, b: &CardSet) -> CardSet;

    /// A round was dealt.
    fn on_dealt(&mut self, _view: &GameState) {}

    /// This player drew `card`. `before` is the view prior to the draw.
    fn on_draw(&mut self, _before: &GameState, _card: Card) {}

    /// The opponent played `mv` (censored). `before` is the view prior to the move.
    fn on_opponent_move(&mut self, _before: &GameState, _mv: &Move) {}

    /// The opponent reacted to this player's `own_move` by taking `taken`.
    fn on_reaction_resolved(&mut self, _before: &GameState, _own_move: &Move, _taken: &CardSet) {}

    /// The round ended. `revealed` shows every card, before favors update.
    fn on_round_revealed(&mut self, _revealed: &GameState) {}

    /// The game ended.
    fn on_game_over(&mut self, _won: bool) {}
}

impl<P: Player + ?Sized> Player for Box<P> {
    fn choose_move(&mut self, view: &GameState) -> Move {
        (**self).choose_move(view)
    }

    fn react_to_choose3(&mut self, view: &GameState, mv: &Move, offered: &CardSet) -> CardSet {
        (**self).react_to_choose3(view, mv, offered)
    }

    fn react_to_split4(&mut self, view: &GameState, mv: &Move, a: &CardSet, b: &CardSet) -> CardSet {
        (**self).react_to_split4(view, mv, a, b)
    }

    fn on_dealt(&mut self, view: &GameState) {
        (**self).on_dealt(view);
    }

    fn on_draw(&mut self, before: &GameState, card: Card) {
        (**self).on_draw(before, card);
    }

    fn on_opponent_move(&mut self, before: &GameState, mv: &Move) {
        (**self).on_opponent_move(before, mv);
    }

    fn on_reaction_resolved(&mut self, before: &GameState, own_move: &Move, taken: &CardSet) {
        (**self).on_reaction_resolved(before, own_move, taken);
    }

    fn on_round_revealed(&mut self, revealed: &GameState) {
        (**self).on_round_revealed(revealed);
    }

    fn on_game_over(&mut self, won: bool) {
        (**self).on_game_over(won);
    }
}
