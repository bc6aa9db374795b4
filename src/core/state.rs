//! Game state: per-side records framed from a viewpoint.
//!
//! ## PlayerState
//!
//! One side's cards (hand, played, hidden, discarded), its favor markers,
//! which move kinds it used this round, whether it started the round, and
//! its identity.
//!
//! ## GameState
//!
//! Both sides plus the undealt pile. Records are stored by seat and a
//! `viewpoint` names the seat that is "own"; re-framing a state for the other
//! side changes only the viewpoint, never the records.
//!
//! States are `Copy` snapshots. Transitions in [`crate::rules`] return new
//! states instead of mutating shared ones.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::action::MoveFlags;
use super::card::Card;
use super::cardset::CardSet;
use super::player::{PlayerId, PlayerPair};

/// Who a card type currently favors, relative to the record holding it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Favor {
    /// Favors the side holding this marker.
    Mine,
    #[default]
    Neutral,
    /// Favors the opposing side.
    Theirs,
}

impl Favor {
    /// The same marker seen from the other side.
    #[must_use]
    pub const fn negate(self) -> Favor {
        match self {
            Favor::Mine => Favor::Theirs,
            Favor::Neutral => Favor::Neutral,
            Favor::Theirs => Favor::Mine,
        }
    }

    /// -1, 0 or 1.
    #[must_use]
    pub const fn signum(self) -> i8 {
        match self {
            Favor::Mine => 1,
            Favor::Neutral => 0,
            Favor::Theirs => -1,
        }
    }
}

/// One favor marker per real card type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Favors([Favor; 7]);

impl Favors {
    /// All neutral.
    pub const NEUTRAL: Favors = Favors([Favor::Neutral; 7]);

    /// Build from markers in [`Card::REAL`] order.
    #[must_use]
    pub const fn from_array(markers: [Favor; 7]) -> Self {
        Self(markers)
    }

    /// Copy with `card`'s marker replaced.
    ///
    /// # Panics
    ///
    /// Panics for `Card::Unknown`.
    #[must_use]
    pub fn with(mut self, card: Card, favor: Favor) -> Self {
        assert!(card.is_known(), "Unknown has no favor marker");
        self.0[card.index()] = favor;
        self
    }

    /// Every marker negated.
    #[must_use]
    pub fn negated(&self) -> Favors {
        Favors(self.0.map(Favor::negate))
    }

    /// Card types marked `Mine`.
    pub fn mine(&self) -> impl Iterator<Item = Card> + '_ {
        Card::REAL.into_iter().filter(move |c| self[*c] == Favor::Mine)
    }

    /// Summed face weight of the types marked `Mine`.
    #[must_use]
    pub fn weight_of_mine(&self) -> u32 {
        self.mine().map(Card::weight).sum()
    }

    /// Number of types marked `Mine`.
    #[must_use]
    pub fn count_of_mine(&self) -> usize {
        self.mine().count()
    }

    /// (card, marker) pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (Card, Favor)> + '_ {
        Card::REAL.into_iter().zip(self.0.iter().copied())
    }
}

impl Index<Card> for Favors {
    type Output = Favor;

    fn index(&self, card: Card) -> &Favor {
        &self.0[card.index()]
    }
}

/// One side's record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerState {
    /// Cards held.
    pub hand: CardSet,
    /// Cards scored to this side.
    pub played: CardSet,
    /// Card set aside by Offer1; scored but not public.
    pub hidden: CardSet,
    /// Cards removed from scoring by Discard2.
    pub discarded: CardSet,
    /// Favor markers from this side's point of view.
    pub favors: Favors,
    /// Move kinds used this round.
    pub moves: MoveFlags,
    /// Whether this side acted first this round.
    pub started: bool,
    /// Opaque identity; `None` in censored views.
    pub identity: Option<PlayerId>,
}

impl PlayerState {
    /// Fresh record for a new round holding `hand`.
    #[must_use]
    pub fn dealt(hand: CardSet, favors: Favors, started: bool, identity: Option<PlayerId>) -> Self {
        Self {
            hand,
            favors,
            started,
            identity,
            ..Self::default()
        }
    }

    /// Cards that count for favor comparison (played + hidden).
    #[must_use]
    pub fn scoring(&self) -> CardSet {
        self.played + self.hidden
    }

    /// Every card this side accounts for.
    #[must_use]
    pub fn all_cards(&self) -> CardSet {
        self.hand + self.played + self.hidden + self.discarded
    }
}

/// Both sides, the pile, and the viewpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    players: PlayerPair<PlayerState>,
    /// Undealt cards.
    pub pile: CardSet,
    viewpoint: PlayerId,
    /// Round number (starts at 1).
    pub round: u32,
    /// Draw/move pairs completed this round.
    pub turn: u8,
}

impl GameState {
    /// Assemble a state from its parts, framed for `viewpoint`.
    #[must_use]
    pub fn from_parts(players: PlayerPair<PlayerState>, pile: CardSet, viewpoint: PlayerId) -> Self {
        Self {
            players,
            pile,
            viewpoint,
            round: 1,
            turn: 0,
        }
    }

    /// Assemble a state from own/opponent records, own being seat 0.
    #[must_use]
    pub fn framed(own: PlayerState, opponent: PlayerState, pile: CardSet) -> Self {
        Self::from_parts(PlayerPair::from_array([own, opponent]), pile, PlayerId::FIRST)
    }

    /// The seat this state is framed for.
    #[must_use]
    pub fn viewpoint(&self) -> PlayerId {
        self.viewpoint
    }

    /// The viewpoint side's record.
    #[must_use]
    pub fn own(&self) -> &PlayerState {
        &self.players[self.viewpoint]
    }

    /// The other side's record.
    #[must_use]
    pub fn opponent(&self) -> &PlayerState {
        &self.players[self.viewpoint.other()]
    }

    /// Record of a specific seat.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &PlayerState {
        &self.players[id]
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> &mut PlayerState {
        &mut self.players[id]
    }

    /// Copy with a seat's record replaced.
    #[must_use]
    pub fn with_player(mut self, id: PlayerId, state: PlayerState) -> Self {
        self.players[id] = state;
        self
    }

    /// Copy framed for `id`.
    #[must_use]
    pub fn seen_by(mut self, id: PlayerId) -> Self {
        self.viewpoint = id;
        self
    }

    /// Copy framed for the other side.
    #[must_use]
    pub fn swapped(self) -> Self {
        let other = self.viewpoint.other();
        self.seen_by(other)
    }

    /// The seat that acted first this round.
    #[must_use]
    pub fn starter(&self) -> PlayerId {
        PlayerId::both()
            .find(|&p| self.players[p].started)
            .unwrap_or(PlayerId::FIRST)
    }

    /// The seat whose turn it is, given the turns completed so far.
    #[must_use]
    pub fn to_act(&self) -> PlayerId {
        if self.turn % 2 == 0 {
            self.starter()
        } else {
            self.starter().other()
        }
    }

    /// Union of every side's cards and the pile.
    #[must_use]
    pub fn accounted_cards(&self) -> CardSet {
        self.players[PlayerId::FIRST].all_cards() + self.players[PlayerId::SECOND].all_cards() + self.pile
    }

    /// Whether the two favor arrays are elementwise negations.
    #[must_use]
    pub fn favors_consistent(&self) -> bool {
        self.players[PlayerId::FIRST].favors == self.players[PlayerId::SECOND].favors.negated()
    }

    /// Panic unless the uncensored invariants hold: the cards partition the
    /// universe and the favor arrays are negations.
    pub fn assert_invariants(&self) {
        assert_eq!(
            self.accounted_cards(),
            CardSet::universe(),
            "cards no longer partition the deck: {self:?}"
        );
        assert!(self.favors_consistent(), "favor arrays are not opposite: {self:?}");
    }
}
