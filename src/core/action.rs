//! Moves: the four actions a side takes once each per round.
//!
//! - `Offer1`: set one card aside face-down (scored at round end)
//! - `Discard2`: remove two cards from scoring
//! - `Choose3`: show three cards, the opponent takes one
//! - `Split4`: show two pairs, the opponent takes one pair
//!
//! `Move` is a sum type; its [`MoveKind`] discriminant comes from an
//! exhaustive match, never a lookup table.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::cardset::CardSet;

/// The four move kinds, one use each per round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    Offer1,
    Discard2,
    Choose3,
    Split4,
}

impl MoveKind {
    /// All kinds in index order.
    pub const ALL: [MoveKind; 4] = [
        MoveKind::Offer1,
        MoveKind::Discard2,
        MoveKind::Choose3,
        MoveKind::Split4,
    ];

    /// Slot index (0-3).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Cards the move uses from hand.
    #[must_use]
    pub const fn card_count(self) -> usize {
        match self {
            MoveKind::Offer1 => 1,
            MoveKind::Discard2 => 2,
            MoveKind::Choose3 => 3,
            MoveKind::Split4 => 4,
        }
    }

    /// Whether the opponent must react to this kind.
    #[must_use]
    pub const fn needs_reaction(self) -> bool {
        matches!(self, MoveKind::Choose3 | MoveKind::Split4)
    }
}

/// A move submitted by the acting side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Offer1 { cards: CardSet },
    Discard2 { cards: CardSet },
    Choose3 { cards: CardSet },
    Split4 { a: CardSet, b: CardSet },
}

impl Move {
    /// The move's kind.
    #[must_use]
    pub const fn kind(&self) -> MoveKind {
        match self {
            Move::Offer1 { .. } => MoveKind::Offer1,
            Move::Discard2 { .. } => MoveKind::Discard2,
            Move::Choose3 { .. } => MoveKind::Choose3,
            Move::Split4 { .. } => MoveKind::Split4,
        }
    }

    /// Every card the move takes from the mover's hand.
    #[must_use]
    pub fn cards(&self) -> CardSet {
        match self {
            Move::Offer1 { cards } | Move::Discard2 { cards } | Move::Choose3 { cards } => *cards,
            Move::Split4 { a, b } => *a + *b,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Offer1 { cards } => write!(f, "Offer1 {cards}"),
            Move::Discard2 { cards } => write!(f, "Discard2 {cards}"),
            Move::Choose3 { cards } => write!(f, "Choose3 {cards}"),
            Move::Split4 { a, b } => write!(f, "Split4 {a} | {b}"),
        }
    }
}

/// Which move kinds a side has used this round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveFlags([bool; 4]);

impl MoveFlags {
    /// No kind used.
    pub const NONE: MoveFlags = MoveFlags([false; 4]);
    /// Every kind used.
    pub const ALL: MoveFlags = MoveFlags([true; 4]);

    /// Whether `kind` was used.
    #[must_use]
    pub fn is_used(&self, kind: MoveKind) -> bool {
        self.0[kind.index()]
    }

    /// Copy with `kind` marked used.
    #[must_use]
    pub fn with_used(mut self, kind: MoveKind) -> Self {
        self.0[kind.index()] = true;
        self
    }

    /// Kinds not used yet, in index order.
    pub fn unused(&self) -> impl Iterator<Item = MoveKind> + '_ {
        MoveKind::ALL.into_iter().filter(move |k| !self.is_used(*k))
    }

    /// Whether all four kinds were used.
    #[must_use]
    pub fn all_used(&self) -> bool {
        self.0.iter().all(|&b| b)
    }
}

impl Index<MoveKind> for MoveFlags {
    type Output = bool;

    fn index(&self, kind: MoveKind) -> &bool {
        &self.0[kind.index()]
    }
}

impl IndexMut<MoveKind> for MoveFlags {
    fn index_mut(&mut self, kind: MoveKind) -> &mut bool {
        &mut self.0[kind.index()]
    }
}
