//! Immutable card multisets.
//!
//! Every collection of cards (hand, pile, a move's offer, a single draw) is a
//! `CardSet`: a count per card value. Sets are `Copy`, so every operation
//! returns a new value.
//!
//! ## Example
//!
//! ```
//! use rust_favors::core::{Card, CardSet};
//!
//! let hand = CardSet::from_cards(&[Card::Red2, Card::Red2, Card::Pink5]);
//! let pair = CardSet::from_cards(&[Card::Red2, Card::Red2]);
//!
//! assert!(pair.is_subset(&hand));
//! assert_eq!(hand - pair, CardSet::single(Card::Pink5));
//! assert_eq!(hand.censored().count(Card::Unknown), 3);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Sub};

use super::card::Card;
use super::rng::GameRng;

/// A multiset of cards, stored as one count per card value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardSet {
    counts: [u8; 8],
}

impl CardSet {
    /// The empty set.
    pub const EMPTY: CardSet = CardSet { counts: [0; 8] };

    /// Create an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// The full 21-card deck.
    #[must_use]
    pub fn universe() -> Self {
        let mut counts = [0u8; 8];
        for card in Card::REAL {
            counts[card.index()] = card.copies();
        }
        Self { counts }
    }

    /// A set holding one card.
    #[must_use]
    pub fn single(card: Card) -> Self {
        Self::EMPTY.with(card, 1)
    }

    /// `n` placeholder cards.
    #[must_use]
    pub fn unknown(n: usize) -> Self {
        assert!(n <= u8::MAX as usize, "At most 255 cards per set");
        Self::EMPTY.with(Card::Unknown, n as u8)
    }

    /// Build a set from a slice of cards (order irrelevant).
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        cards.iter().copied().collect()
    }

    /// Copy of this set with `n` more copies of `card`.
    #[must_use]
    pub fn with(mut self, card: Card, n: u8) -> Self {
        self.counts[card.index()] += n;
        self
    }

    /// Number of copies of `card`.
    #[must_use]
    pub fn count(&self, card: Card) -> u8 {
        self.counts[card.index()]
    }

    /// Total number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Multiset union (counts add).
    #[must_use]
    pub fn union(&self, other: &CardSet) -> CardSet {
        let mut counts = self.counts;
        for (slot, n) in counts.iter_mut().zip(other.counts) {
            *slot += n;
        }
        CardSet { counts }
    }

    /// Multiset difference, `None` unless `other` is a subset of `self`.
    #[must_use]
    pub fn checked_difference(&self, other: &CardSet) -> Option<CardSet> {
        let mut counts = self.counts;
        for (slot, n) in counts.iter_mut().zip(other.counts) {
            *slot = slot.checked_sub(n)?;
        }
        Some(CardSet { counts })
    }

    /// Multiset difference.
    ///
    /// # Panics
    ///
    /// Panics if `other` is not a subset of `self`.
    #[must_use]
    pub fn difference(&self, other: &CardSet) -> CardSet {
        self.checked_difference(other)
            .unwrap_or_else(|| panic!("cannot remove {other} from {self}"))
    }

    /// Remove `cards`, covering any real value this set lacks with
    /// placeholders. Returns `None` if not enough placeholders remain.
    ///
    /// Equivalent to [`CardSet::checked_difference`] when `cards ⊆ self`.
    /// Used when a move is simulated against a censored hand.
    #[must_use]
    pub fn withdraw(&self, cards: &CardSet) -> Option<CardSet> {
        let mut counts = self.counts;
        let mut shortfall = 0u8;
        for card in Card::ALL {
            let i = card.index();
            let want = cards.counts[i];
            if card.is_known() {
                let taken = want.min(counts[i]);
                counts[i] -= taken;
                shortfall += want - taken;
            } else {
                shortfall += want;
            }
        }
        let unknown = Card::Unknown.index();
        counts[unknown] = counts[unknown].checked_sub(shortfall)?;
        Some(CardSet { counts })
    }

    /// Whether every card of `self` is also in `other` (with multiplicity).
    #[must_use]
    pub fn is_subset(&self, other: &CardSet) -> bool {
        self.counts.iter().zip(other.counts).all(|(&a, b)| a <= b)
    }

    /// Whether any placeholder is present.
    #[must_use]
    pub fn contains_unknown(&self) -> bool {
        self.count(Card::Unknown) > 0
    }

    /// Whether every card is a real card.
    #[must_use]
    pub fn is_known(&self) -> bool {
        !self.contains_unknown()
    }

    /// Same-size set of placeholders.
    #[must_use]
    pub fn censored(&self) -> CardSet {
        CardSet::unknown(self.len())
    }

    /// Distinct values present, in index order.
    pub fn distinct_values(&self) -> impl Iterator<Item = Card> + '_ {
        Card::ALL.into_iter().filter(move |c| self.count(*c) > 0)
    }

    /// Every card with multiplicity, in index order.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        Card::ALL
            .into_iter()
            .flat_map(move |c| std::iter::repeat(c).take(self.count(c) as usize))
    }

    /// Uniformly sample `n` cards without replacement.
    ///
    /// Returns `None` if `n` exceeds the set size.
    #[must_use]
    pub fn sample(&self, rng: &mut GameRng, n: usize) -> Option<CardSet> {
        if n > self.len() {
            return None;
        }
        let mut cards: Vec<Card> = self.iter().collect();
        rng.shuffle(&mut cards);
        Some(cards.into_iter().take(n).collect())
    }
}

impl FromIterator<Card> for CardSet {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut counts = [0u8; 8];
        for card in iter {
            counts[card.index()] += 1;
        }
        CardSet { counts }
    }
}

impl Add for CardSet {
    type Output = CardSet;

    fn add(self, rhs: CardSet) -> CardSet {
        self.union(&rhs)
    }
}

impl AddAssign for CardSet {
    fn add_assign(&mut self, rhs: CardSet) {
        *self = self.union(&rhs);
    }
}

impl Sub for CardSet {
    type Output = CardSet;

    fn sub(self, rhs: CardSet) -> CardSet {
        self.difference(&rhs)
    }
}

impl std::fmt::Display for CardSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;
        for (i, card) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("}")
    }
}
