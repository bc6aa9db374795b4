//! Card values and their scoring weights.
//!
//! The deck has 7 real card types. Each type's weight (its value for the
//! favor-weight win condition) is also the number of copies in the deck,
//! so the 21-card universe is 2+2+2+3+3+4+5.
//!
//! `Card::Unknown` is the eighth value: a placeholder for a card whose
//! identity is hidden from the viewer.

use serde::{Deserialize, Serialize};

/// A card value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Card {
    Red2,
    Yellow2,
    Purple2,
    Blue3,
    Orange3,
    Green4,
    Pink5,
    /// A card hidden from the viewer.
    Unknown,
}

impl Card {
    /// The 7 real card types, in index order.
    pub const REAL: [Card; 7] = [
        Card::Red2,
        Card::Yellow2,
        Card::Purple2,
        Card::Blue3,
        Card::Orange3,
        Card::Green4,
        Card::Pink5,
    ];

    /// All 8 values including the placeholder.
    pub const ALL: [Card; 8] = [
        Card::Red2,
        Card::Yellow2,
        Card::Purple2,
        Card::Blue3,
        Card::Orange3,
        Card::Green4,
        Card::Pink5,
        Card::Unknown,
    ];

    /// Slot index (0-7), `Unknown` is 7.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`Card::index`].
    #[must_use]
    pub fn from_index(index: usize) -> Option<Card> {
        Card::ALL.get(index).copied()
    }

    /// Face weight used by the weight win condition. `Unknown` weighs 0.
    #[must_use]
    pub const fn weight(self) -> u32 {
        match self {
            Card::Red2 | Card::Yellow2 | Card::Purple2 => 2,
            Card::Blue3 | Card::Orange3 => 3,
            Card::Green4 => 4,
            Card::Pink5 => 5,
            Card::Unknown => 0,
        }
    }

    /// Copies of this type in the universe.
    #[must_use]
    pub const fn copies(self) -> u8 {
        self.weight() as u8
    }

    /// Whether this is a real card (not the placeholder).
    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Card::Unknown)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Card::Red2 => "Red2",
            Card::Yellow2 => "Yellow2",
            Card::Purple2 => "Purple2",
            Card::Blue3 => "Blue3",
            Card::Orange3 => "Orange3",
            Card::Green4 => "Green4",
            Card::Pink5 => "Pink5",
            Card::Unknown => "??",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_universe() {
        let total: u32 = Card::REAL.iter().map(|c| c.weight()).sum();
        assert_eq!(total, 21);
        assert_eq!(Card::Unknown.weight(), 0);
    }

    #[test]
    fn test_index_roundtrip() {
        for card in Card::ALL {
            assert_eq!(Card::from_index(card.index()), Some(card));
        }
        assert_eq!(Card::from_index(8), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::Pink5.to_string(), "Pink5");
        assert_eq!(Card::Unknown.to_string(), "??");
    }
}
