//! Match transcripts.
//!
//! A `Transcript` is the structured record of every event in a match, kept
//! in a persistent vector so snapshots are O(1) to clone. Each event prints
//! as one human-readable log line.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Card, CardSet, Favors, GameState, Move, PlayerId, PlayerPair};
use crate::rules::{GameResult, Violation};

/// One event in a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnEvent {
    /// A round was dealt (uncensored).
    Dealt { state: GameState },
    /// `player` drew `card`.
    Drew { player: PlayerId, card: Card },
    /// `player` played `mv`.
    Moved { player: PlayerId, mv: Move },
    /// `player` reacted by taking `taken`.
    Reacted { player: PlayerId, taken: CardSet },
    /// The round's cards were revealed.
    Revealed { state: GameState },
    /// Favors after the round, per seat.
    FavorsUpdated { round: u32, favors: PlayerPair<Favors> },
    /// `player` broke a rule.
    Forfeited { player: PlayerId, violation: Violation },
    /// The match ended.
    GameOver { result: GameResult },
}

impl std::fmt::Display for TurnEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnEvent::Dealt { state } => write!(
                f,
                "Round {} dealt, {} starts: {} / {}",
                state.round,
                state.starter(),
                state.player(PlayerId::FIRST).hand,
                state.player(PlayerId::SECOND).hand,
            ),
            TurnEvent::Drew { player, card } => write!(f, "{player} drew {card}"),
            TurnEvent::Moved { player, mv } => write!(f, "{player} chose {mv}"),
            TurnEvent::Reacted { player, taken } => write!(f, "{player} took {taken}"),
            TurnEvent::Revealed { state } => write!(
                f,
                "Round {} revealed, hidden {} / {}",
                state.round,
                state.player(PlayerId::FIRST).hidden,
                state.player(PlayerId::SECOND).hidden,
            ),
            TurnEvent::FavorsUpdated { round, favors } => {
                write!(f, "Favors after round {round}:")?;
                for (card, favor) in favors[PlayerId::FIRST].iter() {
                    write!(f, " {card}={}", favor.signum())?;
                }
                Ok(())
            }
            TurnEvent::Forfeited { player, violation } => write!(f, "{player} forfeits: {violation:?}"),
            TurnEvent::GameOver { result } => match result.winner {
                Some(winner) => write!(f, "{winner} won after {} rounds", result.rounds),
                None => write!(f, "No winner after {} rounds", result.rounds),
            },
        }
    }
}

/// Ordered record of a match.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    events: Vector<TurnEvent>,
}

impl Transcript {
    /// Create an empty transcript.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn push(&mut self, event: TurnEvent) {
        self.events.push_back(event);
    }

    /// Number of events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterate over events in order.
    pub fn iter(&self) -> impl Iterator<Item = &TurnEvent> {
        self.events.iter()
    }

    /// The final event, if any.
    #[must_use]
    pub fn last(&self) -> Option<&TurnEvent> {
        self.events.back()
    }

    /// One line per event.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }

    /// Compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Decode from [`Transcript::to_bytes`] output.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}
