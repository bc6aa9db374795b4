//! Game results and the reasons a game ends.

use serde::{Deserialize, Serialize};

use crate::core::{CardSet, Move, PlayerId};

/// A rule broken by a player, ending the game against them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Violation {
    /// `choose_move` returned a move that failed validation.
    IllegalMove { mv: Move },
    /// A reaction was not one of the offered options.
    IllegalReaction { mv: Move, reaction: CardSet },
}

/// Which win condition a side met.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinCondition {
    /// Favored face weight reached the threshold.
    Weight(u32),
    /// Favored type count reached the threshold.
    Types(usize),
}

/// Win evaluation after a favor update.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinCheck {
    /// Nobody qualifies; deal another round.
    None,
    /// Exactly one side qualifies.
    Decided { winner: PlayerId, condition: WinCondition },
    /// Both sides qualify. `winner` is the first in evaluation order.
    Contested {
        winner: PlayerId,
        condition: WinCondition,
        rival_condition: WinCondition,
    },
}

impl WinCheck {
    /// The winning side, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            WinCheck::None => None,
            WinCheck::Decided { winner, .. } | WinCheck::Contested { winner, .. } => Some(*winner),
        }
    }

    /// Whether both sides qualified at once.
    #[must_use]
    pub fn is_contested(&self) -> bool {
        matches!(self, WinCheck::Contested { .. })
    }
}

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// The loser broke a rule.
    Forfeit(Violation),
    /// The winner met a win condition at round end.
    Favors(WinCheck),
    /// The configured round cap was reached.
    RoundLimit,
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// `None` only when the round cap was reached.
    pub winner: Option<PlayerId>,
    pub reason: EndReason,
    /// Rounds dealt, including the last one.
    pub rounds: u32,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == Some(player)
    }

    /// The losing side, if any.
    #[must_use]
    pub fn loser(&self) -> Option<PlayerId> {
        self.winner.map(PlayerId::other)
    }

    /// Whether the game ended by forfeit.
    #[must_use]
    pub fn is_forfeit(&self) -> bool {
        matches!(self.reason, EndReason::Forfeit(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult {
            winner: Some(PlayerId::SECOND),
            reason: EndReason::Favors(WinCheck::Decided {
                winner: PlayerId::SECOND,
                condition: WinCondition::Types(4),
            }),
            rounds: 2,
        };
        assert!(!result.is_winner(PlayerId::FIRST));
        assert!(result.is_winner(PlayerId::SECOND));
        assert_eq!(result.loser(), Some(PlayerId::FIRST));
        assert!(!result.is_forfeit());

        let capped = GameResult {
            winner: None,
            reason: EndReason::RoundLimit,
            rounds: 10,
        };
        assert!(!capped.is_winner(PlayerId::FIRST));
        assert_eq!(capped.loser(), None);
    }

    #[test]
    fn test_win_check_winner() {
        assert_eq!(WinCheck::None.winner(), None);
        let contested = WinCheck::Contested {
            winner: PlayerId::FIRST,
            condition: WinCondition::Weight(11),
            rival_condition: WinCondition::Types(4),
        };
        assert_eq!(contested.winner(), Some(PlayerId::FIRST));
        assert!(contested.is_contested());
    }
}
