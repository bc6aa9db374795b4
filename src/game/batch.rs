//! Batch play for strategy statistics.
//!
//! Each game gets its own seed, RNG and freshly built players, so games never
//! share state and a batch is reproducible from its base seed.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{GameConfig, PlayerId, PlayerPair};
use crate::rules::{EndReason, GameResult};

use super::player::Player;
use super::runner::Match;

/// Aggregate results over many games.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchStats {
    /// Games played.
    pub games: u32,
    /// Wins per seat.
    pub wins: PlayerPair<u32>,
    /// Games lost by forfeit, per offending seat.
    pub forfeits: PlayerPair<u32>,
    /// Games won while both sides met a win condition.
    pub contested: u32,
    /// Games stopped by the round limit.
    pub unfinished: u32,
    /// Rounds played across all games.
    pub total_rounds: u64,
    /// Games keyed by how many rounds they lasted.
    pub rounds_histogram: FxHashMap<u32, u32>,
}

impl MatchStats {
    /// Create empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one result in.
    pub fn record(&mut self, result: &GameResult) {
        self.games += 1;
        self.total_rounds += u64::from(result.rounds);
        *self.rounds_histogram.entry(result.rounds).or_insert(0) += 1;
        if let Some(winner) = result.winner {
            self.wins[winner] += 1;
        }
        match result.reason {
            EndReason::Forfeit(_) => {
                if let Some(loser) = result.loser() {
                    self.forfeits[loser] += 1;
                }
            }
            EndReason::Favors(check) if check.is_contested() => self.contested += 1,
            EndReason::Favors(_) => {}
            EndReason::RoundLimit => self.unfinished += 1,
        }
    }

    /// Fraction of games won by `player`.
    #[must_use]
    pub fn win_rate(&self, player: PlayerId) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            f64::from(self.wins[player]) / f64::from(self.games)
        }
    }

    /// Mean rounds per game.
    #[must_use]
    pub fn avg_rounds(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_rounds as f64 / f64::from(self.games)
        }
    }
}

/// Play `count` games. `make_players` receives each game's seed and returns
/// the two players (first seat starts round 1).
pub fn play_games<P, F>(count: u32, config: &GameConfig, mut make_players: F) -> MatchStats
where
    P: Player,
    F: FnMut(u64) -> (P, P),
{
    let mut stats = MatchStats::new();
    for index in 0..count {
        let seed = config.seed.wrapping_add(u64::from(index));
        let (first, second) = make_players(seed);
        let game_config = GameConfig {
            seed,
            ..config.clone()
        };
        let result = Match::new(first, second, game_config).play();
        stats.record(&result);
    }

    info!(
        target: "rust_favors::batch",
        games = stats.games,
        first_wins = stats.wins[PlayerId::FIRST],
        second_wins = stats.wins[PlayerId::SECOND],
        unfinished = stats.unfinished,
        "batch complete"
    );
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Violation, WinCheck, WinCondition};
    use crate::core::{CardSet, Card, Move};

    #[test]
    fn test_record_results() {
        let mut stats = MatchStats::new();
        stats.record(&GameResult {
            winner: Some(PlayerId::FIRST),
            reason: EndReason::Favors(WinCheck::Decided {
                winner: PlayerId::FIRST,
                condition: WinCondition::Weight(12),
            }),
            rounds: 2,
        });
        stats.record(&GameResult {
            winner: Some(PlayerId::FIRST),
            reason: EndReason::Forfeit(Violation::IllegalMove {
                mv: Move::Offer1 { cards: CardSet::single(Card::Red2) },
            }),
            rounds: 1,
        });
        stats.record(&GameResult {
            winner: None,
            reason: EndReason::RoundLimit,
            rounds: 3,
        });

        assert_eq!(stats.games, 3);
        assert_eq!(stats.wins[PlayerId::FIRST], 2);
        assert_eq!(stats.forfeits[PlayerId::SECOND], 1);
        assert_eq!(stats.unfinished, 1);
        assert_eq!(stats.total_rounds, 6);
        assert_eq!(stats.rounds_histogram.get(&2), Some(&1));
        assert_eq!(stats.rounds_histogram.len(), 3);
        assert!((stats.win_rate(PlayerId::FIRST) - 2.0 / 3.0).abs() < 1e-9);
        assert!((stats.avg_rounds() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_stats() {
        let stats = MatchStats::new();
        assert_eq!(stats.win_rate(PlayerId::SECOND), 0.0);
        assert_eq!(stats.avg_rounds(), 0.0);
    }
}
