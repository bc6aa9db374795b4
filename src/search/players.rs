//! Ready-made players: a uniform random baseline and the maximin searcher.

use tracing::debug;

use crate::core::{Card, CardSet, GameRng, GameState, Move, MoveKind};

use crate::game::Player;

use super::config::MaximinConfig;
use super::maximin::{first_best, score_moves, score_reactions};
use super::policy::{Evaluator, FavorProjection};
use super::stats::SearchStats;

/// Picks a random unused move kind, then random cards of the right count.
///
/// Reactions are uniform over the offered options.
#[derive(Clone, Debug)]
pub struct RandomPlayer {
    rng: GameRng,
}

impl RandomPlayer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed).for_context("random-player"),
        }
    }
}

impl Player for RandomPlayer {
    fn choose_move(&mut self, view: &GameState) -> Move {
        let own = view.own();
        let kinds: Vec<MoveKind> = own.moves.unused().collect();
        let Some(&kind) = self.rng.choose(&kinds) else {
            panic!("{} has no unused move kind on turn {}", view.viewpoint(), view.turn);
        };
        let Some(cards) = own.hand.sample(&mut self.rng, kind.card_count()) else {
            panic!("hand {} is too small for {kind:?}", own.hand);
        };

        match kind {
            MoveKind::Offer1 => Move::Offer1 { cards },
            MoveKind::Discard2 => Move::Discard2 { cards },
            MoveKind::Choose3 => Move::Choose3 { cards },
            MoveKind::Split4 => {
                let a = cards.sample(&mut self.rng, 2).unwrap_or_default();
                Move::Split4 { a, b: cards - a }
            }
        }
    }

    fn react_to_choose3(&mut self, _view: &GameState, _mv: &Move, offered: &CardSet) -> CardSet {
        let values: Vec<Card> = offered.distinct_values().collect();
        self.rng.choose(&values).map_or(CardSet::EMPTY, |&card| CardSet::single(card))
    }

    fn react_to_split4(&mut self, _view: &GameState, _mv: &Move, a: &CardSet, b: &CardSet) -> CardSet {
        if self.rng.gen_bool(0.5) {
            *a
        } else {
            *b
        }
    }
}

/// Plays the single-ply maximin move and the best reaction under `E`.
#[derive(Clone, Debug)]
pub struct MaximinPlayer<E: Evaluator = FavorProjection> {
    evaluator: E,
    config: MaximinConfig,
    rng: GameRng,
    stats: SearchStats,
}

impl MaximinPlayer<FavorProjection> {
    /// Maximin over the default favor projection.
    pub fn with_config(config: MaximinConfig) -> Self {
        Self::new(FavorProjection::default(), config)
    }
}

impl<E: Evaluator> MaximinPlayer<E> {
    pub fn new(evaluator: E, config: MaximinConfig) -> Self {
        let rng = GameRng::new(config.seed).for_context("maximin-ties");
        Self {
            evaluator,
            config,
            rng,
            stats: SearchStats::new(),
        }
    }

    /// Get the search statistics.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn config(&self) -> &MaximinConfig {
        &self.config
    }

    /// Highest scorer, breaking ties by config.
    fn pick<T: Copy>(&mut self, scored: &[(T, f64)]) -> Option<(T, f64)> {
        let (first, top) = first_best(scored)?;
        if !self.config.randomize_ties {
            return Some((first, top));
        }
        let tied: Vec<(T, f64)> = scored
            .iter()
            .copied()
            .filter(|&(_, score)| (top - score).abs() <= self.config.tie_epsilon)
            .collect();
        self.rng.choose(&tied).copied()
    }

    fn react(&mut self, view: &GameState, mv: &Move) -> CardSet {
        self.stats.decisions += 1;
        self.stats.reactions += 1;
        let scored = score_reactions(view, mv, &self.evaluator, &mut self.stats);
        let Some((reaction, score)) = self.pick(&scored) else {
            panic!("no reaction exists for {mv}");
        };
        debug!(target: "rust_favors::search", mv = %mv, reaction = %reaction, score, "reaction chosen");
        reaction
    }
}

impl<E: Evaluator> Player for MaximinPlayer<E> {
    fn choose_move(&mut self, view: &GameState) -> Move {
        self.stats.decisions += 1;
        let scored = score_moves(view, &self.evaluator, &mut self.stats);
        let Some((mv, score)) = self.pick(&scored) else {
            panic!("{} has no legal move on turn {}", view.viewpoint(), view.turn);
        };
        debug!(
            target: "rust_favors::search",
            candidates = scored.len(),
            mv = %mv,
            score,
            "maximin move"
        );
        mv
    }

    fn react_to_choose3(&mut self, view: &GameState, mv: &Move, _offered: &CardSet) -> CardSet {
        self.react(view, mv)
    }

    fn react_to_split4(&mut self, view: &GameState, mv: &Move, _a: &CardSet, _b: &CardSet) -> CardSet {
        self.react(view, mv)
    }
}
