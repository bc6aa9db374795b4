//! # rust-favors
//!
//! A two-player card game engine with a single-ply adversarial search.
//!
//! ## Design Principles
//!
//! 1. **Value Snapshots**: `GameState` is `Copy`. Every transition returns a
//!    new state, so nothing a player receives can change under it.
//!
//! 2. **Explicit Viewpoint**: Both records are stored by seat. `own()` and
//!    `opponent()` resolve through the state's viewpoint, and re-framing never
//!    moves a record.
//!
//! 3. **Violations Are Outcomes**: An illegal move or reaction ends the game
//!    against the offender. Broken engine invariants panic.
//!
//! ## Modules
//!
//! - `core`: Cards, card sets, seats, moves, state, RNG, configuration
//! - `rules`: Validation, censoring, pure transitions, results
//! - `game`: Player protocol, match driver, transcripts, batch play
//! - `search`: Move enumeration, maximin, ready-made players

pub mod core;
pub mod rules;
pub mod game;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    Card, CardSet,
    PlayerId, PlayerPair,
    GameRng, GameConfig,
    Move, MoveKind, MoveFlags,
    Favor, Favors, PlayerState, GameState,
};

pub use crate::rules::{
    apply_move, censor, deal, draw, evaluate_win, update_favors, validate_move, validate_reaction,
    CensorMode, EndReason, GameResult, Violation, WinCheck, WinCondition,
};

pub use crate::game::{play_game, play_games, Match, MatchStats, Player, Transcript, TurnEvent};

pub use crate::search::{
    choose_maximin, choose_reaction, enumerate_legal_moves, simulate_reaction,
    Evaluator, FavorProjection, MaximinConfig, MaximinPlayer, RandomPlayer, SearchStats,
};
