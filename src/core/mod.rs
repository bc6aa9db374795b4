//! Core data types: cards, card sets, seats, moves, state, RNG, configuration.
//!
//! Everything here is plain data. Rules that act on it live in
//! [`crate::rules`].

pub mod card;
pub mod cardset;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use card::Card;
pub use cardset::CardSet;
pub use player::{PlayerId, PlayerPair};
pub use rng::GameRng;
pub use config::{GameConfig, HAND_SIZE, TURNS_PER_ROUND, TYPES_TO_WIN, WEIGHT_TO_WIN};
pub use action::{Move, MoveFlags, MoveKind};
pub use state::{Favor, Favors, GameState, PlayerState};
