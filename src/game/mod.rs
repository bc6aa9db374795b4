//! Match play: the player protocol, the round/game driver, transcripts and
//! batch statistics.

pub mod player;
pub mod record;
pub mod runner;
pub mod batch;

pub use player::Player;
pub use record::{Transcript, TurnEvent};
pub use runner::{play_game, Match};
pub use batch::{play_games, MatchStats};
