//! Game rules: validation, censoring, transitions and results.
//!
//! All rule functions are pure. The match driver in [`crate::game`] and the
//! search in [`crate::search`] both build on them.

pub mod validate;
pub mod censor;
pub mod engine;
pub mod outcome;

pub use validate::{check_move, validate_cardset, validate_move, validate_reaction, MoveRejection};
pub use censor::{censor, censor_move, view_for, CensorMode};
pub use engine::{
    apply_move, assert_round_end, deal, draw, evaluate_win, next_deal, round_complete, update_favors,
};
pub use outcome::{EndReason, GameResult, Violation, WinCheck, WinCondition};
