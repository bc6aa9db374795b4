//! Match driver: deals rounds, runs turns, notifies players.
//!
//! A match is a sequence of rounds. Each round is
//! `Dealt → (Draw → Move)×8 → Revealed → FavorsUpdated`, after which either a
//! side has won or the next round is dealt with the other side starting.
//! Calls into players are strictly sequential.

use tracing::{debug, info, warn};

use crate::core::{Favors, GameConfig, GameRng, GameState, Move, PlayerId, PlayerPair};
use crate::rules::{
    apply_move, assert_round_end, censor, censor_move, check_move, deal, draw, evaluate_win, next_deal,
    round_complete, update_favors, validate_reaction, view_for, CensorMode, EndReason, GameResult,
    Violation,
};

use super::player::Player;
use super::record::{Transcript, TurnEvent};

/// A rule violation by `offender`, ending the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Forfeit {
    offender: PlayerId,
    violation: Violation,
}

/// One match between two players.
///
/// `P` is usually `Box<dyn Player>` so different strategies can meet.
///
/// ```
/// use rust_favors::core::{GameConfig, PlayerId};
/// use rust_favors::game::{Match, Player};
/// use rust_favors::search::RandomPlayer;
///
/// let players: [Box<dyn Player>; 2] = [
///     Box::new(RandomPlayer::new(1)),
///     Box::new(RandomPlayer::new(2)),
/// ];
/// let [first, second] = players;
/// let mut game = Match::new(first, second, GameConfig::default().with_round_limit(50));
/// let result = game.play();
/// assert!(result.rounds >= 1);
/// ```
pub struct Match<P: Player = Box<dyn Player>> {
    players: PlayerPair<P>,
    config: GameConfig,
    rng: GameRng,
    transcript: Option<Transcript>,
}

impl<P: Player> Match<P> {
    /// Create a match. `first` starts round 1.
    pub fn new(first: P, second: P, config: GameConfig) -> Self {
        let transcript = config.record_transcript.then(Transcript::new);
        Self {
            players: PlayerPair::from_array([first, second]),
            rng: GameRng::new(config.seed),
            config,
            transcript,
        }
    }

    /// The recorded transcript, if enabled.
    #[must_use]
    pub fn transcript(&self) -> Option<&Transcript> {
        self.transcript.as_ref()
    }

    /// The players, by seat.
    #[must_use]
    pub fn players(&self) -> &PlayerPair<P> {
        &self.players
    }

    /// Consume the match, returning the players.
    pub fn into_players(self) -> PlayerPair<P> {
        self.players
    }

    fn record(&mut self, event: impl FnOnce() -> TurnEvent) {
        if let Some(transcript) = self.transcript.as_mut() {
            transcript.push(event());
        }
    }

    /// Play rounds until a side wins, a side forfeits, or the round limit is
    /// reached.
    pub fn play(&mut self) -> GameResult {
        let mut state = deal(
            &mut self.rng,
            PlayerPair::with_value(Favors::NEUTRAL),
            PlayerId::FIRST,
            1,
        );

        loop {
            let scored = match self.play_round(state) {
                Ok(scored) => scored,
                Err(forfeit) => {
                    let result = GameResult {
                        winner: Some(forfeit.offender.other()),
                        reason: EndReason::Forfeit(forfeit.violation),
                        rounds: state.round,
                    };
                    return self.finish(result);
                }
            };

            let check = evaluate_win(&scored);
            if let Some(winner) = check.winner() {
                if check.is_contested() {
                    warn!(
                        target: "rust_favors::round",
                        round = scored.round,
                        winner = %winner,
                        ?check,
                        "both sides met a win condition"
                    );
                }
                let result = GameResult {
                    winner: Some(winner),
                    reason: EndReason::Favors(check),
                    rounds: scored.round,
                };
                return self.finish(result);
            }

            if self.config.round_limit.is_some_and(|limit| scored.round >= limit) {
                let result = GameResult {
                    winner: None,
                    reason: EndReason::RoundLimit,
                    rounds: scored.round,
                };
                return self.finish(result);
            }

            state = next_deal(&scored, &mut self.rng);
        }
    }

    fn finish(&mut self, result: GameResult) -> GameResult {
        info!(
            target: "rust_favors::round",
            winner = ?result.winner,
            rounds = result.rounds,
            reason = ?result.reason,
            "game over"
        );
        for id in PlayerId::both() {
            self.players[id].on_game_over(result.is_winner(id));
        }
        self.record(|| TurnEvent::GameOver { result });
        result
    }

    /// Play one dealt round through the favor update.
    fn play_round(&mut self, dealt: GameState) -> Result<GameState, Forfeit> {
        info!(
            target: "rust_favors::round",
            round = dealt.round,
            starter = %dealt.starter(),
            "round dealt"
        );
        self.record(|| TurnEvent::Dealt { state: dealt });
        for id in PlayerId::both() {
            self.players[id].on_dealt(&view_for(&dealt, id));
        }

        let mut state = dealt;
        while !round_complete(&state) {
            state = self.take_turn(state)?;
        }
        assert_round_end(&state);

        self.record(|| TurnEvent::Revealed { state });
        for id in PlayerId::both() {
            let revealed = censor(&state.seen_by(id), CensorMode::KeysOnly);
            self.players[id].on_round_revealed(&revealed);
        }

        let scored = update_favors(&state);
        info!(
            target: "rust_favors::round",
            round = scored.round,
            first = ?scored.player(PlayerId::FIRST).favors,
            "favors updated"
        );
        self.record(|| TurnEvent::FavorsUpdated {
            round: scored.round,
            favors: PlayerPair::new(|id| scored.player(id).favors),
        });
        Ok(scored)
    }

    /// Draw, ask for a move, collect the reaction, apply.
    fn take_turn(&mut self, state: GameState) -> Result<GameState, Forfeit> {
        let mover = state.to_act();
        let opponent = mover.other();

        let before_draw = view_for(&state, mover);
        let (state, card) = draw(&state, mover, &mut self.rng);
        debug!(target: "rust_favors::round", player = %mover, card = %card, "draw");
        self.players[mover].on_draw(&before_draw, card);
        self.record(|| TurnEvent::Drew { player: mover, card });

        let mover_view = view_for(&state, mover);
        let opponent_view = view_for(&state, opponent);

        let mv = self.players[mover].choose_move(&mover_view);
        if let Err(rejection) = check_move(&state.seen_by(mover), &mv) {
            return Err(self.forfeit(mover, Violation::IllegalMove { mv }, &rejection.to_string()));
        }
        debug!(target: "rust_favors::round", player = %mover, mv = %mv, "move");
        self.players[opponent].on_opponent_move(&opponent_view, &censor_move(&mv));
        self.record(|| TurnEvent::Moved { player: mover, mv });

        let reaction = match &mv {
            Move::Choose3 { cards } => Some(self.players[opponent].react_to_choose3(&opponent_view, &mv, cards)),
            Move::Split4 { a, b } => Some(self.players[opponent].react_to_split4(&opponent_view, &mv, a, b)),
            Move::Offer1 { .. } | Move::Discard2 { .. } => None,
        };

        if let Some(taken) = reaction {
            if !validate_reaction(&mv, &taken) {
                let violation = Violation::IllegalReaction { mv, reaction: taken };
                return Err(self.forfeit(opponent, violation, "reaction is not one of the offered options"));
            }
            debug!(target: "rust_favors::round", player = %opponent, taken = %taken, "reaction");
            self.players[mover].on_reaction_resolved(&mover_view, &mv, &taken);
            self.record(|| TurnEvent::Reacted { player: opponent, taken });
        }

        Ok(apply_move(&state, mover, &mv, reaction.as_ref()))
    }

    fn forfeit(&mut self, offender: PlayerId, violation: Violation, reason: &str) -> Forfeit {
        warn!(
            target: "rust_favors::round",
            player = %offender,
            ?violation,
            reason,
            "rule violation"
        );
        self.record(|| TurnEvent::Forfeited { player: offender, violation });
        Forfeit { offender, violation }
    }
}

/// Play one match to completion.
pub fn play_game<P: Player>(first: P, second: P, config: GameConfig) -> GameResult {
    Match::new(first, second, config).play()
}
