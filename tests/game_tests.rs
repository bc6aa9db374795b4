//! Match driver integration tests using scripted and random players.

use rust_favors::core::{Card, CardSet, GameConfig, GameState, Move, PlayerId};
use rust_favors::game::{play_game, play_games, Match, Player, Transcript, TurnEvent};
use rust_favors::rules::{EndReason, GameResult, Violation};
use rust_favors::search::{MaximinConfig, MaximinPlayer, RandomPlayer};

/// Plays randomly but answers every Choose3 with a card it was not offered.
struct WrongPicker(RandomPlayer);

impl Player for WrongPicker {
    fn choose_move(&mut self, view: &GameState) -> Move {
        self.0.choose_move(view)
    }

    fn react_to_choose3(&mut self, _view: &GameState, _mv: &Move, offered: &CardSet) -> CardSet {
        let missing = Card::REAL
            .into_iter()
            .find(|&card| offered.count(card) == 0)
            .unwrap_or(Card::Unknown);
        CardSet::single(missing)
    }

    fn react_to_split4(&mut self, view: &GameState, mv: &Move, a: &CardSet, b: &CardSet) -> CardSet {
        self.0.react_to_split4(view, mv, a, b)
    }
}

/// Always offers a placeholder, which can never be legal.
struct Cheater;

impl Player for Cheater {
    fn choose_move(&mut self, _view: &GameState) -> Move {
        Move::Offer1 { cards: CardSet::unknown(1) }
    }

    fn react_to_choose3(&mut self, _view: &GameState, _mv: &Move, offered: &CardSet) -> CardSet {
        offered.distinct_values().next().map_or(CardSet::EMPTY, CardSet::single)
    }

    fn react_to_split4(&mut self, _view: &GameState, _mv: &Move, a: &CardSet, _b: &CardSet) -> CardSet {
        *a
    }
}

/// Random player that audits every notification it receives.
struct Observer {
    inner: RandomPlayer,
    dealt: u32,
    draws: u32,
    opponent_moves: u32,
    reveals: u32,
    leaks: u32,
    won: Option<bool>,
}

impl Observer {
    fn new(seed: u64) -> Self {
        Self {
            inner: RandomPlayer::new(seed),
            dealt: 0,
            draws: 0,
            opponent_moves: 0,
            reveals: 0,
            leaks: 0,
            won: None,
        }
    }

    fn audit(&mut self, view: &GameState) {
        let opponent = view.opponent();
        let hidden = [opponent.hand, opponent.hidden, opponent.discarded, view.pile];
        if hidden.iter().any(|cards| cards.iter().any(Card::is_known)) {
            self.leaks += 1;
        }
        if view.own().identity.is_some() || opponent.identity.is_some() {
            self.leaks += 1;
        }
    }
}

impl Player for Observer {
    fn choose_move(&mut self, view: &GameState) -> Move {
        self.audit(view);
        self.inner.choose_move(view)
    }

    fn react_to_choose3(&mut self, view: &GameState, mv: &Move, offered: &CardSet) -> CardSet {
        self.audit(view);
        self.inner.react_to_choose3(view, mv, offered)
    }

    fn react_to_split4(&mut self, view: &GameState, mv: &Move, a: &CardSet, b: &CardSet) -> CardSet {
        self.audit(view);
        self.inner.react_to_split4(view, mv, a, b)
    }

    fn on_dealt(&mut self, view: &GameState) {
        self.audit(view);
        self.dealt += 1;
    }

    fn on_draw(&mut self, before: &GameState, _card: Card) {
        self.audit(before);
        self.draws += 1;
    }

    fn on_opponent_move(&mut self, before: &GameState, mv: &Move) {
        self.audit(before);
        if matches!(mv, Move::Offer1 { .. } | Move::Discard2 { .. }) && !mv.cards().iter().all(|c| !c.is_known()) {
            self.leaks += 1;
        }
        self.opponent_moves += 1;
    }

    fn on_round_revealed(&mut self, revealed: &GameState) {
        assert_eq!(revealed.pile.len(), 1);
        assert!(revealed.opponent().hand.is_known());
        self.reveals += 1;
    }

    fn on_game_over(&mut self, won: bool) {
        self.won = Some(won);
    }
}

fn recorded(seed: u64) -> (GameResult, Transcript) {
    let config = GameConfig::new()
        .with_seed(seed)
        .with_round_limit(20)
        .with_transcript(true);
    let mut game = Match::new(RandomPlayer::new(seed), RandomPlayer::new(seed + 100), config);
    let result = game.play();
    let transcript = game.transcript().cloned().unwrap();
    (result, transcript)
}

// =============================================================================
// Forfeits
// =============================================================================

#[test]
fn test_reaction_outside_offer_forfeits_to_mover() {
    let first: Box<dyn Player> = Box::new(RandomPlayer::new(1));
    let second: Box<dyn Player> = Box::new(WrongPicker(RandomPlayer::new(2)));
    let result = play_game(first, second, GameConfig::new().with_seed(8));

    // The first player has to play Choose3 during round one.
    assert_eq!(result.winner, Some(PlayerId::FIRST));
    assert_eq!(result.rounds, 1);
    match result.reason {
        EndReason::Forfeit(Violation::IllegalReaction { mv, reaction }) => {
            assert!(matches!(mv, Move::Choose3 { .. }));
            assert!(!reaction.is_subset(&mv.cards()));
        }
        other => panic!("expected an illegal reaction, got {other:?}"),
    }
}

#[test]
fn test_illegal_move_forfeits_immediately() {
    let first: Box<dyn Player> = Box::new(Cheater);
    let second: Box<dyn Player> = Box::new(RandomPlayer::new(4));
    let config = GameConfig::new().with_transcript(true);
    let mut game = Match::new(first, second, config);
    let result = game.play();

    assert_eq!(result.winner, Some(PlayerId::SECOND));
    assert!(result.is_forfeit());
    assert_eq!(result.loser(), Some(PlayerId::FIRST));

    let transcript = game.transcript().unwrap();
    assert!(transcript
        .iter()
        .any(|event| matches!(event, TurnEvent::Forfeited { player, .. } if *player == PlayerId::FIRST)));
    // Nothing was applied: deal, draw, forfeit, game over.
    assert_eq!(transcript.len(), 4);
}

// =============================================================================
// Full games
// =============================================================================

#[test]
fn test_same_seed_same_game() {
    let (result_a, transcript_a) = recorded(77);
    let (result_b, transcript_b) = recorded(77);
    assert_eq!(result_a, result_b);
    assert_eq!(transcript_a, transcript_b);
}

#[test]
fn test_transcript_shape_and_roundtrip() {
    let (result, transcript) = recorded(3);

    assert!(matches!(transcript.iter().next(), Some(TurnEvent::Dealt { .. })));
    assert_eq!(transcript.last(), Some(&TurnEvent::GameOver { result }));
    let dealt = transcript
        .iter()
        .filter(|event| matches!(event, TurnEvent::Dealt { .. }))
        .count();
    assert_eq!(dealt as u32, result.rounds);

    let bytes = transcript.to_bytes().unwrap();
    assert_eq!(Transcript::from_bytes(&bytes).unwrap(), transcript);
    assert_eq!(transcript.lines().len(), transcript.len());
}

#[test]
fn test_players_see_only_censored_views() {
    let config = GameConfig::new().with_seed(21).with_round_limit(3);
    let mut game = Match::new(Observer::new(1), Observer::new(2), config);
    let result = game.play();
    let players = game.into_players();

    assert!(!result.is_forfeit());
    for id in PlayerId::both() {
        let observer = &players[id];
        assert_eq!(observer.leaks, 0, "{id} saw hidden cards");
        assert_eq!(observer.dealt, result.rounds);
        assert_eq!(observer.draws, 4 * result.rounds);
        assert_eq!(observer.opponent_moves, 4 * result.rounds);
        assert_eq!(observer.reveals, result.rounds);
        assert_eq!(observer.won, Some(result.is_winner(id)));
    }
}

#[test]
fn test_round_limit_ends_without_winner() {
    let result = play_game(RandomPlayer::new(1), RandomPlayer::new(2), GameConfig::new().with_round_limit(1));
    assert_eq!(result.rounds, 1);
    match result.reason {
        EndReason::RoundLimit => assert!(result.winner.is_none()),
        EndReason::Favors(check) => assert_eq!(result.winner, check.winner()),
        EndReason::Forfeit(_) => panic!("random players never forfeit"),
    }
}

#[test]
fn test_batch_accounts_for_every_game() {
    let config = GameConfig::new().with_seed(500).with_round_limit(25);
    let stats = play_games(12, &config, |seed| (RandomPlayer::new(seed), RandomPlayer::new(seed ^ 0xff)));

    assert_eq!(stats.games, 12);
    assert_eq!(stats.forfeits[PlayerId::FIRST] + stats.forfeits[PlayerId::SECOND], 0);
    let decided = stats.wins[PlayerId::FIRST] + stats.wins[PlayerId::SECOND];
    assert_eq!(decided + stats.unfinished, 12);
    assert_eq!(stats.rounds_histogram.values().sum::<u32>(), 12);
}

#[test]
fn test_maximin_against_random() {
    let config = GameConfig::new().with_seed(9).with_round_limit(25);
    let stats = play_games(6, &config, |seed| -> (Box<dyn Player>, Box<dyn Player>) {
        (
            Box::new(MaximinPlayer::with_config(MaximinConfig::default().with_seed(seed))),
            Box::new(RandomPlayer::new(seed)),
        )
    });

    assert_eq!(stats.games, 6);
    assert_eq!(stats.forfeits[PlayerId::FIRST], 0);
    assert_eq!(stats.forfeits[PlayerId::SECOND], 0);
}
