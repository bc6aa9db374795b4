//! Pure state transitions: deal, draw, apply a move, update favors, check
//! for a winner.
//!
//! Each function takes the acting seat explicitly and returns a new
//! `GameState`; the input is never modified.
//!
//! ## Round lifecycle
//!
//! ```text
//! deal ─► (draw ─► apply_move) × 8 ─► reveal ─► update_favors ─► evaluate_win
//! ```
//!
//! Invariant violations (empty pile, inconsistent favors, a round that did not
//! use every move kind) are engine bugs and panic.

use std::cmp::Ordering;

use crate::core::{
    Card, CardSet, Favor, Favors, GameRng, GameState, Move, PlayerId, PlayerPair, PlayerState,
    HAND_SIZE, TURNS_PER_ROUND, TYPES_TO_WIN, WEIGHT_TO_WIN,
};

use super::outcome::{WinCheck, WinCondition};

/// Deal a fresh round from the full deck.
///
/// The starter is dealt first. `favors` carries over from the previous round
/// (or is neutral for the first round). Identities are the seats.
#[must_use]
pub fn deal(rng: &mut GameRng, favors: PlayerPair<Favors>, starter: PlayerId, round: u32) -> GameState {
    let identities = PlayerPair::new(Some);
    deal_with(rng, favors, identities, starter, round)
}

fn deal_with(
    rng: &mut GameRng,
    favors: PlayerPair<Favors>,
    identities: PlayerPair<Option<PlayerId>>,
    starter: PlayerId,
    round: u32,
) -> GameState {
    let mut pile = CardSet::universe();
    let mut players = PlayerPair::with_value(PlayerState::default());

    for id in [starter, starter.other()] {
        let hand = pile
            .sample(rng, HAND_SIZE)
            .unwrap_or_else(|| panic!("deck too small to deal {HAND_SIZE} cards"));
        pile = pile - hand;
        players[id] = PlayerState::dealt(hand, favors[id], id == starter, identities[id]);
    }

    let mut state = GameState::from_parts(players, pile, starter);
    state.round = round;
    state
}

/// Deal the round after `previous`, carrying favors and identities and
/// alternating the starter.
#[must_use]
pub fn next_deal(previous: &GameState, rng: &mut GameRng) -> GameState {
    let favors = PlayerPair::new(|id| previous.player(id).favors);
    let identities = PlayerPair::new(|id| previous.player(id).identity);
    deal_with(rng, favors, identities, previous.starter().other(), previous.round + 1)
}

/// Draw one card uniformly at random from the pile into `player`'s hand.
///
/// # Panics
///
/// Panics if the pile is empty.
#[must_use]
pub fn draw(state: &GameState, player: PlayerId, rng: &mut GameRng) -> (GameState, Card) {
    let cards: Vec<Card> = state.pile.iter().collect();
    let Some(&card) = rng.choose(&cards) else {
        panic!("{player} drew from an empty pile in round {}", state.round);
    };

    let drawn = CardSet::single(card);
    let mut next = *state;
    next.pile = next.pile - drawn;
    next.player_mut(player).hand += drawn;
    (next, card)
}

/// Apply `mv` by `mover`, with the opponent's `reaction` for Choose3/Split4.
///
/// The move must already be valid for `mover`, and the reaction valid for the
/// move. The mover's hand may be a censored view: real cards missing from it
/// are taken from its placeholders instead.
///
/// Completes the current turn.
///
/// # Panics
///
/// Panics if the mover cannot supply the cards, or if a reaction is missing
/// for a move that needs one.
#[must_use]
pub fn apply_move(state: &GameState, mover: PlayerId, mv: &Move, reaction: Option<&CardSet>) -> GameState {
    let offered = mv.cards();
    let mut own = *state.player(mover);
    own.hand = own
        .hand
        .withdraw(&offered)
        .unwrap_or_else(|| panic!("{mover} cannot play {mv} from hand {}", own.hand));
    own.moves = own.moves.with_used(mv.kind());

    let mut taken = CardSet::EMPTY;
    match mv {
        Move::Offer1 { cards } => own.hidden += *cards,
        Move::Discard2 { cards } => own.discarded += *cards,
        Move::Choose3 { .. } | Move::Split4 { .. } => {
            let Some(reaction) = reaction else {
                panic!("{mv} needs a reaction");
            };
            taken = *reaction;
            own.played += offered - taken;
        }
    }

    let mut next = state.with_player(mover, own);
    next.player_mut(mover.other()).played += taken;
    next.turn += 1;
    next
}

/// Recompute both sides' favors from played + hidden counts.
///
/// A strictly larger count flips the type to that side; a tie keeps the
/// previous marker.
///
/// # Panics
///
/// Panics if the resulting arrays are not elementwise opposite.
#[must_use]
pub fn update_favors(state: &GameState) -> GameState {
    let mut next = *state;
    for id in PlayerId::both() {
        let mine = state.player(id).scoring();
        let theirs = state.player(id.other()).scoring();
        let previous = state.player(id).favors;

        let favors = Card::REAL.into_iter().fold(previous, |favors, card| {
            let marker = match mine.count(card).cmp(&theirs.count(card)) {
                Ordering::Greater => Favor::Mine,
                Ordering::Less => Favor::Theirs,
                Ordering::Equal => previous[card],
            };
            favors.with(card, marker)
        });
        next.player_mut(id).favors = favors;
    }

    assert!(
        next.favors_consistent(),
        "favor arrays are not opposite after round {}: {:?} vs {:?}",
        next.round,
        next.player(PlayerId::FIRST).favors,
        next.player(PlayerId::SECOND).favors,
    );
    next
}

fn weight_condition(favors: &Favors) -> Option<WinCondition> {
    let weight = favors.weight_of_mine();
    (weight >= WEIGHT_TO_WIN).then_some(WinCondition::Weight(weight))
}

fn types_condition(favors: &Favors) -> Option<WinCondition> {
    let count = favors.count_of_mine();
    (count >= TYPES_TO_WIN).then_some(WinCondition::Types(count))
}

/// Check the win conditions after a favor update.
///
/// Evaluation order: the weight condition for the starter, then for the
/// other side, then the type-count condition in the same order. The first
/// hit wins; if the other side also meets either condition the result is
/// `Contested`.
#[must_use]
pub fn evaluate_win(state: &GameState) -> WinCheck {
    let starter = state.starter();
    let order = [starter, starter.other()];
    let favors = |id: PlayerId| state.player(id).favors;

    let first = order
        .iter()
        .find_map(|&id| weight_condition(&favors(id)).map(|c| (id, c)))
        .or_else(|| order.iter().find_map(|&id| types_condition(&favors(id)).map(|c| (id, c))));

    let Some((winner, condition)) = first else {
        return WinCheck::None;
    };

    let rival = favors(winner.other());
    match weight_condition(&rival).or_else(|| types_condition(&rival)) {
        Some(rival_condition) => WinCheck::Contested {
            winner,
            condition,
            rival_condition,
        },
        None => WinCheck::Decided { winner, condition },
    }
}

/// Whether every turn of the round was played.
#[must_use]
pub fn round_complete(state: &GameState) -> bool {
    state.turn >= TURNS_PER_ROUND
}

/// Panic unless a finished round has one card left in the pile and both
/// sides used every move kind.
pub fn assert_round_end(state: &GameState) {
    assert_eq!(state.pile.len(), 1, "pile should hold exactly one card at round end");
    for id in PlayerId::both() {
        assert!(
            state.player(id).moves.all_used(),
            "{id} finished round {} without using every move",
            state.round
        );
    }
    state.assert_invariants();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MoveFlags, MoveKind};

    fn neutral() -> PlayerPair<Favors> {
        PlayerPair::with_value(Favors::NEUTRAL)
    }

    #[test]
    fn test_deal() {
        let mut rng = GameRng::new(42);
        let state = deal(&mut rng, neutral(), PlayerId::FIRST, 1);

        assert_eq!(state.own().hand.len(), 6);
        assert_eq!(state.opponent().hand.len(), 6);
        assert_eq!(state.pile.len(), 9);
        assert!(state.own().started);
        assert!(!state.opponent().started);
        assert_eq!(state.own().identity, Some(PlayerId::FIRST));
        state.assert_invariants();
    }

    #[test]
    fn test_deal_is_deterministic() {
        let a = deal(&mut GameRng::new(5), neutral(), PlayerId::FIRST, 1);
        let b = deal(&mut GameRng::new(5), neutral(), PlayerId::FIRST, 1);
        assert_eq!(a, b);
    }

    #[test]
    fn test_next_deal_alternates_and_carries() {
        let mut rng = GameRng::new(1);
        let favors = PlayerPair::from_array([
            Favors::NEUTRAL.with(Card::Pink5, Favor::Mine),
            Favors::NEUTRAL.with(Card::Pink5, Favor::Theirs),
        ]);
        let first = deal(&mut rng, favors, PlayerId::FIRST, 1);
        let second = next_deal(&first, &mut rng);

        assert_eq!(second.round, 2);
        assert_eq!(second.starter(), PlayerId::SECOND);
        assert_eq!(second.viewpoint(), PlayerId::SECOND);
        assert_eq!(second.player(PlayerId::FIRST).favors, favors[PlayerId::FIRST]);
        assert_eq!(second.player(PlayerId::SECOND).identity, Some(PlayerId::SECOND));
        assert_eq!(second.player(PlayerId::FIRST).moves, MoveFlags::NONE);
        second.assert_invariants();
    }

    #[test]
    fn test_draw_moves_card_from_pile() {
        let mut rng = GameRng::new(3);
        let state = deal(&mut rng, neutral(), PlayerId::FIRST, 1);
        let (next, card) = draw(&state, PlayerId::FIRST, &mut rng);

        assert_eq!(next.pile.len(), 8);
        assert_eq!(next.own().hand.len(), 7);
        assert_eq!(next.own().hand.count(card), state.own().hand.count(card) + 1);
        assert_eq!(next.pile.count(card) + 1, state.pile.count(card));
        next.assert_invariants();
    }

    #[test]
    #[should_panic(expected = "empty pile")]
    fn test_draw_from_empty_pile_panics() {
        let state = GameState::framed(PlayerState::default(), PlayerState::default(), CardSet::EMPTY);
        let _ = draw(&state, PlayerId::FIRST, &mut GameRng::new(0));
    }

    #[test]
    fn test_apply_offer_and_discard() {
        let own = PlayerState {
            hand: CardSet::from_cards(&[Card::Red2, Card::Red2, Card::Pink5]),
            ..PlayerState::default()
        };
        let state = GameState::framed(own, PlayerState::default(), CardSet::EMPTY);

        let offered = apply_move(&state, PlayerId::FIRST, &Move::Offer1 { cards: CardSet::single(Card::Pink5) }, None);
        assert_eq!(offered.own().hidden, CardSet::single(Card::Pink5));
        assert_eq!(offered.own().hand, CardSet::from_cards(&[Card::Red2, Card::Red2]));
        assert!(offered.own().moves.is_used(MoveKind::Offer1));
        assert_eq!(offered.turn, 1);

        let pair = CardSet::from_cards(&[Card::Red2, Card::Red2]);
        let discarded = apply_move(&offered, PlayerId::FIRST, &Move::Discard2 { cards: pair }, None);
        assert_eq!(discarded.own().discarded, pair);
        assert!(discarded.own().hand.is_empty());
        assert_eq!(discarded.own().played, CardSet::EMPTY);
        assert_eq!(discarded.opponent(), state.opponent());
    }

    #[test]
    fn test_apply_split() {
        let a = CardSet::from_cards(&[Card::Red2, Card::Blue3]);
        let b = CardSet::from_cards(&[Card::Pink5, Card::Pink5]);
        let own = PlayerState {
            hand: a + b,
            ..PlayerState::default()
        };
        let state = GameState::framed(own, PlayerState::default(), CardSet::EMPTY).swapped();

        // Framed for seat 1, acting for seat 0.
        let next = apply_move(&state, PlayerId::FIRST, &Move::Split4 { a, b }, Some(&b));
        assert_eq!(next.player(PlayerId::SECOND).played, b);
        assert_eq!(next.player(PlayerId::FIRST).played, a);
        assert!(next.player(PlayerId::FIRST).hand.is_empty());
        assert!(!next.player(PlayerId::SECOND).moves.is_used(MoveKind::Split4));
        assert_eq!(next.viewpoint(), PlayerId::SECOND);
    }

    #[test]
    fn test_apply_against_censored_hand() {
        let own = PlayerState {
            hand: CardSet::unknown(5),
            ..PlayerState::default()
        };
        let state = GameState::framed(own, PlayerState::default(), CardSet::EMPTY);
        let cards = CardSet::from_cards(&[Card::Green4, Card::Green4, Card::Pink5]);

        let next = apply_move(&state, PlayerId::FIRST, &Move::Choose3 { cards }, Some(&CardSet::single(Card::Pink5)));
        assert_eq!(next.own().hand, CardSet::unknown(2));
        assert_eq!(next.own().played, CardSet::from_cards(&[Card::Green4, Card::Green4]));
        assert_eq!(next.opponent().played, CardSet::single(Card::Pink5));
    }

    #[test]
    #[should_panic(expected = "needs a reaction")]
    fn test_choose_without_reaction_panics() {
        let cards = CardSet::from_cards(&[Card::Red2, Card::Blue3, Card::Pink5]);
        let own = PlayerState { hand: cards, ..PlayerState::default() };
        let state = GameState::framed(own, PlayerState::default(), CardSet::EMPTY);
        let _ = apply_move(&state, PlayerId::FIRST, &Move::Choose3 { cards }, None);
    }

    #[test]
    fn test_update_favors_counts_hidden_not_discarded() {
        let own = PlayerState {
            played: CardSet::from_cards(&[Card::Blue3]),
            hidden: CardSet::single(Card::Pink5),
            discarded: CardSet::from_cards(&[Card::Green4, Card::Green4]),
            ..PlayerState::default()
        };
        let opponent = PlayerState {
            played: CardSet::from_cards(&[Card::Green4, Card::Blue3, Card::Blue3]),
            ..PlayerState::default()
        };
        let state = update_favors(&GameState::framed(own, opponent, CardSet::EMPTY));

        assert_eq!(state.own().favors[Card::Pink5], Favor::Mine);
        assert_eq!(state.own().favors[Card::Green4], Favor::Theirs);
        assert_eq!(state.own().favors[Card::Blue3], Favor::Theirs);
        assert_eq!(state.own().favors[Card::Red2], Favor::Neutral);
        assert!(state.favors_consistent());
    }

    #[test]
    fn test_update_favors_tie_is_sticky() {
        let own = PlayerState {
            played: CardSet::single(Card::Orange3),
            favors: Favors::NEUTRAL.with(Card::Orange3, Favor::Theirs),
            ..PlayerState::default()
        };
        let opponent = PlayerState {
            played: CardSet::single(Card::Orange3),
            favors: Favors::NEUTRAL.with(Card::Orange3, Favor::Mine),
            ..PlayerState::default()
        };
        let state = update_favors(&GameState::framed(own, opponent, CardSet::EMPTY));

        assert_eq!(state.own().favors[Card::Orange3], Favor::Theirs);
        assert_eq!(state.opponent().favors[Card::Orange3], Favor::Mine);
    }

    #[test]
    #[should_panic(expected = "favor arrays are not opposite")]
    fn test_update_favors_detects_asymmetry() {
        let own = PlayerState {
            favors: Favors::NEUTRAL.with(Card::Red2, Favor::Mine),
            ..PlayerState::default()
        };
        let _ = update_favors(&GameState::framed(own, PlayerState::default(), CardSet::EMPTY));
    }

    fn with_favors(own: Favors, started: bool) -> GameState {
        let me = PlayerState { favors: own, started, ..PlayerState::default() };
        let them = PlayerState { favors: own.negated(), started: !started, ..PlayerState::default() };
        GameState::framed(me, them, CardSet::EMPTY)
    }

    #[test]
    fn test_evaluate_win_by_weight() {
        let favors = Favors::NEUTRAL
            .with(Card::Pink5, Favor::Mine)
            .with(Card::Green4, Favor::Mine)
            .with(Card::Orange3, Favor::Mine);
        let check = evaluate_win(&with_favors(favors, false));

        assert_eq!(
            check,
            WinCheck::Decided {
                winner: PlayerId::FIRST,
                condition: WinCondition::Weight(12),
            }
        );
    }

    #[test]
    fn test_evaluate_win_by_types() {
        let favors = Favors::NEUTRAL
            .with(Card::Red2, Favor::Theirs)
            .with(Card::Yellow2, Favor::Theirs)
            .with(Card::Purple2, Favor::Theirs)
            .with(Card::Blue3, Favor::Theirs);
        let check = evaluate_win(&with_favors(favors, true));

        assert_eq!(check.winner(), Some(PlayerId::SECOND));
        assert!(!check.is_contested());
    }

    #[test]
    fn test_evaluate_win_contested() {
        // Seat 0: 5+4+2 = 11 weight. Seat 1: four types.
        let favors = Favors::NEUTRAL
            .with(Card::Pink5, Favor::Mine)
            .with(Card::Green4, Favor::Mine)
            .with(Card::Red2, Favor::Mine)
            .with(Card::Yellow2, Favor::Theirs)
            .with(Card::Purple2, Favor::Theirs)
            .with(Card::Blue3, Favor::Theirs)
            .with(Card::Orange3, Favor::Theirs);

        // The weight condition is checked for both sides before type counts.
        let check = evaluate_win(&with_favors(favors, false));
        assert_eq!(
            check,
            WinCheck::Contested {
                winner: PlayerId::FIRST,
                condition: WinCondition::Weight(11),
                rival_condition: WinCondition::Types(4),
            }
        );
    }

    #[test]
    fn test_evaluate_win_none() {
        let favors = Favors::NEUTRAL.with(Card::Pink5, Favor::Mine).with(Card::Green4, Favor::Theirs);
        assert_eq!(evaluate_win(&with_favors(favors, true)), WinCheck::None);
    }
}
