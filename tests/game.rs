//! Session integration tests.

use std::collections::HashSet;

use bjsolo::{
    ActionError, BetError, Card, DECK_SIZE, Deck, EmptyDeckError, GameSession, Ledger, Outcome,
    Rank, RoundState, SessionOptions, Suit, determine_outcome,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// Builds a deck that deals `draws` in the given order.
fn deck_from_draws(draws: &[Card]) -> Deck {
    let mut cards = draws.to_vec();
    cards.reverse();
    Deck::from_cards(cards)
}

fn session() -> GameSession {
    GameSession::new(SessionOptions::default(), 1)
}

#[test]
fn new_session_waits_for_a_bet() {
    let session = session();
    assert_eq!(session.state(), RoundState::Betting);
    assert_eq!(session.ledger().bankroll(), 100);
    assert_eq!(session.ledger().bet(), 0);
    assert!(session.player_hand().is_empty());
    assert!(session.last_result().is_none());

    let view = session.view();
    assert!(view.can_bet);
    assert!(!view.can_act);
    assert_eq!(view.message, "");
}

#[test]
fn place_bet_deals_two_cards_each_and_hides_hole_card() {
    let mut session = session();
    session.place_bet(10).unwrap();

    assert_eq!(session.state(), RoundState::PlayerTurn);
    assert_eq!(session.ledger().bet(), 10);
    assert_eq!(session.ledger().bankroll(), 100);
    assert_eq!(session.player_hand().len(), 2);
    assert_eq!(session.dealer_hand().len(), 2);
    assert_eq!(session.cards_remaining(), 48);
    assert!(!session.dealer_hand().is_hole_revealed());

    let view = session.view();
    assert!(view.can_act);
    assert!(!view.can_bet);
    assert!(view.dealer_cards[0].is_some());
    assert!(view.dealer_cards[1].is_none());
    assert_eq!(
        view.dealer_total,
        session.dealer_hand().cards()[0].points()
    );
}

#[test]
fn deal_alternates_player_and_dealer() {
    let mut session = session();
    let draws = [
        card(Suit::Hearts, Rank::Two),
        card(Suit::Clubs, Rank::Three),
        card(Suit::Hearts, Rank::Four),
        card(Suit::Clubs, Rank::Five),
    ];
    session.place_bet_with_deck(5, deck_from_draws(&draws)).unwrap();

    assert_eq!(session.player_hand().cards(), &[draws[0], draws[2]]);
    assert_eq!(session.dealer_hand().cards(), &[draws[1], draws[3]]);
}

#[test]
fn bet_over_bankroll_is_rejected_without_changes() {
    let mut session = session();
    let err = session.place_bet(150).unwrap_err();

    assert_eq!(
        err,
        BetError::InsufficientFunds {
            bet: 150,
            bankroll: 100
        }
    );
    assert_eq!(err.notice(), "Insufficient funds!");
    assert_eq!(session.ledger().bankroll(), 100);
    assert_eq!(session.ledger().bet(), 0);
    assert_eq!(session.state(), RoundState::Betting);
    assert!(session.player_hand().is_empty());
}

#[test]
fn bet_of_whole_bankroll_is_accepted() {
    let mut session = session();
    session.place_bet(100).unwrap();
    assert_eq!(session.ledger().bet(), 100);
}

#[test]
fn non_positive_bets_depend_on_strict_mode() {
    let mut strict = session();
    assert_eq!(strict.place_bet(0).unwrap_err(), BetError::NonPositiveBet);
    assert_eq!(strict.place_bet(-5).unwrap_err(), BetError::NonPositiveBet);

    let options = SessionOptions::default().with_strict_bets(false);
    let mut lenient = GameSession::new(options, 1);
    lenient.place_bet(0).unwrap();
    assert_eq!(lenient.state(), RoundState::PlayerTurn);
}

#[test]
fn bet_during_a_round_is_rejected() {
    let mut session = session();
    session.place_bet(10).unwrap();
    assert_eq!(
        session.place_bet(10).unwrap_err(),
        BetError::RoundInProgress
    );
    assert_eq!(session.ledger().bet(), 10);
}

#[test]
fn player_bust_resolves_without_dealer_play() {
    let mut session = session();
    let deck = deck_from_draws(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Nine),
        card(Suit::Diamonds, Rank::Six),
        card(Suit::Spades, Rank::Seven),
        card(Suit::Spades, Rank::King),
    ]);
    session.place_bet_with_deck(20, deck).unwrap();

    let drawn = session.hit().unwrap();
    assert_eq!(drawn, card(Suit::Spades, Rank::King));
    assert_eq!(session.state(), RoundState::Resolved);
    assert_eq!(session.dealer_hand().len(), 2);
    assert!(!session.dealer_hand().is_hole_revealed());

    let result = session.last_result().copied().unwrap();
    assert_eq!(result.outcome, Outcome::DealerWin);
    assert!(result.player_bust);
    assert_eq!(result.bankroll_change, -20);
    assert_eq!(result.message(), "Player busts! Dealer wins!");

    assert_eq!(session.ledger().bankroll(), 80);
    assert_eq!(session.ledger().losses(), 1);
    assert_eq!(session.ledger().wins(), 0);
    assert_eq!(session.ledger().bet(), 0);

    let view = session.view();
    assert_eq!(view.bankroll_delta, -20);
    assert_eq!(view.message, "Player busts! Dealer wins!");
    assert!(view.can_bet);
}

#[test]
fn hit_below_21_keeps_player_turn() {
    let mut session = session();
    let deck = deck_from_draws(&[
        card(Suit::Hearts, Rank::Two),
        card(Suit::Clubs, Rank::Nine),
        card(Suit::Diamonds, Rank::Three),
        card(Suit::Spades, Rank::Seven),
        card(Suit::Spades, Rank::Four),
    ]);
    session.place_bet_with_deck(20, deck).unwrap();

    session.hit().unwrap();
    assert_eq!(session.state(), RoundState::PlayerTurn);
    assert_eq!(session.player_hand().value(), 9);
    assert_eq!(session.ledger().bet(), 20);
}

#[test]
fn stand_player_wins_pays_even_money() {
    let mut session = session();
    let deck = deck_from_draws(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Nine),
        card(Suit::Spades, Rank::Six),
        card(Suit::Spades, Rank::Two),
    ]);
    session.place_bet_with_deck(20, deck).unwrap();

    let result = session.stand().unwrap();
    assert!(session.dealer_hand().is_hole_revealed());
    assert_eq!(session.dealer_hand().len(), 3);
    assert_eq!(result.outcome, Outcome::PlayerWin);
    assert_eq!(result.player_value, 19);
    assert_eq!(result.dealer_value, 18);
    assert_eq!(result.message(), "Player wins!");

    assert_eq!(session.ledger().bankroll(), 120);
    assert_eq!(session.ledger().wins(), 1);
    assert_eq!(session.view().dealer_total, 18);
}

#[test]
fn dealer_bust_is_a_player_win() {
    let mut session = session();
    let deck = deck_from_draws(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Two),
        card(Suit::Spades, Rank::Six),
        card(Suit::Spades, Rank::King),
    ]);
    session.place_bet_with_deck(10, deck).unwrap();

    let result = session.stand().unwrap();
    assert!(result.dealer_bust);
    assert_eq!(result.dealer_value, 26);
    assert_eq!(result.outcome, Outcome::PlayerWin);
    assert_eq!(session.ledger().bankroll(), 110);
}

#[test]
fn dealer_higher_total_wins() {
    let mut session = session();
    let deck = deck_from_draws(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Seven),
        card(Suit::Spades, Rank::Nine),
    ]);
    session.place_bet_with_deck(30, deck).unwrap();

    let result = session.stand().unwrap();
    assert_eq!(result.outcome, Outcome::DealerWin);
    assert_eq!(result.message(), "Dealer wins!");
    assert_eq!(session.ledger().bankroll(), 70);
    assert_eq!(session.ledger().losses(), 1);
}

#[test]
fn tie_is_a_push() {
    let mut session = session();
    let deck = deck_from_draws(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::King),
        card(Suit::Diamonds, Rank::Eight),
        card(Suit::Spades, Rank::Eight),
    ]);
    session.place_bet_with_deck(25, deck).unwrap();

    let result = session.stand().unwrap();
    assert_eq!(result.outcome, Outcome::Push);
    assert_eq!(result.bankroll_change, 0);
    assert_eq!(result.message(), "It's a tie!");
    assert_eq!(session.ledger().bankroll(), 100);
    assert_eq!(session.ledger().wins(), 0);
    assert_eq!(session.ledger().losses(), 0);
    assert_eq!(session.ledger().bet(), 0);
}

#[test]
fn dealer_stands_on_soft_17() {
    let mut session = session();
    let deck = deck_from_draws(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Ace),
        card(Suit::Diamonds, Rank::Seven),
        card(Suit::Spades, Rank::Six),
        card(Suit::Spades, Rank::Two),
    ]);
    session.place_bet_with_deck(10, deck).unwrap();

    let result = session.stand().unwrap();
    assert_eq!(session.dealer_hand().len(), 2);
    assert!(session.dealer_hand().is_soft());
    assert_eq!(result.dealer_value, 17);
    assert_eq!(result.outcome, Outcome::Push);
    assert_eq!(session.cards_remaining(), 1);
}

#[test]
fn dealer_draws_until_reaching_17() {
    let mut session = session();
    let deck = deck_from_draws(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Two),
        card(Suit::Diamonds, Rank::Ten),
        card(Suit::Spades, Rank::Three),
        card(Suit::Hearts, Rank::Two),
        card(Suit::Hearts, Rank::Four),
        card(Suit::Hearts, Rank::Six),
        card(Suit::Hearts, Rank::King),
    ]);
    session.place_bet_with_deck(10, deck).unwrap();

    let result = session.stand().unwrap();
    assert_eq!(session.dealer_hand().len(), 5);
    assert_eq!(result.dealer_value, 17);
    assert_eq!(result.outcome, Outcome::PlayerWin);
    assert_eq!(session.cards_remaining(), 1);
}

#[test]
fn dealer_stand_threshold_is_configurable() {
    let options = SessionOptions::default().with_dealer_stands_at(18);
    let mut session = GameSession::new(options, 1);
    let deck = deck_from_draws(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Eight),
        card(Suit::Spades, Rank::Seven),
        card(Suit::Spades, Rank::Two),
    ]);
    session.place_bet_with_deck(10, deck).unwrap();

    assert_eq!(session.options().dealer_stands_at, 18);
    let result = session.stand().unwrap();
    assert_eq!(result.dealer_value, 19);
    assert_eq!(result.outcome, Outcome::DealerWin);
}

#[test]
fn actions_outside_player_turn_are_rejected() {
    let mut session = session();
    assert_eq!(
        session.hit().unwrap_err(),
        ActionError::InvalidTransition {
            state: RoundState::Betting
        }
    );
    assert_eq!(
        session.stand().unwrap_err(),
        ActionError::InvalidTransition {
            state: RoundState::Betting
        }
    );

    session.place_bet(10).unwrap();
    session.stand().unwrap();
    let snapshot = *session.ledger();

    assert_eq!(
        session.hit().unwrap_err(),
        ActionError::InvalidTransition {
            state: RoundState::Resolved
        }
    );
    assert_eq!(
        session.stand().unwrap_err(),
        ActionError::InvalidTransition {
            state: RoundState::Resolved
        }
    );
    assert_eq!(session.ledger(), &snapshot);
}

#[test]
fn new_round_resets_hands_and_result() {
    let mut session = session();
    session.place_bet(10).unwrap();
    session.stand().unwrap();
    assert!(session.last_result().is_some());

    session.place_bet(10).unwrap();
    assert_eq!(session.state(), RoundState::PlayerTurn);
    assert!(session.last_result().is_none());
    assert_eq!(session.player_hand().len(), 2);
    assert_eq!(session.dealer_hand().len(), 2);
    assert!(!session.dealer_hand().is_hole_revealed());
    assert_eq!(session.cards_remaining(), 48);
}

#[test]
fn losing_the_whole_bankroll_ends_the_session() {
    let mut session = session();
    let deck = deck_from_draws(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Six),
        card(Suit::Spades, Rank::Nine),
    ]);
    session.place_bet_with_deck(100, deck).unwrap();
    session.stand().unwrap();

    assert_eq!(session.ledger().bankroll(), 0);
    assert!(session.is_bankrupt());
    assert_eq!(session.place_bet(10).unwrap_err(), BetError::Bankrupt);
    assert_eq!(session.state(), RoundState::Resolved);

    let view = session.view();
    assert!(!view.can_bet);
    assert_eq!(view.message, "Game Over! You have no more money.");
    assert_eq!(view.bankroll_delta, -100);
}

#[test]
fn short_deck_voids_the_deal() {
    let mut session = session();
    let deck = deck_from_draws(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Six),
    ]);

    assert_eq!(
        session.place_bet_with_deck(10, deck).unwrap_err(),
        BetError::EmptyDeck(EmptyDeckError)
    );
    assert_eq!(session.state(), RoundState::Betting);
    assert_eq!(session.ledger(), &Ledger::new(100));

    session.place_bet(10).unwrap();
    assert_eq!(session.state(), RoundState::PlayerTurn);
}

#[test]
fn deck_running_out_during_dealer_play_voids_the_round() {
    let mut session = session();
    let deck = deck_from_draws(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Nine),
        card(Suit::Spades, Rank::Five),
    ]);
    session.place_bet_with_deck(10, deck).unwrap();

    assert_eq!(
        session.stand().unwrap_err(),
        ActionError::EmptyDeck(EmptyDeckError)
    );
    assert_eq!(session.state(), RoundState::Betting);
    assert_eq!(session.ledger(), &Ledger::new(100));
    assert!(session.last_result().is_none());
}

#[test]
fn deck_running_out_on_hit_voids_the_round() {
    let mut session = session();
    let deck = deck_from_draws(&[
        card(Suit::Hearts, Rank::Two),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Three),
        card(Suit::Spades, Rank::Five),
    ]);
    session.place_bet_with_deck(10, deck).unwrap();

    assert_eq!(
        session.hit().unwrap_err(),
        ActionError::EmptyDeck(EmptyDeckError)
    );
    assert_eq!(session.state(), RoundState::Betting);
    assert_eq!(session.ledger().bet(), 0);
    assert_eq!(session.ledger().losses(), 0);
}

#[test]
fn cards_are_conserved_across_a_round() {
    for seed in 0..50 {
        let mut session = GameSession::new(SessionOptions::default(), seed);
        session.place_bet(1).unwrap();

        while session.state() == RoundState::PlayerTurn && session.player_hand().value() < 15 {
            session.hit().unwrap();
        }
        if session.state() == RoundState::PlayerTurn {
            let result = session.stand().unwrap();
            assert!(result.dealer_value >= 17);
        }
        assert_eq!(session.state(), RoundState::Resolved);

        let mut all: Vec<Card> = session.deck().cards().to_vec();
        all.extend_from_slice(session.player_hand().cards());
        all.extend_from_slice(session.dealer_hand().cards());
        assert_eq!(all.len(), DECK_SIZE);
        let unique: HashSet<Card> = all.into_iter().collect();
        assert_eq!(unique.len(), DECK_SIZE);
    }
}

#[test]
fn same_seed_replays_the_same_deals() {
    let mut first = GameSession::new(SessionOptions::default(), 77);
    let mut second = GameSession::new(SessionOptions::default(), 77);

    for _ in 0..5 {
        first.place_bet(1).unwrap();
        second.place_bet(1).unwrap();
        assert_eq!(first.player_hand(), second.player_hand());
        assert_eq!(first.dealer_hand(), second.dealer_hand());

        let a = first.stand().unwrap();
        let b = second.stand().unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn outcome_depends_only_on_hand_values() {
    assert_eq!(determine_outcome(22, 18), Outcome::DealerWin);
    assert_eq!(determine_outcome(12, 22), Outcome::PlayerWin);
    assert_eq!(determine_outcome(21, 20), Outcome::PlayerWin);
    assert_eq!(determine_outcome(17, 20), Outcome::DealerWin);
    assert_eq!(determine_outcome(20, 20), Outcome::Push);
    assert_eq!(determine_outcome(17, 17), Outcome::Push);
}

#[test]
fn ledger_settles_each_outcome() {
    let mut ledger = Ledger::new(100);
    ledger.place_bet(20, true).unwrap();
    assert_eq!(ledger.resolve(Outcome::PlayerWin), 20);
    assert_eq!(ledger.bankroll(), 120);
    assert_eq!(ledger.wins(), 1);
    assert_eq!(ledger.bet(), 0);

    ledger.place_bet(50, true).unwrap();
    assert_eq!(ledger.resolve(Outcome::Push), 0);
    assert_eq!(ledger.bankroll(), 120);
    assert_eq!((ledger.wins(), ledger.losses()), (1, 0));

    ledger.place_bet(40, true).unwrap();
    assert_eq!(ledger.resolve(Outcome::DealerWin), -40);
    assert_eq!(ledger.bankroll(), 80);
    assert_eq!(ledger.losses(), 1);
    assert_eq!(ledger.net(), -20);
}

#[test]
fn ledger_rejects_bet_over_bankroll() {
    let mut ledger = Ledger::new(100);
    assert_eq!(
        ledger.place_bet(150, true).unwrap_err(),
        BetError::InsufficientFunds {
            bet: 150,
            bankroll: 100
        }
    );
    assert_eq!(ledger, Ledger::new(100));
}

#[test]
fn session_keeps_the_options_it_was_created_with() {
    let options = SessionOptions::default()
        .with_starting_bankroll(250)
        .with_strict_bets(false);
    let session = GameSession::new(options, 1);

    assert_eq!(session.options(), &options);
    assert_eq!(session.ledger().bankroll(), 250);
    assert_eq!(session.ledger().starting_bankroll(), 250);
}

#[test]
fn lenient_bets_that_cannot_be_settled_are_rejected() {
    let mut ledger = Ledger::new(100);
    assert_eq!(
        ledger.place_bet(-i64::MAX, false).unwrap_err(),
        BetError::OutOfRange
    );
    assert_eq!(
        ledger.place_bet(i64::MIN, false).unwrap_err(),
        BetError::OutOfRange
    );
    assert_eq!(ledger, Ledger::new(100));

    ledger.place_bet(-5, false).unwrap();
    assert_eq!(ledger.resolve(Outcome::DealerWin), 5);
    assert_eq!(ledger.bankroll(), 105);
}

#[test]
fn winning_bet_that_would_overflow_the_bankroll_is_rejected() {
    let mut ledger = Ledger::new(i64::MAX - 5);
    assert_eq!(ledger.place_bet(10, true).unwrap_err(), BetError::OutOfRange);

    ledger.place_bet(5, true).unwrap();
    assert_eq!(ledger.resolve(Outcome::PlayerWin), 5);
    assert_eq!(ledger.bankroll(), i64::MAX);
}

#[test]
fn session_rejects_unsettleable_bet_without_dealing() {
    let options = SessionOptions::default().with_strict_bets(false);
    let mut session = GameSession::new(options, 1);

    assert_eq!(
        session.place_bet(i64::MIN).unwrap_err(),
        BetError::OutOfRange
    );
    assert_eq!(session.state(), RoundState::Betting);
    assert!(session.player_hand().is_empty());
    assert_eq!(session.ledger().bet(), 0);
}
