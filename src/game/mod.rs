//! Session engine and round state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::hand::{DealerHand, Hand};
use crate::ledger::Ledger;
use crate::options::SessionOptions;
use crate::result::RoundResult;
use crate::view::TableView;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use dealer::determine_outcome;
pub use state::RoundState;

/// A single-player blackjack session against an automated dealer.
///
/// The session owns the deck, both hands, the round state and the ledger.
/// Every operation runs to completion before returning.
#[derive(Debug, Clone)]
pub struct GameSession {
    options: SessionOptions,
    deck: Deck,
    player_hand: Hand,
    dealer_hand: DealerHand,
    state: RoundState,
    ledger: Ledger,
    last_result: Option<RoundResult>,
    rng: ChaCha8Rng,
}

impl GameSession {
    /// Creates a new session with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::{GameSession, RoundState, SessionOptions};
    ///
    /// let session = GameSession::new(SessionOptions::default(), 42);
    /// assert_eq!(session.state(), RoundState::Betting);
    /// assert_eq!(session.ledger().bankroll(), 100);
    /// ```
    #[must_use]
    pub fn new(options: SessionOptions, seed: u64) -> Self {
        Self {
            options,
            deck: Deck::new(),
            player_hand: Hand::new(),
            dealer_hand: DealerHand::new(),
            state: RoundState::Betting,
            ledger: Ledger::new(options.starting_bankroll),
            last_result: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the options the session was created with.
    #[must_use]
    pub const fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the ledger.
    #[must_use]
    pub const fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer_hand
    }

    /// Returns the undealt part of the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the result of the most recently resolved round, if the current
    /// round has resolved.
    #[must_use]
    pub const fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Returns whether the bankroll is exhausted.
    #[must_use]
    pub const fn is_bankrupt(&self) -> bool {
        self.ledger.is_bankrupt()
    }

    /// Builds the render model for the presentation layer.
    #[must_use]
    pub fn view(&self) -> TableView {
        TableView::new(self)
    }

    /// Abandons the round after the deck ran dry. The bet is released
    /// without touching the tallies.
    fn void_round(&mut self) {
        log::error!(
            "deck exhausted with {} player and {} dealer cards dealt; round voided",
            self.player_hand.len(),
            self.dealer_hand.len()
        );
        self.ledger.release_bet();
        self.last_result = None;
        self.state = RoundState::Betting;
    }
}
