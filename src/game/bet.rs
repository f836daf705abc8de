use crate::deck::Deck;
use crate::error::{BetError, EmptyDeckError};

use super::{GameSession, RoundState};

impl GameSession {
    fn accept_bet(&mut self, amount: i64) -> Result<(), BetError> {
        if !self.state.accepts_bets() {
            log::warn!("bet of {amount} rejected: round still in play");
            return Err(BetError::RoundInProgress);
        }

        if let Err(err) = self.ledger.place_bet(amount, self.options.strict_bets) {
            log::warn!("bet of {amount} rejected: {err}");
            return Err(err);
        }

        log::info!(
            "bet of {amount} accepted (bankroll {})",
            self.ledger.bankroll()
        );
        Ok(())
    }

    /// Places a bet and deals a new round from a freshly shuffled deck.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is still in play, the session is
    /// bankrupt, the amount is not positive (strict mode), or the amount
    /// exceeds the bankroll. Nothing changes on error.
    pub fn place_bet(&mut self, amount: i64) -> Result<(), BetError> {
        self.accept_bet(amount)?;
        let deck = Deck::shuffled(&mut self.rng);
        self.start_round(deck)?;
        Ok(())
    }

    /// Places a bet and deals from a prearranged deck instead of a freshly
    /// shuffled one. Useful for replaying a known deal.
    ///
    /// # Errors
    ///
    /// Same as [`GameSession::place_bet`], plus [`BetError::EmptyDeck`] if the
    /// deck cannot cover the initial deal. The round is voided in that case.
    pub fn place_bet_with_deck(&mut self, amount: i64, deck: Deck) -> Result<(), BetError> {
        self.accept_bet(amount)?;
        self.start_round(deck)?;
        Ok(())
    }

    /// Deals player, dealer, player, dealer. The dealer's second card stays
    /// hidden.
    fn start_round(&mut self, deck: Deck) -> Result<(), EmptyDeckError> {
        self.deck = deck;
        self.player_hand.clear();
        self.dealer_hand.clear();
        self.last_result = None;

        if let Err(err) = self.deal_initial() {
            self.void_round();
            return Err(err);
        }

        log::debug!(
            "dealt player {:?}, dealer up card {:?}",
            self.player_hand.cards(),
            self.dealer_hand.up_card()
        );
        self.state = RoundState::PlayerTurn;
        Ok(())
    }

    fn deal_initial(&mut self) -> Result<(), EmptyDeckError> {
        for _ in 0..2 {
            self.player_hand.add_card(self.deck.draw()?);
            self.dealer_hand.add_card(self.deck.draw()?);
        }
        Ok(())
    }
}
