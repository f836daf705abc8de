use crate::card::Card;
use crate::error::ActionError;
use crate::result::{Outcome, RoundResult};

use super::{GameSession, RoundState};

impl GameSession {
    const fn ensure_player_turn(&self) -> Result<(), ActionError> {
        match self.state {
            RoundState::PlayerTurn => Ok(()),
            state => Err(ActionError::InvalidTransition { state }),
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// Busting resolves the round as a dealer win straight away; the dealer
    /// does not play.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not on the player's turn, or if the
    /// deck is empty (the round is voided).
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        if let Err(err) = self.ensure_player_turn() {
            log::warn!("hit rejected: {err}");
            return Err(err);
        }

        let card = match self.deck.draw() {
            Ok(card) => card,
            Err(err) => {
                self.void_round();
                return Err(err.into());
            }
        };
        self.player_hand.add_card(card);
        log::debug!("player draws {card}, total {}", self.player_hand.value());

        if self.player_hand.is_bust() {
            self.finish(Outcome::DealerWin);
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// Reveals the hole card, lets the dealer play, and settles the round.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not on the player's turn, or if the
    /// deck runs out while the dealer draws (the round is voided).
    pub fn stand(&mut self) -> Result<RoundResult, ActionError> {
        if let Err(err) = self.ensure_player_turn() {
            log::warn!("stand rejected: {err}");
            return Err(err);
        }

        self.state = RoundState::DealerTurn;
        if let Err(err) = self.dealer_play() {
            self.void_round();
            return Err(err.into());
        }

        let outcome = super::determine_outcome(self.player_hand.value(), self.dealer_hand.value());
        Ok(self.finish(outcome))
    }
}
