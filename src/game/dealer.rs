use alloc::vec::Vec;

use crate::card::Card;
use crate::error::EmptyDeckError;
use crate::result::{Outcome, RoundResult};

use super::{GameSession, RoundState};

/// Decides a round from the final hand values.
///
/// A player bust always loses. Otherwise a dealer bust loses, then the higher
/// value wins and equal values push.
///
/// # Example
///
/// ```
/// use bjsolo::{Outcome, determine_outcome};
///
/// assert_eq!(determine_outcome(18, 22), Outcome::PlayerWin);
/// assert_eq!(determine_outcome(18, 19), Outcome::DealerWin);
/// assert_eq!(determine_outcome(19, 19), Outcome::Push);
/// ```
#[must_use]
pub const fn determine_outcome(player_value: u8, dealer_value: u8) -> Outcome {
    if player_value > 21 {
        Outcome::DealerWin
    } else if dealer_value > 21 || player_value > dealer_value {
        Outcome::PlayerWin
    } else if player_value < dealer_value {
        Outcome::DealerWin
    } else {
        Outcome::Push
    }
}

impl GameSession {
    /// Dealer reveals the hole card and draws while below the stand value.
    /// There is no soft-17 rule: any total at or above the threshold stands.
    ///
    /// Returns the cards drawn by the dealer.
    pub(super) fn dealer_play(&mut self) -> Result<Vec<Card>, EmptyDeckError> {
        self.dealer_hand.reveal_hole();

        let mut drawn_cards = Vec::new();
        while self.dealer_hand.value() < self.options.dealer_stands_at {
            let card = self.deck.draw()?;
            self.dealer_hand.add_card(card);
            drawn_cards.push(card);
        }

        log::debug!(
            "dealer stands on {} after drawing {} card(s)",
            self.dealer_hand.value(),
            drawn_cards.len()
        );
        Ok(drawn_cards)
    }

    /// Settles the round with the ledger and moves to `Resolved`.
    ///
    /// Only reachable from the player's or dealer's turn, so a round is
    /// settled at most once.
    pub(super) fn finish(&mut self, outcome: Outcome) -> RoundResult {
        debug_assert!(matches!(
            self.state,
            RoundState::PlayerTurn | RoundState::DealerTurn
        ));

        let bet = self.ledger.bet();
        let bankroll_change = self.ledger.resolve(outcome);
        let result = RoundResult {
            outcome,
            player_value: self.player_hand.value(),
            dealer_value: self.dealer_hand.value(),
            player_bust: self.player_hand.is_bust(),
            dealer_bust: self.dealer_hand.is_bust(),
            bet,
            bankroll_change,
        };

        log::info!(
            "round resolved: {:?} ({} vs {}), bankroll {}",
            outcome,
            result.player_value,
            result.dealer_value,
            self.ledger.bankroll()
        );
        if self.ledger.is_bankrupt() {
            log::info!("bankroll exhausted, session over");
        }

        self.last_result = Some(result);
        self.state = RoundState::Resolved;
        result
    }
}
