//! Render model read by the presentation layer.

use alloc::vec::Vec;

use crate::card::Card;
use crate::game::{GameSession, RoundState};

const GAME_OVER: &str = "Game Over! You have no more money.";

/// Everything a front end needs to draw the table after an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// Current round state.
    pub state: RoundState,
    /// Player cards in deal order.
    pub player_cards: Vec<Card>,
    /// Dealer cards in deal order; `None` marks the hidden hole card.
    pub dealer_cards: Vec<Option<Card>>,
    /// Player hand value.
    pub player_total: u8,
    /// Dealer value as visible to the player.
    pub dealer_total: u8,
    /// Current bankroll.
    pub bankroll: i64,
    /// Bankroll change since the session started.
    pub bankroll_delta: i64,
    /// Rounds won.
    pub wins: u32,
    /// Rounds lost.
    pub losses: u32,
    /// Status line; empty while nothing needs saying.
    pub message: &'static str,
    /// Whether hit and stand are available.
    pub can_act: bool,
    /// Whether the engine would accept a bet.
    pub can_bet: bool,
}

impl TableView {
    /// Captures the session as the player sees it.
    #[must_use]
    pub fn new(session: &GameSession) -> Self {
        let dealer = session.dealer_hand();
        let hole_revealed = dealer.is_hole_revealed();
        let dealer_cards = dealer
            .cards()
            .iter()
            .enumerate()
            .map(|(index, card)| (hole_revealed || index != 1).then_some(*card))
            .collect();

        let ledger = session.ledger();
        let bankrupt = ledger.is_bankrupt();
        let message = if bankrupt {
            GAME_OVER
        } else {
            session.last_result().map_or("", |result| result.message())
        };

        Self {
            state: session.state(),
            player_cards: session.player_hand().cards().to_vec(),
            dealer_cards,
            player_total: session.player_hand().value(),
            dealer_total: dealer.visible_value(),
            bankroll: ledger.bankroll(),
            bankroll_delta: ledger.net(),
            wins: ledger.wins(),
            losses: ledger.losses(),
            message,
            can_act: session.state() == RoundState::PlayerTurn,
            can_bet: session.state().accepts_bets() && !bankrupt,
        }
    }

    /// Replaces the status line, e.g. with an error notice.
    #[must_use]
    pub const fn with_message(mut self, message: &'static str) -> Self {
        self.message = message;
        self
    }
}
