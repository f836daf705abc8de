//! Error types for game operations.

use thiserror::Error;

use crate::game::RoundState;

/// A card was requested from an exhausted deck.
///
/// Fixed deal sizes keep this from happening in normal play; seeing it means
/// an invariant broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct EmptyDeckError;

/// Errors that can occur when placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// The bet is larger than the bankroll.
    #[error("insufficient funds: bet {bet} exceeds bankroll {bankroll}")]
    InsufficientFunds {
        /// The rejected bet.
        bet: i64,
        /// The bankroll at the time of the bet.
        bankroll: i64,
    },
    /// The bet is zero or negative.
    #[error("bet amount must be positive")]
    NonPositiveBet,
    /// Settling the bet could not be represented in the bankroll.
    #[error("bet amount is out of range")]
    OutOfRange,
    /// The bankroll is exhausted and the session is over.
    #[error("bankroll is exhausted")]
    Bankrupt,
    /// A round is still being played.
    #[error("a round is already in progress")]
    RoundInProgress,
    /// The deck could not cover the initial deal.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
}

impl BetError {
    /// Short message for the player.
    #[must_use]
    pub const fn notice(&self) -> &'static str {
        match self {
            Self::InsufficientFunds { .. } => "Insufficient funds!",
            Self::NonPositiveBet => "Bet must be more than zero!",
            Self::OutOfRange => "That bet is too large!",
            Self::Bankrupt => "Game Over! You have no more money.",
            Self::RoundInProgress => "Finish the current round first!",
            Self::EmptyDeck(_) => "The deck ran out. Round cancelled.",
        }
    }
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The action is not valid in the current round state.
    #[error("action not allowed while the round is {state}")]
    InvalidTransition {
        /// The state the round was in.
        state: RoundState,
    },
    /// The deck ran out mid-round.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
}

impl ActionError {
    /// Short message for the player.
    #[must_use]
    pub const fn notice(&self) -> &'static str {
        match self {
            Self::InvalidTransition { .. } => "That move is not available right now.",
            Self::EmptyDeck(_) => "The deck ran out. Round cancelled.",
        }
    }
}
