//! Bankroll and win/loss bookkeeping that persists across rounds.

use crate::error::BetError;
use crate::result::Outcome;

/// Session-wide money and tally state.
///
/// The bet is not debited when placed. The bankroll only moves when a round
/// resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ledger {
    bankroll: i64,
    bet: i64,
    wins: u32,
    losses: u32,
    starting_bankroll: i64,
}

impl Ledger {
    /// Creates a ledger holding `starting_bankroll` with no bet and no history.
    #[must_use]
    pub const fn new(starting_bankroll: i64) -> Self {
        Self {
            bankroll: starting_bankroll,
            bet: 0,
            wins: 0,
            losses: 0,
            starting_bankroll,
        }
    }

    /// Accepts `amount` as the current bet.
    ///
    /// With `strict` set, zero and negative amounts are rejected as well.
    ///
    /// # Errors
    ///
    /// Returns an error if the bankroll is exhausted, the amount is not
    /// positive (strict only), the amount exceeds the bankroll, or settling
    /// it could overflow the bankroll. The ledger is left untouched on
    /// error.
    pub const fn place_bet(&mut self, amount: i64, strict: bool) -> Result<(), BetError> {
        if self.is_bankrupt() {
            return Err(BetError::Bankrupt);
        }
        if strict && amount <= 0 {
            return Err(BetError::NonPositiveBet);
        }
        if amount > self.bankroll {
            return Err(BetError::InsufficientFunds {
                bet: amount,
                bankroll: self.bankroll,
            });
        }
        if amount.checked_neg().is_none()
            || self.bankroll.checked_add(amount).is_none()
            || self.bankroll.checked_sub(amount).is_none()
        {
            return Err(BetError::OutOfRange);
        }

        self.bet = amount;
        Ok(())
    }

    /// Settles the current bet and returns the bankroll change.
    pub const fn resolve(&mut self, outcome: Outcome) -> i64 {
        let change = match outcome {
            Outcome::PlayerWin => {
                self.wins += 1;
                self.bet
            }
            Outcome::DealerWin => {
                self.losses += 1;
                self.bet.saturating_neg()
            }
            Outcome::Push => 0,
        };

        self.bankroll = self.bankroll.saturating_add(change);
        self.bet = 0;
        change
    }

    /// Drops the current bet without settling it.
    pub(crate) const fn release_bet(&mut self) {
        self.bet = 0;
    }

    /// Returns whether the session is over for lack of funds.
    #[must_use]
    pub const fn is_bankrupt(&self) -> bool {
        self.bankroll <= 0
    }

    /// Current bankroll.
    #[must_use]
    pub const fn bankroll(&self) -> i64 {
        self.bankroll
    }

    /// Bet at risk in the current round, 0 when none.
    #[must_use]
    pub const fn bet(&self) -> i64 {
        self.bet
    }

    /// Rounds won.
    #[must_use]
    pub const fn wins(&self) -> u32 {
        self.wins
    }

    /// Rounds lost.
    #[must_use]
    pub const fn losses(&self) -> u32 {
        self.losses
    }

    /// Bankroll the session started with.
    #[must_use]
    pub const fn starting_bankroll(&self) -> i64 {
        self.starting_bankroll
    }

    /// Profit or loss relative to the starting bankroll.
    #[must_use]
    pub const fn net(&self) -> i64 {
        self.bankroll.saturating_sub(self.starting_bankroll)
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(100)
    }
}
