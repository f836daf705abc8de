//! Round state types.

use core::fmt;

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundState {
    /// No round in play; waiting for a bet.
    Betting,
    /// Player may hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and was settled. A new bet starts the next one.
    Resolved,
}

impl RoundState {
    /// Returns whether a new bet may be placed in this state.
    #[must_use]
    pub const fn accepts_bets(self) -> bool {
        matches!(self, Self::Betting | Self::Resolved)
    }
}

impl fmt::Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Betting => "betting",
            Self::PlayerTurn => "on the player's turn",
            Self::DealerTurn => "on the dealer's turn",
            Self::Resolved => "resolved",
        };
        f.write_str(name)
    }
}
