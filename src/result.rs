//! Round outcome types.

/// Who won the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player wins (dealer busts or player has the higher value).
    PlayerWin,
    /// Dealer wins (player busts or dealer has the higher value).
    DealerWin,
    /// Tie, no money moves.
    Push,
}

/// Summary of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the player busted. The dealer does not play in that case.
    pub player_bust: bool,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// The bet that was settled.
    pub bet: i64,
    /// Change applied to the bankroll.
    pub bankroll_change: i64,
}

impl RoundResult {
    /// Status line for the player.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self.outcome {
            Outcome::PlayerWin => "Player wins!",
            Outcome::DealerWin if self.player_bust => "Player busts! Dealer wins!",
            Outcome::DealerWin => "Dealer wins!",
            Outcome::Push => "It's a tie!",
        }
    }
}
