//! Session configuration options.

/// Configuration options for a blackjack session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjsolo::SessionOptions;
///
/// let options = SessionOptions::default()
///     .with_starting_bankroll(250)
///     .with_strict_bets(false);
/// assert_eq!(options.starting_bankroll, 250);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionOptions {
    /// Bankroll at the start of the session.
    pub starting_bankroll: i64,
    /// Dealer keeps drawing while below this value. A soft total counts too.
    pub dealer_stands_at: u8,
    /// Whether zero and negative bets are rejected.
    pub strict_bets: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            starting_bankroll: 100,
            dealer_stands_at: 17,
            strict_bets: true,
        }
    }
}

impl SessionOptions {
    /// Sets the starting bankroll.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_starting_bankroll(500);
    /// assert_eq!(options.starting_bankroll, 500);
    /// ```
    #[must_use]
    pub const fn with_starting_bankroll(mut self, bankroll: i64) -> Self {
        self.starting_bankroll = bankroll;
        self
    }

    /// Sets the value at which the dealer stops drawing.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_dealer_stands_at(18);
    /// assert_eq!(options.dealer_stands_at, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_at(mut self, value: u8) -> Self {
        self.dealer_stands_at = value;
        self
    }

    /// Sets whether non-positive bets are rejected.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_strict_bets(false);
    /// assert!(!options.strict_bets);
    /// ```
    #[must_use]
    pub const fn with_strict_bets(mut self, strict: bool) -> Self {
        self.strict_bets = strict;
        self
    }
}
