//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`GameSession`] that deals rounds against an
//! automated dealer and keeps a running bankroll and win/loss tally.
//! Rendering is left to the caller, which reads a [`TableView`] after each
//! operation.
//!
//! # Example
//!
//! ```
//! use bjsolo::{GameSession, RoundState, SessionOptions};
//!
//! let mut session = GameSession::new(SessionOptions::default(), 42);
//! session.place_bet(10).unwrap();
//! assert_eq!(session.state(), RoundState::PlayerTurn);
//!
//! let result = session.stand().unwrap();
//! assert_eq!(session.state(), RoundState::Resolved);
//! println!("{}", result.message());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod ledger;
pub mod options;
pub mod result;
pub mod view;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANKS, Rank, SUITS, Suit};
pub use deck::Deck;
pub use error::{ActionError, BetError, EmptyDeckError};
pub use game::{GameSession, RoundState, determine_outcome};
pub use hand::{DealerHand, Hand, card_points, hand_value, is_soft};
pub use ledger::Ledger;
pub use options::SessionOptions;
pub use result::{Outcome, RoundResult};
pub use view::TableView;
