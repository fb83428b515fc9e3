//! A two-player matching card game engine with optional `no_std` support.
//!
//! Players alternately play a card matching the top of the discard pile in
//! suit or rank, drawing from a hidden deck when they cannot; the first
//! player to empty their hand wins. The crate provides the [`Deck`]
//! container and a [`Game`] type that manages dealing, turns, and the
//! refill of the hidden deck from played cards.
//!
//! # Example
//!
//! ```
//! use matchrs::{Game, GameOptions};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! game.deal().unwrap();
//!
//! let result = game.play_turn().unwrap();
//! assert_eq!(result.player, matchrs::Player::One);
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
pub mod options;
pub mod result;
mod sync;

// Re-export main types
pub use card::{Card, PACK_SIZE, Rank, Suit};
pub use deck::{Deck, INITIAL_CAPACITY};
pub use error::{DealError, DeckError, TurnError};
pub use game::{Game, GameState, Player};
pub use options::GameOptions;
pub use result::{TurnAction, TurnResult};
