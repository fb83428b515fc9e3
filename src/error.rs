//! Error types for deck and game operations.

use thiserror::Error;

/// Errors raised by deck operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck has no cards to pop or peek.
    #[error("deck is empty")]
    Empty,
    /// The index is outside the deck's occupied range.
    #[error("index {index} out of range for deck of {len}")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// The deck length at the time of the call.
        len: usize,
    },
}

/// Errors that can occur while dealing the opening hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// The hidden deck cannot cover both hands and the opening card.
    #[error("not enough cards in the hidden deck")]
    NotEnoughCards,
}

/// Errors that can occur while playing a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// Invalid game state for taking a turn.
    #[error("invalid game state for taking a turn")]
    InvalidState,
    /// A deck operation failed mid-turn.
    #[error("deck error: {0}")]
    Deck(#[from] DeckError),
}
