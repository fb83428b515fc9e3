//! The deck container: an owned, ordered, duplicate-tolerant card sequence.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use rand::Rng;

use crate::card::{Card, Rank, Suit};
use crate::error::DeckError;

/// Starting logical capacity of a freshly created deck.
pub const INITIAL_CAPACITY: usize = 10;

/// An ordered sequence of cards with top-of-stack access.
///
/// The "top" is the last element. Storage capacity starts at
/// [`INITIAL_CAPACITY`] and doubles whenever an insertion would exceed it,
/// so pushes are amortized O(1). The same deck type serves as the hidden
/// draw pile, the discard pile, and each player's hand.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards, bottom (index 0) to top.
    cards: Vec<Card>,
    /// Logical capacity; always >= `cards.len()`.
    capacity: usize,
}

impl Deck {
    /// Creates an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(INITIAL_CAPACITY),
            capacity: INITIAL_CAPACITY,
        }
    }

    /// Creates a deck holding `packs` full packs.
    ///
    /// Cards are inserted suit-major, rank-minor, one pack at a time, through
    /// the same path as [`push_top`](Self::push_top), so capacity grows
    /// identically to repeated pushes. `packs = 0` yields a valid empty deck.
    #[must_use]
    pub fn with_packs(packs: usize) -> Self {
        let mut deck = Self::new();

        for _ in 0..packs {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    deck.push_top(Card::new(suit, rank));
                }
            }
        }

        deck
    }

    /// Appends a card as the new top, doubling capacity first if full.
    pub fn push_top(&mut self, card: Card) {
        if self.cards.len() == self.capacity {
            self.capacity *= 2;
            self.cards.reserve_exact(self.capacity - self.cards.len());
        }

        self.cards.push(card);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if the deck has no cards.
    pub fn pop_top(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Returns the top card without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if the deck has no cards.
    pub fn peek_top(&self) -> Result<Card, DeckError> {
        self.cards.last().copied().ok_or(DeckError::Empty)
    }

    /// Removes and returns the card at `index` (0 = bottom), shifting all
    /// later cards down one position to close the gap.
    ///
    /// O(len - index); fine for decks bounded by a handful of packs.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::OutOfRange`] if `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Result<Card, DeckError> {
        if index >= self.cards.len() {
            return Err(DeckError::OutOfRange {
                index,
                len: self.cards.len(),
            });
        }

        Ok(self.cards.remove(index))
    }

    /// Returns whether the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns the current logical capacity.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the cards, bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Randomly permutes the deck.
    ///
    /// Cards are pulled out one at a time at uniformly random positions onto
    /// a transient auxiliary deck, which is then drained back top-first. No-op
    /// for decks of one card or fewer.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.cards.len() <= 1 {
            return;
        }

        let mut pulled = Self::new();

        while !self.cards.is_empty() {
            let index = rng.random_range(0..self.cards.len());
            pulled.push_top(self.cards.remove(index));
        }

        // Draining by pop reverses the auxiliary order.
        while let Ok(card) = pulled.pop_top() {
            self.push_top(card);
        }
    }

    /// Sorts the deck in place by suit, then rank within equal suit.
    ///
    /// Stable insertion sort; O(len^2) worst case, fine for hand-sized decks.
    pub fn sort(&mut self) {
        for i in 1..self.cards.len() {
            let key = self.cards[i];
            let mut j = i;

            while j > 0 && self.cards[j - 1] > key {
                self.cards[j] = self.cards[j - 1];
                j -= 1;
            }

            self.cards[j] = key;
        }
    }

    /// Returns the index of the first card (scanning from the bottom) that
    /// matches `card` in suit or rank, or `None` if none does.
    #[must_use]
    pub fn find_match(&self, card: Card) -> Option<usize> {
        self.cards.iter().position(|held| held.matches(card))
    }

    /// Moves every card, bottom to top, onto the top of `dest`, leaving this
    /// deck empty. Capacity of both decks is unaffected beyond normal growth
    /// in `dest`.
    pub fn transfer_to(&mut self, dest: &mut Self) {
        for card in self.cards.drain(..) {
            dest.push_top(card);
        }
    }

    /// Returns the display string of each card, bottom to top.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.cards.iter().map(ToString::to_string).collect()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
