//! Card types and the suit/rank match predicate.

use core::fmt;

/// Card suit.
///
/// The derived ordering (Club < Spade < Heart < Diamond) is the ordering
/// used by [`Deck::sort`](crate::Deck::sort).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Clubs.
    Club,
    /// Spades.
    Spade,
    /// Hearts.
    Heart,
    /// Diamonds.
    Diamond,
}

impl Suit {
    /// All suits, in sort order.
    pub const ALL: [Self; 4] = [Self::Club, Self::Spade, Self::Heart, Self::Diamond];

    /// Returns the display name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Club => "Club",
            Self::Spade => "Spade",
            Self::Heart => "Heart",
            Self::Diamond => "Diamond",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card rank, from Two (lowest) to Ace (highest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks, low to high.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the display name of the rank.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            Self::Ace => "Ace",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
///
/// Cards are plain values; two cards with equal suit and rank are
/// indistinguishable. The derived ordering is suit-major, rank-minor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Returns whether two cards match: same suit or same rank.
    ///
    /// Symmetric and reflexive, but not transitive.
    #[must_use]
    pub fn matches(self, other: Self) -> bool {
        self.suit == other.suit || self.rank == other.rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}s", self.rank, self.suit)
    }
}

/// Number of cards per pack (4 suits x 13 ranks, no jokers).
pub const PACK_SIZE: usize = 52;
