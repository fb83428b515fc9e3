//! Game state types.

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// Player one, who acts first.
    One,
    /// Player two.
    Two,
}

impl Player {
    /// Returns the other player.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// Returns this player's hand index.
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }

    /// Returns the player's display number (1 or 2).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Hands have not been dealt yet.
    Dealing,
    /// Waiting for the given player to take their turn.
    PlayerTurn(Player),
    /// The given player emptied their hand and won.
    GameOver(Player),
}
