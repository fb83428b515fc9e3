//! Game configuration options.

/// Configuration options for a matching game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use matchrs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_packs(2)
///     .with_cards_per_player(6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of 52-card packs in the hidden deck.
    ///
    /// The engine accepts 0 (dealing will then fail with `NotEnoughCards`);
    /// clamping user input below 1 is the caller's concern.
    pub packs: u8,
    /// Number of cards dealt to each player.
    pub cards_per_player: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            packs: 1,
            cards_per_player: 8,
        }
    }
}

impl GameOptions {
    /// Sets the number of packs.
    ///
    /// # Example
    ///
    /// ```
    /// use matchrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_packs(3);
    /// assert_eq!(options.packs, 3);
    /// ```
    #[must_use]
    pub const fn with_packs(mut self, packs: u8) -> Self {
        self.packs = packs;
        self
    }

    /// Sets the number of cards dealt to each player.
    ///
    /// # Example
    ///
    /// ```
    /// use matchrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_cards_per_player(5);
    /// assert_eq!(options.cards_per_player, 5);
    /// ```
    #[must_use]
    pub const fn with_cards_per_player(mut self, cards: u8) -> Self {
        self.cards_per_player = cards;
        self
    }
}
