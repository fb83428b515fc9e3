//! Game engine and state management.

use alloc::string::String;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::Card;
use crate::deck::Deck;
use crate::options::GameOptions;

mod state;
mod turn;

pub use state::{GameState, Player};

/// A two-player matching game engine.
///
/// The game owns four decks: the hidden draw pile, the face-up discard pile,
/// and one hand per player. Players alternately play a card matching the
/// discard top in suit or rank, drawing from the hidden deck when they
/// cannot; the first empty hand wins. Use [`GameOptions`] to configure pack
/// count and hand size.
pub struct Game {
    /// The face-down draw pile.
    pub hidden: Mutex<Deck>,
    /// The face-up pile of played cards; its top is the card to match.
    pub discard: Mutex<Deck>,
    /// The players' hands, indexed by [`Player`].
    pub hands: [Mutex<Deck>; 2],
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    pub state: Mutex<GameState>,
    /// Random number generator used for every shuffle.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// The hidden deck is built from `options.packs` packs and shuffled; the
    /// game starts in the [`GameState::Dealing`] state, waiting for
    /// [`deal`](Self::deal).
    ///
    /// # Example
    ///
    /// ```
    /// use matchrs::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::Dealing);
    /// assert_eq!(game.hidden_len(), 52);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let mut hidden = Deck::with_packs(usize::from(options.packs));
        hidden.shuffle(&mut rng);

        Self {
            hidden: Mutex::new(hidden),
            discard: Mutex::new(Deck::new()),
            hands: [Mutex::new(Deck::new()), Mutex::new(Deck::new())],
            options,
            state: Mutex::new(GameState::Dealing),
            rng: Mutex::new(rng),
        }
    }

    /// Refills the hidden deck from the discard pile if possible.
    ///
    /// When the hidden deck is empty and the discard pile holds more than one
    /// card, the discard top is set aside, the remaining discard cards move
    /// into the hidden deck and are shuffled, and the saved top goes back as
    /// the sole discard card. Otherwise nothing changes.
    ///
    /// This runs automatically at the start of every
    /// [`play_turn`](Self::play_turn); returns whether a refill happened.
    pub fn refill_from_discard(&self) -> bool {
        let mut hidden = self.hidden.lock();
        let mut discard = self.discard.lock();

        if !hidden.is_empty() || discard.len() <= 1 {
            return false;
        }

        let Ok(top) = discard.pop_top() else {
            return false;
        };

        discard.transfer_to(&mut hidden);
        hidden.shuffle(&mut *self.rng.lock());
        discard.push_top(top);

        true
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        *self.state.lock()
    }

    /// Returns the player whose turn it is, or `None` before dealing or
    /// after the game ends.
    pub fn current_player(&self) -> Option<Player> {
        match self.state() {
            GameState::PlayerTurn(player) => Some(player),
            GameState::Dealing | GameState::GameOver(_) => None,
        }
    }

    /// Returns the winner, if the game is over.
    pub fn winner(&self) -> Option<Player> {
        match self.state() {
            GameState::GameOver(player) => Some(player),
            GameState::Dealing | GameState::PlayerTurn(_) => None,
        }
    }

    /// Returns the number of cards in the hidden deck.
    pub fn hidden_len(&self) -> usize {
        self.hidden.lock().len()
    }

    /// Returns the number of cards in the discard pile.
    pub fn discard_len(&self) -> usize {
        self.discard.lock().len()
    }

    /// Returns the discard pile's top card, or `None` before the opening
    /// card is flipped.
    pub fn discard_top(&self) -> Option<Card> {
        self.discard.lock().peek_top().ok()
    }

    /// Returns the number of cards in the given player's hand.
    pub fn hand_len(&self, player: Player) -> usize {
        self.hands[player.index()].lock().len()
    }

    /// Returns the given player's cards, bottom to top.
    pub fn hand_cards(&self, player: Player) -> Vec<Card> {
        self.hands[player.index()].lock().cards().to_vec()
    }

    /// Returns the display string of each card in the given player's hand,
    /// bottom to top.
    pub fn hand_labels(&self, player: Player) -> Vec<String> {
        self.hands[player.index()].lock().labels()
    }
}
