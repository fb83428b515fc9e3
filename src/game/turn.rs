use crate::error::{DealError, TurnError};
use crate::result::{TurnAction, TurnResult};

use super::{Game, GameState, Player};

impl Game {
    /// Deals the opening hands and flips the first discard card.
    ///
    /// Each player receives `cards_per_player` cards, dealt alternately
    /// (player one first) from the top of the hidden deck; both hands are
    /// then sorted, and one more card is popped from the hidden deck as the
    /// opening discard top. Moves the game to player one's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the hands have already been dealt, or the hidden
    /// deck cannot cover both hands plus the opening card.
    pub fn deal(&self) -> Result<(), DealError> {
        if *self.state.lock() != GameState::Dealing {
            return Err(DealError::InvalidState);
        }

        let per_player = usize::from(self.options.cards_per_player);

        let mut hidden = self.hidden.lock();
        if hidden.len() < per_player * 2 + 1 {
            return Err(DealError::NotEnoughCards);
        }

        let mut one = self.hands[Player::One.index()].lock();
        let mut two = self.hands[Player::Two.index()].lock();

        for _ in 0..per_player {
            one.push_top(hidden.pop_top().map_err(|_| DealError::NotEnoughCards)?);
            two.push_top(hidden.pop_top().map_err(|_| DealError::NotEnoughCards)?);
        }

        one.sort();
        two.sort();
        drop(one);
        drop(two);

        let opening = hidden.pop_top().map_err(|_| DealError::NotEnoughCards)?;
        drop(hidden);
        self.discard.lock().push_top(opening);

        *self.state.lock() = GameState::PlayerTurn(Player::One);

        Ok(())
    }

    /// Plays one turn for the current player.
    ///
    /// The hidden deck is refilled from the discard pile first if needed
    /// (see [`refill_from_discard`](Self::refill_from_discard)). The player's
    /// hand is scanned bottom-up for the first card matching the discard top:
    /// a match is moved onto the discard pile; with no match the player draws
    /// from the hidden deck and re-sorts their hand, or passes when the
    /// hidden deck is empty too. A pass changes no deck and is reported as
    /// [`TurnAction::Passed`] so callers can detect a stalled game.
    ///
    /// Emptying the hand wins the game; otherwise the turn alternates.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting on a player's turn, or a
    /// deck operation fails (possible only if the decks were tampered with
    /// mid-game, e.g. an emptied discard pile).
    pub fn play_turn(&self) -> Result<TurnResult, TurnError> {
        let GameState::PlayerTurn(player) = *self.state.lock() else {
            return Err(TurnError::InvalidState);
        };

        let refilled = self.refill_from_discard();

        let matched_against = self.discard.lock().peek_top()?;

        let mut hand = self.hands[player.index()].lock();

        let action = if let Some(index) = hand.find_match(matched_against) {
            let card = hand.remove_at(index)?;
            self.discard.lock().push_top(card);
            TurnAction::Played(card)
        } else if let Ok(card) = self.hidden.lock().pop_top() {
            hand.push_top(card);
            hand.sort();
            TurnAction::Drew(card)
        } else {
            TurnAction::Passed
        };

        let hand_len = hand.len();
        let winner = hand.is_empty().then_some(player);
        drop(hand);

        *self.state.lock() = match winner {
            Some(winner) => GameState::GameOver(winner),
            None => GameState::PlayerTurn(player.other()),
        };

        Ok(TurnResult {
            player,
            action,
            matched_against,
            refilled,
            hand_len,
            hidden_len: self.hidden.lock().len(),
            winner,
        })
    }
}
