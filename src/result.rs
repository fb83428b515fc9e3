//! Turn result types for the presentation layer.

use crate::card::Card;
use crate::game::Player;

/// What the acting player did on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnAction {
    /// Played a matching card onto the discard pile.
    Played(Card),
    /// Had no match and drew a card from the hidden deck.
    Drew(Card),
    /// Had no match and the hidden deck was empty; no state changed.
    Passed,
}

/// Everything the presentation layer needs to narrate one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnResult {
    /// The player who acted.
    pub player: Player,
    /// The action taken.
    pub action: TurnAction,
    /// The discard-pile top card the hand was matched against.
    pub matched_against: Card,
    /// Whether the hidden deck was refilled from the discard pile before
    /// the turn.
    pub refilled: bool,
    /// The acting player's hand size after the turn.
    pub hand_len: usize,
    /// The hidden deck size after the turn.
    pub hidden_len: usize,
    /// The winner, if this turn emptied the acting player's hand.
    pub winner: Option<Player>,
}
