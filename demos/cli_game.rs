//! CLI matching game demo.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use matchrs::{Card, Game, GameOptions, Player, Suit, TurnAction};

fn main() {
    println!("Welcome to the Card Game!");

    let packs = match prompt_usize("Enter the number of packs of cards to use: ") {
        Some(packs) if packs >= 1 => packs,
        Some(_) => {
            println!("Invalid number of packs. Using 1 pack.");
            1
        }
        None => return,
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    println!("\nInitializing game with {packs} pack(s) of cards...\n");

    let packs = u8::try_from(packs).unwrap_or(u8::MAX);
    let options = GameOptions::default().with_packs(packs);
    let game = Game::new(options, seed);

    if let Err(err) = game.deal() {
        println!("Deal error: {err}");
        return;
    }

    for player in [Player::One, Player::Two] {
        print_hand(&game, player);
    }

    if let Some(first) = game.discard_top() {
        println!("First card: {}\n", format_card(first));
    }

    let mut consecutive_passes = 0;

    loop {
        let result = match game.play_turn() {
            Ok(result) => result,
            Err(err) => {
                println!("Turn error: {err}");
                return;
            }
        };

        let number = result.player.number();

        if result.refilled {
            println!(
                "Hidden deck was empty. Played cards have been shuffled and moved to hidden deck.\n"
            );
        }

        match result.action {
            TurnAction::Played(card) => {
                println!("Player {number} played card {}", format_card(card));
                consecutive_passes = 0;
            }
            TurnAction::Drew(card) => {
                println!(
                    "Player {number} picks card {} from the hidden deck",
                    format_card(card)
                );
                consecutive_passes = 0;
            }
            TurnAction::Passed => {
                println!("Hidden deck is empty, Player {number} cannot pick a card");
                consecutive_passes += 1;
            }
        }

        print_hand(&game, result.player);

        if let Some(winner) = result.winner {
            println!("Player {} wins!", winner.number());
            break;
        }

        if consecutive_passes >= 2 {
            println!("Neither player can move and the hidden deck cannot be refilled.");
            break;
        }
    }
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        print!("{prompt}");
        let _ = io::stdout().flush();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            return None;
        }
        let input = input.trim();
        if input.is_empty() || input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_hand(game: &Game, player: Player) {
    let cards = game.hand_cards(player);
    let listing = if cards.is_empty() {
        "(empty)".to_string()
    } else {
        cards
            .iter()
            .map(|&card| format_card(card))
            .collect::<Vec<_>>()
            .join(", ")
    };
    println!("Player {} cards:\n{listing}\n", player.number());
}

fn format_card(card: Card) -> String {
    let color_code = match card.suit {
        Suit::Heart | Suit::Diamond => "31",
        Suit::Club => "32",
        Suit::Spade => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
