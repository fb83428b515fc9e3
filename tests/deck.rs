//! Deck container tests.

use matchrs::{Card, Deck, DeckError, INITIAL_CAPACITY, PACK_SIZE, Rank, Suit};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn deck_of(cards: &[Card]) -> Deck {
    let mut deck = Deck::new();
    for &card in cards {
        deck.push_top(card);
    }
    deck
}

fn count_of(deck: &Deck, card: Card) -> usize {
    deck.cards().iter().filter(|&&held| held == card).count()
}

#[test]
fn new_deck_is_empty_with_initial_capacity() {
    let mut deck = Deck::new();

    assert!(deck.is_empty());
    assert_eq!(deck.len(), 0);
    assert_eq!(deck.capacity(), INITIAL_CAPACITY);
    assert_eq!(deck.peek_top(), Err(DeckError::Empty));
    assert_eq!(deck.pop_top(), Err(DeckError::Empty));
}

#[test]
fn push_then_pop_restores_deck() {
    let mut deck = deck_of(&[card(Suit::Club, Rank::Two), card(Suit::Heart, Rank::Ace)]);
    let before = deck.cards().to_vec();

    let pushed = card(Suit::Spade, Rank::Nine);
    deck.push_top(pushed);
    assert_eq!(deck.peek_top(), Ok(pushed));
    assert_eq!(deck.len(), 3);

    assert_eq!(deck.pop_top(), Ok(pushed));
    assert_eq!(deck.len(), 2);
    assert_eq!(deck.cards(), before.as_slice());
}

#[test]
fn capacity_doubles_from_ten() {
    let mut deck = Deck::new();
    let filler = card(Suit::Diamond, Rank::Seven);

    for _ in 0..10 {
        deck.push_top(filler);
        assert!(deck.len() <= deck.capacity());
    }
    assert_eq!(deck.capacity(), 10);

    deck.push_top(filler);
    assert_eq!(deck.capacity(), 20);

    for _ in 11..20 {
        deck.push_top(filler);
    }
    assert_eq!(deck.capacity(), 20);

    deck.push_top(filler);
    assert_eq!(deck.capacity(), 40);
    assert_eq!(deck.len(), 21);
}

#[test]
fn remove_at_compacts_the_deck() {
    let cards = [
        card(Suit::Club, Rank::Two),
        card(Suit::Spade, Rank::Five),
        card(Suit::Heart, Rank::Nine),
        card(Suit::Diamond, Rank::Jack),
    ];
    let mut deck = deck_of(&cards);

    assert_eq!(deck.remove_at(1), Ok(cards[1]));
    assert_eq!(deck.len(), 3);
    assert_eq!(deck.cards(), &[cards[0], cards[2], cards[3]]);

    assert_eq!(deck.remove_at(0), Ok(cards[0]));
    assert_eq!(deck.cards(), &[cards[2], cards[3]]);
}

#[test]
fn remove_at_rejects_out_of_range_index() {
    let mut deck = deck_of(&[card(Suit::Club, Rank::Two)]);

    assert_eq!(
        deck.remove_at(1),
        Err(DeckError::OutOfRange { index: 1, len: 1 })
    );
    assert_eq!(deck.len(), 1);

    let mut empty = Deck::new();
    assert_eq!(
        empty.remove_at(0),
        Err(DeckError::OutOfRange { index: 0, len: 0 })
    );
}

#[test]
fn with_packs_generates_every_combination() {
    let deck = Deck::with_packs(2);

    assert_eq!(deck.len(), 2 * PACK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            assert_eq!(count_of(&deck, card(suit, rank)), 2);
        }
    }

    // 104 pushes grow capacity through the same doubling path as push_top.
    assert_eq!(deck.capacity(), 160);
}

#[test]
fn with_packs_zero_is_a_valid_empty_deck() {
    let deck = Deck::with_packs(0);

    assert!(deck.is_empty());
    assert_eq!(deck.capacity(), INITIAL_CAPACITY);
}

#[test]
fn sort_orders_by_suit_then_rank_and_preserves_cards() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut deck = Deck::with_packs(1);
    deck.shuffle(&mut rng);

    let before = deck.cards().to_vec();
    deck.sort();

    assert_eq!(deck.len(), before.len());
    for window in deck.cards().windows(2) {
        let (a, b) = (window[0], window[1]);
        assert!(a.suit < b.suit || (a.suit == b.suit && a.rank <= b.rank));
    }
    for &card in &before {
        assert_eq!(count_of(&deck, card), before.iter().filter(|&&c| c == card).count());
    }
}

#[test]
fn shuffle_preserves_the_multiset_of_cards() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut deck = Deck::with_packs(1);
    deck.shuffle(&mut rng);

    assert_eq!(deck.len(), PACK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            assert_eq!(count_of(&deck, card(suit, rank)), 1);
        }
    }
}

#[test]
fn shuffle_is_deterministic_for_a_fixed_seed() {
    let mut first = Deck::with_packs(1);
    let mut second = Deck::with_packs(1);

    first.shuffle(&mut ChaCha8Rng::seed_from_u64(99));
    second.shuffle(&mut ChaCha8Rng::seed_from_u64(99));

    assert_eq!(first.cards(), second.cards());
}

#[test]
fn shuffle_of_singleton_or_empty_deck_is_a_no_op() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let single = card(Suit::Heart, Rank::Queen);
    let mut deck = deck_of(&[single]);
    deck.shuffle(&mut rng);
    assert_eq!(deck.cards(), &[single]);

    let mut empty = Deck::new();
    empty.shuffle(&mut rng);
    assert!(empty.is_empty());
}

#[test]
fn find_match_scans_from_the_bottom() {
    let deck = deck_of(&[
        card(Suit::Club, Rank::Two),
        card(Suit::Spade, Rank::Five),
        card(Suit::Spade, Rank::King),
        card(Suit::Heart, Rank::King),
    ]);

    // Rank match at index 1 comes before the suit matches above it.
    assert_eq!(deck.find_match(card(Suit::Diamond, Rank::Five)), Some(1));
    assert_eq!(deck.find_match(card(Suit::Spade, Rank::Ace)), Some(1));
    assert_eq!(deck.find_match(card(Suit::Club, Rank::Ten)), Some(0));
    assert_eq!(deck.find_match(card(Suit::Diamond, Rank::Three)), None);
}

#[test]
fn match_predicate_is_symmetric_and_reflexive() {
    let cards = [
        card(Suit::Club, Rank::Two),
        card(Suit::Club, Rank::Ace),
        card(Suit::Heart, Rank::Two),
        card(Suit::Diamond, Rank::Nine),
    ];

    for a in cards {
        assert!(a.matches(a));
        for b in cards {
            assert_eq!(a.matches(b), b.matches(a));
        }
    }

    assert!(cards[0].matches(cards[1])); // same suit
    assert!(cards[0].matches(cards[2])); // same rank
    assert!(!cards[0].matches(cards[3]));
}

#[test]
fn transfer_to_appends_bottom_to_top_and_empties_source() {
    let source_cards = [
        card(Suit::Club, Rank::Two),
        card(Suit::Heart, Rank::Five),
        card(Suit::Spade, Rank::Nine),
    ];
    let mut source = deck_of(&source_cards);
    let mut dest = deck_of(&[card(Suit::Diamond, Rank::Ace)]);

    source.transfer_to(&mut dest);

    assert!(source.is_empty());
    assert_eq!(dest.len(), 4);
    assert_eq!(
        dest.cards(),
        &[
            card(Suit::Diamond, Rank::Ace),
            source_cards[0],
            source_cards[1],
            source_cards[2],
        ]
    );
}

#[test]
fn labels_list_cards_bottom_to_top() {
    let deck = deck_of(&[
        card(Suit::Club, Rank::Two),
        card(Suit::Diamond, Rank::Ace),
    ]);

    assert_eq!(deck.labels(), vec!["Two of Clubs", "Ace of Diamonds"]);
}
