use std::collections::HashSet;

use blackjack_engine::cards::{full_deck, Card};
use blackjack_engine::deck::{CardSource, Deck};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn deck_reset_has_52_unique_cards() {
    let mut deck = Deck::new_with_seed(42);
    deck.shuffle();
    deck.draw();
    deck.reset();
    let mut set = HashSet::new();
    for i in 0..52 {
        let c = deck.draw().expect("should have 52 cards");
        assert!(set.insert(c), "card {:?} duplicated at position {}", c, i);
    }
    assert!(deck.draw().is_none(), "after 52 cards, deck should be empty");
    assert!(deck.is_exhausted());
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    d1.shuffle();
    d2.shuffle();
    let a: Vec<Card> = (0..10).map(|_| d1.draw().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.draw().unwrap()).collect();
    assert_eq!(a, b, "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::new_with_seed(1);
    let mut d2 = Deck::new_with_seed(2);
    d1.shuffle();
    d2.shuffle();
    let a: Vec<Card> = (0..10).map(|_| d1.draw().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.draw().unwrap()).collect();
    assert_ne!(
        a, b,
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn shuffle_keeps_every_card() {
    let mut deck = Deck::new_with_seed(9);
    deck.shuffle();
    assert_eq!(deck.remaining(), 52);
    let drawn: HashSet<Card> = std::iter::from_fn(|| deck.draw()).collect();
    assert_eq!(drawn.len(), 52);
}

#[test]
fn unshuffled_deck_starts_with_ace_of_hearts() {
    let mut deck = Deck::new_with_seed(0);
    assert_eq!(deck.draw().map(|c| c.short()), Some("AH".to_string()));
}

#[test]
fn shuffle_matches_a_slice_shuffle_with_the_same_seed() {
    let mut deck = Deck::new_with_seed(77);
    deck.shuffle();
    let got: Vec<Card> = std::iter::from_fn(|| deck.draw()).collect();

    let mut expected: Vec<Card> = full_deck().collect();
    expected.shuffle(&mut ChaCha20Rng::seed_from_u64(77));
    assert_eq!(got, expected);
}

#[test]
fn shuffle_only_touches_undealt_cards() {
    let mut deck = Deck::new_with_seed(5);
    let dealt: Vec<Card> = (0..2).filter_map(|_| deck.draw()).collect();
    deck.shuffle();
    assert_eq!(deck.remaining(), 50);
    let rest: HashSet<Card> = std::iter::from_fn(|| deck.draw()).collect();
    assert_eq!(rest.len(), 50);
    assert!(dealt.iter().all(|c| !rest.contains(c)));
}
