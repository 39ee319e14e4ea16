use blackjack_engine::cards::{Card, Rank, Suit};
use blackjack_engine::hand::{score_cards, Hand};
use blackjack_engine::rules::{Decision, DecisionRule};
use proptest::prelude::*;

fn hand_of(ranks: &[Rank]) -> Hand {
    let mut hand = Hand::new();
    for &r in ranks {
        hand.append(Card::new(r, Suit::Spades));
    }
    hand
}

#[test]
fn aces_are_soft_until_they_would_bust() {
    assert_eq!(hand_of(&[Rank::Ace, Rank::King]).total(), 21);
    assert_eq!(hand_of(&[Rank::Ace, Rank::Six]).total(), 17);
    assert_eq!(hand_of(&[Rank::Ace, Rank::Six, Rank::Ten]).total(), 17);
    assert_eq!(hand_of(&[Rank::Ace, Rank::Ace]).total(), 12);
    assert_eq!(hand_of(&[Rank::Ace, Rank::Ace, Rank::Nine]).total(), 21);
    assert_eq!(hand_of(&[Rank::Ace, Rank::Ace, Rank::Ten]).total(), 22);
    assert!(hand_of(&[Rank::Ace, Rank::Ace, Rank::Ten]).is_bust());
    assert_eq!(hand_of(&[Rank::Ace; 4]).total(), 14);
}

#[test]
fn faces_count_ten() {
    assert_eq!(hand_of(&[Rank::Jack, Rank::Queen]).total(), 20);
    assert_eq!(hand_of(&[Rank::King, Rank::Queen, Rank::Two]).total(), 22);
    assert!(hand_of(&[Rank::King, Rank::Queen, Rank::Two]).is_bust());
}

#[test]
fn natural_needs_exactly_two_cards() {
    assert!(hand_of(&[Rank::Ace, Rank::Jack]).is_natural());
    assert!(!hand_of(&[Rank::Seven, Rank::Seven, Rank::Seven]).is_natural());
    assert!(!Hand::new().is_natural());
    assert_eq!(Hand::new().total(), 0);
}

#[test]
fn decision_rule_threshold() {
    let rule = DecisionRule;
    assert_eq!(rule.decide(0), Decision::Draw);
    assert_eq!(rule.decide(16), Decision::Draw);
    assert_eq!(rule.decide(17), Decision::Stand);
    assert_eq!(rule.decide(25), Decision::Stand);
}

fn rank_strategy() -> impl Strategy<Value = Rank> {
    prop::sample::select(blackjack_engine::cards::all_ranks().to_vec())
}

proptest! {
    #[test]
    fn at_most_one_ace_counts_eleven(ranks in prop::collection::vec(rank_strategy(), 0..10)) {
        let cards: Vec<Card> = ranks.iter().map(|&r| Card::new(r, Suit::Clubs)).collect();
        let hard: u32 = cards.iter().map(|c| c.value()).sum();
        let non_aces: u32 = cards.iter().filter(|c| !c.is_ace()).map(|c| c.value()).sum();
        let total = score_cards(&cards);
        prop_assert!(total == hard || total == hard + 10);
        if total == hard + 10 {
            prop_assert!(cards.iter().any(|c| c.is_ace()));
            prop_assert!(non_aces + 11 <= 21);
        } else if cards.iter().any(|c| c.is_ace()) {
            prop_assert!(non_aces + 11 > 21);
        }
    }
}
