use std::fmt;

use crate::cards::Card;
use crate::containers::Sequence;
use crate::rules::BLACKJACK;

/// Scores a run of cards.
///
/// Non-aces are summed first. Aces are then taken one at a time: each is
/// worth 11 if that keeps the running total at or below 21, otherwise 1.
/// There is no backtracking, so [10, A, A] scores 22.
pub fn score_cards<'a, I>(cards: I) -> u32
where
    I: IntoIterator<Item = &'a Card>,
{
    let mut total = 0u32;
    let mut aces = 0u32;
    for card in cards {
        if card.is_ace() {
            aces += 1;
        } else {
            total += card.value();
        }
    }
    for _ in 0..aces {
        total += if total + 11 <= BLACKJACK { 11 } else { 1 };
    }
    total
}

/// A participant's cards for the current round plus the planted flag.
///
/// Cards are only ever appended during a round and cleared all at once when
/// the next round begins.
#[derive(Debug, Default, Clone)]
pub struct Hand {
    cards: Sequence<Card>,
    planted: bool,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, card: Card) {
        self.cards.append(card);
    }

    pub fn cards(&self) -> &Sequence<Card> {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn total(&self) -> u32 {
        score_cards(&self.cards)
    }

    pub fn is_bust(&self) -> bool {
        self.total() > BLACKJACK
    }

    /// Two cards totalling exactly 21.
    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.total() == BLACKJACK
    }

    pub fn plant(&mut self) {
        self.planted = true;
    }

    pub fn is_planted(&self) -> bool {
        self.planted
    }

    /// Empties the hand for a new round and clears the planted flag.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.planted = false;
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}
