use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::containers::Sequence;

/// Anything that can hand out cards one at a time.
///
/// `None` means the source is exhausted; callers treat that as a stop, not
/// as an error.
pub trait CardSource {
    fn draw(&mut self) -> Option<Card>;

    fn is_exhausted(&self) -> bool;
}

/// A scripted source: cards come off the front in the order they were appended.
impl CardSource for Sequence<Card> {
    fn draw(&mut self) -> Option<Card> {
        self.remove_first()
    }

    fn is_exhausted(&self) -> bool {
        self.is_empty()
    }
}

/// Standard 52-card deck with deterministic shuffling.
///
/// # Examples
///
/// ```
/// use blackjack_engine::deck::{CardSource, Deck};
///
/// let mut a = Deck::new_with_seed(7);
/// let mut b = Deck::new_with_seed(7);
/// a.shuffle();
/// b.shuffle();
/// assert_eq!(a.draw(), b.draw());
/// assert_eq!(a.remaining(), 51);
/// ```
#[derive(Debug)]
pub struct Deck {
    /// Cards still to be dealt; the front is the top of the deck
    cards: Sequence<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck().collect(),
            rng,
        }
    }

    /// A stacked deck dealt in exactly the given order.
    pub fn from_cards<I: IntoIterator<Item = Card>>(seed: u64, cards: I) -> Self {
        Self {
            cards: cards.into_iter().collect(),
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Shuffles the cards currently in the deck.
    pub fn shuffle(&mut self) {
        let mut buf = Vec::with_capacity(self.cards.len());
        while let Some(card) = self.cards.remove_first() {
            buf.push(card);
        }
        buf.shuffle(&mut self.rng);
        self.cards.extend(buf);
    }

    /// Refills the deck with all 52 cards in standard order.
    pub fn reset(&mut self) {
        self.cards.clear();
        self.cards.extend(full_deck());
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl CardSource for Deck {
    fn draw(&mut self) -> Option<Card> {
        self.cards.remove_first()
    }

    fn is_exhausted(&self) -> bool {
        self.cards.is_empty()
    }
}
