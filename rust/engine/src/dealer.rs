use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::deck::CardSource;
use crate::player::Participant;
use crate::rules::{Decision, DecisionRule};

/// How the dealer's automatic turn ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealerOutcome {
    /// Total went past 21
    Busted,
    /// The rule said stand with a total of 21 or less
    Standing,
    /// The rule still said draw but the source ran dry; treated as a stand
    Exhausted,
}

/// Plays the dealer's hand out with the fixed [`DecisionRule`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DealerAutomaton {
    rule: DecisionRule,
}

impl DealerAutomaton {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(&self) -> &DecisionRule {
        &self.rule
    }

    /// Draws into `dealer`'s hand until the rule says stand, the hand busts,
    /// or `source` is exhausted. The hand is planted unless it busted.
    pub fn play_turn<S>(&self, dealer: &mut Participant, source: &mut S) -> DealerOutcome
    where
        S: CardSource + ?Sized,
    {
        loop {
            let score = dealer.hand().total();
            if dealer.hand().is_bust() {
                debug!(score, "dealer busted");
                return DealerOutcome::Busted;
            }
            let decision = self.rule.decide(score);
            debug!(score, ?decision, "dealer decision");
            match decision {
                Decision::Stand => {
                    dealer.hand_mut().plant();
                    return DealerOutcome::Standing;
                }
                Decision::Draw => match source.draw() {
                    Some(card) => {
                        dealer.receive(card);
                        debug!(card = %card, total = dealer.hand().total(), "dealer drew");
                    }
                    None => {
                        dealer.hand_mut().plant();
                        return DealerOutcome::Exhausted;
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit};
    use crate::containers::Sequence;

    fn card(rank: Rank) -> Card {
        Card::new(rank, Suit::Diamonds)
    }

    fn dealer_with(ranks: &[Rank]) -> Participant {
        let mut dealer = Participant::dealer();
        for &r in ranks {
            dealer.receive(card(r));
        }
        dealer
    }

    #[test]
    fn draws_from_twelve_until_seventeen() {
        let mut dealer = dealer_with(&[Rank::Ten, Rank::Two]);
        let mut source: Sequence<Card> = [Rank::Two, Rank::Three, Rank::Four]
            .into_iter()
            .map(card)
            .collect();
        let outcome = DealerAutomaton::new().play_turn(&mut dealer, &mut source);
        assert_eq!(outcome, DealerOutcome::Standing);
        assert_eq!(dealer.hand().total(), 17);
        assert!(dealer.hand().is_planted());
        assert_eq!(source.len(), 1, "the four stays in the source");
    }

    #[test]
    fn busts_when_source_drives_past_21() {
        let mut dealer = dealer_with(&[Rank::Ten, Rank::Six]);
        let mut source: Sequence<Card> = [Rank::King].into_iter().map(card).collect();
        let outcome = DealerAutomaton::new().play_turn(&mut dealer, &mut source);
        assert_eq!(outcome, DealerOutcome::Busted);
        assert_eq!(dealer.hand().total(), 26);
        assert!(!dealer.hand().is_planted());
    }

    #[test]
    fn stands_immediately_at_seventeen() {
        let mut dealer = dealer_with(&[Rank::Ten, Rank::Seven]);
        let mut source: Sequence<Card> = [Rank::Two].into_iter().map(card).collect();
        let outcome = DealerAutomaton::new().play_turn(&mut dealer, &mut source);
        assert_eq!(outcome, DealerOutcome::Standing);
        assert_eq!(dealer.hand().len(), 2);
        assert_eq!(source.len(), 1);
    }

    #[test]
    fn empty_source_is_an_implicit_stop() {
        let mut dealer = dealer_with(&[Rank::Five, Rank::Six]);
        let mut source: Sequence<Card> = Sequence::new();
        let outcome = DealerAutomaton::new().play_turn(&mut dealer, &mut source);
        assert_eq!(outcome, DealerOutcome::Exhausted);
        assert_eq!(dealer.hand().total(), 11);
        assert!(dealer.hand().is_planted());
    }

    #[test]
    fn drawn_cards_land_in_history() {
        let mut dealer = dealer_with(&[Rank::Two, Rank::Three]);
        let mut source: Sequence<Card> = [Rank::King, Rank::Four]
            .into_iter()
            .map(card)
            .collect();
        DealerAutomaton::new().play_turn(&mut dealer, &mut source);
        assert_eq!(dealer.hand().total(), 19);
        assert_eq!(dealer.history().len(), 4);
        assert_eq!(dealer.history().peek(), Some(&card(Rank::Four)));
    }
}
