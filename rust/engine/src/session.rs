use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::containers::Stack;
use crate::game::RoundOutcome;

static NEXT_SESSION_ID: AtomicU32 = AtomicU32::new(1);

/// One card landing in someone's hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayRecord {
    pub participant: String,
    pub card: Card,
    /// Hand total right after the card was added
    pub score: u32,
}

impl fmt::Display for PlayRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} received {} (Score: {})",
            self.participant, self.card, self.score
        )
    }
}

/// Play-by-play record of a single round.
#[derive(Debug)]
pub struct Session {
    /// Process-wide, increasing from 1
    id: u32,
    plays: Stack<PlayRecord>,
    outcome: Option<RoundOutcome>,
    winner: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed),
            plays: Stack::new(),
            outcome: None,
            winner: None,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// Logs a card landing in `participant`'s hand along with the new total.
    pub fn record(&mut self, participant: &str, card: Card, score: u32) {
        self.plays.push(PlayRecord {
            participant: participant.to_string(),
            card,
            score,
        });
    }

    pub fn settle(&mut self, outcome: RoundOutcome, winner: Option<String>) {
        self.outcome = Some(outcome);
        self.winner = winner;
    }

    pub fn outcome(&self) -> Option<&RoundOutcome> {
        self.outcome.as_ref()
    }

    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }

    pub fn play_count(&self) -> usize {
        self.plays.len()
    }

    pub fn last_play(&self) -> Option<&PlayRecord> {
        self.plays.peek()
    }

    /// Plays oldest first.
    pub fn history(&self) -> Vec<&PlayRecord> {
        self.plays.reversed()
    }

    pub fn status(&self) -> String {
        match (&self.outcome, &self.winner) {
            (None, _) => "In progress".to_string(),
            (Some(o), Some(name)) => format!("{} won: {}", name, o.settlement),
            (Some(o), None) => format!("Push: {}", o.settlement),
        }
    }

    /// Chronological play log, one play per line.
    pub fn history_report(&self) -> String {
        let mut s = String::from("=== Plays ===\n");
        for play in self.history() {
            s.push_str(&play.to_string());
            s.push('\n');
        }
        s.push_str("=== End of plays ===\n");
        s
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Round #{}", self.id)?;
        writeln!(f, "Status: {}", self.status())?;
        write!(f, "Plays: {}", self.plays.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};
    use crate::game::{Settlement, Side};
    use crate::player::Participant;

    #[test]
    fn ids_increase() {
        let a = Session::new();
        let b = Session::new();
        assert!(b.id() > a.id());
    }

    #[test]
    fn history_is_oldest_first() {
        let mut session = Session::new();
        let mut p = Participant::human("Ana");
        for rank in [Rank::Two, Rank::Three, Rank::Four] {
            let card = Card::new(rank, Suit::Spades);
            p.receive(card);
            session.record(p.name(), card, p.hand().total());
        }
        let scores: Vec<u32> = session.history().iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![2, 5, 9]);
        assert_eq!(session.last_play().map(|r| r.score), Some(9));
        let report = session.history_report();
        let first = report.find("2 of Spades").unwrap();
        let last = report.find("4 of Spades").unwrap();
        assert!(first < last);
    }

    #[test]
    fn status_reflects_outcome() {
        let mut session = Session::new();
        assert_eq!(session.status(), "In progress");
        session.settle(
            RoundOutcome {
                settlement: Settlement::HigherTotal(Side::Human),
                human_total: 20,
                dealer_total: 18,
                dealer_turn: None,
            },
            Some("Ana".to_string()),
        );
        assert_eq!(session.status(), "Ana won: player wins with the higher total");
        assert_eq!(session.winner(), Some("Ana"));
    }
}
