use std::fmt;

use crate::cards::Card;
use crate::containers::Stack;
use crate::dealer::DealerAutomaton;
use crate::hand::Hand;

/// Name the house participant is registered under.
pub const DEALER_NAME: &str = "Dealer";

/// What drives a participant's decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Decisions come from outside the engine
    Human,
    /// Decisions come from the attached automaton
    Dealer(DealerAutomaton),
}

/// A seat at the table: the current hand, the session win count and every
/// card ever received.
///
/// The hand is reset each round; wins and history last for the whole session.
#[derive(Debug, Clone)]
pub struct Participant {
    /// Unique name, also the directory key
    name: String,
    /// Cards for the current round
    hand: Hand,
    /// Rounds won this session
    wins: u32,
    /// Every card received this session, newest on top
    history: Stack<Card>,
    role: Role,
}

impl Participant {
    pub fn human(name: impl Into<String>) -> Self {
        Self::with_role(name, Role::Human)
    }

    pub fn dealer() -> Self {
        Self::with_role(DEALER_NAME, Role::Dealer(DealerAutomaton::new()))
    }

    fn with_role(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            wins: 0,
            history: Stack::new(),
            role,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_dealer(&self) -> bool {
        matches!(self.role, Role::Dealer(_))
    }

    /// The attached automaton, if this participant plays automatically.
    pub fn automaton(&self) -> Option<DealerAutomaton> {
        match self.role {
            Role::Dealer(automaton) => Some(automaton),
            Role::Human => None,
        }
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Adds a dealt card to the hand and to the history.
    pub fn receive(&mut self, card: Card) {
        self.hand.append(card);
        self.history.push(card);
    }

    pub fn reset_hand(&mut self) {
        self.hand.clear();
    }

    pub fn history(&self) -> &Stack<Card> {
        &self.history
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn record_win(&mut self) {
        self.wins += 1;
    }

    /// Renders the participant. A dealer's second card stays hidden until
    /// `reveal` is set or the dealer has planted or busted.
    pub fn render(&self, reveal: bool) -> String {
        let hide = self.is_dealer()
            && !reveal
            && !self.hand.is_planted()
            && !self.hand.is_bust()
            && self.hand.len() > 1;
        if !hide {
            return self.to_string();
        }
        let first = self
            .hand
            .cards()
            .first()
            .map(|c| c.to_string())
            .unwrap_or_default();
        format!(
            "{} (Score: ?)\nCards: {}, [hidden card]\nStatus: Playing",
            self.name, first
        )
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (Score: {})", self.name, self.hand.total())?;
        writeln!(f, "Cards: {}", self.hand)?;
        writeln!(
            f,
            "Status: {}",
            if self.hand.is_planted() {
                "Planted"
            } else {
                "Playing"
            }
        )?;
        write!(f, "Wins: {}", self.wins)
    }
}
