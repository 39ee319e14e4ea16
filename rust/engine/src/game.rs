use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dealer::DealerOutcome;
use crate::hand::Hand;

/// The two sides of a heads-up table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Human,
    Dealer,
}

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// No round dealt yet this session
    Idle,
    /// The human is deciding
    PlayerTurn,
    /// The human's turn is over; the dealer has yet to play
    DealerTurn,
    /// Result decided
    Settled,
}

/// Why a round ended the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Settlement {
    /// One side was dealt a natural and the other was not
    Natural(Side),
    /// Both sides were dealt naturals
    BothNatural,
    /// The given side went over 21
    Bust(Side),
    /// The given side finished with the higher total
    HigherTotal(Side),
    /// Equal totals
    Push,
}

impl Settlement {
    pub fn winner(&self) -> Option<Side> {
        match *self {
            Settlement::Natural(side) | Settlement::HigherTotal(side) => Some(side),
            Settlement::Bust(Side::Human) => Some(Side::Dealer),
            Settlement::Bust(Side::Dealer) => Some(Side::Human),
            Settlement::BothNatural | Settlement::Push => None,
        }
    }
}

impl fmt::Display for Settlement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Settlement::Natural(Side::Human) => write!(f, "player wins with a natural"),
            Settlement::Natural(Side::Dealer) => write!(f, "dealer wins with a natural"),
            Settlement::BothNatural => write!(f, "push, both sides have a natural"),
            Settlement::Bust(Side::Human) => write!(f, "dealer wins, player went over 21"),
            Settlement::Bust(Side::Dealer) => write!(f, "player wins, dealer went over 21"),
            Settlement::HigherTotal(Side::Human) => write!(f, "player wins with the higher total"),
            Settlement::HigherTotal(Side::Dealer) => write!(f, "dealer wins with the higher total"),
            Settlement::Push => write!(f, "push"),
        }
    }
}

/// Final state of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub settlement: Settlement,
    pub human_total: u32,
    pub dealer_total: u32,
    /// How the dealer's automatic turn ended, when it was played
    pub dealer_turn: Option<DealerOutcome>,
}

impl RoundOutcome {
    pub fn winner(&self) -> Option<Side> {
        self.settlement.winner()
    }
}

/// Checks the opening two-card hands. `None` means play continues.
pub fn check_naturals(human: &Hand, dealer: &Hand) -> Option<Settlement> {
    match (human.is_natural(), dealer.is_natural()) {
        (true, true) => Some(Settlement::BothNatural),
        (true, false) => Some(Settlement::Natural(Side::Human)),
        (false, true) => Some(Settlement::Natural(Side::Dealer)),
        (false, false) => None,
    }
}

/// Compares finished hands. A human bust is decided before the dealer's total
/// is even looked at.
pub fn compare_hands(human: &Hand, dealer: &Hand) -> Settlement {
    if human.is_bust() {
        return Settlement::Bust(Side::Human);
    }
    if dealer.is_bust() {
        return Settlement::Bust(Side::Dealer);
    }
    let (h, d) = (human.total(), dealer.total());
    match h.cmp(&d) {
        std::cmp::Ordering::Greater => Settlement::HigherTotal(Side::Human),
        std::cmp::Ordering::Less => Settlement::HigherTotal(Side::Dealer),
        std::cmp::Ordering::Equal => Settlement::Push,
    }
}

/// Session-wide win counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
    pub human_wins: u32,
    pub dealer_wins: u32,
    pub rounds: u32,
}

impl Standings {
    /// Side with more wins, or `None` on a tie.
    pub fn champion(&self) -> Option<Side> {
        match self.human_wins.cmp(&self.dealer_wins) {
            std::cmp::Ordering::Greater => Some(Side::Human),
            std::cmp::Ordering::Less => Some(Side::Dealer),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn pushes(&self) -> u32 {
        self.rounds - self.human_wins - self.dealer_wins
    }
}
