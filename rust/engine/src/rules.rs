use serde::{Deserialize, Serialize};

/// Best possible total; anything above it is a bust.
pub const BLACKJACK: u32 = 21;

/// The dealer keeps drawing while the total is below this.
pub const DEALER_STAND_THRESHOLD: u32 = 17;

/// What the fixed house rule says to do at a given total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// Take another card
    Draw,
    /// Keep the current hand
    Stand,
}

impl Decision {
    pub fn description(&self) -> &'static str {
        match self {
            Decision::Draw => "draws to improve the hand",
            Decision::Stand => "keeps the current hand",
        }
    }
}

/// The dealer's fixed strategy: draw below 17, stand otherwise.
///
/// Carries no state beyond the threshold constant, so one value can be shared
/// freely.
///
/// # Examples
///
/// ```
/// use blackjack_engine::rules::{Decision, DecisionRule};
///
/// let rule = DecisionRule;
/// assert_eq!(rule.decide(16), Decision::Draw);
/// assert_eq!(rule.decide(17), Decision::Stand);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecisionRule;

impl DecisionRule {
    pub fn decide(&self, score: u32) -> Decision {
        if score < DEALER_STAND_THRESHOLD {
            Decision::Draw
        } else {
            Decision::Stand
        }
    }
}
