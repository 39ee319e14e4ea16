//! Text formatters for round results and the end-of-session summary.
//!
//! Pure functions: they take engine values and return strings, so commands
//! only decide *where* to write them.
//!
//! ## Example
//!
//! ```rust
//! use blackjack_cli::formatters::format_summary;
//! use blackjack_engine::game::Standings;
//!
//! let standings = Standings { human_wins: 2, dealer_wins: 1, rounds: 3 };
//! let summary = format_summary(&standings, "Ana");
//! assert!(summary.contains("Champion: Ana"));
//! ```

use blackjack_engine::dealer::DealerOutcome;
use blackjack_engine::game::{RoundOutcome, Side, Standings};
use blackjack_engine::player::DEALER_NAME;

fn side_name(side: Side, human: &str) -> &str {
    match side {
        Side::Human => human,
        Side::Dealer => DEALER_NAME,
    }
}

/// One-line description of how the dealer's turn ended.
pub fn format_dealer_turn(turn: DealerOutcome) -> &'static str {
    match turn {
        DealerOutcome::Busted => "Dealer busts!",
        DealerOutcome::Standing => "Dealer stands.",
        DealerOutcome::Exhausted => "Dealer stops: the deck is empty.",
    }
}

/// Result line, e.g. `Ana wins! (player wins with the higher total, 20 vs 18)`.
pub fn format_outcome(outcome: &RoundOutcome, human: &str) -> String {
    let detail = format!(
        "{}, {} vs {}",
        outcome.settlement, outcome.human_total, outcome.dealer_total
    );
    match outcome.winner() {
        Some(side) => format!("{} wins! ({})", side_name(side, human), detail),
        None => format!("Push. ({})", detail),
    }
}

pub fn format_summary(standings: &Standings, human: &str) -> String {
    let mut s = String::from("=== Final Standings ===\n");
    s.push_str(&format!("Rounds played: {}\n", standings.rounds));
    s.push_str(&format!("{}: {} wins\n", human, standings.human_wins));
    s.push_str(&format!("{}: {} wins\n", DEALER_NAME, standings.dealer_wins));
    s.push_str(&format!("Pushes: {}\n", standings.pushes()));
    match standings.champion() {
        Some(side) => s.push_str(&format!("Champion: {}\n", side_name(side, human))),
        None => s.push_str("Champion: none, it's a tie\n"),
    }
    s
}
