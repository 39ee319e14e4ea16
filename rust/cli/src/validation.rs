//! Input parsing for the interactive `play` command.
//!
//! Malformed input never reaches the engine: it comes back as
//! [`ParseResult::Invalid`] and the caller re-prompts.

/// What the player wants to do on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnAction {
    Hit,
    Stand,
}

/// Result type for parsing user input into a turn action.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid action parsed from input
    Action(TurnAction),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse a menu choice (case-insensitive).
///
/// - "1", "h" or "hit" → Hit
/// - "2", "s" or "stand" → Stand
/// - "q" or "quit" → Quit
///
/// # Example
///
/// ```rust
/// # use blackjack_cli::validation::{parse_turn_action, ParseResult, TurnAction};
/// assert_eq!(parse_turn_action("1"), ParseResult::Action(TurnAction::Hit));
/// assert_eq!(parse_turn_action("Stand"), ParseResult::Action(TurnAction::Stand));
/// assert_eq!(parse_turn_action("q"), ParseResult::Quit);
/// assert!(matches!(parse_turn_action("7"), ParseResult::Invalid(_)));
/// ```
pub fn parse_turn_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }
    match input.as_str() {
        "q" | "quit" => ParseResult::Quit,
        "1" | "h" | "hit" => ParseResult::Action(TurnAction::Hit),
        "2" | "s" | "stand" => ParseResult::Action(TurnAction::Stand),
        other if other.parse::<i64>().is_ok() => {
            ParseResult::Invalid(format!("Invalid choice {}. Enter 1 or 2", other))
        }
        other => ParseResult::Invalid(format!(
            "Unrecognized choice '{}'. Valid choices: 1 (hit), 2 (stand), q",
            other
        )),
    }
}

/// `Some(true)` for yes, `Some(false)` for no, `None` when unrecognized.
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}
