//! Input and file helpers shared by the commands.

use std::io::BufRead;

use blackjack_engine::logger::RoundLogger;

/// Reads a line of input from a buffered reader, blocking until available.
///
/// The line is trimmed. `None` on EOF or read errors, which interactive
/// commands treat as a request to stop.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// # use blackjack_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("  hit \n");
/// assert_eq!(read_stdin_line(&mut input), Some("hit".to_string()));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

/// Opens the round history file when one is configured.
pub fn open_history(path: Option<&str>) -> Result<Option<RoundLogger>, String> {
    match path {
        Some(p) => RoundLogger::create(p)
            .map(Some)
            .map_err(|e| format!("cannot open history file {}: {}", p, e)),
        None => Ok(None),
    }
}
