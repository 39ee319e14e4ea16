//! Command handler modules for the blackjack CLI.
//!
//! Each command lives in its own module with the same shape:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers for that command only
//! - Output streams (`&mut dyn Write`) and input (`&mut dyn BufRead`) passed in,
//!   so tests can drive a handler with in-memory buffers

pub mod cfg;
pub mod play;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;

use std::io::Write;

use blackjack_engine::engine::Engine;
use blackjack_engine::logger::RoundLogger;

use crate::error::CliError;

/// Appends the round that just settled to the history file, if one is open.
fn log_round(engine: &Engine, logger: Option<&mut RoundLogger>) -> Result<(), CliError> {
    let Some(logger) = logger else {
        return Ok(());
    };
    let id = logger.next_id();
    if let Some(record) = engine.round_record(id) {
        logger.write(&record)?;
    }
    Ok(())
}

fn write_history(engine: &Engine, out: &mut dyn Write) -> Result<(), CliError> {
    write!(out, "{}", engine.session().history_report())?;
    Ok(())
}
