//! Simulation command handler.
//!
//! Plays a fixed number of rounds with no input: the player side follows the
//! same draw-below-17 rule as the dealer. Useful for checking the win balance
//! of that rule and for producing history files.
//!
//! # Examples
//!
//! ```no_run
//! use blackjack_cli::commands::handle_sim_command;
//! use blackjack_cli::config::Config;
//! use std::io;
//!
//! let config = Config { seed: Some(42), ..Config::default() };
//! handle_sim_command(1000, &config, &mut io::stdout(), &mut io::stderr()).unwrap();
//! ```

use std::io::Write;

use blackjack_engine::engine::Engine;
use tracing::debug;

use super::{log_round, write_history};
use crate::config::Config;
use crate::error::CliError;
use crate::formatters::{format_outcome, format_summary};
use crate::io_utils::open_history;
use crate::ui;

/// Handle the sim command: play `rounds` rounds automatically.
///
/// # Returns
///
/// `Ok(())` on success, or `CliError` on failure (zero rounds, unwritable
/// history file, output errors)
pub fn handle_sim_command(
    rounds: u32,
    config: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if rounds == 0 {
        ui::write_error(err, "rounds must be >= 1")?;
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }

    let seed = config.seed.unwrap_or_else(rand::random);
    let mut engine = Engine::new(&config.player_name, Some(seed))?;
    let mut logger = match open_history(config.history_path.as_deref()) {
        Ok(l) => l,
        Err(e) => {
            ui::write_error(err, &e)?;
            return Err(CliError::InvalidInput(e));
        }
    };

    writeln!(
        out,
        "sim: player={} rounds={} seed={}",
        engine.human_name(),
        rounds,
        seed
    )?;

    for i in 1..=rounds {
        let outcome = engine.autoplay_round()?;
        debug!(round = i, seed = engine.round_seed(), "simulated round");
        writeln!(
            out,
            "Round {}: {}",
            i,
            format_outcome(&outcome, engine.human_name())
        )?;
        log_round(&engine, logger.as_mut())?;
        if config.show_history {
            write_history(&engine, out)?;
        }
    }

    writeln!(out)?;
    write!(out, "{}", format_summary(&engine.standings(), engine.human_name()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(seed: u64) -> Config {
        Config {
            seed: Some(seed),
            ..Config::default()
        }
    }

    #[test]
    fn test_zero_rounds_rejected() {
        let mut err = Vec::new();
        let res = handle_sim_command(0, &config(1), &mut Vec::new(), &mut err);
        assert!(matches!(res, Err(CliError::InvalidInput(_))));
        assert!(String::from_utf8(err).unwrap().contains("rounds must be >= 1"));
    }

    #[test]
    fn test_one_line_per_round() {
        let mut out = Vec::new();
        handle_sim_command(5, &config(3), &mut out, &mut Vec::new()).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("sim: player=Player rounds=5 seed=3"));
        assert_eq!(out.lines().filter(|l| l.starts_with("Round ")).count(), 5);
        assert!(out.contains("Rounds played: 5"));
    }

    #[test]
    fn test_same_seed_same_transcript() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        handle_sim_command(20, &config(99), &mut a, &mut Vec::new()).unwrap();
        handle_sim_command(20, &config(99), &mut b, &mut Vec::new()).unwrap();
        assert_eq!(a, b);
    }
}
