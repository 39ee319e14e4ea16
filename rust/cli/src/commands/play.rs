//! # Play Command
//!
//! Interactive blackjack against the dealer.
//!
//! Each round the player sees their hand and the dealer's up card, then picks
//! `1`/`h` to hit or `2`/`s` to stand until they stand or bust. The dealer then
//! plays out its turn by the draw-below-17 rule. After every round the player
//! is asked whether to continue; `q` or end of input quits at any prompt.

use std::io::{BufRead, Write};

use blackjack_engine::engine::{Engine, HitOutcome};
use blackjack_engine::game::RoundOutcome;

use super::{log_round, write_history};
use crate::config::Config;
use crate::error::CliError;
use crate::formatters::{format_dealer_turn, format_outcome, format_summary};
use crate::io_utils::{open_history, read_stdin_line};
use crate::ui;
use crate::validation::{ParseResult, TurnAction, parse_turn_action, parse_yes_no};

/// Handle the play command: interactive rounds until the player stops.
///
/// # Arguments
///
/// * `config` - Resolved session configuration (player name, seed, history)
/// * `out` - Output stream for the table display
/// * `err` - Error stream for invalid-input messages
/// * `stdin` - Input stream for menu choices
///
/// # Examples
///
/// ```
/// use blackjack_cli::commands::handle_play_command;
/// use blackjack_cli::config::Config;
/// use std::io::Cursor;
///
/// let config = Config { seed: Some(1), ..Config::default() };
/// let mut input = Cursor::new("2\nn\n");
/// let (mut out, mut err) = (Vec::new(), Vec::new());
/// handle_play_command(&config, &mut out, &mut err, &mut input).unwrap();
/// assert!(String::from_utf8(out).unwrap().contains("Final Standings"));
/// ```
pub fn handle_play_command(
    config: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let seed = config.seed.unwrap_or_else(rand::random);
    let mut engine = Engine::new(&config.player_name, Some(seed))?;
    let mut logger = match open_history(config.history_path.as_deref()) {
        Ok(l) => l,
        Err(e) => {
            ui::write_error(err, &e)?;
            return Err(CliError::InvalidInput(e));
        }
    };

    writeln!(out, "play: player={} seed={}", engine.human_name(), seed)?;

    loop {
        writeln!(out)?;
        writeln!(out, "=== Round {} ===", engine.standings().rounds + 1)?;
        if !play_round(&mut engine, out, err, stdin)? {
            writeln!(out, "Round abandoned.")?;
            break;
        }
        log_round(&engine, logger.as_mut())?;
        if config.show_history {
            write_history(&engine, out)?;
        }
        if !ask_continue(out, err, stdin)? {
            break;
        }
    }

    writeln!(out)?;
    write!(out, "{}", format_summary(&engine.standings(), engine.human_name()))?;
    Ok(())
}

/// Plays one round. `Ok(false)` when the player quit before it settled.
fn play_round(
    engine: &mut Engine,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<bool, CliError> {
    let natural = engine.start_round()?;
    play_dealt_round(engine, natural, out, err, stdin)
}

/// Drives a round whose opening hands are already dealt.
fn play_dealt_round(
    engine: &mut Engine,
    natural: Option<RoundOutcome>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<bool, CliError> {
    if let Some(outcome) = natural {
        show_table(engine, true, out)?;
        writeln!(out, "{}", format_outcome(&outcome, engine.human_name()))?;
        return Ok(true);
    }
    show_table(engine, false, out)?;

    loop {
        ui::prompt(out, "Choose: [1] hit  [2] stand  [q] quit > ")?;
        let Some(line) = read_stdin_line(stdin) else {
            writeln!(out)?;
            return Ok(false);
        };
        match parse_turn_action(&line) {
            ParseResult::Action(TurnAction::Hit) => match engine.hit()? {
                HitOutcome::Drew { card, total } => {
                    writeln!(out, "You drew {}. Total: {}", card, total)?;
                }
                HitOutcome::Busted { card, total } => {
                    writeln!(out, "You drew {}. Total: {}. Bust!", card, total)?;
                    break;
                }
                HitOutcome::DeckExhausted => {
                    writeln!(out, "The deck is empty; your turn is over.")?;
                    break;
                }
            },
            ParseResult::Action(TurnAction::Stand) => {
                let total = engine.stand()?;
                writeln!(out, "You stand on {}.", total)?;
                break;
            }
            ParseResult::Quit => return Ok(false),
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    }

    let outcome = engine.finish_round()?;
    if let Some(turn) = outcome.dealer_turn {
        writeln!(out, "{}", format_dealer_turn(turn))?;
    }
    show_table(engine, true, out)?;
    writeln!(out, "{}", format_outcome(&outcome, engine.human_name()))?;
    Ok(true)
}

fn show_table(engine: &Engine, reveal: bool, out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(out, "{}", engine.human()?)?;
    writeln!(out, "{}", engine.dealer()?.render(reveal))?;
    Ok(())
}

/// Asks until it gets a yes or a no. End of input and `q` count as no.
fn ask_continue(
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<bool, CliError> {
    loop {
        ui::prompt(out, "Play another round? (y/n) > ")?;
        let Some(line) = read_stdin_line(stdin) else {
            writeln!(out)?;
            return Ok(false);
        };
        if line.eq_ignore_ascii_case("q") {
            return Ok(false);
        }
        match parse_yes_no(&line) {
            Some(answer) => return Ok(answer),
            None => ui::write_error(err, "Please answer y or n")?,
        }
    }
}
