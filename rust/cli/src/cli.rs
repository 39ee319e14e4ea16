//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand};

use crate::config::Overrides;

#[derive(Parser, Debug)]
#[command(
    name = "blackjack",
    version,
    about = "Heads-up blackjack against a rule-bound dealer"
)]
pub struct BlackjackCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

/// Flags shared by the commands that run rounds.
#[derive(Args, Debug, Clone, Default)]
pub struct SessionArgs {
    /// RNG seed; the whole session replays from it
    #[arg(long)]
    pub seed: Option<u64>,
    /// Name to play under
    #[arg(long)]
    pub player: Option<String>,
    /// Append every settled round to this JSONL file
    #[arg(long)]
    pub history: Option<String>,
    /// Print the play-by-play after each round
    #[arg(long)]
    pub show_history: bool,
}

impl From<SessionArgs> for Overrides {
    fn from(args: SessionArgs) -> Self {
        Self {
            player_name: args.player,
            seed: args.seed,
            history_path: args.history,
            show_history: args.show_history,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play interactively against the dealer
    Play {
        #[command(flatten)]
        session: SessionArgs,
    },
    /// Play rounds automatically; the player follows the dealer's rule
    Sim {
        #[arg(long, default_value_t = 10)]
        rounds: u32,
        #[command(flatten)]
        session: SessionArgs,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
