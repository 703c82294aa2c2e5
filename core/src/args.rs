use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "Kalaha")]
#[command(version)]
#[command(about = "Play Kalah against a minimax engine")]
pub struct Args {
    /// Search depth in plies for the engine opponent (clamped to 1-10).
    #[arg(short, long, default_value_t = 6)]
    pub depth: u8,

    /// Starting stones per pit.
    #[arg(short, long, default_value_t = 4)]
    pub stones: u32,

    /// Disable the transposition table.
    #[arg(long)]
    pub no_tt: bool,

    /// Write debug logs to this file.
    #[arg(short, long)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a fixed-depth search benchmark from the opening position.
    Bench {
        #[arg(short, long, default_value_t = 8)]
        depth: u8,
    },
}
