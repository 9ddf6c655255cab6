//! Command-line definitions for the pontoon binary.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "pontoon",
    version,
    about = "Basic-strategy blackjack simulator"
)]
pub struct PontoonCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Simulate a session of rounds and report the bankroll outcome
    Sim {
        /// Number of rounds to play
        #[arg(long)]
        rounds: Option<u32>,
        /// Flat wager per round
        #[arg(long)]
        bet: Option<f64>,
        /// Decks combined into the shoe
        #[arg(long)]
        decks: Option<usize>,
        /// Starting bankroll
        #[arg(long)]
        bankroll: Option<f64>,
        /// Shoe RNG seed (omit for a random one)
        #[arg(long)]
        seed: Option<u64>,
        /// Write round records to this JSONL file
        #[arg(long)]
        output: Option<String>,
        /// Suppress per-round traces
        #[arg(long)]
        quiet: bool,
    },
    /// Play a single round and print its trace
    Deal {
        /// Shoe RNG seed (omit for a random one)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Aggregate statistics from a JSONL round history
    Stats {
        /// Path to a JSONL file written by `sim --output`
        #[arg(long)]
        input: String,
    },
    /// Display the resolved configuration
    Cfg,
}
