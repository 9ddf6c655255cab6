//! Session simulation command.
//!
//! Runs a configurable number of rounds through the engine, optionally
//! records them as JSONL, and reports the bankroll outcome.

use crate::config;
use crate::error::CliError;
use crate::formatters;
use crate::ui;
use pontoon_engine::records::RoundLogger;
use pontoon_engine::round::HandOutcome;
use pontoon_engine::session::{Session, SessionConfig};
use std::io::Write;

/// Handle the sim command: play a full session and summarize it.
///
/// Flag values override the resolved configuration; the configuration file
/// and environment only supply defaults.
#[allow(clippy::too_many_arguments)]
pub fn handle_sim_command(
    rounds: Option<u32>,
    bet: Option<f64>,
    decks: Option<usize>,
    bankroll: Option<f64>,
    seed: Option<u64>,
    output: Option<String>,
    quiet: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;

    let rounds = rounds.unwrap_or(100);
    if rounds == 0 {
        ui::write_error(err, "rounds must be >= 1")?;
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    let bet_size = bet.unwrap_or(cfg.bet_size);
    if bet_size <= 0.0 {
        ui::write_error(err, "bet must be > 0")?;
        return Err(CliError::InvalidInput("bet must be > 0".to_string()));
    }
    let num_decks = decks.unwrap_or(cfg.num_decks);
    if num_decks == 0 {
        ui::write_error(err, "decks must be >= 1")?;
        return Err(CliError::InvalidInput("decks must be >= 1".to_string()));
    }

    let mut session = Session::new(SessionConfig {
        num_decks,
        cut_card_loc: cfg.cut_card_loc,
        num_rounds: rounds,
        bet_size,
        starting_bankroll: bankroll.unwrap_or(cfg.starting_bankroll),
        seed: seed.or(cfg.seed),
    });
    session.run()?;

    if !quiet {
        for record in session.records() {
            formatters::write_round_trace(out, record)?;
        }
    }

    if let Some(path) = output {
        let mut logger = RoundLogger::create(&path)?;
        for record in session.records() {
            logger.write(record)?;
        }
        writeln!(out, "Wrote {} records to {}", session.records().len(), path)?;
    }

    let mut wins = 0u32;
    let mut pushes = 0u32;
    let mut losses = 0u32;
    let mut naturals = 0u32;
    for record in session.records() {
        for hand in &record.player_hands {
            match hand.outcome {
                HandOutcome::Win => wins += 1,
                HandOutcome::Blackjack => {
                    wins += 1;
                    naturals += 1;
                }
                HandOutcome::Push => pushes += 1,
                HandOutcome::Loss | HandOutcome::Bust | HandOutcome::DealerBlackjack => {
                    losses += 1
                }
            }
        }
    }

    let net = session.final_bankroll() - session.starting_bankroll();
    writeln!(out, "Rounds played: {}", session.records().len())?;
    writeln!(out, "Seed: {}", session.seed())?;
    writeln!(
        out,
        "Hands won/pushed/lost: {}/{}/{} ({} naturals)",
        wins, pushes, losses, naturals
    )?;
    writeln!(
        out,
        "Final bankroll: {:.2} (net {:+.2})",
        session.final_bankroll(),
        net
    )?;
    writeln!(out, "Cut card reached: {}", session.cut_card_reached())?;
    if !quiet {
        let cards: Vec<String> = session
            .drawn_cards()
            .iter()
            .map(|c| c.to_string())
            .collect();
        writeln!(out, "Current shoe history: {}", cards.join(" "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_sim(rounds: u32, seed: u64) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_sim_command(
            Some(rounds),
            None,
            None,
            None,
            Some(seed),
            None,
            true,
            &mut out,
            &mut err,
        )
        .expect("sim succeeds");
        (
            String::from_utf8(out).expect("valid utf-8"),
            String::from_utf8(err).expect("valid utf-8"),
        )
    }

    #[test]
    fn sim_reports_rounds_and_bankroll() {
        let (out, err) = run_sim(25, 42);
        assert!(out.contains("Rounds played: 25"));
        assert!(out.contains("Seed: 42"));
        assert!(out.contains("Final bankroll:"));
        assert!(err.is_empty());
    }

    #[test]
    fn sim_is_deterministic_for_a_seed() {
        let (a, _) = run_sim(25, 7);
        let (b, _) = run_sim(25, 7);
        assert_eq!(a, b);
    }

    #[test]
    fn zero_rounds_is_rejected() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_sim_command(
            Some(0),
            None,
            None,
            None,
            None,
            None,
            true,
            &mut out,
            &mut err,
        );
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
        assert!(String::from_utf8(err).expect("valid utf-8").contains("rounds"));
    }

    #[test]
    fn negative_bet_is_rejected() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_sim_command(
            Some(5),
            Some(-1.0),
            None,
            None,
            None,
            None,
            true,
            &mut out,
            &mut err,
        );
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn quiet_suppresses_round_traces() {
        let (out, _) = run_sim(5, 11);
        assert!(!out.contains("--- round"));
    }
}
