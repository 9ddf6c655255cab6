//! Deal command: play one round and show its trace.

use crate::config;
use crate::error::CliError;
use crate::formatters;
use pontoon_engine::session::{Session, SessionConfig};
use std::io::Write;

/// Handle the deal command.
///
/// Plays a single round with the resolved configuration and prints the full
/// trace. A fixed seed reproduces the same round.
pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let mut session = Session::new(SessionConfig {
        num_decks: cfg.num_decks,
        cut_card_loc: cfg.cut_card_loc,
        num_rounds: 1,
        bet_size: cfg.bet_size,
        starting_bankroll: cfg.starting_bankroll,
        seed: seed.or(cfg.seed),
    });
    session.run()?;

    for record in session.records() {
        formatters::write_round_trace(out, record)?;
    }
    writeln!(out, "Seed: {}", session.seed())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deal_prints_one_round_trace() {
        let mut out = Vec::new();
        handle_deal_command(Some(42), &mut out).expect("deal succeeds");
        let text = String::from_utf8(out).expect("valid utf-8");
        assert!(text.contains("--- round 1 ---"));
        assert!(text.contains("player hand 1:"));
        assert!(text.contains("dealer:"));
        assert!(text.contains("Seed: 42"));
    }

    #[test]
    fn same_seed_deals_the_same_round() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        handle_deal_command(Some(12345), &mut a).expect("deal succeeds");
        handle_deal_command(Some(12345), &mut b).expect("deal succeeds");
        assert_eq!(a, b, "same seed must yield an identical trace");
    }

    #[test]
    fn deal_works_without_a_seed() {
        let mut out = Vec::new();
        handle_deal_command(None, &mut out).expect("deal succeeds");
        let text = String::from_utf8(out).expect("valid utf-8");
        assert!(text.contains("--- round 1 ---"));
    }
}
