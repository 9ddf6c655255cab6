//! Statistics aggregation over a JSONL round history.

use crate::error::CliError;
use crate::ui;
use pontoon_engine::records::RoundRecord;
use pontoon_engine::round::HandOutcome;
use std::io::Write;

/// Aggregates a round-history file written by `sim --output`.
///
/// Counts rounds and per-hand outcomes; unparseable lines are tallied and
/// warned about rather than aborting the report.
pub fn handle_stats_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let content = std::fs::read_to_string(&input)
        .map_err(|e| CliError::InvalidInput(format!("cannot read {}: {}", input, e)))?;

    let mut rounds = 0u64;
    let mut hands = 0u64;
    let mut wins = 0u64;
    let mut pushes = 0u64;
    let mut losses = 0u64;
    let mut busts = 0u64;
    let mut naturals = 0u64;
    let mut dealer_naturals = 0u64;
    let mut corrupted = 0u64;
    let mut last_bankroll = None;

    for line in content.lines().filter(|l| !l.trim().is_empty()) {
        let record: RoundRecord = match serde_json::from_str(line) {
            Ok(r) => r,
            Err(_) => {
                corrupted += 1;
                continue;
            }
        };
        rounds += 1;
        last_bankroll = Some(record.bankroll_after);
        for hand in &record.player_hands {
            hands += 1;
            match hand.outcome {
                HandOutcome::Win => wins += 1,
                HandOutcome::Blackjack => {
                    wins += 1;
                    naturals += 1;
                }
                HandOutcome::Push => pushes += 1,
                HandOutcome::Loss => losses += 1,
                HandOutcome::Bust => {
                    losses += 1;
                    busts += 1;
                }
                HandOutcome::DealerBlackjack => {
                    losses += 1;
                    dealer_naturals += 1;
                }
            }
        }
    }

    if corrupted > 0 {
        ui::display_warning(err, &format!("{} corrupted record(s) skipped", corrupted))?;
    }

    writeln!(out, "Rounds: {}", rounds)?;
    writeln!(out, "Hands: {}", hands)?;
    writeln!(out, "Won: {} ({} naturals)", wins, naturals)?;
    writeln!(out, "Pushed: {}", pushes)?;
    writeln!(
        out,
        "Lost: {} ({} busts, {} dealer naturals)",
        losses, busts, dealer_naturals
    )?;
    if let Some(bankroll) = last_bankroll {
        writeln!(out, "Closing bankroll: {:.2}", bankroll)?;
    }
    Ok(())
}
