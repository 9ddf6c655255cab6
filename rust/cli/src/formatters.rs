//! Round-trace rendering shared by the `sim` and `deal` commands.

use pontoon_engine::cards::Card;
use pontoon_engine::records::RoundRecord;
use pontoon_engine::round::HandOutcome;
use std::io::Write;

pub fn outcome_label(outcome: HandOutcome) -> &'static str {
    match outcome {
        HandOutcome::Blackjack => "blackjack",
        HandOutcome::DealerBlackjack => "dealer blackjack",
        HandOutcome::Win => "win",
        HandOutcome::Push => "push",
        HandOutcome::Loss => "loss",
        HandOutcome::Bust => "bust",
    }
}

pub fn format_cards(cards: &[Card]) -> String {
    let ranks: Vec<String> = cards.iter().map(|c| c.to_string()).collect();
    format!("[{}]", ranks.join(" "))
}

/// Writes the per-round trace: every player hand with its actions and
/// outcome, the dealer's final hand, and the bankroll after settlement.
pub fn write_round_trace(out: &mut dyn Write, record: &RoundRecord) -> std::io::Result<()> {
    writeln!(out, "--- round {} ---", record.round)?;
    let upcard = record
        .dealer_cards
        .first()
        .map(|c| c.to_string())
        .unwrap_or_default();
    for (i, hand) in record.player_hands.iter().enumerate() {
        let actions: Vec<String> = hand.actions.iter().map(|a| a.to_string()).collect();
        let actions = if actions.is_empty() {
            "-".to_string()
        } else {
            actions.join(", ")
        };
        writeln!(
            out,
            "player hand {}: {} ({}) vs {} | bet {} | {} -> {}",
            i + 1,
            format_cards(&hand.cards),
            hand.value,
            upcard,
            hand.bet,
            actions,
            outcome_label(hand.outcome),
        )?;
    }
    writeln!(
        out,
        "dealer: {} ({})",
        format_cards(&record.dealer_cards),
        record.dealer_value
    )?;
    writeln!(out, "bankroll after round: {:.2}", record.bankroll_after)?;
    Ok(())
}
