//! Round records and their JSONL sink.
//!
//! A [`RoundRecord`] is the observable trace of one round: every player hand
//! with its cards, actions, wager and outcome, the dealer's final hand, and
//! the bankroll after settlement. Records serialize one-per-line for
//! downstream aggregation.

use serde::{Deserialize, Serialize};

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::cards::Card;
use crate::round::HandOutcome;
use crate::strategy::Action;

/// One player hand as it ended the round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Final cards, in deal order
    pub cards: Vec<Card>,
    /// Final value (may exceed 21 on a bust)
    pub value: u32,
    /// Actions taken on this hand, in order
    pub actions: Vec<Action>,
    /// Wager riding on the hand at settlement (after any double or split)
    pub bet: f64,
    pub outcome: HandOutcome,
}

/// Complete record of one round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round number within the session
    pub round: u32,
    /// RNG seed the session's shoe was built from
    pub seed: u64,
    /// All player hands (more than one only after splits)
    pub player_hands: Vec<HandRecord>,
    /// Dealer's final cards
    pub dealer_cards: Vec<Card>,
    pub dealer_value: u32,
    /// Player bankroll after settlement
    pub bankroll_after: f64,
    /// Timestamp injected at write time (RFC3339)
    #[serde(default)]
    pub ts: Option<String>,
}

/// Buffered JSONL writer for round records. Creates parent directories on
/// demand and stamps each record with a timestamp when it lacks one.
pub struct RoundLogger {
    writer: BufWriter<File>,
}

impl RoundLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(f),
        })
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    #[test]
    fn record_round_trips_through_json() {
        let record = RoundRecord {
            round: 3,
            seed: 42,
            player_hands: vec![HandRecord {
                cards: vec![Card::new(Rank::Ten), Card::new(Rank::Nine)],
                value: 19,
                actions: vec![Action::Stand],
                bet: 10.0,
                outcome: HandOutcome::Win,
            }],
            dealer_cards: vec![Card::new(Rank::Ten), Card::new(Rank::Eight)],
            dealer_value: 18,
            bankroll_after: 1010.0,
            ts: None,
        };
        let line = serde_json::to_string(&record).expect("serializes");
        let back: RoundRecord = serde_json::from_str(&line).expect("deserializes");
        assert_eq!(back, record);
    }
}
