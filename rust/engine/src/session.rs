//! A session: one shoe, one player, one dealer, `num_rounds` rounds played
//! back to back. The bankroll is the only state that survives from round to
//! round.

use crate::cards::{Card, Rank};
use crate::errors::GameError;
use crate::player::Player;
use crate::records::RoundRecord;
use crate::round;
use crate::shoe::Shoe;

/// Session parameters. Defaults match the table this simulation models: a
/// six-deck shoe, cut card three quarters in, flat 10-unit wager, 1000-unit
/// bankroll.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub num_decks: usize,
    /// Fraction of the shoe behind the cut card
    pub cut_card_loc: f64,
    pub num_rounds: u32,
    /// Flat wager placed on every round
    pub bet_size: f64,
    pub starting_bankroll: f64,
    /// Shoe RNG seed; `None` draws one from the thread RNG
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            num_decks: 6,
            cut_card_loc: 0.75,
            num_rounds: 1,
            bet_size: 10.0,
            starting_bankroll: 1000.0,
            seed: None,
        }
    }
}

pub struct Session {
    config: SessionConfig,
    seed: u64,
    shoe: Shoe,
    player: Player,
    dealer: Player,
    records: Vec<RoundRecord>,
    bankroll_history: Vec<f64>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Session {
        let seed = config.seed.unwrap_or_else(rand::random);
        Session {
            seed,
            shoe: Shoe::new(config.num_decks, config.cut_card_loc, seed),
            player: Player::new(config.starting_bankroll),
            dealer: Player::new(0.0),
            records: Vec::new(),
            bankroll_history: Vec::new(),
            config,
        }
    }

    /// Plays every configured round in order. Stops early only on a
    /// contract violation surfaced by the round controller.
    pub fn run(&mut self) -> Result<(), GameError> {
        for n in 0..self.config.num_rounds {
            let mut record = round::play_round(
                &mut self.shoe,
                &mut self.player,
                &mut self.dealer,
                self.config.bet_size,
            )?;
            record.round = n + 1;
            record.seed = self.seed;
            self.bankroll_history.push(self.player.bankroll());
            self.records.push(record);
        }
        Ok(())
    }

    pub fn records(&self) -> &[RoundRecord] {
        &self.records
    }

    /// Bankroll after each completed round, in order.
    pub fn bankroll_history(&self) -> &[f64] {
        &self.bankroll_history
    }

    pub fn final_bankroll(&self) -> f64 {
        self.player.bankroll()
    }

    pub fn starting_bankroll(&self) -> f64 {
        self.config.starting_bankroll
    }

    /// Cards drawn in the current shoe lifetime; earlier lifetimes are
    /// discarded at each reshuffle.
    pub fn drawn_cards(&self) -> &[Card] {
        self.shoe.history()
    }

    /// Reported, never acted on: the session keeps dealing from the same
    /// shoe regardless.
    pub fn cut_card_reached(&self) -> bool {
        self.shoe.cut_card_reached()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Scenario hook: forces the next cards the shoe will yield.
    /// See [`Shoe::stack`].
    pub fn stack_shoe(&mut self, firsts: &[Rank]) {
        self.shoe.stack(firsts);
    }
}
