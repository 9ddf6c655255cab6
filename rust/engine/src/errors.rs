use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GameError {
    #[error("cannot split hand {hand}: not a pair")]
    SplitNonPair { hand: usize },
    #[error("cannot split hand {hand}: bet {needed} exceeds bankroll {available}")]
    SplitInsufficientBankroll {
        hand: usize,
        needed: f64,
        available: f64,
    },
}
