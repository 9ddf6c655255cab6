//! # pontoon-engine: Blackjack Simulation Core
//!
//! Simulates multi-round blackjack against a fixed dealer policy, with the
//! player following table-driven basic strategy. Rounds draw from a
//! continuously-reshuffled multi-deck shoe and settle against a single
//! bankroll.
//!
//! ## Core Modules
//!
//! - [`cards`] - Rank-only card representation and shoe multiset construction
//! - [`shoe`] - Multi-deck shoe with cut card, draw history, and
//!   rebuild-on-empty, shuffled with ChaCha20 RNG
//! - [`hand`] - Hand values with soft-ace handling, pair/soft/natural
//!   predicates
//! - [`player`] - Hands, bankroll and per-hand bet accounting, splitting
//! - [`strategy`] - The pure basic-strategy decision tables
//! - [`round`] - Round orchestration: deal, natural check, player and dealer
//!   turns, settlement
//! - [`session`] - Multi-round loop with bankroll history
//! - [`records`] - Round records and the JSONL logger
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use pontoon_engine::session::{Session, SessionConfig};
//!
//! let mut session = Session::new(SessionConfig {
//!     num_rounds: 5,
//!     seed: Some(42),
//!     ..SessionConfig::default()
//! });
//! session.run().expect("session runs to completion");
//! assert_eq!(session.records().len(), 5);
//! assert_eq!(session.bankroll_history().len(), 5);
//! ```
//!
//! ## Deterministic Simulation
//!
//! Sessions with the same seed replay the same shoe:
//!
//! ```rust
//! use pontoon_engine::shoe::Shoe;
//!
//! let mut a = Shoe::new(6, 0.75, 7);
//! let mut b = Shoe::new(6, 0.75, 7);
//! assert_eq!(a.draw(), b.draw());
//! ```

pub mod cards;
pub mod errors;
pub mod hand;
pub mod player;
pub mod records;
pub mod round;
pub mod session;
pub mod shoe;
pub mod strategy;
