//! Tic-tac-toe turn engine with a heuristic computer opponent.
//!
//! This crate tracks one round at a time, alternates turns between the
//! human (`X`) and the computer (`O`), detects wins and draws, and keeps a
//! session score tally.
//!
//! # Features
//!
//! - **Explicit state**: `RoundState` and `ScoreTally` live in an `Engine`
//!   value, so several games can run side by side
//! - **Typed rejections**: invalid moves return `GameError` and leave the state untouched
//! - **Opponent abstraction**: anything implementing `Opponent` can play `O`
//! - **Optional pacing**: replies can be played inline or reported as pending
//!
//! # Example
//!
//! ```
//! use noughts_core::{Mark, Outcome};
//! use noughts_engine::{Engine, EngineConfig, HeuristicOpponent};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let opponent = HeuristicOpponent::new(ChaCha8Rng::seed_from_u64(42));
//! let mut engine = Engine::new(EngineConfig::synchronous(), opponent);
//!
//! engine.start_round(Mark::Human).unwrap();
//! let report = engine.apply_human_move(0).unwrap();
//!
//! // The heuristic takes the center when nothing needs blocking.
//! assert_eq!(report.placements[1].cell, 4);
//! assert_eq!(report.outcome, Outcome::Ongoing);
//! ```

pub mod config;
pub mod engine;
pub mod evaluator;
pub mod opponent;
pub mod round;

pub use config::EngineConfig;
pub use engine::{Engine, Placement, TurnReport};
pub use evaluator::evaluate;
pub use opponent::{find_two_of_three, HeuristicOpponent, Opponent, Tier};
pub use round::{Phase, RoundState};
