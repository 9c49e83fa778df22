//! Noughts Core - Board, mark and outcome types
//!
//! This crate holds the plain data shared by the turn engine and any
//! front end: the 3x3 [`Board`], the two [`Mark`]s, the fixed catalog of
//! [`WIN_PATTERNS`], round [`Outcome`]s and the session [`ScoreTally`].
//!
//! # Types
//!
//! - [`Board`] - 9 cells, row-major, each empty or holding a [`Mark`]
//! - [`Outcome`] - `Winner`, `Draw` or `Ongoing`
//! - [`ScoreTally`] - win counters that survive across rounds

mod board;
mod error;
mod types;

pub use board::{Board, ParseBoardError, WinPattern, NUM_CELLS, WIN_PATTERNS};
pub use error::{GameError, MoveRejection, Result};
pub use types::{Mark, Outcome, ScoreTally};
