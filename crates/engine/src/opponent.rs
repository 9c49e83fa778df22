//! Computer opponent.
//!
//! The `Opponent` trait is the seam between the turn engine and whatever
//! picks the computer's cells. `HeuristicOpponent` is the fixed priority
//! cascade: win, block, center, random.

use noughts_core::{Board, Mark, WIN_PATTERNS};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::trace;

/// Center cell index.
pub const CENTER: usize = 4;

/// Trait for choosing the computer's move.
///
/// Any automated mover implements it, including stand-ins that play the
/// human side in simulations; the engine only calls it for `O`.
pub trait Opponent {
    /// Pick an empty cell for the side to move.
    ///
    /// Returns `None` only when the board has no empty cell.
    fn select_move(&mut self, board: &Board) -> Option<usize>;
}

/// Find the empty cell that would complete a line for `mark`.
///
/// Scans [`WIN_PATTERNS`] in order and returns the empty cell of the first
/// pattern where exactly two cells hold `mark`.
pub fn find_two_of_three(board: &Board, mark: Mark) -> Option<usize> {
    WIN_PATTERNS.iter().find_map(|pattern| {
        let owned = pattern.iter().filter(|&&cell| board.get(cell) == Some(mark)).count();
        if owned != 2 {
            return None;
        }
        pattern.iter().copied().find(|&cell| board.is_free(cell))
    })
}

/// Which tier of the cascade produced a move.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tier {
    Win,
    Block,
    Center,
    Random,
}

/// Heuristic opponent: win > block > center > random.
///
/// Plays the `O` side. Not unbeatable: it never looks more than one move ahead.
pub struct HeuristicOpponent<R: Rng> {
    rng: R,
}

impl<R: Rng> HeuristicOpponent<R> {
    /// Create a new heuristic opponent.
    ///
    /// # Arguments
    /// * `rng` - Random number generator for the fallback tier
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Pick a cell and report which tier chose it.
    pub fn select_with_tier(&mut self, board: &Board) -> Option<(usize, Tier)> {
        if let Some(cell) = find_two_of_three(board, Mark::Opponent) {
            return Some((cell, Tier::Win));
        }
        if let Some(cell) = find_two_of_three(board, Mark::Human) {
            return Some((cell, Tier::Block));
        }
        if board.is_free(CENTER) {
            return Some((CENTER, Tier::Center));
        }

        let available = board.empty_cells();
        if available.is_empty() {
            return None;
        }
        let idx = self.rng.gen_range(0..available.len());
        Some((available[idx], Tier::Random))
    }
}

impl HeuristicOpponent<ChaCha8Rng> {
    /// Heuristic with a reproducible random fallback.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Heuristic seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> Opponent for HeuristicOpponent<R> {
    fn select_move(&mut self, board: &Board) -> Option<usize> {
        let (cell, tier) = self.select_with_tier(board)?;
        trace!(cell, ?tier, "opponent picked cell");
        Some(cell)
    }
}
