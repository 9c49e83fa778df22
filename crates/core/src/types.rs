//! Marks, round outcomes and the session score tally.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::AddAssign;

/// The symbol a side paints into a cell.
///
/// The human always plays `X`, the computer always plays `O`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Mark {
    Human,
    Opponent,
}

impl Mark {
    /// Get the other side.
    pub fn opposite(self) -> Self {
        match self {
            Mark::Human => Mark::Opponent,
            Mark::Opponent => Mark::Human,
        }
    }

    /// Board symbol for this side.
    pub fn symbol(self) -> char {
        match self {
            Mark::Human => 'X',
            Mark::Opponent => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Result of scanning a board.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Some win pattern is fully owned by this mark.
    Winner(Mark),
    /// All nine cells are filled and nobody owns a line.
    Draw,
    /// Moves remain and nobody has won.
    Ongoing,
}

impl Outcome {
    /// True for `Winner` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// The winning mark, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Winner(mark) => Some(mark),
            _ => None,
        }
    }
}

/// Cumulative win counters for one session.
///
/// Counters only ever go up. Draws are not counted.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct ScoreTally {
    pub human_wins: u32,
    pub opponent_wins: u32,
}

impl ScoreTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit a finished round. Returns the mark that scored, if any.
    pub fn record(&mut self, outcome: Outcome) -> Option<Mark> {
        let winner = outcome.winner()?;
        match winner {
            Mark::Human => self.human_wins += 1,
            Mark::Opponent => self.opponent_wins += 1,
        }
        Some(winner)
    }

    /// Wins credited to the given side.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::Human => self.human_wins,
            Mark::Opponent => self.opponent_wins,
        }
    }

    /// Combine the tallies of two independent sessions.
    pub fn merge(self, other: Self) -> Self {
        Self {
            human_wins: self.human_wins + other.human_wins,
            opponent_wins: self.opponent_wins + other.opponent_wins,
        }
    }
}

impl AddAssign for ScoreTally {
    fn add_assign(&mut self, other: Self) {
        *self = self.merge(other);
    }
}

impl fmt::Display for ScoreTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "You {} - {} Computer", self.human_wins, self.opponent_wins)
    }
}
