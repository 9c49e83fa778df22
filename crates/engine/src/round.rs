//! Per-round state.

use noughts_core::{Board, Mark, Outcome};

/// Where a round stands.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    /// Nobody has been picked to move first yet.
    AwaitingPlayerSelection,
    /// Moves alternate; `to_move` is next.
    InProgress { to_move: Mark },
    /// Someone owns a line.
    Won(Mark),
    /// Full board, no line.
    Draw,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Won(_) | Phase::Draw)
    }
}

/// State of one round, owned by the engine.
///
/// Invariant: `move_count` equals the number of non-empty cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundState {
    board: Board,
    move_count: usize,
    active_player: Option<Mark>,
    outcome: Outcome,
}

impl Default for RoundState {
    fn default() -> Self {
        Self {
            board: Board::new(),
            move_count: 0,
            active_player: None,
            outcome: Outcome::Ongoing,
        }
    }
}

impl RoundState {
    /// Create a fresh round awaiting player selection.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of moves played this round.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Side to move, or `None` before a player is picked.
    ///
    /// Keeps alternating on the final move, so after a terminal outcome it
    /// names the side that would have moved next.
    pub fn active_player(&self) -> Option<Mark> {
        self.active_player
    }

    /// Current outcome. `Ongoing` before the round starts.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome().is_terminal()
    }

    pub fn phase(&self) -> Phase {
        match (self.outcome(), self.active_player) {
            (Outcome::Winner(mark), _) => Phase::Won(mark),
            (Outcome::Draw, _) => Phase::Draw,
            (Outcome::Ongoing, Some(to_move)) => Phase::InProgress { to_move },
            (Outcome::Ongoing, None) => Phase::AwaitingPlayerSelection,
        }
    }

    /// Begin play with `first` to move on a cleared board.
    pub(crate) fn begin(&mut self, first: Mark) {
        *self = Self {
            active_player: Some(first),
            ..Self::default()
        };
    }

    /// Record a placement that the engine already validated.
    pub(crate) fn record_move(&mut self, board: Board, next: Mark, outcome: Outcome) {
        self.board = board;
        self.move_count += 1;
        self.active_player = Some(next);
        self.outcome = outcome;
    }
}
