//! Board/turn engine.
//!
//! Owns the round state and the score tally. Every mutation goes through
//! `start_round`, `apply_move`/`apply_human_move`, `play_opponent_turn` or
//! `reset_round`; front ends only read.

use crate::{
    config::EngineConfig,
    evaluator::evaluate,
    opponent::Opponent,
    round::{Phase, RoundState},
};
use noughts_core::{GameError, Mark, MoveRejection, Outcome, Result, ScoreTally, NUM_CELLS};
use std::time::Duration;
use tracing::{debug, info};

/// A mark painted into a cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Placement {
    pub cell: usize,
    pub mark: Mark,
}

/// What happened during one engine call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    /// Marks placed by this call, in order.
    pub placements: Vec<Placement>,

    /// Outcome after the last placement.
    pub outcome: Outcome,

    /// Set when the opponent is to move next and the front end should call
    /// `Engine::play_opponent_turn` after this pause.
    pub pending_reply: Option<Duration>,
}

impl TurnReport {
    fn new(outcome: Outcome) -> Self {
        Self {
            placements: Vec::new(),
            outcome,
            pending_reply: None,
        }
    }
}

/// Tic-tac-toe turn engine playing a human against an [`Opponent`].
pub struct Engine<O: Opponent> {
    config: EngineConfig,
    opponent: O,
    round: RoundState,
    tally: ScoreTally,
}

impl<O: Opponent> Engine<O> {
    /// Create a new engine awaiting player selection.
    pub fn new(config: EngineConfig, opponent: O) -> Self {
        Self {
            config,
            opponent,
            round: RoundState::new(),
            tally: ScoreTally::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current round state (read-only).
    pub fn state(&self) -> &RoundState {
        &self.round
    }

    /// Session score tally.
    pub fn tally(&self) -> ScoreTally {
        self.tally
    }

    /// True if `cell` is on the board and empty.
    pub fn is_cell_free(&self, cell: usize) -> bool {
        self.round.board().is_free(cell)
    }

    pub fn is_game_over(&self) -> bool {
        self.round.is_terminal()
    }

    /// Pick who moves first and clear the board.
    ///
    /// Fails with `RoundInProgress` once any move has been played, until
    /// `reset_round` is called. Choosing again before the first move just
    /// switches sides.
    ///
    /// When the opponent goes first its move is played right away, or
    /// reported as pending if a reply delay is configured.
    pub fn start_round(&mut self, first: Mark) -> Result<TurnReport> {
        if self.round.move_count() > 0 {
            return Err(rejected(GameError::RoundInProgress));
        }

        let snapshot = self.round.clone();
        self.round.begin(first);

        let mut report = TurnReport::new(self.round.outcome());
        if first == Mark::Opponent {
            if let Err(err) = self.reply(&mut report) {
                self.round = snapshot;
                return Err(err);
            }
        }
        info!(%first, "round started");
        Ok(report)
    }

    /// Paint the active player's mark into `cell`.
    ///
    /// On success the move count goes up by one, the active player flips,
    /// and the outcome is re-evaluated; a finished round is credited to the
    /// tally. On error nothing changes.
    pub fn apply_move(&mut self, cell: usize) -> Result<&RoundState> {
        let mark = match self.round.phase() {
            Phase::AwaitingPlayerSelection => {
                return Err(rejected(GameError::NoPlayerSelected));
            }
            Phase::Won(_) | Phase::Draw => {
                return Err(rejected(MoveRejection::RoundOver.into()));
            }
            Phase::InProgress { to_move } => to_move,
        };

        let mut board = *self.round.board();
        board
            .place(cell, mark)
            .map_err(|rejection| rejected(rejection.into()))?;

        let outcome = evaluate(&board, self.round.move_count() + 1);
        self.round.record_move(board, mark.opposite(), outcome);
        debug!(cell, %mark, move_count = self.round.move_count(), "mark placed");

        if outcome.is_terminal() {
            self.tally.record(outcome);
            info!(?outcome, tally = %self.tally, "round finished");
        }
        Ok(&self.round)
    }

    /// Play the human's move, then the opponent's reply if the round goes on.
    ///
    /// If the reply fails the human's move is rolled back as well.
    pub fn apply_human_move(&mut self, cell: usize) -> Result<TurnReport> {
        match self.round.phase() {
            Phase::AwaitingPlayerSelection => {
                return Err(rejected(GameError::NoPlayerSelected));
            }
            Phase::InProgress { to_move: Mark::Opponent } => {
                return Err(rejected(MoveRejection::NotYourTurn.into()));
            }
            _ => {}
        }

        let snapshot = (self.round.clone(), self.tally);
        self.apply_move(cell)?;

        let mut report = TurnReport::new(self.round.outcome());
        report.placements.push(Placement {
            cell,
            mark: Mark::Human,
        });
        if !self.round.is_terminal() {
            if let Err(err) = self.reply(&mut report) {
                (self.round, self.tally) = snapshot;
                return Err(err);
            }
        }
        Ok(report)
    }

    /// Let the opponent move now. Used by front ends after a pending reply.
    pub fn play_opponent_turn(&mut self) -> Result<TurnReport> {
        match self.round.phase() {
            Phase::AwaitingPlayerSelection => {
                return Err(rejected(GameError::NoPlayerSelected));
            }
            Phase::Won(_) | Phase::Draw => {
                return Err(rejected(MoveRejection::RoundOver.into()));
            }
            Phase::InProgress { to_move: Mark::Human } => {
                return Err(rejected(MoveRejection::NotYourTurn.into()));
            }
            Phase::InProgress { .. } => {}
        }

        let placement = self.opponent_move()?;
        let mut report = TurnReport::new(self.round.outcome());
        report.placements.push(placement);
        Ok(report)
    }

    /// Clear the board and wait for a new player selection. Keeps the tally.
    pub fn reset_round(&mut self) {
        self.round = RoundState::new();
        info!(tally = %self.tally, "round reset");
    }

    /// Either play the opponent's reply now or mark it pending.
    fn reply(&mut self, report: &mut TurnReport) -> Result<()> {
        match self.config.reply_delay {
            Some(delay) => report.pending_reply = Some(delay),
            None => {
                let placement = self.opponent_move()?;
                report.placements.push(placement);
            }
        }
        report.outcome = self.round.outcome();
        Ok(())
    }

    fn opponent_move(&mut self) -> Result<Placement> {
        if self.round.move_count() >= NUM_CELLS {
            return Err(GameError::NoLegalMoves);
        }
        let cell = self
            .opponent
            .select_move(self.round.board())
            .ok_or(GameError::NoLegalMoves)?;
        self.apply_move(cell).map_err(|err| match err {
            GameError::InvalidMove(rejection) => GameError::OpponentMoveRejected(rejection),
            other => other,
        })?;
        Ok(Placement {
            cell,
            mark: Mark::Opponent,
        })
    }
}

fn rejected(err: GameError) -> GameError {
    debug!(%err, "rejected");
    err
}
