//! Batch simulation of the heuristic against a random stand-in.
//!
//! Each session is its own engine with its own tally, so sessions run in
//! parallel and their tallies are merged at the end.

use anyhow::{Context, Result};
use noughts_core::{Board, Mark, Outcome, ScoreTally};
use noughts_engine::{Engine, EngineConfig, HeuristicOpponent, Opponent};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Plays the human side by picking uniformly among empty cells.
pub struct RandomMover<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomMover<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Opponent for RandomMover<R> {
    fn select_move(&mut self, board: &Board) -> Option<usize> {
        let available = board.empty_cells();
        if available.is_empty() {
            return None;
        }
        Some(available[self.rng.gen_range(0..available.len())])
    }
}

/// Result of one session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResult {
    pub tally: ScoreTally,
    pub draws: u32,
}

/// Merged results of a simulation run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub sessions: usize,
    pub rounds_per_session: usize,
    pub seed: u64,
    pub tally: ScoreTally,
    pub draws: u32,
}

impl SimulationSummary {
    pub fn total_rounds(&self) -> usize {
        self.sessions * self.rounds_per_session
    }

    /// Share of rounds the heuristic did not lose.
    pub fn unbeaten_rate(&self) -> f32 {
        let total = self.total_rounds();
        if total == 0 {
            return 0.0;
        }
        let lost = (self.tally.human_wins as usize).min(total);
        (total - lost) as f32 / total as f32
    }
}

/// Play `rounds` rounds on one engine, alternating who moves first.
pub fn simulate_session(seed: u64, rounds: usize) -> Result<SessionResult> {
    let mut engine = Engine::new(EngineConfig::synchronous(), HeuristicOpponent::seeded(seed));
    let mut human = RandomMover::new(ChaCha8Rng::seed_from_u64(seed.wrapping_add(1)));
    let mut draws = 0;

    for round in 0..rounds {
        let first = if round % 2 == 0 { Mark::Human } else { Mark::Opponent };
        engine.start_round(first)?;

        while !engine.is_game_over() {
            let cell = human
                .select_move(engine.state().board())
                .context("Random mover found no empty cell")?;
            engine.apply_human_move(cell)?;
        }

        if engine.state().outcome() == Outcome::Draw {
            draws += 1;
        }
        engine.reset_round();
    }

    Ok(SessionResult {
        tally: engine.tally(),
        draws,
    })
}

/// Run `sessions` independent sessions in parallel and merge them.
pub fn run(sessions: usize, rounds: usize, seed: u64) -> Result<SimulationSummary> {
    let results: Vec<SessionResult> = (0..sessions)
        .into_par_iter()
        .map(|i| simulate_session(seed.wrapping_add(i as u64 * 1000), rounds))
        .collect::<Result<_>>()?;

    let (tally, draws) = results
        .iter()
        .fold((ScoreTally::new(), 0), |(tally, draws), r| (tally.merge(r.tally), draws + r.draws));

    Ok(SimulationSummary {
        sessions,
        rounds_per_session: rounds,
        seed,
        tally,
        draws,
    })
}
