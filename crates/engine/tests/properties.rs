//! Property-based tests for the engine.
//!
//! These check the board invariants, the outcome evaluator, and the
//! opponent heuristic over random boards and random rounds.

use noughts_core::{Board, Mark, Outcome, NUM_CELLS, WIN_PATTERNS};
use noughts_engine::{
    evaluate, find_two_of_three, Engine, EngineConfig, HeuristicOpponent, Opponent,
};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// Generate an arbitrary cell content
fn arb_cell() -> impl Strategy<Value = Option<Mark>> {
    prop_oneof![Just(None::<Mark>), Just(Some(Mark::Human)), Just(Some(Mark::Opponent))]
}

/// Generate an arbitrary board. Not necessarily reachable in play.
fn arb_board() -> impl Strategy<Value = Board> {
    proptest::array::uniform9(arb_cell()).prop_map(Board::from_cells)
}

/// Generate a board with at least one empty cell
fn arb_open_board() -> impl Strategy<Value = Board> {
    arb_board().prop_filter("board must have an empty cell", |b| !b.is_full())
}

fn arb_mark() -> impl Strategy<Value = Mark> {
    prop_oneof![Just(Mark::Human), Just(Mark::Opponent)]
}

fn owns_line(board: &Board, mark: Mark) -> bool {
    WIN_PATTERNS
        .iter()
        .any(|pattern| pattern.iter().all(|&cell| board.get(cell) == Some(mark)))
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Move count equals filled cells after every accepted call
    #[test]
    fn prop_move_count_matches_filled_cells(
        seed in any::<u64>(),
        human_first in any::<bool>(),
        picks in proptest::collection::vec(0usize..NUM_CELLS, 9),
    ) {
        let mut engine = Engine::new(EngineConfig::synchronous(), HeuristicOpponent::seeded(seed));
        let first = if human_first { Mark::Human } else { Mark::Opponent };
        engine.start_round(first).unwrap();
        prop_assert_eq!(engine.state().move_count(), engine.state().board().filled());

        for pick in picks {
            if engine.is_game_over() {
                break;
            }
            let empty = engine.state().board().empty_cells();
            let cell = empty[pick % empty.len()];
            engine.apply_human_move(cell).unwrap();

            let state = engine.state();
            prop_assert_eq!(state.move_count(), state.board().filled());
        }

        // Every round finishes within nine moves
        prop_assert!(engine.is_game_over());
    }

    /// Rejected moves leave the round untouched
    #[test]
    fn prop_rejected_move_is_noop(
        seed in any::<u64>(),
        picks in proptest::collection::vec(0usize..NUM_CELLS, 1..5),
        target in 0usize..12,
    ) {
        let mut engine = Engine::new(EngineConfig::synchronous(), HeuristicOpponent::seeded(seed));
        engine.start_round(Mark::Human).unwrap();
        for pick in picks {
            if engine.is_game_over() {
                break;
            }
            let empty = engine.state().board().empty_cells();
            engine.apply_human_move(empty[pick % empty.len()]).unwrap();
        }

        let before = engine.state().clone();
        let tally = engine.tally();
        if engine.apply_human_move(target).is_err() {
            prop_assert_eq!(engine.state(), &before);
            prop_assert_eq!(engine.tally(), tally);
        }
    }

    /// Winner(m) iff m owns a line; Draw iff full with no line
    #[test]
    fn prop_evaluate_matches_lines(board in arb_board()) {
        let filled = board.filled();
        let human = owns_line(&board, Mark::Human);
        let opponent = owns_line(&board, Mark::Opponent);

        match evaluate(&board, filled) {
            Outcome::Winner(mark) => prop_assert!(owns_line(&board, mark)),
            Outcome::Draw => {
                prop_assert!(!human && !opponent);
                prop_assert_eq!(filled, NUM_CELLS);
            }
            Outcome::Ongoing => {
                prop_assert!(!human && !opponent);
                prop_assert!(filled < NUM_CELLS);
            }
        }
    }

    /// The heuristic never picks an occupied cell
    #[test]
    fn prop_heuristic_picks_empty_cell(seed in any::<u64>(), board in arb_open_board()) {
        let mut opponent = HeuristicOpponent::seeded(seed);
        let cell = opponent.select_move(&board);
        prop_assert!(cell.is_some());
        prop_assert!(board.is_free(cell.unwrap()));
    }

    /// Swapping every mark and the query mark gives the same cell
    #[test]
    fn prop_two_of_three_symmetric(board in arb_board(), mark in arb_mark()) {
        prop_assert_eq!(
            find_two_of_three(&board, mark),
            find_two_of_three(&board.swapped(), mark.opposite())
        );
    }

    /// Tally counters never go down across rounds
    #[test]
    fn prop_tally_monotonic(seed in any::<u64>(), rounds in 1usize..6) {
        let mut engine = Engine::new(EngineConfig::synchronous(), HeuristicOpponent::seeded(seed));
        let mut previous = engine.tally();

        for round in 0..rounds {
            let first = if round % 2 == 0 { Mark::Human } else { Mark::Opponent };
            engine.start_round(first).unwrap();
            while !engine.is_game_over() {
                let cell = engine.state().board().empty_cells()[0];
                engine.apply_human_move(cell).unwrap();
            }

            let tally = engine.tally();
            prop_assert!(tally.human_wins >= previous.human_wins);
            prop_assert!(tally.opponent_wins >= previous.opponent_wins);
            let decided = tally.human_wins + tally.opponent_wins;
            prop_assert!(decided <= previous.human_wins + previous.opponent_wins + 1);
            previous = tally;
            engine.reset_round();
        }
    }
}
