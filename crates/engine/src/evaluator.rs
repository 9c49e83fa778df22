//! Outcome evaluation.
//!
//! Runs after every accepted move, for both sides.

use noughts_core::{Board, Outcome, NUM_CELLS, WIN_PATTERNS};

/// Scan the board for a finished round.
///
/// The first pattern (in [`WIN_PATTERNS`] order) whose three cells hold the
/// same mark decides the winner. With no line owned, a ninth move means a
/// draw; anything else is still ongoing.
pub fn evaluate(board: &Board, move_count: usize) -> Outcome {
    for [a, b, c] in WIN_PATTERNS {
        if let Some(mark) = board.get(a) {
            if board.get(b) == Some(mark) && board.get(c) == Some(mark) {
                return Outcome::Winner(mark);
            }
        }
    }

    if move_count == NUM_CELLS {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_core::Mark;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_board_is_ongoing() {
        assert_eq!(evaluate(&Board::new(), 0), Outcome::Ongoing);
    }

    #[test]
    fn test_row_win() {
        let b = board("XXX OO_ ___");
        assert_eq!(evaluate(&b, 5), Outcome::Winner(Mark::Human));
    }

    #[test]
    fn test_column_win() {
        let b = board("XO_ XO_ _O_");
        assert_eq!(evaluate(&b, 5), Outcome::Winner(Mark::Opponent));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let b = board("XXO XO_ O__");
        assert_eq!(evaluate(&b, 6), Outcome::Winner(Mark::Opponent));
    }

    #[test]
    fn test_full_board_draw() {
        // X O X
        // X X O
        // O X O
        let b = board("XOX XXO OXO");
        assert_eq!(evaluate(&b, 9), Outcome::Draw);
    }

    #[test]
    fn test_win_on_last_move_beats_draw() {
        // X O X
        // O X O
        // O X X
        let b = board("XOX OXO OXX");
        assert_eq!(evaluate(&b, 9), Outcome::Winner(Mark::Human));
    }

    #[test]
    fn test_two_in_a_row_is_ongoing() {
        let b = board("XX_ OO_ ___");
        assert_eq!(evaluate(&b, 4), Outcome::Ongoing);
    }
}
