//! Win condition checking
//!
//! A player wins by owning five or more contiguous stones along a row,
//! column or diagonal. Overlines count.

use crate::board::{Board, Pos, Stone};

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Contiguous run of one color through a cell along one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRun {
    /// Stones in the run, including the starting cell
    pub count: u32,
    /// Empty cells directly past each end of the run (0, 1 or 2)
    pub open_ends: u32,
}

/// Measure the run of `stone` through `pos` along `(dr, dc)`.
///
/// `pos` itself is counted as part of the run whatever it holds, so the
/// function also answers "what would this cell make" for an empty cell.
pub fn line_run(board: &Board, pos: Pos, (dr, dc): (i32, i32), stone: Stone) -> LineRun {
    let mut count = 1;
    let mut open_ends = 0;

    for sign in [1, -1] {
        let mut r = i32::from(pos.row) + dr * sign;
        let mut c = i32::from(pos.col) + dc * sign;
        while board.get_at(r, c) == Some(stone) {
            count += 1;
            r += dr * sign;
            c += dc * sign;
        }
        if board.get_at(r, c) == Some(Stone::Empty) {
            open_ends += 1;
        }
    }

    LineRun { count, open_ends }
}

/// Does the stone at `pos` complete five or more in a row for `stone`?
///
/// Only the four lines through `pos` are inspected, so this is the check to
/// run right after placing a stone. No allocation.
#[inline]
pub fn check_win(board: &Board, pos: Pos, stone: Stone) -> bool {
    DIRECTIONS
        .iter()
        .any(|&dir| line_run(board, pos, dir, stone).count >= 5)
}

/// Scan the whole board for a completed line.
///
/// Returns the owner of the first five found in row-major order.
pub fn find_winner(board: &Board) -> Option<Stone> {
    board
        .occupied()
        .find(|&pos| check_win(board, pos, board.get(pos)))
        .map(|pos| board.get(pos))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_of(board: &mut Board, row: u8, cols: std::ops::Range<u8>, stone: Stone) {
        for c in cols {
            board.place_stone(Pos::new(row, c), stone);
        }
    }

    #[test]
    fn test_five_horizontal() {
        let mut board = Board::new();
        row_of(&mut board, 9, 0..5, Stone::Black);
        assert!(check_win(&board, Pos::new(9, 2), Stone::Black));
        assert!(!check_win(&board, Pos::new(9, 2), Stone::White));
    }

    #[test]
    fn test_five_vertical() {
        let mut board = Board::new();
        for r in 3..8 {
            board.place_stone(Pos::new(r, 9), Stone::White);
        }
        assert!(check_win(&board, Pos::new(7, 9), Stone::White));
    }

    #[test]
    fn test_five_diagonals() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(i, i), Stone::White);
        }
        assert!(check_win(&board, Pos::new(4, 4), Stone::White));

        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(i, 14 - i), Stone::Black);
        }
        assert!(check_win(&board, Pos::new(0, 14), Stone::Black));
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let mut board = Board::new();
        row_of(&mut board, 9, 0..6, Stone::Black);
        assert!(check_win(&board, Pos::new(9, 5), Stone::Black));
    }

    #[test]
    fn test_four_in_row_not_win() {
        let mut board = Board::new();
        row_of(&mut board, 9, 0..4, Stone::Black);
        assert!(!check_win(&board, Pos::new(9, 3), Stone::Black));
    }

    #[test]
    fn test_broken_line_not_win() {
        let mut board = Board::new();
        row_of(&mut board, 2, 0..2, Stone::Black);
        row_of(&mut board, 2, 3..6, Stone::Black);
        board.place_stone(Pos::new(2, 2), Stone::White);
        assert!(!check_win(&board, Pos::new(2, 3), Stone::Black));
    }

    #[test]
    fn test_check_win_through_empty_cell() {
        // A gap filled in hypothetically: four around an empty cell
        let mut board = Board::new();
        row_of(&mut board, 5, 0..2, Stone::White);
        row_of(&mut board, 5, 3..5, Stone::White);
        assert!(check_win(&board, Pos::new(5, 2), Stone::White));
    }

    #[test]
    fn test_line_run_open_ends() {
        let mut board = Board::new();
        row_of(&mut board, 7, 3..6, Stone::Black);
        let run = line_run(&board, Pos::new(7, 4), (0, 1), Stone::Black);
        assert_eq!(run, LineRun { count: 3, open_ends: 2 });

        board.place_stone(Pos::new(7, 2), Stone::White);
        let run = line_run(&board, Pos::new(7, 4), (0, 1), Stone::Black);
        assert_eq!(run, LineRun { count: 3, open_ends: 1 });

        // Board edge is a closed end
        let mut board = Board::new();
        row_of(&mut board, 0, 0..2, Stone::Black);
        let run = line_run(&board, Pos::new(0, 0), (0, 1), Stone::Black);
        assert_eq!(run, LineRun { count: 2, open_ends: 1 });
    }

    #[test]
    fn test_find_winner() {
        let mut board = Board::new();
        assert_eq!(find_winner(&board), None);

        row_of(&mut board, 10, 4..9, Stone::White);
        board.place_stone(Pos::new(0, 0), Stone::Black);
        assert_eq!(find_winner(&board), Some(Stone::White));
    }
}
