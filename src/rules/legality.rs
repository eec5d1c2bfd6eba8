//! Placement legality

use crate::board::{Board, Pos};
use crate::error::BoardError;

/// A move is legal when the cell is on the board and empty.
#[inline]
pub fn is_valid_move(board: &Board, pos: Pos) -> bool {
    Pos::is_valid(i32::from(pos.row), i32::from(pos.col)) && board.is_empty(pos)
}

/// Check untrusted coordinates, returning the position they name.
pub fn validate_move(board: &Board, row: i32, col: i32) -> Result<Pos, BoardError> {
    let pos = Pos::try_new(row, col).ok_or(BoardError::OutOfBounds { row, col })?;
    if !board.is_empty(pos) {
        return Err(BoardError::Occupied(pos));
    }
    Ok(pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;

    #[test]
    fn test_empty_cell_is_valid() {
        let board = Board::new();
        assert!(is_valid_move(&board, Pos::new(0, 0)));
        assert_eq!(validate_move(&board, 14, 14), Ok(Pos::new(14, 14)));
    }

    #[test]
    fn test_occupied_cell_is_invalid() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);
        assert!(!is_valid_move(&board, Pos::new(7, 7)));
        assert_eq!(
            validate_move(&board, 7, 7),
            Err(BoardError::Occupied(Pos::new(7, 7)))
        );
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let board = Board::new();
        assert_eq!(
            validate_move(&board, 15, 0),
            Err(BoardError::OutOfBounds { row: 15, col: 0 })
        );
        assert_eq!(
            validate_move(&board, 0, -1),
            Err(BoardError::OutOfBounds { row: 0, col: -1 })
        );
    }
}
