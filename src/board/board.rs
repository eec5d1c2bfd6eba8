//! Board structure and its text format

use std::fmt;
use std::str::FromStr;

use super::bitboard::Bitboard;
use super::{Pos, Stone, BOARD_SIZE, TOTAL_CELLS};
use crate::error::BoardError;

/// Game board: one bitboard per color.
///
/// Equality compares every cell, which is what the search relies on when
/// checking that a position was restored after backtracking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Black stones bitboard
    pub black: Bitboard,
    /// White stones bitboard
    pub white: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Get stone at signed coordinates, `None` when off the board
    #[inline]
    pub fn get_at(&self, row: i32, col: i32) -> Option<Stone> {
        Pos::try_new(row, col).map(|pos| self.get(pos))
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Place a stone without any rule checks.
    /// Placing `Stone::Empty` is a no-op.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        match stone {
            Stone::Black => self.black.set(pos),
            Stone::White => self.white.set(pos),
            Stone::Empty => {}
        }
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.black.clear(pos);
        self.white.clear(pos);
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::Black => Some(&self.black),
            Stone::White => Some(&self.white),
            Stone::Empty => None,
        }
    }

    /// Iterate over every occupied cell in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = Pos> {
        self.black.union(&self.white).iter_ones()
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// Check if every cell is occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == TOTAL_CELLS
    }
}

impl fmt::Display for Board {
    /// One line per row, cells separated by spaces: `X` black, `O` white, `.` empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                if c > 0 {
                    f.write_str(" ")?;
                }
                let pos = Pos::new(r as u8, c as u8);
                write!(f, "{}", self.get(pos).symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parse the format produced by `Display`. Whitespace inside a row and
    /// blank lines are ignored; every remaining row must hold exactly
    /// `BOARD_SIZE` cells.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut row = 0usize;

        for (line_no, line) in s.lines().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.is_empty() {
                continue;
            }
            if row >= BOARD_SIZE {
                return Err(BoardError::Parse {
                    line: line_no + 1,
                    reason: format!("more than {} rows", BOARD_SIZE),
                });
            }
            if cells.len() != BOARD_SIZE {
                return Err(BoardError::Parse {
                    line: line_no + 1,
                    reason: format!("expected {} cells, found {}", BOARD_SIZE, cells.len()),
                });
            }
            for (col, ch) in cells.into_iter().enumerate() {
                let stone = Stone::from_symbol(ch).ok_or_else(|| BoardError::Parse {
                    line: line_no + 1,
                    reason: format!("unknown cell '{}'", ch),
                })?;
                board.place_stone(Pos::new(row as u8, col as u8), stone);
            }
            row += 1;
        }

        if row != BOARD_SIZE {
            return Err(BoardError::Parse {
                line: s.lines().count(),
                reason: format!("expected {} rows, found {}", BOARD_SIZE, row),
            });
        }
        Ok(board)
    }
}
