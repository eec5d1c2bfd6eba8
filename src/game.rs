//! Game session: turn order and outcome around a board

use crate::board::{Board, Pos, Stone};
use crate::error::GameError;
use crate::rules::{check_win, validate_move};

/// State of a game after the last move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win(Stone),
    Draw,
}

/// One game between two players. Black moves first.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Stone,
    moves: Vec<Pos>,
    outcome: Outcome,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Stone::Black,
            moves: Vec::new(),
            outcome: Outcome::InProgress,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Scratch access for the engine, which restores the board before returning.
    #[inline]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[inline]
    pub fn to_move(&self) -> Stone {
        self.to_move
    }

    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome != Outcome::InProgress
    }

    /// Moves played so far, oldest first
    pub fn moves(&self) -> &[Pos] {
        &self.moves
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.moves.last().copied()
    }

    /// Play at signed coordinates for the side to move.
    pub fn play_at(&mut self, row: i32, col: i32) -> Result<Outcome, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let pos = validate_move(&self.board, row, col)?;
        Ok(self.apply(pos))
    }

    /// Play `pos` for the side to move.
    pub fn play(&mut self, pos: Pos) -> Result<Outcome, GameError> {
        self.play_at(i32::from(pos.row), i32::from(pos.col))
    }

    fn apply(&mut self, pos: Pos) -> Outcome {
        let stone = self.to_move;
        self.board.place_stone(pos, stone);
        self.moves.push(pos);

        self.outcome = if check_win(&self.board, pos, stone) {
            Outcome::Win(stone)
        } else if self.board.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        };
        self.to_move = stone.opponent();
        self.outcome
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BOARD_SIZE, TOTAL_CELLS};
    use crate::error::BoardError;

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new();
        assert_eq!(game.to_move(), Stone::Black);
        game.play(Pos::new(7, 7)).unwrap();
        assert_eq!(game.to_move(), Stone::White);
        game.play(Pos::new(7, 8)).unwrap();
        assert_eq!(game.to_move(), Stone::Black);
        assert_eq!(game.board().get(Pos::new(7, 8)), Stone::White);
        assert_eq!(game.moves(), &[Pos::new(7, 7), Pos::new(7, 8)]);
        assert_eq!(game.last_move(), Some(Pos::new(7, 8)));
    }

    #[test]
    fn test_rejects_illegal_moves() {
        let mut game = Game::new();
        game.play(Pos::new(0, 0)).unwrap();
        assert_eq!(
            game.play(Pos::new(0, 0)),
            Err(GameError::Board(BoardError::Occupied(Pos::new(0, 0))))
        );
        assert_eq!(
            game.play_at(-1, 4),
            Err(GameError::Board(BoardError::OutOfBounds { row: -1, col: 4 }))
        );
        // Failed moves do not pass the turn
        assert_eq!(game.to_move(), Stone::White);
    }

    #[test]
    fn test_five_wins() {
        let mut game = Game::new();
        for c in 0..4 {
            assert_eq!(game.play(Pos::new(0, c)), Ok(Outcome::InProgress));
            game.play(Pos::new(5, c)).unwrap();
        }
        assert_eq!(game.play(Pos::new(0, 4)), Ok(Outcome::Win(Stone::Black)));
        assert!(game.is_over());
        assert_eq!(game.play(Pos::new(5, 4)), Err(GameError::GameOver));
    }

    #[test]
    fn test_full_board_is_draw() {
        // Pairs of colors along each row, swapped on every row:
        // no line of five in any direction
        let mut game = Game::new();
        let mut black = Vec::new();
        let mut white = Vec::new();
        for idx in 0..TOTAL_CELLS {
            let (r, c) = (idx / BOARD_SIZE, idx % BOARD_SIZE);
            let pos = Pos::new(r as u8, c as u8);
            if ((c + 2 * r) / 2) % 2 == 0 {
                black.push(pos);
            } else {
                white.push(pos);
            }
        }
        // One extra black cell: Black moves first and last
        assert_eq!(black.len(), white.len() + 1);

        let mut outcome = Outcome::InProgress;
        for i in 0..TOTAL_CELLS {
            let pos = if i % 2 == 0 { black[i / 2] } else { white[i / 2] };
            outcome = game.play(pos).unwrap();
            if i + 1 < TOTAL_CELLS {
                assert_eq!(outcome, Outcome::InProgress, "unexpected result at move {i}");
            }
        }
        assert_eq!(outcome, Outcome::Draw);
    }
}
