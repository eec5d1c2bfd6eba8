//! Candidate move generation
//!
//! Empty cells near existing stones are ranked by how crowded their
//! neighbourhood is: every stone within two cells (Chebyshev distance) adds
//! `10 - (dr² + dc²)`, so adjacent stones weigh more than distant ones.

use crate::board::{Board, Pos, BOARD_SIZE, TOTAL_CELLS};

/// Neighbourhood radius scanned around each stone
const RADIUS: i32 = 2;

/// Base weight a neighbouring stone contributes before distance falloff
const PROXIMITY_WEIGHT: i32 = 10;

/// Generate up to `max_count` candidate moves, best first.
///
/// - Empty board: only the center.
/// - Otherwise: empty cells within `RADIUS` of a stone, by descending
///   priority; equal priorities keep row-major order.
/// - If no empty cell is near a stone, every empty cell with priority 0.
///
/// The result is a pure function of the board.
#[must_use]
pub fn candidate_moves(board: &Board, max_count: usize) -> Vec<Pos> {
    if board.is_board_empty() {
        let mut moves = vec![Pos::center()];
        moves.truncate(max_count);
        return moves;
    }

    let mut priority = [[0i32; BOARD_SIZE]; BOARD_SIZE];
    let mut near = [[false; BOARD_SIZE]; BOARD_SIZE];

    for stone in board.black.iter_ones().chain(board.white.iter_ones()) {
        for dr in -RADIUS..=RADIUS {
            for dc in -RADIUS..=RADIUS {
                let r = i32::from(stone.row) + dr;
                let c = i32::from(stone.col) + dc;
                if !Pos::is_valid(r, c) {
                    continue;
                }

                #[allow(clippy::cast_sign_loss)]
                let (ru, cu) = (r as usize, c as usize);
                near[ru][cu] = true;
                priority[ru][cu] += PROXIMITY_WEIGHT - (dr * dr + dc * dc);
            }
        }
    }

    let mut scored: Vec<(Pos, i32)> = (0..TOTAL_CELLS)
        .map(Pos::from_index)
        .filter(|&pos| board.is_empty(pos) && near[pos.row as usize][pos.col as usize])
        .map(|pos| (pos, priority[pos.row as usize][pos.col as usize]))
        .collect();

    if scored.is_empty() {
        scored = (0..TOTAL_CELLS)
            .map(Pos::from_index)
            .filter(|&pos| board.is_empty(pos))
            .map(|pos| (pos, 0))
            .collect();
    }

    // Stable: ties stay in row-major order
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.truncate(max_count);
    scored.into_iter().map(|(pos, _)| pos).collect()
}
