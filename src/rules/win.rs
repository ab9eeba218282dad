//! Win condition: five or more stones of one color in an unbroken line
//!
//! Only the authoritative board is ever passed here. Overlines win too.

use crate::board::{Board, Pos, Stone};

/// Axis directions as (dx, dy). Each line is found from its first cell in
/// row-major order, so only one orientation per axis is needed.
pub const AXES: [(i32, i32); 4] = [
    (1, 0),  // +x
    (0, 1),  // +y
    (1, 1),  // diagonal
    (-1, 1), // anti-diagonal
];

/// Check if there's 5+ in a row for the given color
pub fn check_win(board: &Board, color: Stone) -> bool {
    find_five(board, color).is_some()
}

/// First five-stone line of `color` in row-major scan order.
///
/// The returned cells start at the scanned cell and follow the axis.
pub fn find_five(board: &Board, color: Stone) -> Option<[Pos; 5]> {
    for pos in board.stones(color).iter_ones() {
        for &(dx, dy) in &AXES {
            if let Some(line) = line_from(board, pos, dx, dy, color) {
                return Some(line);
            }
        }
    }
    None
}

/// The five cells starting at `start` along `(dx, dy)`, if all are `color`
fn line_from(board: &Board, start: Pos, dx: i32, dy: i32, color: Stone) -> Option<[Pos; 5]> {
    let mut line = [start; 5];
    for (i, slot) in line.iter_mut().enumerate().skip(1) {
        let next = start.offset(dx, dy, i as i32)?;
        if board.get(next) != Some(color) {
            return None;
        }
        *slot = next;
    }
    Some(line)
}

/// Fast five-in-a-row check through a specific position.
///
/// Counts both ways along each axis from `pos`. Agrees with [`check_win`]
/// whenever the line passes through `pos`.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos, color: Stone) -> bool {
    if board.get(pos) != Some(color) {
        return false;
    }
    for (dx, dy) in AXES {
        let mut count = 1;
        for sign in [1, -1] {
            let mut step = 1;
            while let Some(next) = pos.offset(dx * sign, dy * sign, step) {
                if board.get(next) != Some(color) {
                    break;
                }
                count += 1;
                step += 1;
            }
        }
        if count >= 5 {
            return true;
        }
    }
    false
}
