//! Open-four detection
//!
//! An open four is four consecutive stones of one color with an empty,
//! on-board cell directly after them. It is a board-wide hazard signal: it
//! does not matter whose color it is or whose turn it is.

use crate::board::{Board, Pos, Stone};

/// All 8 unit directions (the 4 axes and their reverses)
pub const DIRECTIONS: [(i32, i32); 8] = [
    (1, 0),
    (0, 1),
    (-1, 0),
    (0, -1),
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
];

/// A four-stone run and the empty cell that would make it five
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenFour {
    pub color: Stone,
    /// First stone of the run
    pub origin: Pos,
    pub direction: (i32, i32),
    /// The empty cell at offset 4 from `origin`
    pub extension: Pos,
}

pub fn has_open_four(board: &Board) -> bool {
    find_open_four(board).is_some()
}

/// First open four in row-major scan order
pub fn find_open_four(board: &Board) -> Option<OpenFour> {
    board
        .occupied()
        .find_map(|(pos, color)| DIRECTIONS.into_iter().find_map(|dir| open_four_at(board, pos, color, dir)))
}

/// Every open four on the board, one entry per (origin, direction)
pub fn open_fours(board: &Board) -> Vec<OpenFour> {
    board
        .occupied()
        .flat_map(|(pos, color)| {
            DIRECTIONS
                .into_iter()
                .filter_map(move |dir| open_four_at(board, pos, color, dir))
        })
        .collect()
}

fn open_four_at(board: &Board, origin: Pos, color: Stone, (dx, dy): (i32, i32)) -> Option<OpenFour> {
    let extension = origin.offset(dx, dy, 4)?;
    if !board.is_empty(extension) {
        return None;
    }
    for step in 1..4 {
        let cell = origin.offset(dx, dy, step)?;
        if board.get(cell) != Some(color) {
            return None;
        }
    }
    Some(OpenFour {
        color,
        origin,
        direction: (dx, dy),
        extension,
    })
}
