//! Single-view board: one bitboard per color

use super::bitboard::Bitboard;
use super::{Pos, Stone, BOARD_SIZE};

/// A 15x15 grid of cells, each empty or holding one stone
#[derive(Debug, Clone, Default, PartialEq, Eq)]
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

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Stone> {
        if self.black.get(pos) {
            Some(Stone::Black)
        } else if self.white.get(pos) {
            Some(Stone::White)
        } else {
            None
        }
    }

    /// Stone at a signed coordinate; `None` when empty or off the board
    #[inline]
    pub fn get_at(&self, x: i32, y: i32) -> Option<Stone> {
        Pos::try_new(x, y).and_then(|pos| self.get(pos))
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Place a stone, replacing whatever was there
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        self.remove_stone(pos);
        match stone {
            Stone::Black => self.black.set(pos),
            Stone::White => self.white.set(pos),
        }
    }

    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.black.clear(pos);
        self.white.clear(pos);
    }

    /// Get bitboard for a color
    #[inline]
    pub fn stones(&self, stone: Stone) -> &Bitboard {
        match stone {
            Stone::Black => &self.black,
            Stone::White => &self.white,
        }
    }

    /// All occupied cells in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = (Pos, Stone)> + '_ {
        (0..BOARD_SIZE * BOARD_SIZE).filter_map(move |idx| {
            let pos = Pos::from_index(idx);
            self.get(pos).map(|stone| (pos, stone))
        })
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }
}
