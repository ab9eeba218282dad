//! Authoritative and declared boards, mutated in lockstep

use super::{Board, Pos, Stone};
use crate::history::{MoveLedger, MoveRecord, Step};

/// Which of the two parallel boards to look at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoardView {
    /// What each player asked for
    #[default]
    Declared,
    /// Where the stones really landed
    Authoritative,
}

/// The pair of boards implied by the applied prefix of the ledger
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DualBoard {
    authoritative: Board,
    declared: Board,
}

impl DualBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place both colors of `record`. The cell is assumed empty.
    #[inline]
    pub fn apply_forward(&mut self, record: &MoveRecord) {
        self.authoritative.place_stone(record.pos, record.authoritative);
        self.declared.place_stone(record.pos, record.declared);
    }

    /// Clear the cell of `record` on both boards
    #[inline]
    pub fn retract(&mut self, record: &MoveRecord) {
        self.authoritative.remove_stone(record.pos);
        self.declared.remove_stone(record.pos);
    }

    /// Mirror one ledger transition
    #[inline]
    pub fn apply_step(&mut self, step: Step) {
        match step {
            Step::Back(record) => self.retract(&record),
            Step::Forward(record) => self.apply_forward(&record),
        }
    }

    /// Boards obtained by applying the first `k` recorded moves from empty.
    /// `k` is clamped to the ledger length.
    pub fn snapshot_at(ledger: &MoveLedger, k: usize) -> DualBoard {
        let mut boards = DualBoard::new();
        for record in ledger.records().iter().take(k) {
            boards.apply_forward(record);
        }
        boards
    }

    #[inline]
    pub fn authoritative(&self) -> &Board {
        &self.authoritative
    }

    #[inline]
    pub fn declared(&self) -> &Board {
        &self.declared
    }

    pub fn view(&self, view: BoardView) -> &Board {
        match view {
            BoardView::Declared => &self.declared,
            BoardView::Authoritative => &self.authoritative,
        }
    }

    /// Occupancy is decided by the authoritative board
    #[inline]
    pub fn is_occupied(&self, pos: Pos) -> bool {
        !self.authoritative.is_empty(pos)
    }

    #[inline]
    pub fn authoritative_at(&self, pos: Pos) -> Option<Stone> {
        self.authoritative.get(pos)
    }
}
