//! Move ledger: linear history with a movable read pointer
//!
//! The ledger owns every accepted move in play order and a pointer counting
//! how many of them are currently applied to the boards. Appending after a
//! rewind truncates the abandoned future, so history never branches.

use crate::board::{Pos, Stone};
use crate::error::GameError;

/// One accepted move, fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub pos: Pos,
    /// Color used for adjacency and win detection
    pub authoritative: Stone,
    /// Color the player asked for
    pub declared: Stone,
}

impl MoveRecord {
    pub fn new(pos: Pos, authoritative: Stone, declared: Stone) -> Self {
        Self {
            pos,
            authoritative,
            declared,
        }
    }

    /// True when the stone landed with the opposite color
    #[inline]
    pub fn is_flipped(&self) -> bool {
        self.authoritative != self.declared
    }
}

/// A single pointer transition produced while navigating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Pointer moved back over this record; it must be retracted
    Back(MoveRecord),
    /// Pointer moved forward over this record; it must be re-applied
    Forward(MoveRecord),
}

#[derive(Debug, Clone, Default)]
pub struct MoveLedger {
    records: Vec<MoveRecord>,
    pointer: usize,
}

impl MoveLedger {
    pub fn new() -> Self {
        Self {
            records: Vec::with_capacity(crate::board::TOTAL_CELLS),
            pointer: 0,
        }
    }

    /// Drop every record at or past the pointer, then push `record`
    pub fn append(&mut self, record: MoveRecord) {
        self.records.truncate(self.pointer);
        self.records.push(record);
        self.pointer += 1;
    }

    pub fn step_back(&mut self) -> Result<MoveRecord, GameError> {
        if self.pointer == 0 {
            return Err(GameError::NoPreviousMove);
        }
        self.pointer -= 1;
        Ok(self.records[self.pointer])
    }

    pub fn step_forward(&mut self) -> Result<MoveRecord, GameError> {
        if self.pointer == self.records.len() {
            return Err(GameError::NoNextMove);
        }
        let record = self.records[self.pointer];
        self.pointer += 1;
        Ok(record)
    }

    /// Walk the pointer to `index` one step at a time.
    ///
    /// `on_step` sees every intermediate transition in order, so a caller can
    /// mirror each one on its boards. The range is checked before any step.
    pub fn goto_index<F>(&mut self, index: usize, mut on_step: F) -> Result<(), GameError>
    where
        F: FnMut(Step),
    {
        if index > self.records.len() {
            return Err(GameError::MoveIndexOutOfRange {
                index: index as i64,
                len: self.records.len(),
            });
        }
        while self.pointer > index {
            let record = self.step_back()?;
            on_step(Step::Back(record));
        }
        while self.pointer < index {
            let record = self.step_forward()?;
            on_step(Step::Forward(record));
        }
        Ok(())
    }

    #[inline]
    pub fn is_at_start(&self) -> bool {
        self.pointer == 0
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pointer == self.records.len()
    }

    /// Number of moves currently applied (the pointer)
    #[inline]
    pub fn length_applied(&self) -> usize {
        self.pointer
    }

    /// Number of recorded moves, including any rewound future
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records currently applied, in play order
    pub fn applied(&self) -> &[MoveRecord] {
        &self.records[..self.pointer]
    }

    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    pub fn last_applied(&self) -> Option<&MoveRecord> {
        self.applied().last()
    }
}
