//! State-change notifications for the presentation layer

use std::sync::mpsc::{channel, Receiver, Sender};

use crate::board::Stone;

/// Something observable changed. Board batches are emitted in the order
/// `BoardChanged`, `PointerAtStart`, `PointerAtEnd`, `OpenFourDetected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Re-read the board state now
    BoardChanged,
    /// Undo is unavailable when true
    PointerAtStart(bool),
    /// Redo is unavailable when true
    PointerAtEnd(bool),
    /// An open four is on the authoritative board and the game is not
    /// sitting on its recorded winning move
    OpenFourDetected(bool),
    /// Fired once, when a move completes five in a row
    GameEnded(Stone),
    /// The side to move gave up
    Resigned(Stone),
}

/// Fan-out of events to every live subscriber
#[derive(Debug, Default)]
pub struct EventBus {
    subscribers: Vec<Sender<GameEvent>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self) -> Receiver<GameEvent> {
        let (tx, rx) = channel();
        self.subscribers.push(tx);
        rx
    }

    /// Deliver `event`, dropping subscribers whose receiver is gone
    pub fn emit(&mut self, event: GameEvent) {
        self.subscribers.retain(|tx| tx.send(event).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
