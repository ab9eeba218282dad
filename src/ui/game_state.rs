//! Front-end state for the flip gomoku GUI
//!
//! Owns the [`Session`] and mirrors its notifications into plain flags the
//! widgets read every frame.

use std::sync::mpsc::Receiver;

use crate::config::GameConfig;
use crate::{BoardView, GameError, GameEvent, Session, Stone};

/// What the status line says
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Waiting for the first "Start"
    Idle,
    Ongoing,
    Won(Stone),
    Resigned(Stone),
}

/// Main game state
pub struct GameState {
    pub session: Session,
    events: Receiver<GameEvent>,
    pub status: Status,
    /// Which board is drawn
    pub view: BoardView,
    pub can_undo: bool,
    pub can_redo: bool,
    pub open_four: bool,
    pub message: Option<String>,
    /// Start-dialog slider value
    pub flip_percent: u32,
    pub show_new_game: bool,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        let mut session = Session::from_config(config)?;
        let events = session.subscribe();
        Ok(Self {
            session,
            events,
            status: Status::Idle,
            view: BoardView::Declared,
            can_undo: false,
            can_redo: false,
            open_four: false,
            message: None,
            flip_percent: (config.flip_probability * 100.0).round() as u32,
            show_new_game: false,
        })
    }

    /// Moves are only accepted while a game is running
    pub fn accepts_moves(&self) -> bool {
        self.status == Status::Ongoing
    }

    /// Start a new game with the dialog's flip probability
    pub fn start(&mut self) {
        let probability = f64::from(self.flip_percent.min(100)) / 100.0;
        match self.session.reset(probability) {
            Ok(()) => {
                self.status = Status::Ongoing;
                self.view = BoardView::Declared;
                self.message = None;
            }
            Err(err) => self.message = Some(err.to_string()),
        }
        self.poll_events();
    }

    pub fn try_place_stone(&mut self, x: i32, y: i32) {
        if !self.accepts_moves() {
            return;
        }
        match self.session.play(x, y) {
            Ok(_) => self.message = None,
            // Occupied cells are silently ignored, the turn is not consumed
            Err(GameError::DuplicatePosition { .. }) => {}
            Err(err) => self.message = Some(err.to_string()),
        }
        self.poll_events();
    }

    pub fn undo(&mut self) {
        if let Err(err) = self.session.undo() {
            self.message = Some(err.to_string());
        }
        self.poll_events();
    }

    pub fn redo(&mut self) {
        if let Err(err) = self.session.redo() {
            self.message = Some(err.to_string());
        }
        self.poll_events();
    }

    pub fn goto_move(&mut self, index: usize) {
        if let Err(err) = self.session.goto_move(index as i64) {
            self.message = Some(err.to_string());
        }
        self.poll_events();
    }

    pub fn resign(&mut self) {
        if !self.accepts_moves() {
            return;
        }
        if let Err(err) = self.session.resign() {
            self.message = Some(err.to_string());
        }
        self.poll_events();
    }

    pub fn toggle_view(&mut self) {
        self.view = match self.view {
            BoardView::Declared => BoardView::Authoritative,
            BoardView::Authoritative => BoardView::Declared,
        };
    }

    /// Drain pending notifications into the widget flags
    pub fn poll_events(&mut self) {
        for event in self.events.try_iter() {
            match event {
                GameEvent::BoardChanged => {}
                GameEvent::PointerAtStart(at_start) => self.can_undo = !at_start,
                GameEvent::PointerAtEnd(at_end) => self.can_redo = !at_end,
                GameEvent::OpenFourDetected(found) => self.open_four = found,
                GameEvent::GameEnded(winner) => {
                    self.status = Status::Won(winner);
                    self.open_four = false;
                }
                GameEvent::Resigned(loser) => {
                    self.status = Status::Resigned(loser);
                    self.open_four = false;
                }
            }
        }
    }

    /// Once a game is over the history buttons browse instead of undoing
    pub fn history_labels(&self) -> (&'static str, &'static str) {
        match self.status {
            Status::Won(_) | Status::Resigned(_) => ("Prev", "Next"),
            _ => ("Undo", "Redo"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        let config = GameConfig {
            flip_probability: 0.0,
            seed: Some(1),
        };
        let mut state = GameState::new(&config).unwrap();
        state.flip_percent = 0;
        state
    }

    #[test]
    fn test_idle_until_started() {
        let mut state = state();
        state.try_place_stone(7, 7);
        assert_eq!(state.session.length_applied(), 0);

        state.start();
        assert!(state.accepts_moves());
        state.try_place_stone(7, 7);
        assert_eq!(state.session.length_applied(), 1);
        assert!(state.can_undo);
        assert!(!state.can_redo);
    }

    #[test]
    fn test_duplicate_click_is_silent() {
        let mut state = state();
        state.start();
        state.try_place_stone(7, 7);
        state.try_place_stone(7, 7);
        assert_eq!(state.message, None);
        assert_eq!(state.session.current_turn(), Stone::White);
    }

    #[test]
    fn test_win_switches_to_browse_mode() {
        let mut state = state();
        state.start();
        for (x, y) in [(7, 7), (0, 0), (8, 7), (0, 1), (9, 7), (0, 2), (10, 7), (0, 3), (11, 7)] {
            state.try_place_stone(x, y);
        }
        assert_eq!(state.status, Status::Won(Stone::Black));
        assert!(!state.accepts_moves());
        assert_eq!(state.history_labels(), ("Prev", "Next"));

        state.goto_move(4);
        assert!(state.can_redo);
        assert_eq!(state.session.length_applied(), 4);
    }

    #[test]
    fn test_resign_and_restart() {
        let mut state = state();
        state.start();
        state.try_place_stone(1, 1);
        state.resign();
        assert_eq!(state.status, Status::Resigned(Stone::White));

        state.start();
        assert_eq!(state.status, Status::Ongoing);
        assert_eq!(state.session.history_len(), 0);
        assert!(!state.can_undo);
    }

    #[test]
    fn test_toggle_view() {
        let mut state = state();
        assert_eq!(state.view, BoardView::Declared);
        state.toggle_view();
        assert_eq!(state.view, BoardView::Authoritative);
    }
}
