//! Flip gomoku rule engine
//!
//! Five-in-a-row on a 15x15 board where every placed stone may secretly land
//! with the opposite color:
//! - Each move is recorded twice: the *declared* color the player asked for
//!   and the *authoritative* color it actually got
//! - The flip happens with a configurable probability, drawn once per move
//! - Wins and open-four warnings are decided on the authoritative board only
//!
//! # Architecture
//!
//! - [`board`]: Bitboard-backed boards and the declared/authoritative pair
//! - [`history`]: Linear move ledger with undo/redo/goto
//! - [`rules`]: Win and open-four detection
//! - [`session`]: Turn/session controller tying it all together
//! - [`events`]: Notifications for the presentation layer
//! - [`random`]: Injectable flip sources
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku_flip::{GameEvent, ScriptedSource, Session, Stone};
//!
//! // Every sample is 0.0, so every stone flips at probability 1
//! let mut session = Session::with_source(1.0, ScriptedSource::constant(0.0)).unwrap();
//! let events = session.subscribe();
//!
//! let record = session.play(7, 7).unwrap();
//! assert_eq!(record.declared, Stone::Black);
//! assert_eq!(record.authoritative, Stone::White);
//! assert_eq!(events.try_recv(), Ok(GameEvent::BoardChanged));
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod events;
pub mod history;
pub mod random;
pub mod rules;
pub mod session;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{BoardView, DualBoard, Pos, Stone, BOARD_SIZE};
pub use config::AppConfig;
pub use error::{ConfigError, GameError};
pub use events::GameEvent;
pub use history::{MoveLedger, MoveRecord};
pub use random::{FlipSource, ScriptedSource};
pub use session::{Outcome, Session, TraceEntry};
