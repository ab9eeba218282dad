//! GUI module for flip gomoku
//!
//! A thin egui/eframe front end over [`crate::Session`]: it renders the
//! board and forwards clicks and history navigation, nothing more.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::GomokuApp;
pub use game_state::{GameState, Status};
