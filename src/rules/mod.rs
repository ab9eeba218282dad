//! Game rules for flip gomoku
//!
//! Pure, read-only checks over the authoritative board:
//! - Win detection (five or more in a row)
//! - Open-four detection (four in a row with a playable extension)

pub mod threat;
pub mod win;

// Re-exports for convenient access
pub use threat::{find_open_four, has_open_four, open_fours, OpenFour};
pub use win::{check_win, find_five, has_five_at_pos};
