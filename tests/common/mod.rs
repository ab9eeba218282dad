//! Shared helpers for the integration tests.

#![allow(dead_code)]

use gomoku_flip::board::Board;
use gomoku_flip::{GameEvent, Pos, ScriptedSource, Session, Stone, BOARD_SIZE};
use rand::rngs::StdRng;
use rand::Rng;
use std::sync::mpsc::Receiver;

/// Session that never flips a stone
pub fn honest_session() -> Session {
    Session::with_source(0.0, ScriptedSource::constant(0.5)).unwrap()
}

/// Play random legal moves until `max_moves` are applied or the game ends.
/// Returns the moves played.
pub fn play_random(session: &mut Session, rng: &mut StdRng, max_moves: usize) -> Vec<(i32, i32)> {
    let mut played = Vec::new();
    while played.len() < max_moves && !session.is_over() {
        let x = rng.random_range(0..BOARD_SIZE as i32);
        let y = rng.random_range(0..BOARD_SIZE as i32);
        if session.play(x, y).is_ok() {
            played.push((x, y));
        }
    }
    played
}

/// Full snapshot of everything a caller can observe about the boards
pub fn observe(session: &Session) -> (Board, Board, usize, Stone) {
    (
        session.board().authoritative().clone(),
        session.board().declared().clone(),
        session.length_applied(),
        session.current_turn(),
    )
}

/// Longest same-colored run on any line, by brute force over every cell
pub fn longest_run(board: &Board, color: Stone) -> usize {
    let mut best = 0;
    for x in 0..BOARD_SIZE as i32 {
        for y in 0..BOARD_SIZE as i32 {
            for (dx, dy) in [(1, 0), (0, 1), (1, 1), (-1, 1)] {
                let mut len = 0;
                while board.get_at(x + dx * len, y + dy * len) == Some(color) {
                    len += 1;
                }
                best = best.max(len as usize);
            }
        }
    }
    best
}

pub fn drain(rx: &Receiver<GameEvent>) -> Vec<GameEvent> {
    rx.try_iter().collect()
}

pub fn pos(x: u8, y: u8) -> Pos {
    Pos::new(x, y)
}
