//! Randomized checks of the board/ledger invariants, driven by seeded play

mod common;

use common::{honest_session, longest_run, observe, play_random};
use gomoku_flip::board::Board;
use gomoku_flip::random::std_source;
use gomoku_flip::rules::{check_win, has_open_four};
use gomoku_flip::{DualBoard, Pos, Session, Stone, BOARD_SIZE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SEEDS: std::ops::Range<u64> = 0..40;

#[test]
fn test_no_flip_keeps_boards_equal() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut session = honest_session();
        while !session.is_over() && session.length_applied() < 120 {
            play_random(&mut session, &mut rng, 1);
            assert_eq!(session.board().authoritative(), session.board().declared());
        }
        while session.undo().is_ok() {
            assert_eq!(session.board().authoritative(), session.board().declared());
        }
    }
}

#[test]
fn test_undo_redo_pairs_restore_state() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut session = Session::with_source(0.3, std_source(Some(seed))).unwrap();
        play_random(&mut session, &mut rng, 60);

        for k in (0..=session.history_len()).rev() {
            session.goto_move(k as i64).unwrap();
            let before = observe(&session);
            if session.undo().is_ok() {
                session.redo().unwrap();
                assert_eq!(observe(&session), before, "undo/redo at {} (seed {})", k, seed);
            }
            if session.redo().is_ok() {
                session.undo().unwrap();
                assert_eq!(observe(&session), before, "redo/undo at {} (seed {})", k, seed);
            }
        }
    }
}

#[test]
fn test_goto_matches_snapshot_and_is_idempotent() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut session = Session::with_source(0.5, std_source(Some(seed ^ 0xff))).unwrap();
        play_random(&mut session, &mut rng, 80);
        let len = session.history_len();

        for _ in 0..20 {
            let k = rng.random_range(0..=len);
            session.goto_move(k as i64).unwrap();
            let first = observe(&session);
            session.goto_move(k as i64).unwrap();
            assert_eq!(observe(&session), first);

            let snapshot = DualBoard::snapshot_at(session.ledger(), k);
            assert_eq!(session.board(), &snapshot);
            assert_eq!(session.declared_trace().len(), k);
            assert_eq!(session.authoritative_trace().len(), k);
        }
    }
}

#[test]
fn test_turn_parity_follows_pointer() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut session = honest_session();
        play_random(&mut session, &mut rng, 30);
        if session.is_over() {
            continue;
        }
        for k in 0..=session.history_len() {
            session.goto_move(k as i64).unwrap();
            let expected = if k % 2 == 0 { Stone::Black } else { Stone::White };
            assert_eq!(session.current_turn(), expected);
        }
    }
}

#[test]
fn test_diverging_append_discards_future() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut session = honest_session();
        play_random(&mut session, &mut rng, 20);
        if session.is_over() || session.history_len() < 2 {
            continue;
        }
        let p = rng.random_range(0..session.history_len());
        session.goto_move(p as i64).unwrap();
        let kept: Vec<_> = session.ledger().records()[..p].to_vec();

        play_random(&mut session, &mut rng, 1);
        assert_eq!(session.history_len(), p + 1);
        assert_eq!(&session.ledger().records()[..p], kept.as_slice());
        assert!(session.redo().is_err());
    }
}

#[test]
fn test_check_win_matches_brute_force() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..400 {
        let mut board = Board::new();
        let density = rng.random_range(0.2..0.8);
        for x in 0..BOARD_SIZE as u8 {
            for y in 0..BOARD_SIZE as u8 {
                if rng.random_bool(density) {
                    let stone = if rng.random_bool(0.5) { Stone::Black } else { Stone::White };
                    board.place_stone(Pos::new(x, y), stone);
                }
            }
        }
        for color in [Stone::Black, Stone::White] {
            assert_eq!(check_win(&board, color), longest_run(&board, color) >= 5);
        }
    }
}

#[test]
fn test_open_four_matches_brute_force() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..400 {
        let mut board = Board::new();
        let density = rng.random_range(0.05..0.5);
        for x in 0..BOARD_SIZE as u8 {
            for y in 0..BOARD_SIZE as u8 {
                if rng.random_bool(density) {
                    let stone = if rng.random_bool(0.5) { Stone::Black } else { Stone::White };
                    board.place_stone(Pos::new(x, y), stone);
                }
            }
        }
        assert_eq!(has_open_four(&board), brute_open_four(&board));
    }
}

fn brute_open_four(board: &Board) -> bool {
    let n = BOARD_SIZE as i32;
    for x in 0..n {
        for y in 0..n {
            let Some(color) = board.get_at(x, y) else { continue };
            for dx in -1..=1 {
                for dy in -1..=1 {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    let (ex, ey) = (x + 4 * dx, y + 4 * dy);
                    let on_board = (0..n).contains(&ex) && (0..n).contains(&ey);
                    if on_board
                        && (1..4).all(|i| board.get_at(x + i * dx, y + i * dy) == Some(color))
                        && board.get_at(ex, ey).is_none()
                    {
                        return true;
                    }
                }
            }
        }
    }
    false
}
