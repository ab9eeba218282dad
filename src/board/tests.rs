use super::*;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Black.opponent().opponent(), Stone::Black);
}

#[test]
fn test_pos_new() {
    let pos = Pos::new(7, 7);
    assert_eq!(pos.x, 7);
    assert_eq!(pos.y, 7);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(7, 7); // Center
    assert_eq!(pos.to_index(), 7 * 15 + 7);
    assert_eq!(pos.to_index(), 112);

    let pos2 = Pos::from_index(112);
    assert_eq!(pos2, pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(14, 14));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(15, 0));
    assert!(!Pos::is_valid(0, 15));
    assert_eq!(Pos::try_new(3, 15), None);
    assert_eq!(Pos::try_new(3, 14), Some(Pos::new(3, 14)));
}

#[test]
fn test_pos_offset() {
    let pos = Pos::new(0, 0);
    assert_eq!(pos.offset(1, 1, 4), Some(Pos::new(4, 4)));
    assert_eq!(pos.offset(-1, 0, 1), None);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 15);
    assert_eq!(TOTAL_CELLS, 225);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_pos_corner_indices() {
    assert_eq!(Pos::new(0, 0).to_index(), 0);
    assert_eq!(Pos::new(0, 14).to_index(), 14);
    assert_eq!(Pos::new(14, 0).to_index(), 210);
    assert_eq!(Pos::new(14, 14).to_index(), 224);
}

#[test]
fn test_board_place_replaces_and_removes() {
    let mut board = Board::new();
    let pos = Pos::new(5, 6);
    board.place_stone(pos, Stone::Black);
    board.place_stone(pos, Stone::White);
    assert_eq!(board.get(pos), Some(Stone::White));
    assert_eq!(board.stone_count(), 1);

    board.remove_stone(pos);
    assert!(board.is_empty(pos));
    assert!(board.is_board_empty());
}

#[test]
fn test_board_get_at_off_board() {
    let mut board = Board::new();
    board.place_stone(Pos::new(0, 0), Stone::Black);
    assert_eq!(board.get_at(0, 0), Some(Stone::Black));
    assert_eq!(board.get_at(-1, 0), None);
    assert_eq!(board.get_at(0, 15), None);
}

#[test]
fn test_board_occupied_order() {
    let mut board = Board::new();
    board.place_stone(Pos::new(3, 0), Stone::White);
    board.place_stone(Pos::new(1, 2), Stone::Black);
    let cells: Vec<_> = board.occupied().collect();
    assert_eq!(
        cells,
        vec![(Pos::new(1, 2), Stone::Black), (Pos::new(3, 0), Stone::White)]
    );
}
