use super::*;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::Black.opponent(), Player::White);
    assert_eq!(Player::White.opponent(), Player::Black);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(9, 9); // Center
    assert_eq!(pos.to_index(), 180);
    assert_eq!(Pos::from_index(180), pos);
    assert_eq!(Pos::CENTER, pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(18, 18));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(19, 0));
    assert!(!Pos::is_valid(0, 19));
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 19);
    assert_eq!(TOTAL_CELLS, 361);
}

#[test]
fn test_pos_offset_stops_at_edge() {
    let corner = Pos::new(0, 0);
    assert_eq!(corner.offset(1, 1, 4), Some(Pos::new(4, 4)));
    assert_eq!(corner.offset(-1, 0, 1), None);
    assert_eq!(Pos::new(18, 18).offset(0, 1, 1), None);
}

#[test]
fn test_neighbors_clipped_at_corner() {
    assert_eq!(Pos::new(9, 9).neighbors().count(), 8);
    assert_eq!(Pos::new(0, 0).neighbors().count(), 3);
    assert_eq!(Pos::new(0, 9).neighbors().count(), 5);
    assert!(Pos::new(9, 9).neighbors().all(|p| p.chebyshev(Pos::new(9, 9)) == 1));
}

#[test]
fn test_pos_display() {
    assert_eq!(Pos::new(0, 0).to_string(), "A19");
    assert_eq!(Pos::new(18, 18).to_string(), "S1");
    // Off-board positions print raw
    assert_eq!(Pos { row: 40, col: 2 }.to_string(), "(40, 2)");
    assert_eq!(Pos { row: 3, col: 200 }.to_string(), "(3, 200)");
}

#[test]
fn test_cell_states_are_exclusive() {
    let mut board = Board::new();
    let pos = Pos::new(4, 4);

    board.place_stone(pos, Player::Black);
    assert_eq!(board.get(pos), Cell::Stone(Player::Black));

    board.set(pos, Cell::Obstacle);
    assert_eq!(board.get(pos), Cell::Obstacle);
    assert!(!board.stones(Player::Black).get(pos));

    board.set(pos, Cell::Blocked);
    assert_eq!(board.get(pos), Cell::Blocked);
    assert!(!board.is_empty(pos));

    board.clear(pos);
    assert_eq!(board.get(pos), Cell::Empty);
    assert_eq!(board, Board::new());
}

#[test]
fn test_with_stone_leaves_original_untouched() {
    let mut board = Board::new();
    board.place_stone(Pos::new(9, 9), Player::Black);
    let before = board.clone();

    let next = board.with_stone(Pos::new(9, 10), Player::White);

    assert_eq!(board, before);
    assert_eq!(next.get(Pos::new(9, 10)), Cell::Stone(Player::White));
    assert_eq!(next.stone_count(), 2);
}

#[test]
fn test_markers_are_not_stones() {
    let mut board = Board::new();
    board.set(Pos::new(1, 1), Cell::Obstacle);
    board.set(Pos::new(2, 2), Cell::Blocked);

    assert!(board.is_board_empty());
    assert_eq!(board.stone_count(), 0);
    assert_eq!(board.occupied().count(), 2);
    assert_eq!(board.empty_cells().count(), TOTAL_CELLS - 2);
}

#[test]
fn test_stones_iterate_row_major() {
    let mut board = Board::new();
    board.place_stone(Pos::new(10, 0), Player::White);
    board.place_stone(Pos::new(0, 18), Player::White);
    board.place_stone(Pos::new(18, 18), Player::White);

    let stones: Vec<Pos> = board.stones(Player::White).iter_ones().collect();
    assert_eq!(stones, vec![Pos::new(0, 18), Pos::new(10, 0), Pos::new(18, 18)]);
}

#[test]
fn test_full_board() {
    let mut board = Board::new();
    for idx in 0..TOTAL_CELLS {
        let player = if idx % 2 == 0 { Player::Black } else { Player::White };
        board.place_stone(Pos::from_index(idx), player);
    }
    assert!(board.is_full());
    assert_eq!(board.empty_cells().count(), 0);
}
