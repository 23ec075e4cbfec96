//! Candidate move generation
//!
//! Only empty cells within Chebyshev distance [`RADIUS`] of a stone are
//! considered, which keeps the branching factor in the tens instead of 361.

use log::warn;

use crate::board::{Bitboard, Board, Pos};

/// Neighborhood radius around existing stones
pub const RADIUS: i32 = 2;

/// Plausible next moves, row-major and deduplicated.
///
/// - An empty board (no stones), or an opening move with a free center,
///   yields the center only.
/// - Obstacles and blocked cells neither attract play nor are returned.
/// - If no cell qualifies, a single fallback cell is returned: an empty
///   neighbor of `last_move`, else the center.
pub fn relevant_moves(board: &Board, is_opening: bool, last_move: Option<Pos>) -> Vec<Pos> {
    if (is_opening || board.is_board_empty()) && board.is_empty(Pos::CENTER) {
        return vec![Pos::CENTER];
    }

    let mask = neighborhood(board);
    if mask.is_empty() {
        return vec![fallback_move(board, last_move)];
    }
    mask.iter_ones().collect()
}

/// Empty cells within [`RADIUS`] of any stone
fn neighborhood(board: &Board) -> Bitboard {
    let mut mask = Bitboard::new();
    for stone in board.all_stones().iter_ones() {
        for dr in -RADIUS..=RADIUS {
            for dc in -RADIUS..=RADIUS {
                if let Some(p) = stone.offset(dr, dc, 1) {
                    if board.is_empty(p) {
                        mask.set(p);
                    }
                }
            }
        }
    }
    mask
}

/// Cell to hand back when the neighborhood is empty.
///
/// Returns the center as a sentinel on a board with no empty cell at all;
/// callers are expected to detect the draw before asking.
pub fn fallback_move(board: &Board, last_move: Option<Pos>) -> Pos {
    if let Some(adjacent) = last_move.and_then(|last| last.neighbors().find(|&p| board.is_empty(p))) {
        return adjacent;
    }
    if board.is_empty(Pos::CENTER) {
        return Pos::CENTER;
    }
    board.empty_cells().next().unwrap_or_else(|| {
        warn!("no empty cell left, returning center as sentinel");
        Pos::CENTER
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Player, BOARD_SIZE};

    #[test]
    fn test_empty_board_center_only() {
        let board = Board::new();
        assert_eq!(relevant_moves(&board, false, None), vec![Pos::CENTER]);
        assert_eq!(relevant_moves(&board, true, None), vec![Pos::CENTER]);
    }

    #[test]
    fn test_opening_flag_prefers_center() {
        let mut board = Board::new();
        board.place_stone(Pos::new(3, 3), Player::Black);
        assert_eq!(relevant_moves(&board, true, None), vec![Pos::CENTER]);
        assert!(relevant_moves(&board, false, None).len() > 1);
    }

    #[test]
    fn test_single_stone_neighborhood() {
        let mut board = Board::new();
        board.place_stone(Pos::CENTER, Player::Black);
        let moves = relevant_moves(&board, false, None);
        // 5x5 square minus the stone itself
        assert_eq!(moves.len(), 24);
        assert!(moves.iter().all(|&p| p.chebyshev(Pos::CENTER) <= 2));
        assert!(!moves.contains(&Pos::CENTER));
    }

    #[test]
    fn test_corner_stone_clipped() {
        let mut board = Board::new();
        board.place_stone(Pos::new(0, 0), Player::White);
        assert_eq!(relevant_moves(&board, false, None).len(), 8);
    }

    #[test]
    fn test_overlapping_neighborhoods_deduplicated() {
        let mut board = Board::new();
        board.place_stone(Pos::new(9, 9), Player::Black);
        board.place_stone(Pos::new(9, 10), Player::White);
        let moves = relevant_moves(&board, false, None);
        // 5x6 rectangle minus two stones
        assert_eq!(moves.len(), 28);
        let mut sorted = moves.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted, moves, "row-major and unique");
    }

    #[test]
    fn test_markers_do_not_attract() {
        let mut board = Board::new();
        board.set(Pos::new(4, 4), Cell::Obstacle);
        board.set(Pos::new(14, 14), Cell::Blocked);
        board.place_stone(Pos::CENTER, Player::Black);
        let moves = relevant_moves(&board, false, None);
        assert_eq!(moves.len(), 24);
    }

    #[test]
    fn test_marker_not_a_candidate() {
        let mut board = Board::new();
        board.place_stone(Pos::CENTER, Player::Black);
        board.set(Pos::new(9, 10), Cell::Obstacle);
        let moves = relevant_moves(&board, false, None);
        assert!(!moves.contains(&Pos::new(9, 10)));
        assert_eq!(moves.len(), 23);
    }

    #[test]
    fn test_fallback_adjacent_to_last_move() {
        let mut board = Board::new();
        board.set(Pos::CENTER, Cell::Obstacle);
        // No stones, center taken: neighborhood is empty
        let mv = relevant_moves(&board, false, Some(Pos::new(2, 2)));
        assert_eq!(mv.len(), 1);
        assert_eq!(mv[0].chebyshev(Pos::new(2, 2)), 1);
    }

    #[test]
    fn test_fallback_without_last_move() {
        let mut board = Board::new();
        board.set(Pos::CENTER, Cell::Obstacle);
        let mv = relevant_moves(&board, false, None);
        assert_eq!(mv, vec![Pos::new(0, 0)]);
    }

    #[test]
    fn test_full_board_sentinel() {
        let mut board = Board::new();
        for idx in 0..BOARD_SIZE * BOARD_SIZE {
            let player = if idx % 2 == 0 { Player::Black } else { Player::White };
            board.place_stone(Pos::from_index(idx), player);
        }
        assert_eq!(relevant_moves(&board, false, Some(Pos::new(0, 0))), vec![Pos::CENTER]);
    }
}
