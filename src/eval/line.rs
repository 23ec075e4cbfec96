//! Line scanner: run length and open ends through one cell along one direction

use crate::board::{Board, Cell, Direction, Player, Pos};

/// How far past the origin a scan looks in each direction
pub const SCAN_REACH: i32 = 4;

/// How the origin cell is treated by a scan.
///
/// Both policies stop a direction on the board edge, on any non-own cell,
/// or after [`SCAN_REACH`] cells. Only an empty in-bounds cell counts as an
/// open end, and it also ends that direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakPolicy {
    /// Reads the board as it is. The origin must already hold `player`'s
    /// stone, otherwise the run is empty. Used on simulated copies
    /// (forbidden-move check).
    Strict,
    /// Counts the origin as `player`'s stone whatever it holds, so an empty
    /// candidate cell can be scored without copying the board.
    Inclusive,
}

/// Contiguous run through a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineRun {
    /// Stones in the run, origin included
    pub length: u8,
    /// Empty cells directly past each end (0, 1 or 2)
    pub open_ends: u8,
}

impl LineRun {
    /// Exactly three with both ends open
    #[inline]
    pub fn is_open_three(self) -> bool {
        self.length == 3 && self.open_ends == 2
    }
}

/// Scan the line through `pos` along `dir` for `player`.
pub fn scan_line(
    board: &Board,
    pos: Pos,
    player: Player,
    dir: Direction,
    policy: BreakPolicy,
) -> LineRun {
    if policy == BreakPolicy::Strict && !board.get(pos).is_stone_of(player) {
        return LineRun::default();
    }

    let (dr, dc) = dir.delta();
    let mut run = LineRun {
        length: 1,
        open_ends: 0,
    };

    for sign in [1, -1] {
        for step in 1..=SCAN_REACH {
            let Some(next) = pos.offset(dr * sign, dc * sign, step) else {
                break; // edge is never open
            };
            match board.get(next) {
                Cell::Stone(p) if p == player => run.length += 1,
                Cell::Empty => {
                    run.open_ends += 1;
                    break;
                }
                _ => break,
            }
        }
    }

    run
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_board(black_cols: &[u8], white_cols: &[u8]) -> Board {
        let mut board = Board::new();
        for &c in black_cols {
            board.place_stone(Pos::new(9, c), Player::Black);
        }
        for &c in white_cols {
            board.place_stone(Pos::new(9, c), Player::White);
        }
        board
    }

    #[test]
    fn test_open_three_through_empty_candidate() {
        // _ B B [.] _  -> placing at col 7 makes an open three
        let board = row_board(&[5, 6], &[]);
        let run = scan_line(
            &board,
            Pos::new(9, 7),
            Player::Black,
            Direction::Horizontal,
            BreakPolicy::Inclusive,
        );
        assert_eq!(run, LineRun { length: 3, open_ends: 2 });
        assert!(run.is_open_three());
    }

    #[test]
    fn test_strict_requires_stone_at_origin() {
        let board = row_board(&[5, 6], &[]);
        let strict = scan_line(
            &board,
            Pos::new(9, 7),
            Player::Black,
            Direction::Horizontal,
            BreakPolicy::Strict,
        );
        assert_eq!(strict, LineRun::default());

        let placed = board.with_stone(Pos::new(9, 7), Player::Black);
        let strict = scan_line(
            &placed,
            Pos::new(9, 7),
            Player::Black,
            Direction::Horizontal,
            BreakPolicy::Strict,
        );
        assert_eq!(strict, LineRun { length: 3, open_ends: 2 });
    }

    #[test]
    fn test_opponent_stone_is_not_open() {
        // W B B [.] _
        let board = row_board(&[5, 6], &[4]);
        let run = scan_line(
            &board,
            Pos::new(9, 7),
            Player::Black,
            Direction::Horizontal,
            BreakPolicy::Inclusive,
        );
        assert_eq!(run, LineRun { length: 3, open_ends: 1 });
    }

    #[test]
    fn test_edge_is_not_open() {
        let mut board = Board::new();
        board.place_stone(Pos::new(0, 1), Player::White);
        let run = scan_line(
            &board,
            Pos::new(0, 0),
            Player::White,
            Direction::Horizontal,
            BreakPolicy::Inclusive,
        );
        assert_eq!(run, LineRun { length: 2, open_ends: 1 });
    }

    #[test]
    fn test_markers_block_like_opponent() {
        let mut board = row_board(&[6], &[]);
        board.set(Pos::new(9, 5), Cell::Obstacle);
        board.set(Pos::new(9, 8), Cell::Blocked);
        let run = scan_line(
            &board,
            Pos::new(9, 7),
            Player::Black,
            Direction::Horizontal,
            BreakPolicy::Inclusive,
        );
        assert_eq!(run, LineRun { length: 2, open_ends: 0 });
    }

    #[test]
    fn test_scan_reach_caps_each_side() {
        // Nine in a row through the origin: four counted each way
        let board = row_board(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10], &[]);
        let run = scan_line(
            &board,
            Pos::new(9, 5),
            Player::Black,
            Direction::Horizontal,
            BreakPolicy::Strict,
        );
        assert_eq!(run.length, 9);
        assert_eq!(run.open_ends, 0);
    }

    #[test]
    fn test_diagonal_directions() {
        let mut board = Board::new();
        board.place_stone(Pos::new(8, 8), Player::White);
        board.place_stone(Pos::new(10, 10), Player::White);
        board.place_stone(Pos::new(8, 10), Player::White);
        let diag = scan_line(
            &board,
            Pos::new(9, 9),
            Player::White,
            Direction::Diagonal,
            BreakPolicy::Inclusive,
        );
        let anti = scan_line(
            &board,
            Pos::new(9, 9),
            Player::White,
            Direction::AntiDiagonal,
            BreakPolicy::Inclusive,
        );
        assert_eq!(diag, LineRun { length: 3, open_ends: 2 });
        assert_eq!(anti, LineRun { length: 2, open_ends: 2 });
    }
}
