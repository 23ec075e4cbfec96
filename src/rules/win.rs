//! Win detection: five or more stones in a row (overlines also win)

use crate::board::{Board, Direction, Player, Pos};

/// Length of a winning line
pub const WIN_LENGTH: i32 = 5;

/// Check if there's 5+ in a row for the given player.
///
/// Every stone of `player` is treated as a possible line origin and only the
/// forward run along each direction is counted, so each line is found from its
/// first stone.
pub fn has_five_in_row(board: &Board, player: Player) -> bool {
    find_five_line(board, player).is_some()
}

/// The first five cells of a winning line, if `player` has one.
pub fn find_five_line(board: &Board, player: Player) -> Option<[Pos; 5]> {
    for origin in board.stones(player).iter_ones() {
        for dir in Direction::ALL {
            let (dr, dc) = dir.delta();
            let mut line = [origin; 5];
            let mut run = 1;
            while run < WIN_LENGTH {
                match origin.offset(dr, dc, run) {
                    Some(next) if board.get(next).is_stone_of(player) => {
                        line[run as usize] = next;
                        run += 1;
                    }
                    _ => break,
                }
            }
            if run >= WIN_LENGTH {
                return Some(line);
            }
        }
    }
    None
}

/// Would a stone of `player` at `pos` complete five in a row?
///
/// Scans through `pos` both ways without copying the board.
pub fn completes_five(board: &Board, pos: Pos, player: Player) -> bool {
    Direction::ALL.iter().any(|dir| {
        let (dr, dc) = dir.delta();
        let forward = (1..WIN_LENGTH)
            .take_while(|&i| {
                pos.offset(dr, dc, i)
                    .is_some_and(|p| board.get(p).is_stone_of(player))
            })
            .count();
        let backward = (1..WIN_LENGTH)
            .take_while(|&i| {
                pos.offset(-dr, -dc, i)
                    .is_some_and(|p| board.get(p).is_stone_of(player))
            })
            .count();
        1 + forward + backward >= WIN_LENGTH as usize
    })
}

/// Side with five in a row, if any. Black is reported first.
pub fn check_winner(board: &Board) -> Option<Player> {
    [Player::Black, Player::White]
        .into_iter()
        .find(|&player| has_five_in_row(board, player))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    #[test]
    fn test_five_in_row_horizontal() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(9, i), Player::Black);
        }
        assert!(has_five_in_row(&board, Player::Black));
        assert!(!has_five_in_row(&board, Player::White));
    }

    #[test]
    fn test_five_in_row_vertical() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(i, 9), Player::Black);
        }
        assert!(has_five_in_row(&board, Player::Black));
    }

    #[test]
    fn test_five_in_row_diagonal() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(i, i), Player::White);
        }
        assert!(has_five_in_row(&board, Player::White));
    }

    #[test]
    fn test_anti_diagonal_five() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(4 + i, 8 - i), Player::White);
        }
        assert!(has_five_in_row(&board, Player::White));
        assert_eq!(check_winner(&board), Some(Player::White));
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let mut board = Board::new();
        for i in 0..6 {
            board.place_stone(Pos::new(9, i), Player::Black);
        }
        assert!(has_five_in_row(&board, Player::Black));
    }

    #[test]
    fn test_open_four_not_win() {
        let mut board = Board::new();
        for i in 5..9 {
            board.place_stone(Pos::new(9, i), Player::Black);
        }
        assert!(!has_five_in_row(&board, Player::Black));
    }

    #[test]
    fn test_closed_four_not_win() {
        let mut board = Board::new();
        board.place_stone(Pos::new(9, 4), Player::White);
        for i in 5..9 {
            board.place_stone(Pos::new(9, i), Player::Black);
        }
        board.place_stone(Pos::new(9, 9), Player::White);
        assert!(!has_five_in_row(&board, Player::Black));
    }

    #[test]
    fn test_closed_five_still_wins() {
        let mut board = Board::new();
        board.place_stone(Pos::new(3, 2), Player::White);
        for i in 3..8 {
            board.place_stone(Pos::new(3, i), Player::Black);
        }
        board.place_stone(Pos::new(3, 8), Player::White);
        assert!(has_five_in_row(&board, Player::Black));
    }

    #[test]
    fn test_five_at_board_edge_and_corner() {
        let mut board = Board::new();
        for i in 14..19 {
            board.place_stone(Pos::new(18, i), Player::Black);
        }
        assert!(has_five_in_row(&board, Player::Black));

        let mut corner = Board::new();
        for i in 0..5 {
            corner.place_stone(Pos::new(14 + i, 14 + i), Player::White);
        }
        assert!(has_five_in_row(&corner, Player::White));
    }

    #[test]
    fn test_broken_line_not_five() {
        let mut board = Board::new();
        for i in [0, 1, 2, 4, 5] {
            board.place_stone(Pos::new(9, i), Player::Black);
        }
        assert!(!has_five_in_row(&board, Player::Black));

        board.set(Pos::new(9, 3), Cell::Obstacle);
        assert!(!has_five_in_row(&board, Player::Black));
    }

    #[test]
    fn test_find_five_line_positions() {
        let mut board = Board::new();
        for i in 3..9 {
            board.place_stone(Pos::new(i, 2), Player::White);
        }
        let line = find_five_line(&board, Player::White).unwrap();
        assert_eq!(line[0], Pos::new(3, 2));
        assert_eq!(line[4], Pos::new(7, 2));
    }

    #[test]
    fn test_completes_five() {
        let mut board = Board::new();
        for i in [5, 6, 8, 9] {
            board.place_stone(Pos::new(9, i), Player::Black);
        }
        assert!(completes_five(&board, Pos::new(9, 7), Player::Black));
        assert!(!completes_five(&board, Pos::new(9, 7), Player::White));
        assert!(!completes_five(&board, Pos::new(9, 10), Player::Black));
    }

    #[test]
    fn test_no_winner_on_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }
}
