//! Heuristic evaluation of moves and positions
//!
//! Two evaluators with different jobs:
//! - [`score_move`] rates a single candidate cell from its four lines. It
//!   drives move ordering, threat reports and explanations.
//! - [`evaluate_board`] is the static leaf value of the search. It slides a
//!   5-cell window over the whole board and only counts stones, with no
//!   open-end distinction.

use crate::board::{Board, Direction, Player, Pos, BOARD_SIZE};
use crate::rules::has_five_in_row;

use super::line::{scan_line, BreakPolicy};
use super::patterns::{window_score, LineTable, PatternScore, Score};

/// Window length for the board scan
const WINDOW: i32 = 5;

/// Score of a single move for one side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveScore {
    /// Sum over the four directions
    pub total: Score,
    /// Best single direction
    pub highest: Score,
}

impl MoveScore {
    #[inline]
    pub fn threat(&self) -> ThreatLevel {
        ThreatLevel::classify(self.highest)
    }
}

/// Score placing `player`'s stone at `pos`, summed across the 4 directions.
///
/// The cell itself is never read, so this works on the live board.
pub fn score_move(board: &Board, pos: Pos, player: Player, table: &LineTable) -> MoveScore {
    Direction::ALL
        .iter()
        .map(|&dir| table.score(scan_line(board, pos, player, dir, BreakPolicy::Inclusive)))
        .fold(MoveScore::default(), |acc, s| MoveScore {
            total: acc.total + s,
            highest: acc.highest.max(s),
        })
}

/// Dominant pattern a move creates, from its best single-direction score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ThreatLevel {
    None,
    OpenOne,
    ClosedTwo,
    OpenTwo,
    ClosedThree,
    OpenThree,
    ClosedFour,
    OpenFour,
    Five,
}

impl ThreatLevel {
    pub fn classify(highest: Score) -> ThreatLevel {
        match highest {
            s if s >= PatternScore::FIVE => ThreatLevel::Five,
            s if s >= PatternScore::OPEN_FOUR => ThreatLevel::OpenFour,
            s if s >= PatternScore::CLOSED_FOUR => ThreatLevel::ClosedFour,
            s if s >= PatternScore::OPEN_THREE => ThreatLevel::OpenThree,
            s if s >= LineTable::ROOT_ORDERING.closed_three => ThreatLevel::ClosedThree,
            s if s >= PatternScore::OPEN_TWO => ThreatLevel::OpenTwo,
            s if s >= PatternScore::CLOSED_TWO => ThreatLevel::ClosedTwo,
            s if s >= PatternScore::OPEN_ONE => ThreatLevel::OpenOne,
            _ => ThreatLevel::None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThreatLevel::None => "nothing",
            ThreatLevel::OpenOne => "a lone stone",
            ThreatLevel::ClosedTwo => "a closed two",
            ThreatLevel::OpenTwo => "an open two",
            ThreatLevel::ClosedThree => "a closed three",
            ThreatLevel::OpenThree => "an open three",
            ThreatLevel::ClosedFour => "a four",
            ThreatLevel::OpenFour => "an open four",
            ThreatLevel::Five => "five in a row",
        }
    }
}

/// Static evaluation of the whole board from `searching`'s point of view.
///
/// Returns `±PatternScore::WIN` as soon as either side has five. Otherwise
/// every in-bounds 5-cell window holding stones of one side only adds the
/// count-only table value to that side. A window with both colors is dead.
/// The searching side's total is scaled by `aggression_permille / 1000`.
pub fn evaluate_board(board: &Board, searching: Player, aggression_permille: Score) -> Score {
    let opponent = searching.opponent();
    if has_five_in_row(board, searching) {
        return PatternScore::WIN;
    }
    if has_five_in_row(board, opponent) {
        return -PatternScore::WIN;
    }

    let mut mine: Score = 0;
    let mut theirs: Score = 0;

    for idx in 0..BOARD_SIZE * BOARD_SIZE {
        let origin = Pos::from_index(idx);
        for dir in Direction::ALL {
            let (dr, dc) = dir.delta();
            if origin.offset(dr, dc, WINDOW - 1).is_none() {
                continue;
            }

            let (mut own, mut other) = (0u8, 0u8);
            for step in 0..WINDOW {
                let Some(cell) = origin.offset(dr, dc, step) else {
                    break;
                };
                if board.get(cell).is_stone_of(searching) {
                    own += 1;
                } else if board.get(cell).is_stone_of(opponent) {
                    other += 1;
                }
            }

            match (own, other) {
                (0, n) => theirs += window_score(n),
                (n, 0) => mine += window_score(n),
                _ => {}
            }
        }
    }

    mine * aggression_permille / 1000 - theirs
}

/// Map a search score to a rough win probability for `searching`.
///
/// Logistic curve scaled so an open-three advantage reads as about 73%.
pub fn win_probability(score: Score) -> f64 {
    if score >= PatternScore::WIN {
        return 1.0;
    }
    if score <= -PatternScore::WIN {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let x = score as f64 / 5_000.0;
    1.0 / (1.0 + (-x).exp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    const NEUTRAL: Score = 1000;
    const AGGRESSIVE: Score = 1200;

    /// Rotate a board 90° clockwise
    fn rotate(board: &Board) -> Board {
        let mut out = Board::new();
        for idx in 0..BOARD_SIZE * BOARD_SIZE {
            let pos = Pos::from_index(idx);
            let rotated = Pos::new(pos.col, (BOARD_SIZE - 1) as u8 - pos.row);
            out.set(rotated, board.get(pos));
        }
        out
    }

    fn rotate_pos(pos: Pos) -> Pos {
        Pos::new(pos.col, (BOARD_SIZE - 1) as u8 - pos.row)
    }

    fn mirror(board: &Board) -> Board {
        let mut out = Board::new();
        for idx in 0..BOARD_SIZE * BOARD_SIZE {
            let pos = Pos::from_index(idx);
            out.set(Pos::new(pos.row, (BOARD_SIZE - 1) as u8 - pos.col), board.get(pos));
        }
        out
    }

    fn sample_position() -> Board {
        let mut board = Board::new();
        board.place_stone(Pos::new(9, 7), Player::Black);
        board.place_stone(Pos::new(9, 8), Player::Black);
        board.place_stone(Pos::new(8, 9), Player::Black);
        board.place_stone(Pos::new(10, 8), Player::White);
        board.place_stone(Pos::new(11, 7), Player::White);
        board.place_stone(Pos::new(9, 11), Player::White);
        board
    }

    #[test]
    fn test_score_move_open_three_and_two() {
        let board = sample_position();
        // (9,9) joins the row pair and the vertical single
        let score = score_move(&board, Pos::new(9, 9), Player::Black, &LineTable::SEARCH);
        assert_eq!(score.highest, PatternScore::OPEN_THREE);
        assert_eq!(score.threat(), ThreatLevel::OpenThree);
        assert!(score.total > score.highest);
    }

    #[test]
    fn test_score_move_detects_winning_cell() {
        let mut board = Board::new();
        for i in 0..4 {
            board.place_stone(Pos::new(9, i), Player::Black);
        }
        let score = score_move(&board, Pos::new(9, 4), Player::Black, &LineTable::ROOT_ORDERING);
        assert_eq!(score.highest, PatternScore::FIVE);
        assert_eq!(score.threat(), ThreatLevel::Five);
    }

    #[test]
    fn test_score_move_rotation_and_mirror_symmetry() {
        let board = sample_position();
        let cells = [Pos::new(9, 9), Pos::new(9, 6), Pos::new(7, 10), Pos::new(12, 6)];
        for player in [Player::Black, Player::White] {
            for &pos in &cells {
                let base = score_move(&board, pos, player, &LineTable::SEARCH);

                let mut rotated = board.clone();
                let mut rotated_pos = pos;
                for _ in 0..3 {
                    rotated = rotate(&rotated);
                    rotated_pos = rotate_pos(rotated_pos);
                    assert_eq!(
                        score_move(&rotated, rotated_pos, player, &LineTable::SEARCH),
                        base,
                        "rotation changed score at {pos:?}"
                    );
                }

                let mirrored_pos = Pos::new(pos.row, (BOARD_SIZE - 1) as u8 - pos.col);
                assert_eq!(
                    score_move(&mirror(&board), mirrored_pos, player, &LineTable::SEARCH),
                    base,
                    "mirror changed score at {pos:?}"
                );
            }
        }
    }

    #[test]
    fn test_threat_classification() {
        assert_eq!(ThreatLevel::classify(0), ThreatLevel::None);
        assert_eq!(ThreatLevel::classify(1), ThreatLevel::OpenOne);
        assert_eq!(ThreatLevel::classify(100), ThreatLevel::OpenTwo);
        assert_eq!(ThreatLevel::classify(400), ThreatLevel::ClosedThree);
        assert_eq!(ThreatLevel::classify(500), ThreatLevel::ClosedThree);
        assert_eq!(ThreatLevel::classify(10_000), ThreatLevel::ClosedFour);
        assert_eq!(ThreatLevel::classify(100_000), ThreatLevel::OpenFour);
        assert_eq!(ThreatLevel::classify(1_000_000), ThreatLevel::Five);
        assert!(ThreatLevel::OpenFour > ThreatLevel::ClosedFour);
    }

    #[test]
    fn test_evaluate_empty_board() {
        assert_eq!(evaluate_board(&Board::new(), Player::White, AGGRESSIVE), 0);
    }

    #[test]
    fn test_evaluate_single_center_stone() {
        let mut board = Board::new();
        board.place_stone(Pos::CENTER, Player::White);
        // 5 windows per direction contain the center, 20 in total, 5 points each
        assert_eq!(evaluate_board(&board, Player::White, NEUTRAL), 100);
        assert_eq!(evaluate_board(&board, Player::White, AGGRESSIVE), 120);
        assert_eq!(evaluate_board(&board, Player::Black, AGGRESSIVE), -100);
    }

    #[test]
    fn test_evaluate_corner_stone_fewer_windows() {
        let mut board = Board::new();
        board.place_stone(Pos::new(0, 0), Player::White);
        // One window each horizontally, vertically and diagonally
        assert_eq!(evaluate_board(&board, Player::White, NEUTRAL), 15);
    }

    #[test]
    fn test_mixed_window_is_dead() {
        let mut board = Board::new();
        board.place_stone(Pos::new(0, 0), Player::White);
        board.place_stone(Pos::new(0, 1), Player::Black);
        // Row window shared by both is ignored; the column and diagonal windows count
        let white = evaluate_board(&board, Player::White, NEUTRAL);
        let black = evaluate_board(&board, Player::Black, NEUTRAL);
        assert_eq!(white, -black);
    }

    #[test]
    fn test_evaluate_winning_sentinel() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(9, i), Player::White);
        }
        assert_eq!(evaluate_board(&board, Player::White, AGGRESSIVE), PatternScore::WIN);
        assert_eq!(evaluate_board(&board, Player::Black, AGGRESSIVE), -PatternScore::WIN);
    }

    #[test]
    fn test_evaluate_aggression_favors_searching_side() {
        let board = sample_position();
        let neutral_black = evaluate_board(&board, Player::Black, NEUTRAL);
        let neutral_white = evaluate_board(&board, Player::White, NEUTRAL);
        assert_eq!(neutral_black, -neutral_white, "neutral factor is symmetric");

        let aggressive = evaluate_board(&board, Player::Black, AGGRESSIVE);
        assert!(aggressive > neutral_black);
    }

    #[test]
    fn test_obstacles_do_not_score() {
        let mut board = Board::new();
        board.set(Pos::new(9, 9), Cell::Obstacle);
        board.set(Pos::new(3, 3), Cell::Blocked);
        assert_eq!(evaluate_board(&board, Player::White, AGGRESSIVE), 0);
    }

    #[test]
    fn test_win_probability_readout() {
        assert!((win_probability(0) - 0.5).abs() < 1e-9);
        assert!(win_probability(5_000) > 0.7);
        assert!(win_probability(-5_000) < 0.3);
        assert_eq!(win_probability(PatternScore::WIN), 1.0);
        assert_eq!(win_probability(-PatternScore::WIN), 0.0);
    }
}
