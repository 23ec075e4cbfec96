//! Pattern score tables
//!
//! Two families of tables live here: the per-line table used when scoring a
//! single move (run length plus open ends), and the cruder count-only table
//! used by the whole-board window scan.

use super::line::LineRun;

/// Evaluation score. Positive favors the side the score was computed for.
pub type Score = i64;

/// Pattern scores for a single line through a move
pub struct PatternScore;

impl PatternScore {
    /// Five or more in a row
    pub const FIVE: Score = 1_000_000;
    /// Open four: _OOOO_
    pub const OPEN_FOUR: Score = 100_000;
    /// Four with at most one open end
    pub const CLOSED_FOUR: Score = 10_000;
    /// Open three: _OOO_
    pub const OPEN_THREE: Score = 5_000;
    /// Open two: _OO_
    pub const OPEN_TWO: Score = 100;
    /// Closed two: XOO_
    pub const CLOSED_TWO: Score = 10;
    /// Lone stone with room on both sides
    pub const OPEN_ONE: Score = 1;

    /// Whole-board sentinel once either side has five in a row
    pub const WIN: Score = 10_000_000;
}

/// Per-line score table.
///
/// The closed-three value differs between the root move ordering and the
/// recursive search ordering. Each call site keeps its own value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineTable {
    /// Three with exactly one open end
    pub closed_three: Score,
}

impl LineTable {
    /// Root candidate priority
    pub const ROOT_ORDERING: LineTable = LineTable { closed_three: 400 };
    /// Candidate ordering inside the recursive search, and threat reports
    pub const SEARCH: LineTable = LineTable { closed_three: 500 };

    /// Score of one line, a pure function of run length and open ends
    pub fn score(&self, run: LineRun) -> Score {
        match (run.length, run.open_ends) {
            (5.., _) => PatternScore::FIVE,
            (4, 2) => PatternScore::OPEN_FOUR,
            (4, _) => PatternScore::CLOSED_FOUR,
            (3, 2) => PatternScore::OPEN_THREE,
            (3, 1) => self.closed_three,
            (2, 2) => PatternScore::OPEN_TWO,
            (2, 1) => PatternScore::CLOSED_TWO,
            (1, 2) => PatternScore::OPEN_ONE,
            _ => 0,
        }
    }
}

/// Count-only table for a 5-cell window holding stones of a single side
#[inline]
pub fn window_score(stones_in_window: u8) -> Score {
    match stones_in_window {
        4 => 10_000,
        3 => 500,
        2 => 50,
        1 => 5,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(length: u8, open_ends: u8) -> LineRun {
        LineRun { length, open_ends }
    }

    #[test]
    fn test_line_table_values() {
        let table = LineTable::SEARCH;
        assert_eq!(table.score(run(5, 0)), 1_000_000);
        assert_eq!(table.score(run(6, 2)), 1_000_000);
        assert_eq!(table.score(run(4, 2)), 100_000);
        assert_eq!(table.score(run(4, 1)), 10_000);
        assert_eq!(table.score(run(4, 0)), 10_000);
        assert_eq!(table.score(run(3, 2)), 5_000);
        assert_eq!(table.score(run(3, 0)), 0);
        assert_eq!(table.score(run(2, 2)), 100);
        assert_eq!(table.score(run(2, 1)), 10);
        assert_eq!(table.score(run(2, 0)), 0);
        assert_eq!(table.score(run(1, 2)), 1);
        assert_eq!(table.score(run(1, 1)), 0);
    }

    #[test]
    fn test_closed_three_per_call_site() {
        assert_eq!(LineTable::ROOT_ORDERING.score(run(3, 1)), 400);
        assert_eq!(LineTable::SEARCH.score(run(3, 1)), 500);
        // Everything else agrees
        for length in 0..=6 {
            for open in 0..=2 {
                if (length, open) != (3, 1) {
                    assert_eq!(
                        LineTable::ROOT_ORDERING.score(run(length, open)),
                        LineTable::SEARCH.score(run(length, open))
                    );
                }
            }
        }
    }

    #[test]
    fn test_pattern_score_hierarchy() {
        assert!(PatternScore::WIN > PatternScore::FIVE);
        assert!(PatternScore::FIVE > PatternScore::OPEN_FOUR);
        assert!(PatternScore::OPEN_FOUR > PatternScore::CLOSED_FOUR);
        assert!(PatternScore::CLOSED_FOUR > PatternScore::OPEN_THREE);
        assert!(PatternScore::OPEN_THREE > LineTable::SEARCH.closed_three);
        assert!(LineTable::ROOT_ORDERING.closed_three > PatternScore::OPEN_TWO);
        assert!(PatternScore::OPEN_TWO > PatternScore::CLOSED_TWO);
    }

    #[test]
    fn test_window_score() {
        assert_eq!(window_score(0), 0);
        assert_eq!(window_score(1), 5);
        assert_eq!(window_score(2), 50);
        assert_eq!(window_score(3), 500);
        assert_eq!(window_score(4), 10_000);
        assert_eq!(window_score(5), 0);
    }
}
