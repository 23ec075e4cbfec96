//! Position evaluation
//!
//! - [`line`]: run length and open ends through a cell
//! - [`patterns`]: score tables for runs and windows
//! - [`heuristic`]: move scoring and static board evaluation

pub mod heuristic;
pub mod line;
pub mod patterns;

pub use heuristic::{evaluate_board, score_move, win_probability, MoveScore, ThreatLevel};
pub use line::{scan_line, BreakPolicy, LineRun};
pub use patterns::{LineTable, PatternScore, Score};
