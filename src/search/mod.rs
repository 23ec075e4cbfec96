//! Move search
//!
//! Contains:
//! - Candidate generation around existing stones
//! - Minimax with alpha-beta pruning and root move ordering

pub mod alphabeta;
pub mod candidates;

pub use alphabeta::{ScoredMove, SearchKind, SearchResult, Searcher};
pub use candidates::{fallback_move, relevant_moves};
