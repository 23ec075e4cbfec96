//! Move selection entry point
//!
//! [`Engine::select_move`] decides in this order:
//!
//! 1. **Full board**: nothing to play, center returned as a sentinel
//! 2. **Opening**: center on an empty board
//! 3. **Second move**: a uniformly random empty neighbor of the opponent's
//!    first stone
//! 4. **Alpha-Beta**: minimax over the candidate neighborhood
//!
//! The board passed in is never modified.
//!
//! # Example
//!
//! ```
//! use gomoku::{Board, Engine, EngineConfig, Player, Pos};
//!
//! let mut engine = Engine::new(EngineConfig::default().with_seed(7));
//! let mut board = Board::new();
//! board.place_stone(Pos::new(9, 9), Player::Black);
//! board.place_stone(Pos::new(9, 10), Player::White);
//! board.place_stone(Pos::new(10, 9), Player::Black);
//!
//! let result = engine.select_move(&board, 3, false, Some(Pos::new(10, 9)));
//! println!("Best move: {:?} ({:?})", result.best_move, result.kind);
//! assert!(result.best_move.is_some());
//! ```

use std::time::Instant;

use log::{debug, warn};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::{Board, Player, Pos};
use crate::config::EngineConfig;
use crate::rules::ForbiddenRule;
use crate::search::{fallback_move, SearchKind, SearchResult, Searcher};

/// The computer opponent
pub struct Engine {
    config: EngineConfig,
    rule: ForbiddenRule,
    searcher: Searcher,
    rng: SmallRng,
}

impl Engine {
    /// Create an engine. Odd depths are rounded up to even.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let config = config.normalized();
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Self {
            rule: config.forbidden_rule(),
            searcher: Searcher::new(&config),
            config,
            rng,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The side this engine plays
    pub fn ai(&self) -> Player {
        self.config.ai
    }

    /// Pick a move for the engine's side.
    ///
    /// * `move_count` - stones placed so far; 1 triggers the random reply
    /// * `is_opening` - the engine moves first in this game
    /// * `last_opponent_move` - the opponent's most recent stone, if any
    pub fn select_move(
        &mut self,
        board: &Board,
        move_count: u32,
        is_opening: bool,
        last_opponent_move: Option<Pos>,
    ) -> SearchResult {
        let start = Instant::now();
        let mut result = self.decide(board, move_count, is_opening, last_opponent_move);
        result.time_ms = start.elapsed().as_millis() as u64;
        debug!(
            "{} selected {:?} via {:?} in {}ms with {} stones on board",
            self.config.ai.name(),
            result.best_move.map(|p| p.to_string()),
            result.kind,
            result.time_ms,
            board.stone_count()
        );
        result
    }

    fn decide(
        &mut self,
        board: &Board,
        move_count: u32,
        is_opening: bool,
        last_opponent_move: Option<Pos>,
    ) -> SearchResult {
        if board.is_full() {
            warn!("select_move called on a full board");
            return SearchResult::direct(Pos::CENTER, SearchKind::Fallback);
        }

        if board.is_board_empty() || is_opening {
            if board.is_empty(Pos::CENTER) {
                return SearchResult::direct(Pos::CENTER, SearchKind::Opening);
            }
            if board.is_board_empty() {
                let pos = fallback_move(board, last_opponent_move);
                return SearchResult::direct(pos, SearchKind::Fallback);
            }
        }

        if move_count == 1 {
            if let Some(pos) = last_opponent_move.and_then(|last| self.random_neighbor(board, last)) {
                return SearchResult::direct(pos, SearchKind::SecondMoveRandom);
            }
        }

        let mut result = match self.config.time_limit {
            Some(limit) => self.searcher.search_timed(board, self.config.depth, limit),
            None => self.searcher.search(board, self.config.depth),
        };

        if result.best_move.is_none() {
            // Every neighborhood cell was forbidden for us
            result.best_move = board
                .empty_cells()
                .find(|&p| !self.rule.is_forbidden(board, p, self.config.ai));
            result.kind = SearchKind::Fallback;
        }
        result
    }

    /// Uniform pick among the empty cells around `last`
    fn random_neighbor(&mut self, board: &Board, last: Pos) -> Option<Pos> {
        let empties: Vec<Pos> = last.neighbors().filter(|&p| board.is_empty(p)).collect();
        empties.choose(&mut self.rng).copied()
    }

    /// Whether `player` may not play at `pos` under the configured rule.
    ///
    /// Lets the controller reject a move before it reaches the live board.
    pub fn is_forbidden(&self, board: &Board, pos: Pos, player: Player) -> bool {
        self.rule.is_forbidden(board, pos, player)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
