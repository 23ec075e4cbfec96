//! Gomoku opponent engine
//!
//! A deterministic search engine that picks moves for a computer player in
//! five-in-a-row on a 19x19 board:
//! - 5 or more in a row wins (overlines count)
//! - Double-three forbidden for one configurable side only
//! - Depth-limited minimax with alpha-beta pruning, depth 2 by default
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Win detection and the forbidden-move rule
//! - [`eval`]: Line scanning, move scoring and static evaluation
//! - [`search`]: Candidate generation and alpha-beta search
//! - [`engine`]: [`Engine::select_move`], the single entry point
//! - [`game`]: Controller applying player commands to a live board
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Action, Engine, EngineConfig, Game, Player};
//!
//! let mut game = Game::default();
//! let mut engine = Engine::new(EngineConfig::default().with_seed(1));
//!
//! // Black (human) opens, White (engine) replies
//! game.apply(Action::Normal(gomoku::Pos::CENTER)).unwrap();
//! let reply = engine.select_move(
//!     game.board(),
//!     game.move_count(),
//!     false,
//!     game.last_move_by(Player::Black),
//! );
//! game.apply(Action::Normal(reply.best_move.unwrap())).unwrap();
//! assert_eq!(game.move_count(), 2);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

pub use board::{Board, Cell, Player, Pos, BOARD_SIZE};
pub use config::{Difficulty, EngineConfig};
pub use engine::Engine;
pub use game::{Action, Game, GameError, Outcome};
pub use search::{ScoredMove, SearchKind, SearchResult};
