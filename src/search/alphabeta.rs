//! Minimax search with alpha-beta pruning
//!
//! The searching side maximizes, its opponent minimizes, and leaves are
//! scored by [`evaluate_board`] from the searching side's point of view.
//! Every simulated move goes onto a private copy of the board, so a search
//! never touches the caller's position.
//!
//! Root candidates are sorted by `1.1 * attack + defense` before recursing.
//! The ordering only speeds up pruning: ties are broken in favor of the
//! earlier candidate, and a later one replaces it only with a strictly
//! better value.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Player, Pos};
//! use gomoku::config::EngineConfig;
//! use gomoku::search::Searcher;
//!
//! let mut board = Board::new();
//! board.place_stone(Pos::new(9, 9), Player::Black);
//! board.place_stone(Pos::new(9, 10), Player::White);
//!
//! let mut searcher = Searcher::new(&EngineConfig::default());
//! let result = searcher.search(&board, 2);
//! assert!(result.best_move.is_some());
//! ```

use std::time::{Duration, Instant};

use log::{debug, trace};

use crate::board::{Board, Player, Pos};
use crate::config::EngineConfig;
use crate::eval::{evaluate_board, score_move, LineTable, MoveScore, PatternScore, Score, ThreatLevel};
use crate::rules::{has_five_in_row, ForbiddenRule};

use super::candidates::relevant_moves;

/// Bound wider than any evaluation, distance bonus included
const INF: Score = PatternScore::WIN + 1_000;

/// Nodes between deadline checks
const TIME_CHECK_INTERVAL: u64 = 1024;

/// Root candidate with its ordering breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub pos: Pos,
    /// `attack.total * attack_permille / 1000 + defense.total`
    pub priority: Score,
    /// Score of the cell for the searching side
    pub attack: MoveScore,
    /// Score of the cell for the opponent, i.e. what playing here denies
    pub defense: MoveScore,
}

impl ScoredMove {
    /// Short explanation of why the move is interesting
    pub fn reason(&self) -> String {
        let attack = self.attack.threat();
        let defense = self.defense.threat();
        if attack == ThreatLevel::Five {
            return "wins".to_string();
        }
        if defense == ThreatLevel::Five {
            return "blocks five in a row".to_string();
        }
        if attack >= defense && attack >= ThreatLevel::OpenTwo {
            format!("makes {}", attack.label())
        } else if defense >= ThreatLevel::OpenTwo {
            format!("blocks {}", defense.label())
        } else {
            "develops near existing stones".to_string()
        }
    }
}

/// How the engine arrived at its move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    /// Center on an empty board
    Opening,
    /// Random neighbor of the opponent's first stone
    SecondMoveRandom,
    /// Full minimax search
    AlphaBeta,
    /// Degenerate position, no search possible
    Fallback,
}

/// Outcome of a search
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Chosen move. `None` only when every candidate was forbidden.
    pub best_move: Option<Pos>,
    /// Value of the chosen move; positive favors the searching side
    pub score: Score,
    /// Root candidates in search order
    pub ranked: Vec<ScoredMove>,
    /// Nodes visited, root children included
    pub nodes: u64,
    /// Deepest fully completed depth
    pub depth: u8,
    pub kind: SearchKind,
    /// Wall-clock time, filled in by the engine
    pub time_ms: u64,
}

impl SearchResult {
    /// Result that did not come from a search
    pub fn direct(pos: Pos, kind: SearchKind) -> Self {
        Self {
            best_move: Some(pos),
            score: 0,
            ranked: Vec::new(),
            nodes: 0,
            depth: 0,
            kind,
            time_ms: 0,
        }
    }
}

/// Depth-limited minimax searcher for one side.
pub struct Searcher {
    ai: Player,
    rule: ForbiddenRule,
    attack_permille: Score,
    aggression_permille: Score,
    nodes: u64,
    deadline: Option<Instant>,
    stopped: bool,
}

impl Searcher {
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            ai: config.ai,
            rule: config.forbidden_rule(),
            attack_permille: config.attack_permille,
            aggression_permille: config.aggression_permille,
            nodes: 0,
            deadline: None,
            stopped: false,
        }
    }

    /// The maximizing side
    pub fn ai(&self) -> Player {
        self.ai
    }

    /// Fixed-depth search, run to completion.
    pub fn search(&mut self, board: &Board, depth: u8) -> SearchResult {
        self.nodes = 0;
        self.deadline = None;
        self.stopped = false;

        let ranked = self.rank_root(board);
        let (best_move, score) = self.search_root(board, &ranked, depth);
        self.finish(best_move, score, ranked, depth)
    }

    /// Iterative deepening over even depths up to `max_depth`.
    ///
    /// The first iteration always completes. A deeper iteration cut off by
    /// the deadline is discarded and the previous result kept.
    pub fn search_timed(&mut self, board: &Board, max_depth: u8, limit: Duration) -> SearchResult {
        let start = Instant::now();
        self.nodes = 0;
        self.stopped = false;
        self.deadline = None;

        let ranked = self.rank_root(board);
        let first = max_depth.clamp(1, 2);
        let (mut best_move, mut score) = self.search_root(board, &ranked, first);
        let mut completed = first;

        self.deadline = Some(start + limit);
        let mut depth = first + 2;
        while depth <= max_depth && !self.time_up() {
            let (mv, value) = self.search_root(board, &ranked, depth);
            if self.stopped {
                debug!("depth {depth} abandoned after {:?}", start.elapsed());
                break;
            }
            best_move = mv;
            score = value;
            completed = depth;
            depth += 2;
        }

        self.finish(best_move, score, ranked, completed)
    }

    fn finish(&self, best_move: Option<Pos>, score: Score, ranked: Vec<ScoredMove>, depth: u8) -> SearchResult {
        debug!(
            "search for {}: best={:?} score={} depth={} nodes={} candidates={}",
            self.ai.name(),
            best_move.map(|p| p.to_string()),
            score,
            depth,
            self.nodes,
            ranked.len()
        );
        SearchResult {
            best_move,
            score,
            ranked,
            nodes: self.nodes,
            depth,
            kind: SearchKind::AlphaBeta,
            time_ms: 0,
        }
    }

    /// Root candidates minus forbidden cells, sorted by priority (stable).
    pub fn rank_root(&self, board: &Board) -> Vec<ScoredMove> {
        let opponent = self.ai.opponent();
        let mut ranked: Vec<ScoredMove> = relevant_moves(board, false, None)
            .into_iter()
            .filter(|&pos| board.is_empty(pos) && !self.rule.is_forbidden(board, pos, self.ai))
            .map(|pos| {
                let attack = score_move(board, pos, self.ai, &LineTable::ROOT_ORDERING);
                let defense = score_move(board, pos, opponent, &LineTable::ROOT_ORDERING);
                ScoredMove {
                    pos,
                    priority: attack.total * self.attack_permille / 1000 + defense.total,
                    attack,
                    defense,
                }
            })
            .collect();
        ranked.sort_by(|a, b| b.priority.cmp(&a.priority));
        ranked
    }

    fn search_root(&mut self, board: &Board, ranked: &[ScoredMove], depth: u8) -> (Option<Pos>, Score) {
        let mut best_move = None;
        let mut best_score = -INF;
        let mut alpha = -INF;
        let beta = INF;

        for candidate in ranked {
            let child = board.with_stone(candidate.pos, self.ai);
            let value = self.minimax(&child, depth.saturating_sub(1), alpha, beta, false);
            if self.stopped {
                break;
            }
            trace!(
                "root {} priority={} value={} ({})",
                candidate.pos,
                candidate.priority,
                value,
                candidate.reason()
            );
            if best_move.is_none() || value > best_score {
                best_move = Some(candidate.pos);
                best_score = value;
            }
            alpha = alpha.max(value);
        }

        (best_move, best_score)
    }

    fn minimax(&mut self, board: &Board, depth: u8, mut alpha: Score, mut beta: Score, maximizing: bool) -> Score {
        self.nodes += 1;
        if self.nodes % TIME_CHECK_INTERVAL == 0 && self.time_up() {
            self.stopped = true;
        }
        if self.stopped {
            return 0;
        }

        // Remaining depth rewards faster wins and slower losses
        let opponent = self.ai.opponent();
        if has_five_in_row(board, self.ai) {
            return PatternScore::WIN + Score::from(depth);
        }
        if has_five_in_row(board, opponent) {
            return -(PatternScore::WIN + Score::from(depth));
        }
        if depth == 0 {
            return evaluate_board(board, self.ai, self.aggression_permille);
        }

        let side = if maximizing { self.ai } else { opponent };
        let moves = self.ordered_moves(board, side);
        if moves.is_empty() {
            return evaluate_board(board, self.ai, self.aggression_permille);
        }

        if maximizing {
            let mut best = -INF;
            for pos in moves {
                let child = board.with_stone(pos, side);
                let value = self.minimax(&child, depth - 1, alpha, beta, false);
                best = best.max(value);
                alpha = alpha.max(value);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = INF;
            for pos in moves {
                let child = board.with_stone(pos, side);
                let value = self.minimax(&child, depth - 1, alpha, beta, true);
                best = best.min(value);
                beta = beta.min(value);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }

    /// Legal candidates for `side`, strongest cells first
    fn ordered_moves(&self, board: &Board, side: Player) -> Vec<Pos> {
        let other = side.opponent();
        let mut scored: Vec<(Score, Pos)> = relevant_moves(board, false, None)
            .into_iter()
            .filter(|&pos| board.is_empty(pos) && !self.rule.is_forbidden(board, pos, side))
            .map(|pos| {
                let own = score_move(board, pos, side, &LineTable::SEARCH).total;
                let denied = score_move(board, pos, other, &LineTable::SEARCH).total;
                (own + denied, pos)
            })
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().map(|(_, pos)| pos).collect()
    }

    #[inline]
    fn time_up(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}
