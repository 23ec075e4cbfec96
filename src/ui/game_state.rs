//! Game state management for the Gomoku GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use log::{info, warn};

use crate::config::{Difficulty, EngineConfig};
use crate::game::{Action, Game, GameError, Outcome};
use crate::rules::ForbiddenRule;
use crate::search::SearchResult;
use crate::{Engine, Player, Pos};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human: Player },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human: Player::Black }
    }
}

impl GameMode {
    /// Side under the double-three rule: the human, or Black in hotseat play
    fn restricted(self) -> Player {
        match self {
            GameMode::PvE { human } => human,
            GameMode::PvP => Player::Black,
        }
    }
}

/// Special action waiting for a board click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Bomb,
    /// First cell picked so far, if any
    Swap(Option<Pos>),
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<SearchResult>,
        start_time: Instant,
    },
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Main game state
pub struct GameState {
    pub game: Game,
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub last_ai_result: Option<SearchResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,
    pub tool: Option<Tool>,
}

impl GameState {
    pub fn new(mode: GameMode, difficulty: Difficulty) -> Self {
        Self {
            game: Game::new(ForbiddenRule::new(Some(mode.restricted()))),
            mode,
            difficulty,
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
            tool: None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.mode, self.difficulty);
    }

    pub fn current_turn(&self) -> Player {
        self.game.to_move()
    }

    pub fn winning_line(&self) -> Option<[Pos; 5]> {
        match self.game.result() {
            Some(Outcome::Won { line, .. }) => line,
            _ => None,
        }
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human } => self.game.to_move() == human,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        !self.is_human_turn()
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    fn engine_config(&self, ai: Player) -> EngineConfig {
        EngineConfig::from_difficulty(self.difficulty)
            .with_ai(ai)
            .with_restricted(self.game.rule().restricted)
    }

    /// Apply a human command
    pub fn try_action(&mut self, action: Action) -> Result<(), String> {
        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }
        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }
        self.apply(action).map_err(|e| e.to_string())
    }

    /// Handle a board click, routed to the active tool if one is armed
    pub fn click(&mut self, pos: Pos) -> Result<(), String> {
        match self.tool.take() {
            None => self.try_action(Action::Normal(pos)),
            Some(Tool::Bomb) => self.try_action(Action::Bomb(pos)),
            Some(Tool::Swap(None)) => {
                self.tool = Some(Tool::Swap(Some(pos)));
                Ok(())
            }
            Some(Tool::Swap(Some(first))) => self.try_action(Action::Swap(first, pos)),
        }
    }

    fn apply(&mut self, action: Action) -> Result<(), GameError> {
        let outcome = self.game.apply(action)?;
        self.suggested_move = None;
        self.message = None;
        if let Action::Normal(_) = action {
            self.move_timer.start();
        }
        if outcome.is_over() {
            self.move_timer.start_time = None;
        }
        Ok(())
    }

    /// Start AI thinking on a background thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game.is_over() {
            return;
        }

        let ai = self.game.to_move();
        let config = self.engine_config(ai);
        let board = self.game.board().clone();
        let move_count = self.game.move_count();
        let last_opponent_move = self.game.last_move_by(ai.opponent());

        let (tx, rx) = channel();
        thread::spawn(move || {
            let mut engine = Engine::new(config);
            let result = engine.select_move(&board, move_count, move_count == 0, last_opponent_move);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    warn!("AI thread ended without a result");
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((search, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.move_timer.set_ai_time(elapsed);
            let best = search.best_move;
            self.last_ai_result = Some(search);

            match best {
                Some(pos) => {
                    if let Err(e) = self.apply(Action::Normal(pos)) {
                        warn!("AI move {pos} rejected: {e}");
                        self.message = Some(e.to_string());
                    }
                }
                None => self.message = Some("AI could not find a move".to_string()),
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Suggest a move for the side to move (hotseat hint)
    pub fn request_suggestion(&mut self) {
        if self.game.is_over() || self.is_ai_thinking() {
            return;
        }

        let side = self.game.to_move();
        let mut engine = Engine::new(self.engine_config(side));
        let result = engine.select_move(
            self.game.board(),
            self.game.move_count(),
            self.game.move_count() == 0,
            self.game.last_move_by(side.opponent()),
        );

        self.suggested_move = result.best_move;
        self.last_ai_result = Some(result);
    }

    /// Undo back to the human's turn
    pub fn undo(&mut self) {
        if self.is_ai_thinking() || !self.game.can_undo() {
            return;
        }
        self.tool = None;
        self.game.undo();
        if let GameMode::PvE { human } = self.mode {
            while self.game.to_move() != human && self.game.undo() {}
        }
        info!("undo, {} moves on record", self.game.move_count());
        self.suggested_move = None;
        self.message = None;
        self.move_timer.start();
    }
}
