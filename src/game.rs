//! Game controller
//!
//! Owns the live board and applies player commands to it through a single
//! transition function, [`Game::apply`]. The search core never sees these
//! commands; it only receives board snapshots.

use log::info;
use thiserror::Error;

use crate::board::{Board, Cell, Player, Pos};
use crate::rules::{check_winner, find_five_line, ForbiddenRule};

/// A command from the side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place a stone
    Normal(Pos),
    /// Remove the stone at a cell and leave an obstacle
    Bomb(Pos),
    /// Exchange two stones
    Swap(Pos, Pos),
    /// The next normal move does not pass the turn
    DoubleMove,
    /// Undo the opponent's last stone and block its cell
    Veto,
}

/// Rejected command
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("Game is over")]
    GameOver,
    #[error("Cell {0} is not empty")]
    Occupied(Pos),
    #[error("Double three at {0} is forbidden for {1}")]
    Forbidden(Pos, &'static str),
    #[error("Position out of bounds: {0}")]
    OutOfBounds(Pos),
    #[error("Opponent has no stone to veto")]
    NothingToVeto,
    #[error("No stone at {0}")]
    NotAStone(Pos),
}

/// State after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Play goes on with `next` to move
    Continue { next: Player },
    Won { winner: Player, line: Option<[Pos; 5]> },
    Draw,
}

impl Outcome {
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::Continue { .. })
    }
}

#[derive(Debug, Clone)]
struct Snapshot {
    board: Board,
    to_move: Player,
    move_count: u32,
    last_moves: [Option<Pos>; 2],
    double_move_pending: bool,
    result: Option<Outcome>,
}

/// Live game between two sides
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    rule: ForbiddenRule,
    to_move: Player,
    /// Normal moves played, including vetoed ones
    move_count: u32,
    /// Last stone of Black, White
    last_moves: [Option<Pos>; 2],
    double_move_pending: bool,
    result: Option<Outcome>,
    history: Vec<Snapshot>,
}

#[inline]
fn side_index(player: Player) -> usize {
    match player {
        Player::Black => 0,
        Player::White => 1,
    }
}

impl Game {
    pub fn new(rule: ForbiddenRule) -> Self {
        Self {
            board: Board::new(),
            rule,
            to_move: Player::Black,
            move_count: 0,
            last_moves: [None; 2],
            double_move_pending: false,
            result: None,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn rule(&self) -> ForbiddenRule {
        self.rule
    }

    pub fn last_move_by(&self, player: Player) -> Option<Pos> {
        self.last_moves[side_index(player)]
    }

    /// Most recent stone of either side, for highlighting
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move_by(self.to_move.opponent())
            .or_else(|| self.last_move_by(self.to_move))
    }

    pub fn double_move_pending(&self) -> bool {
        self.double_move_pending
    }

    /// Final result, if the game has ended
    pub fn result(&self) -> Option<Outcome> {
        self.result
    }

    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Double-three check for the side to move
    pub fn is_forbidden(&self, pos: Pos) -> bool {
        self.board.is_empty(pos) && self.rule.is_forbidden(&self.board, pos, self.to_move)
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Apply one command for the side to move.
    ///
    /// On error the game is left unchanged.
    pub fn apply(&mut self, action: Action) -> Result<Outcome, GameError> {
        if self.result.is_some() {
            return Err(GameError::GameOver);
        }
        let snapshot = self.snapshot();
        let outcome = match action {
            Action::Normal(pos) => self.play(pos)?,
            Action::Bomb(pos) => self.bomb(pos)?,
            Action::Swap(a, b) => self.swap(a, b)?,
            Action::DoubleMove => {
                self.double_move_pending = true;
                info!("{} will move twice", self.to_move.name());
                self.continuing()
            }
            Action::Veto => self.veto()?,
        };
        self.history.push(snapshot);
        if outcome.is_over() {
            self.result = Some(outcome);
        }
        Ok(outcome)
    }

    /// Revert the last successful command
    pub fn undo(&mut self) -> bool {
        let Some(s) = self.history.pop() else {
            return false;
        };
        self.board = s.board;
        self.to_move = s.to_move;
        self.move_count = s.move_count;
        self.last_moves = s.last_moves;
        self.double_move_pending = s.double_move_pending;
        self.result = s.result;
        true
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            to_move: self.to_move,
            move_count: self.move_count,
            last_moves: self.last_moves,
            double_move_pending: self.double_move_pending,
            result: self.result,
        }
    }

    fn continuing(&self) -> Outcome {
        Outcome::Continue { next: self.to_move }
    }

    fn check_bounds(pos: Pos) -> Result<(), GameError> {
        if Pos::is_valid(i32::from(pos.row), i32::from(pos.col)) {
            Ok(())
        } else {
            Err(GameError::OutOfBounds(pos))
        }
    }

    fn play(&mut self, pos: Pos) -> Result<Outcome, GameError> {
        Self::check_bounds(pos)?;
        let player = self.to_move;
        if !self.board.is_empty(pos) {
            return Err(GameError::Occupied(pos));
        }
        if self.rule.is_forbidden(&self.board, pos, player) {
            return Err(GameError::Forbidden(pos, player.name()));
        }

        self.board.place_stone(pos, player);
        self.move_count += 1;
        self.last_moves[side_index(player)] = Some(pos);

        if let Some(line) = find_five_line(&self.board, player) {
            info!("{} wins with {}", player.name(), pos);
            return Ok(Outcome::Won {
                winner: player,
                line: Some(line),
            });
        }
        if self.board.is_full() {
            info!(
                "board full after {} moves ({} stones), draw",
                self.move_count,
                self.board.stone_count()
            );
            return Ok(Outcome::Draw);
        }

        if self.double_move_pending {
            self.double_move_pending = false;
        } else {
            self.to_move = player.opponent();
        }
        Ok(self.continuing())
    }

    fn bomb(&mut self, pos: Pos) -> Result<Outcome, GameError> {
        Self::check_bounds(pos)?;
        let Cell::Stone(owner) = self.board.get(pos) else {
            return Err(GameError::NotAStone(pos));
        };
        self.board.set(pos, Cell::Obstacle);
        let last = &mut self.last_moves[side_index(owner)];
        if *last == Some(pos) {
            *last = None;
        }
        info!("{} bombed {} at {}", self.to_move.name(), owner.name(), pos);
        Ok(self.continuing())
    }

    fn swap(&mut self, a: Pos, b: Pos) -> Result<Outcome, GameError> {
        Self::check_bounds(a)?;
        Self::check_bounds(b)?;
        let (cell_a, cell_b) = (self.board.get(a), self.board.get(b));
        if !matches!(cell_a, Cell::Stone(_)) {
            return Err(GameError::NotAStone(a));
        }
        if !matches!(cell_b, Cell::Stone(_)) {
            return Err(GameError::NotAStone(b));
        }

        self.board.set(a, cell_b);
        self.board.set(b, cell_a);
        for last in &mut self.last_moves {
            if *last == Some(a) {
                *last = Some(b);
            } else if *last == Some(b) {
                *last = Some(a);
            }
        }
        info!("{} swapped {} and {}", self.to_move.name(), a, b);

        if let Some(winner) = check_winner(&self.board) {
            info!("{} wins after swap", winner.name());
            return Ok(Outcome::Won {
                winner,
                line: find_five_line(&self.board, winner),
            });
        }
        Ok(self.continuing())
    }

    fn veto(&mut self) -> Result<Outcome, GameError> {
        let opponent = self.to_move.opponent();
        let pos = self.last_move_by(opponent).ok_or(GameError::NothingToVeto)?;
        if !self.board.get(pos).is_stone_of(opponent) {
            return Err(GameError::NothingToVeto);
        }
        self.board.set(pos, Cell::Blocked);
        self.last_moves[side_index(opponent)] = None;
        self.to_move = opponent;
        info!("{} vetoed {} at {}", opponent.opponent().name(), opponent.name(), pos);
        Ok(self.continuing())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(ForbiddenRule::default())
    }
}
