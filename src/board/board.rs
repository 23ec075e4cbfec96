//! Grid of cell states

use super::bitboard::Bitboard;
use super::{Cell, Player, Pos, TOTAL_CELLS};

/// 19x19 game board.
///
/// Each cell lives in at most one layer, so every cell has exactly one
/// state. The live board is owned by the game controller. The search only
/// works on copies made with [`Board::with_stone`] or `clone`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
    obstacles: Bitboard,
    blocked: Bitboard,
}

impl Board {
    /// All-empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the state of a cell
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        if self.black.get(pos) {
            Cell::Stone(Player::Black)
        } else if self.white.get(pos) {
            Cell::Stone(Player::White)
        } else if self.obstacles.get(pos) {
            Cell::Obstacle
        } else if self.blocked.get(pos) {
            Cell::Blocked
        } else {
            Cell::Empty
        }
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.occupied().get(pos)
    }

    /// Overwrite a cell with a new state
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        self.clear(pos);
        match cell {
            Cell::Empty => {}
            Cell::Stone(Player::Black) => self.black.set(pos),
            Cell::Stone(Player::White) => self.white.set(pos),
            Cell::Obstacle => self.obstacles.set(pos),
            Cell::Blocked => self.blocked.set(pos),
        }
    }

    #[inline]
    pub fn place_stone(&mut self, pos: Pos, player: Player) {
        self.set(pos, Cell::Stone(player));
    }

    /// Reset a cell to `Empty`
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        self.black.clear(pos);
        self.white.clear(pos);
        self.obstacles.clear(pos);
        self.blocked.clear(pos);
    }

    /// Copy of this board with one extra stone. Used for every simulated move.
    #[must_use]
    pub fn with_stone(&self, pos: Pos, player: Player) -> Board {
        let mut next = self.clone();
        next.place_stone(pos, player);
        next
    }

    /// Stones of one side
    #[inline]
    pub fn stones(&self, player: Player) -> &Bitboard {
        match player {
            Player::Black => &self.black,
            Player::White => &self.white,
        }
    }

    /// Every non-empty cell, markers included
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.black | self.white | self.obstacles | self.blocked
    }

    /// Stones of both sides
    #[inline]
    pub fn all_stones(&self) -> Bitboard {
        self.black | self.white
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// No stone of either side on the board
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// No empty cell left
    #[inline]
    pub fn is_full(&self) -> bool {
        self.occupied().count() as usize >= TOTAL_CELLS
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        let occupied = self.occupied();
        (0..TOTAL_CELLS)
            .map(Pos::from_index)
            .filter(move |&pos| !occupied.get(pos))
    }
}
