//! Double-three forbidden move rule
//!
//! A double-three is a move that creates two or more open threes at once.
//! An open three here is a contiguous run of exactly 3 stones with an empty
//! cell past each end, read with the strict scan on a simulated copy.
//! Gapped shapes such as `_OO_O_` are not threes under this rule.
//!
//! Exception: a move that completes five is always allowed.

use crate::board::{Board, Direction, Player, Pos};
use crate::eval::line::{scan_line, BreakPolicy};

use super::win::completes_five;

/// Which side, if any, plays under the double-three restriction.
///
/// The rule is asymmetric: the unrestricted side may make any double-three.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForbiddenRule {
    pub restricted: Option<Player>,
}

impl ForbiddenRule {
    pub const fn new(restricted: Option<Player>) -> Self {
        Self { restricted }
    }

    /// No side restricted
    pub const fn free() -> Self {
        Self { restricted: None }
    }

    #[inline]
    pub fn applies_to(&self, player: Player) -> bool {
        self.restricted == Some(player)
    }

    /// True if `player` may not play at `pos` under this rule
    pub fn is_forbidden(&self, board: &Board, pos: Pos, player: Player) -> bool {
        self.applies_to(player) && is_forbidden(board, pos, player)
    }

    /// Empty cell and not forbidden for `player`
    pub fn is_valid_move(&self, board: &Board, pos: Pos, player: Player) -> bool {
        board.is_empty(pos) && !self.is_forbidden(board, pos, player)
    }
}

impl Default for ForbiddenRule {
    fn default() -> Self {
        Self::new(Some(Player::Black))
    }
}

/// Count the directions in which a stone at `pos` forms an exact open three.
///
/// The board is not modified; the stone is placed on a private copy.
pub fn count_open_threes(board: &Board, pos: Pos, player: Player) -> u8 {
    let simulated = board.with_stone(pos, player);
    Direction::ALL
        .iter()
        .filter(|&&dir| scan_line(&simulated, pos, player, dir, BreakPolicy::Strict).is_open_three())
        .count() as u8
}

/// Double-three check for `player` at `pos`, ignoring who is restricted.
///
/// Returns false when the move completes five, whatever the open-three count.
pub fn is_forbidden(board: &Board, pos: Pos, player: Player) -> bool {
    if completes_five(board, pos, player) {
        return false;
    }
    count_open_threes(board, pos, player) >= 2
}
