//! Game rules
//!
//! - Win condition: 5 or more in a row (overlines count)
//! - Double-three forbidden for one configurable side

pub mod forbidden;
pub mod win;

pub use forbidden::{count_open_threes, is_forbidden, ForbiddenRule};
pub use win::{check_winner, completes_five, find_five_line, has_five_in_row, WIN_LENGTH};
