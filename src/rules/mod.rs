//! Game rules for Wuziqi
//!
//! Standard free-style five-in-a-row: no captures and no forbidden moves.
//! Five or more consecutive stones win; a full board without a five is a draw.

pub mod win;

// Re-exports for convenient access
pub use win::{
    check_winner, find_five_line, find_five_positions, has_five_at_pos, has_five_in_row, is_draw,
};
