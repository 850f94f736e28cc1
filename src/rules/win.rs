//! Win condition checking
//!
//! Five or more stones of one color in an unbroken line wins. The engine
//! uses [`has_five_at_pos`] to detect immediate wins and blocks on a
//! hypothetical placement; the game session calls the same predicate on the
//! real board after each move.

use crate::board::{run_pattern, Board, CellView, Direction, Pos, Stone, DIRECTIONS};

/// Fast five-in-a-row check through a specific position.
///
/// `pos` counts as `color` whatever the view holds there, so this answers
/// both "did the stone just played win" and "would a stone here win".
#[inline]
pub fn has_five_at_pos<V: CellView + ?Sized>(view: &V, pos: Pos, color: Stone) -> bool {
    DIRECTIONS
        .iter()
        .any(|&dir| run_pattern(view, pos, dir, color).is_five())
}

/// Cells of the five-or-more line through `pos`, ordered along the line.
///
/// Returns `None` when no direction through `pos` reaches five.
pub fn find_five_line<V: CellView + ?Sized>(view: &V, pos: Pos, color: Stone) -> Option<Vec<Pos>> {
    DIRECTIONS
        .iter()
        .find(|&&dir| run_pattern(view, pos, dir, color).is_five())
        .map(|&dir| collect_line(view, pos, dir, color))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn collect_line<V: CellView + ?Sized>(view: &V, pos: Pos, dir: Direction, color: Stone) -> Vec<Pos> {
    // Walk back to the start of the run, then forward to its end
    let mut start = 0;
    loop {
        let (r, c) = pos.offset(dir.dr, dir.dc, start - 1);
        if view.stone_at(r, c) != Some(color) {
            break;
        }
        start -= 1;
    }

    let mut line = vec![];
    let mut step = start;
    loop {
        let (r, c) = pos.offset(dir.dr, dir.dc, step);
        if step != 0 && view.stone_at(r, c) != Some(color) {
            break;
        }
        line.push(Pos::new(r as u8, c as u8));
        step += 1;
    }
    line
}

/// Check if there's 5+ in a row anywhere for the given color
pub fn has_five_in_row(board: &Board, stone: Stone) -> bool {
    find_five_positions(board, stone).is_some()
}

/// Find the positions of a 5-in-a-row if one exists
pub fn find_five_positions(board: &Board, stone: Stone) -> Option<Vec<Pos>> {
    board
        .positions(stone)
        .find_map(|pos| find_five_line(board, pos, stone))
}

/// Check for a winner
///
/// Returns `Some(Stone)` if either color has five in a row, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Stone> {
    [Stone::Black, Stone::White]
        .into_iter()
        .find(|&stone| has_five_in_row(board, stone))
}

/// Board is full and nobody has five
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && check_winner(board).is_none()
}
