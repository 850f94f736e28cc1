//! Threat analysis at a single cell
//!
//! Aggregates [`run_pattern`] over the four line orientations into the
//! named threat categories the scorer weighs.

use crate::board::{run_pattern, CellView, Pos, Stone, DIRECTIONS};

/// Threat counts for one player at one cell, one entry per direction that
/// satisfies the predicate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellThreats {
    /// Directions with five or more
    pub fives: u8,
    /// Four with at least one open end
    pub live_fours: u8,
    /// Four regardless of open ends
    pub fours: u8,
    pub live_threes: u8,
    pub live_twos: u8,
}

impl CellThreats {
    #[inline]
    pub fn is_win(&self) -> bool {
        self.fives > 0
    }

    /// Double-three count: live-three directions paired off, rounded down.
    /// A single live three yields zero.
    #[inline]
    pub fn double_threes(&self) -> u8 {
        self.live_threes / 2
    }
}

/// Analyze every direction through `pos` for `player`.
///
/// As with [`run_pattern`], `pos` is treated as already holding `player`'s
/// stone; pass an [`Overlay`](crate::board::Overlay) or a board where the
/// cell is taken.
pub fn analyze_cell<V: CellView + ?Sized>(view: &V, pos: Pos, player: Stone) -> CellThreats {
    let mut threats = CellThreats::default();
    for dir in DIRECTIONS {
        let run = run_pattern(view, pos, dir, player);
        if run.is_five() {
            threats.fives += 1;
        }
        if run.is_live_four() {
            threats.live_fours += 1;
        }
        if run.is_four(false) {
            threats.fours += 1;
        }
        if run.is_live_three() {
            threats.live_threes += 1;
        }
        if run.is_live_two() {
            threats.live_twos += 1;
        }
    }
    threats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Overlay};

    fn board(rows: &[&str]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn test_empty_board_has_no_threats() {
        let b = Board::new(15).unwrap();
        let threats = analyze_cell(&b, Pos::new(7, 7), Stone::Black);
        assert_eq!(threats, CellThreats::default());
    }

    #[test]
    fn test_live_two_three_four() {
        let b = board(&[
            ".........",
            ".........",
            "..XXX....",
            ".........",
            "..X......",
            "..X......",
            ".........",
            ".........",
            ".........",
        ]);
        // (2,5) extends the horizontal three to four
        let t = analyze_cell(&Overlay::new(&b, Pos::new(2, 5), Stone::Black), Pos::new(2, 5), Stone::Black);
        assert_eq!(t.live_fours, 1);
        assert_eq!(t.fours, 1);
        assert_eq!(t.live_threes, 0);

        // (3,2) links (2,2) above with the pair below
        let t = analyze_cell(&Overlay::new(&b, Pos::new(3, 2), Stone::Black), Pos::new(3, 2), Stone::Black);
        assert_eq!(t.live_fours, 1, "(2,2),(3,2),(4,2),(5,2) vertical");

        // (6,2) extends the vertical pair into a three
        let t = analyze_cell(&Overlay::new(&b, Pos::new(6, 2), Stone::Black), Pos::new(6, 2), Stone::Black);
        assert_eq!(t.live_threes, 1);
        assert_eq!(t.double_threes(), 0);
    }

    #[test]
    fn test_double_three_counting() {
        // Pivot (4,4) completes a horizontal and a vertical three
        let b = board(&[
            ".........",
            ".........",
            "....X....",
            "....X....",
            "..XX.....",
            ".........",
            ".........",
            ".........",
            ".........",
        ]);
        let view = Overlay::new(&b, Pos::new(4, 4), Stone::Black);
        let t = analyze_cell(&view, Pos::new(4, 4), Stone::Black);
        assert_eq!(t.live_threes, 2);
        assert_eq!(t.double_threes(), 1);
    }

    #[test]
    fn test_blocked_four_counts_only_without_open_requirement() {
        let b = board(&[
            "OXXX.....",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            "........O",
        ]);
        let view = Overlay::new(&b, Pos::new(0, 4), Stone::Black);
        assert_eq!(analyze_cell(&view, Pos::new(0, 4), Stone::Black).fours, 1);
        // (0,5) is empty so the four is still extendable on one side
        assert_eq!(analyze_cell(&view, Pos::new(0, 4), Stone::Black).live_fours, 1);

        let b = board(&[
            "OXXX.O...",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
        ]);
        let view = Overlay::new(&b, Pos::new(0, 4), Stone::Black);
        assert_eq!(analyze_cell(&view, Pos::new(0, 4), Stone::Black).fours, 1);
        assert_eq!(analyze_cell(&view, Pos::new(0, 4), Stone::Black).live_fours, 0);
    }

    #[test]
    fn test_five_is_win() {
        let b = board(&[
            ".........",
            ".OOOO....",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
        ]);
        assert!(analyze_cell(&b, Pos::new(1, 5), Stone::White).is_win());
        assert!(analyze_cell(&b, Pos::new(1, 0), Stone::White).is_win());
        assert!(!analyze_cell(&b, Pos::new(1, 6), Stone::White).is_win());
        assert!(!analyze_cell(&b, Pos::new(1, 5), Stone::Black).is_win());
    }
}
