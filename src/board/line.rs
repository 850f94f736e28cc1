//! Directional run scanning
//!
//! A run is the unbroken sequence of one player's stones through a pivot
//! cell along one line orientation. Every pattern predicate in the crate
//! (win detection, threat analysis, positional scoring) is derived from
//! [`run_pattern`].

use super::{CellView, Pos, Stone};

/// One of the four line orientations, scanned in both senses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub dr: i32,
    pub dc: i32,
}

impl Direction {
    pub const HORIZONTAL: Direction = Direction { dr: 0, dc: 1 };
    pub const VERTICAL: Direction = Direction { dr: 1, dc: 0 };
    /// Top-left to bottom-right
    pub const DIAGONAL: Direction = Direction { dr: 1, dc: 1 };
    /// Top-right to bottom-left
    pub const ANTI_DIAGONAL: Direction = Direction { dr: 1, dc: -1 };
}

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [Direction; 4] = [
    Direction::HORIZONTAL,
    Direction::VERTICAL,
    Direction::DIAGONAL,
    Direction::ANTI_DIAGONAL,
];

/// Run through a pivot in one direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunPattern {
    /// Consecutive same-player stones, pivot included
    pub count: u32,
    /// Ends terminated by an in-bounds empty cell (0, 1 or 2)
    pub open_ends: u8,
}

impl RunPattern {
    /// At least one end can be extended
    #[inline]
    pub fn has_empty_ends(self) -> bool {
        self.open_ends > 0
    }

    #[inline]
    pub fn is_five(self) -> bool {
        self.count >= 5
    }

    #[inline]
    pub fn is_live_two(self) -> bool {
        self.count == 2 && self.has_empty_ends()
    }

    #[inline]
    pub fn is_live_three(self) -> bool {
        self.count == 3 && self.has_empty_ends()
    }

    #[inline]
    pub fn is_live_four(self) -> bool {
        self.count == 4 && self.has_empty_ends()
    }

    /// Four in a row; with `require_open` it must also be extendable
    #[inline]
    pub fn is_four(self, require_open: bool) -> bool {
        self.count == 4 && (!require_open || self.has_empty_ends())
    }
}

/// Scan the run through `pos` for `player` along `dir`.
///
/// The pivot always counts as one stone whatever the view holds there, so
/// callers ask about a cell the player has (hypothetically) just taken.
/// Each sense stops at the first cell that is not `player`; an empty cell
/// marks that end open, an opponent stone or the board edge leaves it closed.
pub fn run_pattern<V: CellView + ?Sized>(
    view: &V,
    pos: Pos,
    dir: Direction,
    player: Stone,
) -> RunPattern {
    let mut count = 1;
    let mut open_ends = 0;

    for sign in [1, -1] {
        let mut step = 1;
        loop {
            let (r, c) = pos.offset(dir.dr * sign, dir.dc * sign, step);
            match view.stone_at(r, c) {
                Some(s) if s == player => {
                    count += 1;
                    step += 1;
                }
                Some(Stone::Empty) => {
                    open_ends += 1;
                    break;
                }
                // Opponent stone or off the board
                _ => break,
            }
        }
    }

    RunPattern { count, open_ends }
}

/// Consecutive `stone`s adjacent to `pos` along `dir`, both senses, pivot excluded
pub fn adjacent_run<V: CellView + ?Sized>(view: &V, pos: Pos, dir: Direction, stone: Stone) -> u32 {
    let mut total = 0;
    for sign in [1, -1] {
        let mut step = 1;
        loop {
            let (r, c) = pos.offset(dir.dr * sign, dir.dc * sign, step);
            if view.stone_at(r, c) != Some(stone) {
                break;
            }
            total += 1;
            step += 1;
        }
    }
    total
}
