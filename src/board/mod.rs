//! Board representation for Wuziqi

pub mod bitboard;
pub mod board;
pub mod line;
pub mod overlay;


// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;
pub use line::{adjacent_run, run_pattern, Direction, RunPattern, DIRECTIONS};
pub use overlay::Overlay;

/// Default board size (15x15 intersections)
pub const DEFAULT_BOARD_SIZE: usize = 15;
/// Smallest board on which five-in-a-row is possible
pub const MIN_BOARD_SIZE: usize = 5;
pub const MAX_BOARD_SIZE: usize = 19;

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Diagram character: `X` black, `O` white, `.` empty
    pub fn symbol(self) -> char {
        match self {
            Stone::Black => 'X',
            Stone::White => 'O',
            Stone::Empty => '.',
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Position `steps` cells away along `(dr, dc)`, as signed coordinates.
    /// The result may lie outside the board.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, steps: i32) -> (i32, i32) {
        (
            i32::from(self.row) + dr * steps,
            i32::from(self.col) + dc * steps,
        )
    }

    /// Manhattan distance between two positions
    #[inline]
    pub fn manhattan(self, other: Pos) -> u32 {
        u32::from(self.row.abs_diff(other.row)) + u32::from(self.col.abs_diff(other.col))
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Row-major order, the order in which the scorer scans candidates
impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

/// Read-only access to cell states.
///
/// Implemented by [`Board`] and by [`Overlay`], so the analyzer and the win
/// predicate work the same on the real board and on a hypothetical placement.
pub trait CellView {
    /// Side length of the square board
    fn size(&self) -> usize;

    /// Stone at an in-bounds position
    fn get(&self, pos: Pos) -> Stone;

    /// Stone at signed coordinates; `None` when off the board
    #[inline]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn stone_at(&self, row: i32, col: i32) -> Option<Stone> {
        let size = self.size() as i32;
        if row < 0 || row >= size || col < 0 || col >= size {
            return None;
        }
        Some(self.get(Pos::new(row as u8, col as u8)))
    }
}
