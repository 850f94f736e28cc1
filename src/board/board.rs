//! Board structure backed by one bitboard per color

use std::fmt;

use super::bitboard::Bitboard;
use super::{CellView, Pos, Stone, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::BoardError;

/// Square game board.
///
/// The board is owned by the game collaborator. The engine only ever reads
/// it; hypothetical placements go through [`Overlay`](super::Overlay).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Black stones bitboard
    pub black: Bitboard,
    /// White stones bitboard
    pub white: Bitboard,
}

impl Board {
    /// Create an empty `size`×`size` board
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(BoardError::InvalidSize {
                size,
                min: MIN_BOARD_SIZE,
                max: MAX_BOARD_SIZE,
            });
        }
        let cells = size * size;
        Ok(Self {
            size,
            black: Bitboard::with_cells(cells),
            white: Bitboard::with_cells(cells),
        })
    }

    /// Build a board from a text diagram, one string per row.
    ///
    /// `X`/`B` is black, `O`/`W` is white, `.`/`+`/`_` is empty.
    /// Whitespace inside a row is ignored.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, BoardError> {
        let mut board = Self::new(rows.len())?;
        for (r, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line
                .as_ref()
                .chars()
                .filter(|ch| !ch.is_whitespace())
                .collect();
            if cells.len() != board.size {
                return Err(BoardError::RowLength {
                    row: r,
                    expected: board.size,
                    found: cells.len(),
                });
            }
            for (c, ch) in cells.into_iter().enumerate() {
                let stone = match ch {
                    'X' | 'x' | 'B' | 'b' => Stone::Black,
                    'O' | 'o' | 'W' | 'w' => Stone::White,
                    '.' | '+' | '_' => continue,
                    other => return Err(BoardError::UnknownSymbol { symbol: other, row: r }),
                };
                #[allow(clippy::cast_possible_truncation)]
                board.place_stone(Pos::new(r as u8, c as u8), stone);
            }
        }
        Ok(board)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Center intersection (rounded down for even sizes)
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub fn center(&self) -> Pos {
        let c = (self.size / 2) as u8;
        Pos::new(c, c)
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        usize::from(pos.row) < self.size && usize::from(pos.col) < self.size
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        usize::from(pos.row) * self.size + usize::from(pos.col)
    }

    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn pos_of(&self, idx: usize) -> Pos {
        Pos::new((idx / self.size) as u8, (idx % self.size) as u8)
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        let idx = self.index(pos);
        if self.black.get(idx) {
            Stone::Black
        } else if self.white.get(idx) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        let idx = self.index(pos);
        !self.black.get(idx) && !self.white.get(idx)
    }

    /// Place a stone without any validation; overwrites nothing of the other color
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        let idx = self.index(pos);
        match stone {
            Stone::Black => self.black.set(idx),
            Stone::White => self.white.set(idx),
            Stone::Empty => {}
        }
    }

    /// Place a stone after checking bounds and occupancy
    pub fn try_place(&mut self, pos: Pos, stone: Stone) -> Result<(), BoardError> {
        if !self.contains(pos) {
            return Err(BoardError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                size: self.size,
            });
        }
        if !self.is_empty(pos) {
            return Err(BoardError::Occupied {
                row: pos.row,
                col: pos.col,
            });
        }
        self.place_stone(pos, stone);
        Ok(())
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::Black => Some(&self.black),
            Stone::White => Some(&self.white),
            Stone::Empty => None,
        }
    }

    /// Positions of every stone of a color, row-major
    pub fn positions(&self, stone: Stone) -> impl Iterator<Item = Pos> + '_ {
        self.stones(stone)
            .into_iter()
            .flat_map(Bitboard::iter_ones)
            .map(move |idx| self.pos_of(idx))
    }

    /// Empty positions, row-major
    pub fn empty_positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.size * self.size)
            .filter(move |&idx| !self.black.get(idx) && !self.white.get(idx))
            .map(move |idx| self.pos_of(idx))
    }

    /// Number of stones of one color
    #[inline]
    pub fn count(&self, stone: Stone) -> u32 {
        self.stones(stone).map_or(0, Bitboard::count)
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Number of empty cells
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub fn empty_count(&self) -> u32 {
        (self.size * self.size) as u32 - self.stone_count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// No empty cell left (a draw unless someone already won)
    #[inline]
    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }
}

impl CellView for Board {
    #[inline]
    fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn get(&self, pos: Pos) -> Stone {
        Board::get(self, pos)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..self.size {
            write!(f, "{c:2} ")?;
        }
        writeln!(f)?;
        for r in 0..self.size {
            write!(f, "{r:2} ")?;
            for c in 0..self.size {
                #[allow(clippy::cast_possible_truncation)]
                let stone = self.get(Pos::new(r as u8, c as u8));
                write!(f, " {} ", stone.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
