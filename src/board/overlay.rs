//! Single-cell hypothetical placement over an immutable board

use super::{Board, CellView, Pos, Stone};

/// A board with one extra stone laid on top.
///
/// Lookups check the overlay cell before falling back to the base board, so
/// scoring a candidate never mutates the caller's board and nothing has to
/// be undone afterwards.
#[derive(Debug, Clone, Copy)]
pub struct Overlay<'a> {
    base: &'a Board,
    pos: Pos,
    stone: Stone,
}

impl<'a> Overlay<'a> {
    #[inline]
    pub fn new(base: &'a Board, pos: Pos, stone: Stone) -> Self {
        Self { base, pos, stone }
    }
}

impl CellView for Overlay<'_> {
    #[inline]
    fn size(&self) -> usize {
        self.base.size()
    }

    #[inline]
    fn get(&self, pos: Pos) -> Stone {
        if pos == self.pos {
            self.stone
        } else {
            self.base.get(pos)
        }
    }
}
