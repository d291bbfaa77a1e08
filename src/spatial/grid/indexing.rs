use super::*;
use crate::domain::Position;

impl<T> Grid<T> {
    // === Dimensions ===
    #[inline]
    pub fn height(&self) -> usize { self.rows.len() }

    /// Length of the first row (0 for an empty grid)
    #[inline]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    #[inline]
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    // === Index conversion ===

    /// Validated `(row, col)` for `pos`, or None when it falls outside the grid.
    /// Columns are checked against the addressed row itself.
    #[inline]
    pub fn index(&self, pos: Position) -> Option<(usize, usize)> {
        let row = usize::try_from(pos.row).ok()?;
        let col = usize::try_from(pos.col).ok()?;
        let len = self.rows.get(row)?.len();
        (col < len).then_some((row, col))
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    #[inline]
    pub fn get(&self, pos: Position) -> Option<&T> {
        let (row, col) = self.index(pos)?;
        Some(crate::cell!(self.rows, [row, col]))
    }
}
