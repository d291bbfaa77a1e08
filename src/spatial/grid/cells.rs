use super::*;
use crate::domain::Position;

impl<T> Grid<T> {
    /// Overwrite one cell. Returns false (and leaves the grid alone) when `pos` is invalid.
    pub fn set(&mut self, pos: Position, value: T) -> bool {
        let Some((row, col)) = self.index(pos) else {
            return false;
        };
        crate::cell!(self.rows, [row, col] = value);
        true
    }

    /// Reset one cell to `default`
    pub fn clear(&mut self, pos: Position, default: T) -> bool {
        self.set(pos, default)
    }

    /// Exchange two cells. Both positions must be valid, otherwise nothing moves.
    pub fn swap(&mut self, from: Position, to: Position) -> bool {
        let (Some((r1, c1)), Some((r2, c2))) = (self.index(from), self.index(to)) else {
            return false;
        };

        if r1 == r2 {
            self.rows[r1].swap(c1, c2);
            return true;
        }

        // Split so both rows can be borrowed mutably at once
        let (lo, hi) = (r1.min(r2), r1.max(r2));
        let (head, tail) = self.rows.split_at_mut(hi);
        let (lo_col, hi_col) = if r1 < r2 { (c1, c2) } else { (c2, c1) };
        std::mem::swap(&mut head[lo][lo_col], &mut tail[0][hi_col]);
        true
    }
}
