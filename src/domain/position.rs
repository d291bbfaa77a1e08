use serde::{Deserialize, Serialize};

/// Cell address as `(row, col)`.
///
/// Signed on purpose: callers may hand in anything (`[-1, 0]` from JS),
/// validity is decided by the grid being addressed, not by the type.
/// On the wire a position is a two-element array `[row, col]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(i64, i64)", into = "(i64, i64)")]
pub struct Position {
    pub row: i64,
    pub col: i64,
}

impl Position {
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }
}

impl From<(i64, i64)> for Position {
    fn from((row, col): (i64, i64)) -> Self {
        Self { row, col }
    }
}

impl From<Position> for (i64, i64) {
    fn from(pos: Position) -> Self {
        (pos.row, pos.col)
    }
}

impl From<[i64; 2]> for Position {
    fn from([row, col]: [i64; 2]) -> Self {
        Self { row, col }
    }
}
