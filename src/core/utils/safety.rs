//! Zero-Cost Cell Access Macros
//!
//! Row/column access for `Vec<Vec<T>>` storage once a position has been
//! validated against the grid:
//!
//! In Debug mode: Normal bounds-checked access (panics with useful errors)
//! In Release mode: Unsafe unchecked access (zero overhead)
//!
//! Usage:
//! ```rust
//! use immutable_grid::cell;
//!
//! let mut rows = vec![vec![1, 2], vec![3, 4]];
//! // Read: cell!(rows, [row, col])
//! let val = *cell!(rows, [1, 0]);
//! assert_eq!(val, 3);
//!
//! // Write: cell!(rows, [row, col] = value)
//! cell!(rows, [0, 1] = 7);
//! assert_eq!(rows[0][1], 7);
//! ```

/// Zero-cost bounds checking for nested rows
///
/// - Debug: Uses normal indexing with bounds checks
/// - Release: Uses get_unchecked/get_unchecked_mut on both levels
///
/// Callers must have validated `(row, col)` first (see `Grid::index`).
#[macro_export]
macro_rules! cell {
    // Read pattern: cell!(rows, [row, col])
    ($rows:expr, [$row:expr, $col:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$rows[$row][$col]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $rows.get_unchecked($row).get_unchecked($col) }
        }
    }};

    // Write pattern: cell!(rows, [row, col] = value)
    ($rows:expr, [$row:expr, $col:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $rows[$row][$col] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { *$rows.get_unchecked_mut($row).get_unchecked_mut($col) = $val; }
        }
    }};
}
