//! Grid - row-major 2D container with copy-on-construct semantics
//!
//! Storage is one `Vec` per row so that every produced grid owns fresh
//! row containers; cloning a grid never shares rows with its source.

use serde::Serialize;

mod indexing;
mod cells;

/// Rectangular grid of cells, indexed `(row, col)` from zero.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Grid<T> {
    rows: Vec<Vec<T>>,
}

impl<T> Grid<T> {
    /// Zero rows
    pub fn empty() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn rows(&self) -> &[Vec<T>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<T>> {
        self.rows
    }

    /// True when every row has the same length as the first
    pub fn is_rectangular(&self) -> bool {
        match self.rows.first() {
            Some(first) => self.rows.iter().all(|row| row.len() == first.len()),
            None => true,
        }
    }
}

impl<T: Clone> Grid<T> {
    /// `height` rows of `width` cells, each a clone of `fill`
    pub fn filled(width: usize, height: usize, fill: T) -> Self {
        Self {
            rows: vec![vec![fill; width]; height],
        }
    }

    /// Deep copy of `rows`: new row containers, same cell values
    pub fn from_rows(rows: &[Vec<T>]) -> Self {
        Self { rows: rows.to_vec() }
    }
}

impl<T: Serialize> Grid<T> {
    /// Plain array-of-arrays JSON
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(&self.rows).map_err(|e| e.to_string())
    }
}

impl<T> Default for Grid<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Vec<Vec<T>>> for Grid<T> {
    fn from(rows: Vec<Vec<T>>) -> Self {
        Self { rows }
    }
}

impl<T: PartialEq> PartialEq<Vec<Vec<T>>> for Grid<T> {
    fn eq(&self, other: &Vec<Vec<T>>) -> bool {
        &self.rows == other
    }
}
