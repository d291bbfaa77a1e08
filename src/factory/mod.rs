//! Grid factory - private copy in, fresh snapshots out
//!
//! `make_grid(source)` builds (or deep-copies) a grid and returns an
//! `Applier` that owns it. Each `apply` call mutates only that private copy
//! and hands back a new snapshot, so neither the caller's matrix nor any
//! earlier snapshot ever changes.
//!
//! Nothing here fails: bad dimensions give an empty grid, bad positions
//! and unknown actions leave the copy as it was.

use serde::de::DeserializeOwned;

use crate::domain::{Action, GridSource};
use crate::grid::Grid;

#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
pub mod facade;

/// Construction-time settings
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig<T> {
    /// Fill value for new grids and the value `Clear` resets to
    pub default_value: T,
}

impl<T> GridConfig<T> {
    pub fn with_default_value(default_value: T) -> Self {
        Self { default_value }
    }
}

impl<T: Default> Default for GridConfig<T> {
    fn default() -> Self {
        Self { default_value: T::default() }
    }
}

/// Handle returned by the factory; owns one grid copy
#[derive(Clone, Debug)]
pub struct Applier<T> {
    grid: Grid<T>,
    config: GridConfig<T>,
}

impl<T: Clone> Applier<T> {
    pub fn new(source: GridSource<T>, config: GridConfig<T>) -> Self {
        init::create_applier(source, config)
    }

    pub fn default_value(&self) -> &T {
        settings::default_value(self)
    }

    /// Change what later `Clear` actions reset to. Existing cells keep their values.
    pub fn set_default_value(&mut self, value: T) {
        settings::set_default_value(self, value);
    }

    /// Apply at most one action to the private copy and return a snapshot of it.
    ///
    /// `None` and `Action::NoOp` return the copy untouched. Repeated calls
    /// build on each other: swapping the same pair twice restores the grid.
    pub fn apply(&mut self, action: Option<Action<T>>) -> Grid<T> {
        commands::apply(self, action)
    }

    /// Borrow the current state without snapshotting
    pub fn current(&self) -> &Grid<T> {
        &self.grid
    }

    pub fn into_grid(self) -> Grid<T> {
        self.grid
    }
}

impl<T: Clone + DeserializeOwned> Applier<T> {
    /// `apply` for JSON-encoded actions. Malformed JSON behaves like no action.
    pub fn apply_json(&mut self, json: Option<&str>) -> Grid<T> {
        commands::apply_json(self, json)
    }
}

/// Build an applier using `T::default()` as the default value
pub fn make_grid<T: Clone + Default>(source: impl Into<GridSource<T>>) -> Applier<T> {
    Applier::new(source.into(), GridConfig::default())
}

pub fn make_grid_with<T: Clone>(source: impl Into<GridSource<T>>, config: GridConfig<T>) -> Applier<T> {
    Applier::new(source.into(), config)
}

/// Build an applier from a JSON source (`null`, `{width, height}` or a matrix).
/// Anything unparseable yields an empty grid.
pub fn make_grid_from_json<T: Clone + DeserializeOwned>(
    json: Option<&str>,
    config: GridConfig<T>,
) -> Applier<T> {
    init::create_applier_from_json(json, config)
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
