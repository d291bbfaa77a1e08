use serde::de::DeserializeOwned;

use crate::domain::GridSource;
use crate::grid::Grid;

use super::{Applier, GridConfig};

pub(super) fn create_applier<T: Clone>(source: GridSource<T>, config: GridConfig<T>) -> Applier<T> {
    let grid = build_grid(source, &config.default_value);
    Applier { grid, config }
}

pub(super) fn create_applier_from_json<T: Clone + DeserializeOwned>(
    json: Option<&str>,
    config: GridConfig<T>,
) -> Applier<T> {
    let source = match json {
        Some(json) => GridSource::from_json(json).unwrap_or_else(|err| {
            log::warn!("invalid grid source, falling back to empty grid: {}", err);
            GridSource::Empty
        }),
        None => GridSource::Empty,
    };
    create_applier(source, config)
}

fn build_grid<T: Clone>(source: GridSource<T>, default_value: &T) -> Grid<T> {
    match source {
        GridSource::Empty => Grid::empty(),
        GridSource::Dimensions { width, height } => match (positive(width), positive(height)) {
            (Some(w), Some(h)) => Grid::filled(w, h, default_value.clone()),
            _ => {
                log::debug!("rejected grid dimensions {}x{}, using empty grid", width, height);
                Grid::empty()
            }
        },
        // The source was moved in, so these rows already belong to nobody else
        GridSource::Matrix(rows) => {
            let grid = Grid::from(rows);
            if !grid.is_rectangular() {
                log::debug!("source matrix is ragged; columns are checked per row");
            }
            grid
        }
    }
}

#[inline]
fn positive(n: i64) -> Option<usize> {
    usize::try_from(n).ok().filter(|&n| n > 0)
}
