//! Immutable Grid - copy-on-apply 2D grids for Rust and WASM
//!
//! `make_grid(source)` takes nothing, `{width, height}` or an existing
//! matrix and returns an applier. The applier hands back a fresh copy of the
//! grid, optionally after one `Clear`, `Set` or `Swap`, without ever touching
//! the caller's matrix.
//!
//! Architecture:
//! - core/      - Cell access macros, console logger
//! - spatial/   - Grid container
//! - domain/    - Positions, actions, sources
//! - factory/   - Applier + JS facade

// Utils with safety macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod spatial;
pub mod domain;
pub mod factory;

// Compatibility re-exports
pub use spatial::grid;
pub use factory::facade;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the module: panic hook + console logger
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    if crate::core::logging::install(crate::core::logging::default_level()) {
        log::info!("immutable-grid {} initialized", version());
    }
}

/// Get crate version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::{Action, GridSource, Position};
pub use factory::{make_grid, make_grid_from_json, make_grid_with, Applier, GridConfig};
pub use factory::facade::GridApplier;
pub use grid::Grid;
