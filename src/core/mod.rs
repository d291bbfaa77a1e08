//! Core utilities shared by every layer

// Macros first so `cell!` is in scope for the grid modules
#[macro_use]
pub mod utils;
pub mod logging;
