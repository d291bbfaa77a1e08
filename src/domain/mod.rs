//! Domain values: where a grid comes from and what gets done to it

pub mod action;
pub mod position;
pub mod source;

pub use action::Action;
pub use position::Position;
pub use source::GridSource;
