//! Block grid, block kinds, and tint palette shared by the generators.
#![forbid(unsafe_code)]

pub mod grid;
pub mod palette;
pub mod types;

pub use grid::{GridPos, align_down, align_down_f, columns};
pub use palette::Rgb;
pub use types::{Block, BlockKind, Layer};
