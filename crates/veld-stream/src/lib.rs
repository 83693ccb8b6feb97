//! Sliding-window streaming: materializes world columns around the tracked
//! entity and evicts what scrolled out, one cell per tick at most.
#![forbid(unsafe_code)]

pub mod scene;
pub mod streamer;
pub mod window;

pub use scene::{EntityId, NullScene, Scene};
pub use streamer::{StreamConfig, StreamConfigError, Streamer};
pub use window::VisibleRange;
