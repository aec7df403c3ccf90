//! Layerpaint - Layered Paint Canvas
//!
//! Every cell of a grid accumulates layers (named colour transforms) and
//! reports a composed colour on demand. Painting is recorded as actions
//! that can be undone, redone, or replayed against a fresh grid.
//!
//! # Architecture
//!
//! - `layers`: the fixed catalogue of nine colour transforms
//! - `store`: per-cell layer stores (`SET`, `ADD`, `SEQUENCE` styles)
//! - `grid`: an `x * y` array of independent stores of one style
//! - `history`: paint actions, undo/redo tracking and replay

pub mod bounded;
pub mod cli;
pub mod config;
pub mod error;
pub mod grid;
pub mod history;
pub mod layers;
pub mod store;

pub use config::CanvasConfig;
pub use error::{PaintError, Result};
pub use grid::Grid;
pub use history::{PaintAction, PaintStep, ReplayTracker, UndoTracker};
pub use layers::{Color, Layer};
pub use store::{CellStore, DrawStyle, LayerStore};
