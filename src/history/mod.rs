//! History Module
//!
//! Paint actions plus the two ways of re-running them against a grid:
//! undo/redo stacks and a replay script.

mod action;
mod replay;
mod undo;

pub use action::{PaintAction, PaintStep, StepKind};
pub use replay::{ReplayEntry, ReplayPhase, ReplayTracker};
pub use undo::UndoTracker;
