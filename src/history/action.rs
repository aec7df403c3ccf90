//! Paint actions
//!
//! A closed set of reversible commands. Each variant carries everything
//! needed to compute both its forward and inverse effect on a grid, so
//! actions can be stored, serialized and replayed.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::grid::Grid;
use crate::layers::Layer;
use crate::store::LayerStore;

/// What a single step does to its cell when applied forward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Apply,
    Erase,
}

/// One layer operation on one cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaintStep {
    pub x: usize,
    pub y: usize,
    pub layer: Layer,
    pub kind: StepKind,
}

impl PaintStep {
    pub fn apply(x: usize, y: usize, layer: Layer) -> Self {
        Self {
            x,
            y,
            layer,
            kind: StepKind::Apply,
        }
    }

    pub fn erase(x: usize, y: usize, layer: Layer) -> Self {
        Self {
            x,
            y,
            layer,
            kind: StepKind::Erase,
        }
    }

    fn run(&self, grid: &mut Grid, kind: StepKind) -> Result<()> {
        let cell = grid.cell_mut(self.x, self.y)?;
        match kind {
            StepKind::Apply => cell.add(self.layer)?,
            StepKind::Erase => cell.erase(self.layer)?,
        };
        Ok(())
    }

    fn redo_apply(&self, grid: &mut Grid) -> Result<()> {
        self.run(grid, self.kind)
    }

    fn undo_apply(&self, grid: &mut Grid) -> Result<()> {
        let inverse = match self.kind {
            StepKind::Apply => StepKind::Erase,
            StepKind::Erase => StepKind::Apply,
        };
        self.run(grid, inverse)
    }
}

/// A replayable, undoable unit of work
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PaintAction {
    /// Brush strokes: an ordered list of per-cell steps
    Draw { steps: Vec<PaintStep> },

    /// The grid-wide special effect
    Special,

    /// Several actions treated as one
    Composite { actions: Vec<PaintAction> },
}

impl PaintAction {
    pub fn draw(steps: Vec<PaintStep>) -> Self {
        PaintAction::Draw { steps }
    }

    pub fn special() -> Self {
        PaintAction::Special
    }

    pub fn composite(actions: Vec<PaintAction>) -> Self {
        PaintAction::Composite { actions }
    }

    pub fn is_special(&self) -> bool {
        matches!(self, PaintAction::Special)
    }

    /// Fail with `OutOfBounds` if any step, nested ones included, targets a
    /// cell outside `grid`
    pub fn check_bounds(&self, grid: &Grid) -> Result<()> {
        match self {
            PaintAction::Draw { steps } => {
                for step in steps {
                    grid.cell(step.x, step.y)?;
                }
            }
            PaintAction::Special => {}
            PaintAction::Composite { actions } => {
                for action in actions {
                    action.check_bounds(grid)?;
                }
            }
        }
        Ok(())
    }

    /// Apply the action's forward effect
    ///
    /// Coordinates are checked before any cell changes, so an out-of-bounds
    /// step leaves the grid untouched. A store error part way through (an
    /// `ADD` cell at capacity) leaves the earlier steps applied.
    pub fn redo_apply(&self, grid: &mut Grid) -> Result<()> {
        self.check_bounds(grid)?;
        self.forward(grid)
    }

    /// Apply the action's inverse effect
    ///
    /// Steps are reversed last to first. The special effect is its own
    /// inverse here; that holds for `SET` and `ADD` grids but not for
    /// `SEQUENCE`, whose special discards a layer. Failures behave as in
    /// [`PaintAction::redo_apply`].
    pub fn undo_apply(&self, grid: &mut Grid) -> Result<()> {
        self.check_bounds(grid)?;
        self.inverse(grid)
    }

    fn forward(&self, grid: &mut Grid) -> Result<()> {
        match self {
            PaintAction::Draw { steps } => {
                for step in steps {
                    step.redo_apply(grid)?;
                }
            }
            PaintAction::Special => grid.special_all(),
            PaintAction::Composite { actions } => {
                for action in actions {
                    action.forward(grid)?;
                }
            }
        }
        Ok(())
    }

    fn inverse(&self, grid: &mut Grid) -> Result<()> {
        match self {
            PaintAction::Draw { steps } => {
                for step in steps.iter().rev() {
                    step.undo_apply(grid)?;
                }
            }
            PaintAction::Special => grid.special_all(),
            PaintAction::Composite { actions } => {
                for action in actions.iter().rev() {
                    action.inverse(grid)?;
                }
            }
        }
        Ok(())
    }
}
