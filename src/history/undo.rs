//! Undo/Redo System
//!
//! Two bounded stacks of paint actions. Recording a new action invalidates
//! everything that could have been redone.

use std::fs;
use std::path::Path;

use log::{debug, warn};

use super::action::PaintAction;
use crate::bounded::BoundedStack;
use crate::config::{CanvasConfig, DEFAULT_HISTORY_CAPACITY};
use crate::error::{PaintError, Result};
use crate::grid::Grid;

/// File name for the history stack persistence.
const HISTORY_STACK_FILE: &str = "history_stack.json";

/// File name for the redo stack persistence.
const REDO_STACK_FILE: &str = "redo_stack.json";

/// Tracks undoable and redoable actions.
///
/// The tracker never owns a grid; one is passed in to each `undo`/`redo`.
#[derive(Debug, Clone, PartialEq)]
pub struct UndoTracker {
    /// Actions that can be undone, most recent on top.
    history: BoundedStack<PaintAction>,

    /// Actions that can be redone, most recently undone on top.
    redo: BoundedStack<PaintAction>,
}

impl Default for UndoTracker {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl UndoTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracker whose stacks each hold at most `capacity` actions
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            history: BoundedStack::new(capacity),
            redo: BoundedStack::new(capacity),
        }
    }

    /// Create a tracker sized by `history_capacity`
    pub fn from_config(config: &CanvasConfig) -> Self {
        Self::with_capacity(config.history_capacity)
    }

    /// Record a new action.
    ///
    /// When the history is full the action is dropped and nothing else
    /// changes. Otherwise the redo stack is cleared.
    pub fn add_action(&mut self, action: PaintAction) {
        if self.history.is_full() {
            warn!(
                "Undo history full ({} actions), dropping action",
                self.history.capacity()
            );
            return;
        }
        if self.history.push(action).is_ok() {
            self.redo.clear();
        }
    }

    /// Undo the most recent action, applying its inverse to `grid`.
    ///
    /// Returns `Ok(None)` when there is nothing to undo. If the inverse
    /// fails, or the redo stack has no room, the action stays on the
    /// history stack.
    pub fn undo(&mut self, grid: &mut Grid) -> Result<Option<PaintAction>> {
        let Some(action) = self.history.peek() else {
            debug!("Nothing to undo");
            return Ok(None);
        };
        if self.redo.is_full() {
            return Err(PaintError::CapacityExceeded {
                container: "redo stack",
                capacity: self.redo.capacity(),
            });
        }
        action.undo_apply(grid)?;

        let Some(action) = self.history.pop() else {
            return Ok(None);
        };
        self.redo.push(action.clone())?;
        debug!("Undone action ({} left)", self.history.len());
        Ok(Some(action))
    }

    /// Redo the most recently undone action, applying it to `grid`.
    ///
    /// Returns `Ok(None)` when there is nothing to redo. If the action
    /// fails, or the history stack has no room, it stays on the redo stack.
    pub fn redo(&mut self, grid: &mut Grid) -> Result<Option<PaintAction>> {
        let Some(action) = self.redo.peek() else {
            debug!("Nothing to redo");
            return Ok(None);
        };
        if self.history.is_full() {
            return Err(PaintError::CapacityExceeded {
                container: "history stack",
                capacity: self.history.capacity(),
            });
        }
        action.redo_apply(grid)?;

        let Some(action) = self.redo.pop() else {
            return Ok(None);
        };
        self.history.push(action.clone())?;
        debug!("Redone action ({} left)", self.redo.len());
        Ok(Some(action))
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.history.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo.len()
    }

    /// The action the next `undo` would reverse
    pub fn peek_undo(&self) -> Option<&PaintAction> {
        self.history.peek()
    }

    /// The action the next `redo` would reapply
    pub fn peek_redo(&self) -> Option<&PaintAction> {
        self.redo.peek()
    }

    /// Drop all undo and redo history
    pub fn clear(&mut self) {
        self.history.clear();
        self.redo.clear();
    }

    /// Load tracker state from a history directory.
    ///
    /// A missing file loads as an empty stack with the other stack's
    /// capacity, or the default when both are missing. Both stacks must
    /// share one capacity, and hold no more than it between them.
    pub fn load(history_dir: &Path) -> Result<Self> {
        let history = load_stack(&history_dir.join(HISTORY_STACK_FILE))?;
        let redo = load_stack(&history_dir.join(REDO_STACK_FILE))?;

        let capacity = history
            .as_ref()
            .or(redo.as_ref())
            .map_or(DEFAULT_HISTORY_CAPACITY, BoundedStack::capacity);
        let history = history.unwrap_or_else(|| BoundedStack::new(capacity));
        let redo = redo.unwrap_or_else(|| BoundedStack::new(capacity));

        if history.capacity() != redo.capacity() {
            return Err(PaintError::InvalidConfiguration {
                reason: format!(
                    "history capacity {} does not match redo capacity {}",
                    history.capacity(),
                    redo.capacity()
                ),
            });
        }
        if history.len() + redo.len() > capacity {
            return Err(PaintError::CapacityExceeded {
                container: "undo tracker",
                capacity,
            });
        }
        Ok(Self { history, redo })
    }

    /// Save tracker state to a history directory, creating it if needed.
    pub fn save(&self, history_dir: &Path) -> Result<()> {
        if !history_dir.exists() {
            fs::create_dir_all(history_dir).map_err(|e| PaintError::DirectoryCreate {
                path: history_dir.to_path_buf(),
                source: e,
            })?;
        }
        save_stack(&history_dir.join(HISTORY_STACK_FILE), &self.history)?;
        save_stack(&history_dir.join(REDO_STACK_FILE), &self.redo)?;
        Ok(())
    }
}

fn load_stack(path: &Path) -> Result<Option<BoundedStack<PaintAction>>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|e| PaintError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let stack: BoundedStack<PaintAction> = serde_json::from_str(&content)?;
    stack.validated().map(Some)
}

fn save_stack(path: &Path, stack: &BoundedStack<PaintAction>) -> Result<()> {
    let content = serde_json::to_string_pretty(stack)?;
    fs::write(path, content).map_err(|e| PaintError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
