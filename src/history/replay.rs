//! Replay
//!
//! A FIFO script of actions, each flagged as forward or undo, played back
//! one entry at a time against a grid. Independent of undo/redo history.

use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::action::PaintAction;
use crate::bounded::BoundedQueue;
use crate::config::{CanvasConfig, DEFAULT_HISTORY_CAPACITY};
use crate::error::{PaintError, Result};
use crate::grid::Grid;

/// One scheduled action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayEntry {
    pub action: PaintAction,
    /// Play the action's inverse instead of its forward effect
    #[serde(default)]
    pub is_undo: bool,
}

/// Whether the tracker is still being filled or is playing back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplayPhase {
    #[default]
    Recording,
    Playback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReplayTracker {
    schedule: BoundedQueue<ReplayEntry>,
    phase: ReplayPhase,
}

impl Default for ReplayTracker {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl ReplayTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            schedule: BoundedQueue::new(capacity),
            phase: ReplayPhase::Recording,
        }
    }

    /// Create a tracker sized by `replay_capacity`
    pub fn from_config(config: &CanvasConfig) -> Self {
        Self::with_capacity(config.replay_capacity)
    }

    /// Mark the end of recording. Playback does not require it.
    pub fn start_replay(&mut self) {
        debug!("Starting replay of {} actions", self.schedule.len());
        self.phase = ReplayPhase::Playback;
    }

    pub fn phase(&self) -> ReplayPhase {
        self.phase
    }

    /// Schedule an action at the end of the script.
    ///
    /// A full schedule drops the action. Adding during playback is allowed
    /// but logged.
    pub fn add_action(&mut self, action: PaintAction, is_undo: bool) {
        if self.phase == ReplayPhase::Playback {
            warn!("Action added to a replay that has already started");
        }
        if self.schedule.is_full() {
            warn!(
                "Replay schedule full ({} actions), dropping action",
                self.schedule.capacity()
            );
            return;
        }
        if let Err(e) = self.schedule.append(ReplayEntry { action, is_undo }) {
            warn!("Failed to schedule action: {}", e);
        }
    }

    /// Play the next scheduled action against `grid`.
    ///
    /// Returns `Ok(true)` when there was nothing left to play, `Ok(false)`
    /// after playing one entry.
    pub fn play_next_action(&mut self, grid: &mut Grid) -> Result<bool> {
        if self.schedule.is_empty() {
            return Ok(true);
        }
        let entry = self.schedule.serve()?;
        if entry.is_undo {
            entry.action.undo_apply(grid)?;
        } else {
            entry.action.redo_apply(grid)?;
        }
        debug!(
            "Replayed {} action ({} remaining)",
            if entry.is_undo { "undo" } else { "forward" },
            self.schedule.len()
        );
        Ok(false)
    }

    /// Play every remaining entry; returns how many were played
    pub fn play_all(&mut self, grid: &mut Grid) -> Result<usize> {
        let mut played = 0;
        while !self.play_next_action(grid)? {
            played += 1;
        }
        Ok(played)
    }

    /// Scheduled entries from next to last
    pub fn entries(&self) -> impl Iterator<Item = &ReplayEntry> {
        self.schedule.iter()
    }

    pub fn len(&self) -> usize {
        self.schedule.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schedule.is_empty()
    }

    /// Load a replay script. The loaded tracker is in the recording phase.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| PaintError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let schedule: BoundedQueue<ReplayEntry> = serde_json::from_str(&content)?;
        Ok(Self {
            schedule: schedule.validated()?,
            phase: ReplayPhase::Recording,
        })
    }

    /// Load a replay script into a schedule of `capacity` entries, replacing
    /// the capacity saved with it.
    ///
    /// # Errors
    /// `CapacityExceeded` if the script is longer than `capacity`
    pub fn load_with_capacity(path: &Path, capacity: usize) -> Result<Self> {
        let tracker = Self::load(path)?;
        Ok(Self {
            schedule: tracker.schedule.resized(capacity)?,
            phase: tracker.phase,
        })
    }

    /// Save the remaining script to `path`
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| PaintError::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }
        let content = serde_json::to_string_pretty(&self.schedule)?;
        fs::write(path, content).map_err(|e| PaintError::FileWrite {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
