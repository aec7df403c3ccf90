//! Canvas configuration
//!
//! Loaded from a JSON file; every field has a default so a partial file
//! (or none at all) is valid.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PaintError, Result};
use crate::store::{DrawStyle, DEFAULT_ACCUMULATE_CAPACITY};

/// Default grid width and height.
pub const DEFAULT_DIMENSION: usize = 10;

/// Default capacity of the undo, redo and replay containers.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Store variant used by every cell
    pub style: DrawStyle,
    pub width: usize,
    pub height: usize,
    /// Maximum layers per cell for the `ADD` style
    pub accumulate_capacity: usize,
    /// Capacity of each of the undo and redo stacks
    pub history_capacity: usize,
    pub replay_capacity: usize,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            style: DrawStyle::default(),
            width: DEFAULT_DIMENSION,
            height: DEFAULT_DIMENSION,
            accumulate_capacity: DEFAULT_ACCUMULATE_CAPACITY,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            replay_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl CanvasConfig {
    /// Config with the given style and dimensions, everything else default
    pub fn new(style: DrawStyle, width: usize, height: usize) -> Self {
        Self {
            style,
            width,
            height,
            ..Self::default()
        }
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| PaintError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: CanvasConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject zero dimensions and zero capacities
    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("width", self.width),
            ("height", self.height),
            ("accumulate_capacity", self.accumulate_capacity),
            ("history_capacity", self.history_capacity),
            ("replay_capacity", self.replay_capacity),
        ];
        for (field, value) in checks {
            if value == 0 {
                return Err(PaintError::InvalidConfiguration {
                    reason: format!("{} must be greater than zero", field),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = CanvasConfig::default();
        assert_eq!(config.style, DrawStyle::Replace);
        assert_eq!(config.accumulate_capacity, 2000);
        assert_eq!(config.history_capacity, 10_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"style": "SEQUENCE", "width": 4}}"#).unwrap();

        let config = CanvasConfig::load(file.path()).unwrap();
        assert_eq!(config.style, DrawStyle::ToggleSet);
        assert_eq!(config.width, 4);
        assert_eq!(config.height, DEFAULT_DIMENSION);
    }

    #[test]
    fn test_unknown_style_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"style": "STACK"}}"#).unwrap();

        let err = CanvasConfig::load(file.path()).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let config = CanvasConfig::new(DrawStyle::Accumulate, 0, 3);
        let err = config.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIGURATION");
    }

    #[test]
    fn test_missing_file() {
        let err = CanvasConfig::load(Path::new("/nonexistent/layerpaint.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_READ_ERROR");
    }
}
