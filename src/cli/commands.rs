//! CLI Command Implementations

use std::path::Path;

use log::info;

use crate::config::CanvasConfig;
use crate::error::{PaintError, Result};
use crate::grid::Grid;
use crate::history::{PaintAction, PaintStep, ReplayTracker};
use crate::layers::{by_name, Color, LAYERS};
use crate::store::DrawStyle;

/// Overrides applied on top of a loaded configuration.
#[derive(Debug, Default)]
pub struct ReplayOptions<'a> {
    pub config: Option<&'a Path>,
    pub style: Option<DrawStyle>,
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub timestamp: f64,
}

/// Print the layer catalogue.
pub fn list_layers() -> Result<()> {
    println!("Known layers:");
    for layer in LAYERS.iter() {
        println!("  {}: {}", layer.index(), layer.name());
    }
    Ok(())
}

/// Load the configuration named by `options` and apply its overrides.
pub fn load_config(options: &ReplayOptions<'_>) -> Result<CanvasConfig> {
    let mut config = match options.config {
        Some(path) => CanvasConfig::load(path)?,
        None => CanvasConfig::default(),
    };
    if let Some(style) = options.style {
        config.style = style;
    }
    if let Some(width) = options.width {
        config.width = width;
    }
    if let Some(height) = options.height {
        config.height = height;
    }
    config.validate()?;
    Ok(config)
}

/// Build the grid described by `options`.
pub fn build_grid(options: &ReplayOptions<'_>) -> Result<Grid> {
    Grid::from_config(&load_config(options)?)
}

/// Play a saved replay script and print the resulting colours.
pub fn replay(script: &Path, options: &ReplayOptions<'_>) -> Result<()> {
    info!("Replaying script: {}", script.display());

    let config = load_config(options)?;
    let mut grid = Grid::from_config(&config)?;
    let mut tracker = ReplayTracker::load_with_capacity(script, config.replay_capacity)?;
    tracker.start_replay();
    let played = tracker.play_all(&mut grid)?;

    println!(
        "Replayed {} actions on a {}x{} {} grid",
        played,
        grid.width(),
        grid.height(),
        grid.style()
    );
    for row in grid.render(Color::BLACK, options.timestamp) {
        let line: Vec<String> = row.iter().map(Color::to_string).collect();
        println!("{}", line.join(" "));
    }

    Ok(())
}

/// Write a demo script: a special effect, a red stroke, then the stroke undone.
pub fn record_demo(script: &Path) -> Result<()> {
    info!("Writing demo script: {}", script.display());

    let red = by_name("red").ok_or_else(|| PaintError::UnknownLayer {
        name: "red".to_string(),
    })?;
    let stroke = PaintAction::draw(vec![
        PaintStep::apply(0, 0, red),
        PaintStep::apply(0, 1, red),
        PaintStep::apply(1, 1, red),
    ]);

    let mut tracker = ReplayTracker::new();
    tracker.add_action(PaintAction::special(), false);
    tracker.add_action(stroke.clone(), false);
    tracker.add_action(stroke, true);
    tracker.save(script)?;

    println!("Demo script written: {} ({} actions)", script.display(), tracker.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_build_grid_overrides() {
        let options = ReplayOptions {
            style: Some(DrawStyle::Accumulate),
            width: Some(3),
            ..Default::default()
        };
        let grid = build_grid(&options).unwrap();
        assert_eq!(grid.style(), DrawStyle::Accumulate);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 10);
    }

    #[test]
    fn test_build_grid_rejects_zero_width() {
        let options = ReplayOptions {
            width: Some(0),
            ..Default::default()
        };
        assert!(build_grid(&options).is_err());
    }

    #[test]
    fn test_record_then_replay_demo() {
        let temp_dir = TempDir::new().unwrap();
        let script = temp_dir.path().join("demo.json");
        record_demo(&script).unwrap();

        let tracker = ReplayTracker::load(&script).unwrap();
        assert_eq!(tracker.len(), 3);

        let options = ReplayOptions {
            width: Some(2),
            height: Some(2),
            ..Default::default()
        };
        replay(&script, &options).unwrap();
    }

    #[test]
    fn test_replay_honours_configured_capacity() {
        let temp_dir = TempDir::new().unwrap();
        let script = temp_dir.path().join("demo.json");
        let config_path = temp_dir.path().join("canvas.json");
        record_demo(&script).unwrap();
        std::fs::write(&config_path, r#"{"width": 2, "height": 2, "replay_capacity": 2}"#).unwrap();

        let options = ReplayOptions {
            config: Some(&config_path),
            ..Default::default()
        };
        assert_eq!(load_config(&options).unwrap().replay_capacity, 2);
        let err = replay(&script, &options).unwrap_err();
        assert_eq!(err.error_code(), "CAPACITY_EXCEEDED");
    }
}
