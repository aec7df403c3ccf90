//! Paint grid
//!
//! An `x * y` array of independently owned cell stores, all of one style.

use log::debug;

use crate::config::CanvasConfig;
use crate::error::{PaintError, Result};
use crate::layers::Color;
use crate::store::{CellStore, DrawStyle, LayerStore, DEFAULT_ACCUMULATE_CAPACITY};

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    style: DrawStyle,
    width: usize,
    height: usize,
    /// Row-major: cell `(x, y)` lives at `x * height + y`
    cells: Vec<CellStore>,
}

impl Grid {
    /// Create a grid where every cell gets its own empty store of `style`
    ///
    /// # Errors
    /// `InvalidConfiguration` if either dimension is zero or the cell count
    /// overflows `usize`
    pub fn new(style: DrawStyle, width: usize, height: usize) -> Result<Self> {
        Self::with_capacity(style, width, height, DEFAULT_ACCUMULATE_CAPACITY)
    }

    /// Create a grid from a validated configuration
    pub fn from_config(config: &CanvasConfig) -> Result<Self> {
        config.validate()?;
        Self::with_capacity(
            config.style,
            config.width,
            config.height,
            config.accumulate_capacity,
        )
    }

    /// Like [`Grid::new`], with an explicit per-cell capacity for `ADD` stores
    pub fn with_capacity(
        style: DrawStyle,
        width: usize,
        height: usize,
        accumulate_capacity: usize,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(PaintError::InvalidConfiguration {
                reason: format!("grid dimensions must be positive, got {}x{}", width, height),
            });
        }

        let count = width
            .checked_mul(height)
            .ok_or_else(|| PaintError::InvalidConfiguration {
                reason: format!("grid of {}x{} cells is too large", width, height),
            })?;
        let cells = (0..count)
            .map(|_| CellStore::new(style, accumulate_capacity))
            .collect();
        debug!("Created {}x{} grid with {} stores", width, height, style);

        Ok(Self {
            style,
            width,
            height,
            cells,
        })
    }

    /// Create a grid from a style token such as `"SET"`
    pub fn from_token(token: &str, width: usize, height: usize) -> Result<Self> {
        Self::new(token.parse()?, width, height)
    }

    pub fn style(&self) -> DrawStyle {
        self.style
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(PaintError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(x * self.height + y)
    }

    /// Bounds-checked access to a cell's store
    pub fn cell(&self, x: usize, y: usize) -> Result<&CellStore> {
        let index = self.index(x, y)?;
        Ok(&self.cells[index])
    }

    /// Bounds-checked mutable access to a cell's store
    pub fn cell_mut(&mut self, x: usize, y: usize) -> Result<&mut CellStore> {
        let index = self.index(x, y)?;
        Ok(&mut self.cells[index])
    }

    /// Trigger the special effect on every cell, in row-major order
    pub fn special_all(&mut self) {
        debug!("Special effect on all {} cells", self.cells.len());
        for cell in &mut self.cells {
            cell.special();
        }
    }

    /// Colour shown at `(x, y)` for a base colour and timestamp
    pub fn color_at(&self, x: usize, y: usize, start: Color, timestamp: f64) -> Result<Color> {
        Ok(self.cell(x, y)?.get_color(start, timestamp, x, y))
    }

    /// Colours of every cell, one row per `x`
    pub fn render(&self, start: Color, timestamp: f64) -> Vec<Vec<Color>> {
        self.cells
            .chunks(self.height)
            .enumerate()
            .map(|(x, row)| {
                row.iter()
                    .enumerate()
                    .map(|(y, cell)| cell.get_color(start, timestamp, x, y))
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::by_name;

    #[test]
    fn test_new_grid() {
        let grid = Grid::new(DrawStyle::Accumulate, 5, 4).unwrap();
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 4);
        assert_eq!(grid.style(), DrawStyle::Accumulate);
        assert!(grid.cell(4, 3).is_ok());
    }

    #[test]
    fn test_from_token() {
        let grid = Grid::from_token("SEQUENCE", 2, 2).unwrap();
        assert_eq!(grid.style(), DrawStyle::ToggleSet);

        let err = Grid::from_token("PAINT", 2, 2).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIGURATION");
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(Grid::new(DrawStyle::Replace, 0, 3).is_err());
        assert!(Grid::new(DrawStyle::Replace, 3, 0).is_err());
    }

    #[test]
    fn test_oversized_grid_rejected() {
        let err = Grid::new(DrawStyle::Replace, usize::MAX, 2).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIGURATION");
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = Grid::new(DrawStyle::Replace, 3, 2).unwrap();
        match grid.cell(3, 0) {
            Err(PaintError::OutOfBounds { x, y, width, height }) => {
                assert_eq!((x, y, width, height), (3, 0, 3, 2));
            }
            other => panic!("expected OutOfBounds, got {:?}", other),
        }
        assert!(grid.cell_mut(0, 2).is_err());
    }

    #[test]
    fn test_cells_are_independent() {
        for style in DrawStyle::ALL {
            let mut grid = Grid::new(style, 2, 2).unwrap();
            let pristine = grid.cell(1, 1).unwrap().clone();

            grid.cell_mut(0, 0)
                .unwrap()
                .add(by_name("red").unwrap())
                .unwrap();

            assert_eq!(grid.cell(1, 1).unwrap(), &pristine, "style {}", style);
            assert_ne!(grid.cell(0, 0).unwrap(), &pristine, "style {}", style);
        }
    }

    #[test]
    fn test_special_all_touches_every_cell() {
        let mut grid = Grid::new(DrawStyle::Replace, 2, 3).unwrap();
        grid.special_all();

        let start = Color::new(0, 0, 0);
        for row in grid.render(start, 0.0) {
            for color in row {
                assert_eq!(color, Color::WHITE);
            }
        }
    }

    #[test]
    fn test_render_shape_and_coordinates() {
        let mut grid = Grid::new(DrawStyle::Replace, 3, 2).unwrap();
        grid.cell_mut(2, 1)
            .unwrap()
            .add(by_name("blue").unwrap())
            .unwrap();

        let rendered = grid.render(Color::BLACK, 0.0);
        assert_eq!(rendered.len(), 3);
        assert!(rendered.iter().all(|row| row.len() == 2));
        assert_eq!(rendered[2][1], Color::new(0, 0, 255));
        assert_eq!(rendered[1][1], Color::BLACK);
        assert_eq!(grid.color_at(2, 1, Color::BLACK, 0.0).unwrap(), Color::new(0, 0, 255));
    }

    #[test]
    fn test_from_config_uses_capacity() {
        let mut config = CanvasConfig::new(DrawStyle::Accumulate, 1, 1);
        config.accumulate_capacity = 1;
        let mut grid = Grid::from_config(&config).unwrap();

        let red = by_name("red").unwrap();
        grid.cell_mut(0, 0).unwrap().add(red).unwrap();
        let err = grid.cell_mut(0, 0).unwrap().add(red).unwrap_err();
        assert_eq!(err.error_code(), "CAPACITY_EXCEEDED");
    }
}
