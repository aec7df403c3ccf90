//! Replace store (`SET`)
//!
//! Holds at most one layer. `erase` clears whatever is held regardless of
//! the layer passed in; `special` toggles inversion of the output.

use super::LayerStore;
use crate::error::Result;
use crate::layers::{Color, Layer, INVERT};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplaceStore {
    current: Option<Layer>,
    inverted: bool,
}

impl ReplaceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The layer currently held, if any
    pub fn current(&self) -> Option<Layer> {
        self.current
    }

    pub fn is_inverted(&self) -> bool {
        self.inverted
    }
}

impl LayerStore for ReplaceStore {
    fn add(&mut self, layer: Layer) -> Result<bool> {
        if self.current == Some(layer) {
            return Ok(false);
        }
        self.current = Some(layer);
        Ok(true)
    }

    fn erase(&mut self, _layer: Layer) -> Result<bool> {
        Ok(self.current.take().is_some())
    }

    fn get_color(&self, start: Color, timestamp: f64, x: usize, y: usize) -> Color {
        let color = match self.current {
            Some(layer) => layer.apply(start, timestamp, x, y),
            None => start,
        };
        if self.inverted {
            INVERT.apply(color, timestamp, x, y)
        } else {
            color
        }
    }

    fn special(&mut self) {
        self.inverted = !self.inverted;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::by_name;

    const START: Color = Color::new(100, 150, 200);

    #[test]
    fn test_add_same_layer_twice() {
        let red = by_name("red").unwrap();
        let mut store = ReplaceStore::new();

        assert!(store.add(red).unwrap());
        assert!(!store.add(red).unwrap());
        assert_eq!(store.current(), Some(red));
    }

    #[test]
    fn test_add_replaces() {
        let mut store = ReplaceStore::new();
        store.add(by_name("red").unwrap()).unwrap();
        assert!(store.add(by_name("blue").unwrap()).unwrap());
        assert_eq!(store.get_color(START, 0.0, 0, 0), Color::new(0, 0, 255));
    }

    #[test]
    fn test_erase_ignores_argument() {
        let red = by_name("red").unwrap();
        let blue = by_name("blue").unwrap();
        let mut store = ReplaceStore::new();

        store.add(red).unwrap();
        assert!(store.erase(blue).unwrap());
        assert_eq!(store.get_color(START, 0.0, 0, 0), START);
        assert!(!store.erase(red).unwrap());
    }

    #[test]
    fn test_add_then_erase_restores_start() {
        let red = by_name("red").unwrap();
        let mut store = ReplaceStore::new();

        store.add(red).unwrap();
        assert!(store.erase(red).unwrap());
        assert_eq!(store.get_color(START, 0.0, 0, 0), START);
        assert!(!store.erase(red).unwrap());
    }

    #[test]
    fn test_special_toggles_inversion() {
        let mut store = ReplaceStore::new();
        store.special();
        assert!(store.is_inverted());
        assert_eq!(store.get_color(START, 0.0, 0, 0), Color::new(155, 105, 55));

        store.add(by_name("red").unwrap()).unwrap();
        assert_eq!(store.get_color(START, 0.0, 0, 0), Color::new(0, 255, 255));

        store.special();
        assert!(!store.is_inverted());
        assert_eq!(store.get_color(START, 0.0, 0, 0), Color::new(255, 0, 0));
    }
}
