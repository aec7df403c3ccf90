//! Toggle-Set store (`SEQUENCE`)
//!
//! Each known layer type is either present or absent. Presence is tracked
//! by priority, so the store never holds more than one entry per layer.

use super::LayerStore;
use crate::bounded::PrioritySet;
use crate::error::Result;
use crate::layers::{by_index, Color, Layer};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToggleSetStore {
    present: PrioritySet,
}

impl ToggleSetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Present layers in ascending priority
    pub fn layers(&self) -> impl Iterator<Item = Layer> + '_ {
        self.present.iter().filter_map(by_index)
    }

    pub fn contains(&self, layer: Layer) -> bool {
        self.present.contains(layer.index())
    }

    pub fn len(&self) -> usize {
        self.present.len()
    }

    pub fn is_empty(&self) -> bool {
        self.present.is_empty()
    }
}

impl LayerStore for ToggleSetStore {
    fn add(&mut self, layer: Layer) -> Result<bool> {
        Ok(self.present.insert(layer.index()))
    }

    fn erase(&mut self, layer: Layer) -> Result<bool> {
        Ok(self.present.remove(layer.index()))
    }

    /// Every present layer transforms `start` itself, in ascending priority,
    /// so the highest present priority decides the result. Results are not
    /// chained from one layer into the next.
    fn get_color(&self, start: Color, timestamp: f64, x: usize, y: usize) -> Color {
        self.layers()
            .fold(start, |_, layer| layer.apply(start, timestamp, x, y))
    }

    /// Remove the present layer whose name is the lower median.
    fn special(&mut self) {
        let mut sorted: Vec<Layer> = self.layers().collect();
        if sorted.is_empty() {
            return;
        }
        sorted.sort_by_key(|layer| layer.name());
        let median = sorted[(sorted.len() - 1) / 2];
        self.present.remove(median.index());
    }
}
