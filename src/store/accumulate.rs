//! Accumulate store (`ADD`)
//!
//! Layers apply in insertion order, each on top of the previous result.
//! `erase` always removes the oldest layer: the argument is not used to find
//! a match. `special` reverses the order.

use super::LayerStore;
use crate::bounded::BoundedQueue;
use crate::error::{PaintError, Result};
use crate::layers::{Color, Layer};

/// Default number of layers a single cell can accumulate.
pub const DEFAULT_ACCUMULATE_CAPACITY: usize = 2000;

#[derive(Debug, Clone, PartialEq)]
pub struct AccumulateStore {
    queue: BoundedQueue<Layer>,
}

impl Default for AccumulateStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_ACCUMULATE_CAPACITY)
    }
}

impl AccumulateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            queue: BoundedQueue::new(capacity),
        }
    }

    /// Layers from oldest to newest
    pub fn layers(&self) -> impl Iterator<Item = Layer> + '_ {
        self.queue.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl LayerStore for AccumulateStore {
    fn add(&mut self, layer: Layer) -> Result<bool> {
        let capacity = self.queue.capacity();
        self.queue
            .append(layer)
            .map_err(|_| PaintError::CapacityExceeded {
                container: "accumulate store",
                capacity,
            })?;
        Ok(true)
    }

    fn erase(&mut self, _layer: Layer) -> Result<bool> {
        self.queue.serve().map_err(|_| PaintError::Underflow {
            container: "accumulate store",
        })?;
        Ok(true)
    }

    fn get_color(&self, start: Color, timestamp: f64, x: usize, y: usize) -> Color {
        self.queue
            .iter()
            .fold(start, |color, layer| layer.apply(color, timestamp, x, y))
    }

    fn special(&mut self) {
        self.queue.reverse();
    }
}
