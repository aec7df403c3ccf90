//! Layer Catalogue
//!
//! A layer is a named, prioritised, pure colour transform. Stores only
//! keep copies of these descriptors; the catalogue owns the fixed set of
//! nine known layers, indexed by priority 0..8.

mod catalogue;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::PaintError;

pub use catalogue::{by_index, by_name, INVERT, LAYERS};

/// Number of layers known to the catalogue.
pub const LAYER_COUNT: usize = 9;

/// Signature of a layer transform: `(colour, timestamp, x, y) -> colour`.
pub type ApplyFn = fn(Color, f64, usize, usize) -> Color;

/// An RGB colour with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    /// Create a colour from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Apply `f` to every channel
    pub fn map(self, f: impl Fn(u8) -> u8) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b))
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Immutable layer descriptor.
///
/// Serializes as its name; deserialization resolves the name against the
/// catalogue so a saved action always refers to a known transform.
#[derive(Clone, Copy, Serialize)]
#[serde(into = "String")]
pub struct Layer {
    name: &'static str,
    index: u8,
    apply: ApplyFn,
}

impl Layer {
    pub(crate) const fn new(name: &'static str, index: u8, apply: ApplyFn) -> Self {
        Self { name, index, apply }
    }

    /// Name of the layer (unique within the catalogue)
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Priority of the layer, 0..8
    pub fn index(&self) -> u8 {
        self.index
    }

    /// Apply the layer transform to a colour
    pub fn apply(&self, color: Color, timestamp: f64, x: usize, y: usize) -> Color {
        (self.apply)(color, timestamp, x, y)
    }
}

impl PartialEq for Layer {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.name == other.name
    }
}

impl Eq for Layer {}

impl fmt::Debug for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Layer")
            .field("name", &self.name)
            .field("index", &self.index)
            .finish()
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl From<Layer> for String {
    fn from(layer: Layer) -> Self {
        layer.name.to_string()
    }
}

impl TryFrom<String> for Layer {
    type Error = PaintError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        by_name(&name).ok_or(PaintError::UnknownLayer { name })
    }
}

impl<'de> Deserialize<'de> for Layer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Layer::try_from(name).map_err(serde::de::Error::custom)
    }
}
