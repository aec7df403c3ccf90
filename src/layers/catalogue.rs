//! The nine known layers, in priority order.

use super::{Color, Layer, LAYER_COUNT};

/// All known layers, indexed by priority.
pub static LAYERS: [Layer; LAYER_COUNT] = [
    Layer::new("rainbow", 0, rainbow),
    Layer::new("black", 1, black),
    Layer::new("lighten", 2, lighten),
    INVERT,
    Layer::new("red", 4, red),
    Layer::new("green", 5, green),
    Layer::new("blue", 6, blue),
    Layer::new("greyscale", 7, greyscale),
    Layer::new("sparkle", 8, sparkle),
];

/// The invert layer, also used by the replace store's special effect.
pub const INVERT: Layer = Layer::new("invert", 3, invert);

/// Look up a layer by priority
pub fn by_index(index: u8) -> Option<Layer> {
    LAYERS.get(usize::from(index)).copied()
}

/// Look up a layer by name
pub fn by_name(name: &str) -> Option<Layer> {
    LAYERS.iter().find(|layer| layer.name() == name).copied()
}

fn rainbow(_: Color, timestamp: f64, x: usize, y: usize) -> Color {
    let hue = ((x + y) as f64 * 0.05 + timestamp * 0.25).rem_euclid(1.0);
    hue_to_rgb(hue)
}

fn black(_: Color, _: f64, _: usize, _: usize) -> Color {
    Color::BLACK
}

fn lighten(color: Color, _: f64, _: usize, _: usize) -> Color {
    color.map(|c| c.saturating_add(40))
}

fn invert(color: Color, _: f64, _: usize, _: usize) -> Color {
    color.map(|c| 255 - c)
}

fn red(_: Color, _: f64, _: usize, _: usize) -> Color {
    Color::new(255, 0, 0)
}

fn green(_: Color, _: f64, _: usize, _: usize) -> Color {
    Color::new(0, 255, 0)
}

fn blue(_: Color, _: f64, _: usize, _: usize) -> Color {
    Color::new(0, 0, 255)
}

fn greyscale(color: Color, _: f64, _: usize, _: usize) -> Color {
    let sum = u16::from(color.r) + u16::from(color.g) + u16::from(color.b);
    let avg = (sum / 3) as u8;
    Color::new(avg, avg, avg)
}

/// Flashes roughly one cell in sixteen to white, reshuffled four times a second.
fn sparkle(color: Color, timestamp: f64, x: usize, y: usize) -> Color {
    let frame = (timestamp * 4.0).floor().max(0.0) as u64;
    let mut h = (x as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
        ^ (y as u64).wrapping_mul(0xC2B2_AE3D_27D4_EB4F)
        ^ frame.wrapping_mul(0x1656_67B1_9E37_79F9);
    h ^= h >> 29;
    h = h.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    h ^= h >> 32;
    if h % 16 == 0 {
        Color::WHITE
    } else {
        color
    }
}

/// Fully saturated, full-value HSV to RGB.
fn hue_to_rgb(hue: f64) -> Color {
    let scaled = hue * 6.0;
    let sector = scaled.floor() as u8 % 6;
    let f = scaled - scaled.floor();
    let up = (f * 255.0).round() as u8;
    let down = 255 - up;
    match sector {
        0 => Color::new(255, up, 0),
        1 => Color::new(down, 255, 0),
        2 => Color::new(0, 255, up),
        3 => Color::new(0, down, 255),
        4 => Color::new(up, 0, 255),
        _ => Color::new(255, 0, down),
    }
}
