// Core types shared by the drawing session and its frontends.

/// Solid fill used by initialize and clear (the CSS "lightgray" value).
pub const BACKGROUND_COLOR: u32 = 0x00D3_D3D3;

/// The drawing surface: a fixed-size raster that strokes are stamped into.
#[derive(Clone, PartialEq)]
pub struct Canvas {
    pub width: usize,      // how wide the surface is (pixels)
    pub height: usize,     // how tall the surface is (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

/// A position, either in viewport coordinates or surface-local ones.
/// Which one it is depends on where you got it; see `PointerInput`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// How segments are inked.
/// Visual: round caps and joins fall out of the disc stamping in draw.rs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: u32, // 0x00RRGGBB ink color
    pub width: f32, // stroke thickness in pixels
}

impl Default for StrokeStyle {
    /// The surface's one fixed style: 3 px black ink.
    fn default() -> Self {
        Self {
            color: 0x0000_0000,
            width: 3.0,
        }
    }
}
