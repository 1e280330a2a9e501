// File: crates/decor-core/src/types.rs
// Summary: Shared coordinate types for screen (pixel) and data (logical) space.

/// A point in canvas coordinates: pixels, y increasing downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The logical chart value underlying a screen position, pre-scaling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataPoint {
    pub x: f32,
    pub y: f32,
}

impl DataPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
