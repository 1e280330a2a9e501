// File: crates/decor-core/src/text.rs
// Summary: Text style and measured-metrics types consumed by draw-scope backends.

use crate::paint::Color;

/// Horizontal alignment of drawn text relative to its origin x.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Start,
    Center,
    End,
}

/// Typeface selection. Backends resolve `Family` against their font manager
/// and fail measurement when the family is unknown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Typeface {
    #[default]
    Default,
    Monospace,
    Family(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub color: Color,
    pub align: TextAlign,
    pub typeface: Typeface,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 14.0,
            color: Color::BLACK,
            align: TextAlign::Start,
            typeface: Typeface::Default,
        }
    }
}

/// Measured extent of a single line of text.
/// `ascent` and `descent` are positive distances above/below the baseline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    pub width: f32,
    pub ascent: f32,
    pub descent: f32,
}

impl TextMetrics {
    pub fn height(&self) -> f32 {
        self.ascent + self.descent
    }
}
