// File: crates/decor-core/src/paint.rs
// Summary: Renderer-agnostic paint model (color, blend, fill style, corner radius).

/// 8-bit ARGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    pub const WHITE: Color = Color::from_argb(255, 255, 255, 255);
    pub const BLACK: Color = Color::from_argb(255, 0, 0, 0);
}

/// Blending algorithm applied when a primitive is drawn into the destination.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlendMode {
    #[default]
    SrcOver,
    Src,
    Multiply,
    Screen,
    Plus,
}

/// Optional tint applied to a paint's color at draw time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorFilter {
    pub color: Color,
    pub mode: BlendMode,
}

/// Whether a primitive is filled in or stroked along its outline.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum FillStyle {
    #[default]
    Fill,
    Stroke { width: f32 },
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerRadius {
    pub x: f32,
    pub y: f32,
}

impl CornerRadius {
    pub const fn uniform(r: f32) -> Self {
        Self { x: r, y: r }
    }
}

/// Full paint state for one primitive draw call.
/// `alpha` multiplies the color's own alpha channel; range 0.0..=1.0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paint {
    pub color: Color,
    pub alpha: f32,
    pub style: FillStyle,
    pub color_filter: Option<ColorFilter>,
    pub blend_mode: BlendMode,
}

impl Paint {
    /// Opaque fill paint with default blending and no filter.
    pub fn fill(color: Color) -> Self {
        Self {
            color,
            alpha: 1.0,
            style: FillStyle::Fill,
            color_filter: None,
            blend_mode: BlendMode::SrcOver,
        }
    }
}

impl Default for Paint {
    fn default() -> Self {
        Paint::fill(Color::BLACK)
    }
}
