// File: crates/decor-core/src/scope.rs
// Summary: DrawScope trait; the explicit drawing context threaded through every draw.

use crate::error::DecorError;
use crate::geometry::Rect;
use crate::paint::{CornerRadius, Paint};
use crate::text::{TextMetrics, TextStyle};
use crate::types::ScreenPoint;

/// Drawing context for decorations. Backends map these primitives onto a real
/// canvas; the `Recorder` captures them for headless inspection.
///
/// Text measurement is fallible: a backend without usable font metrics must
/// return an error rather than let callers lay out with wrong dimensions.
pub trait DrawScope {
    /// Extent of the drawing surface in pixels (width, height).
    fn size(&self) -> (f32, f32);

    fn measure_text(&self, text: &str, style: &TextStyle) -> Result<TextMetrics, DecorError>;

    fn draw_circle(&mut self, center: ScreenPoint, radius: f32, paint: &Paint);

    fn draw_round_rect(&mut self, rect: Rect, corner: CornerRadius, paint: &Paint);

    fn draw_triangle(&mut self, a: ScreenPoint, b: ScreenPoint, c: ScreenPoint, paint: &Paint);

    /// Draw one line of text with its baseline at `origin.y`. The style's
    /// alignment decides how the line sits relative to `origin.x`.
    fn draw_text(&mut self, text: &str, origin: ScreenPoint, style: &TextStyle);
}
