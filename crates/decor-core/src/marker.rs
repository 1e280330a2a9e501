// File: crates/decor-core/src/marker.rs
// Summary: Intersection point marker: ring-with-hole circle pair at a selected point.

use std::fmt;
use std::sync::Arc;

use crate::error::DecorError;
use crate::paint::{BlendMode, Color, ColorFilter, FillStyle, Paint};
use crate::scope::DrawScope;
use crate::types::ScreenPoint;

/// Ring width: the inner white disc is this much smaller than the outer circle.
const INNER_RADIUS_DELTA: f32 = 1.5;

/// Renders a marker at a screen-space center. Inject an implementation on
/// [`PointMarker::renderer`] to replace the default ring look per instance.
pub trait MarkerRenderer: Send + Sync {
    fn draw(
        &self,
        scope: &mut dyn DrawScope,
        style: &PointMarker,
        center: ScreenPoint,
    ) -> Result<(), DecorError>;
}

/// Style configuration for the marker drawn at a highlighted data point.
/// All fields default; instances are read-only once constructed.
#[derive(Clone)]
pub struct PointMarker {
    pub color: Color,
    pub radius: f32,
    pub alpha: f32,
    pub style: FillStyle,
    pub color_filter: Option<ColorFilter>,
    pub blend_mode: BlendMode,
    pub renderer: Arc<dyn MarkerRenderer>,
}

impl Default for PointMarker {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            radius: 6.0,
            alpha: 1.0,
            style: FillStyle::Fill,
            color_filter: None,
            blend_mode: BlendMode::SrcOver,
            renderer: default_marker_renderer(),
        }
    }
}

impl fmt::Debug for PointMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointMarker")
            .field("color", &self.color)
            .field("radius", &self.radius)
            .field("alpha", &self.alpha)
            .field("style", &self.style)
            .field("color_filter", &self.color_filter)
            .field("blend_mode", &self.blend_mode)
            .finish_non_exhaustive()
    }
}

impl PointMarker {
    /// Draw the marker at `center` via the configured renderer.
    pub fn draw(&self, scope: &mut dyn DrawScope, center: ScreenPoint) -> Result<(), DecorError> {
        let renderer = Arc::clone(&self.renderer);
        renderer.draw(scope, self, center)
    }

    /// Paint for one of the marker's circles; everything but the color comes
    /// from this configuration.
    pub fn circle_paint(&self, color: Color) -> Paint {
        Paint {
            color,
            alpha: self.alpha,
            style: self.style,
            color_filter: self.color_filter,
            blend_mode: self.blend_mode,
        }
    }
}

/// Default look: outer colored circle, then an inner white circle with the
/// radius reduced by the ring width, both on the same center.
struct RingMarker;

impl MarkerRenderer for RingMarker {
    fn draw(
        &self,
        scope: &mut dyn DrawScope,
        style: &PointMarker,
        center: ScreenPoint,
    ) -> Result<(), DecorError> {
        scope.draw_circle(center, style.radius, &style.circle_paint(style.color));
        scope.draw_circle(
            center,
            style.radius - INNER_RADIUS_DELTA,
            &style.circle_paint(Color::WHITE),
        );
        Ok(())
    }
}

pub fn default_marker_renderer() -> Arc<dyn MarkerRenderer> {
    Arc::new(RingMarker)
}
