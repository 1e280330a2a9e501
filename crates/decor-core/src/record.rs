// File: crates/decor-core/src/record.rs
// Summary: Recording draw scope; captures primitive calls for headless inspection.

use crate::error::DecorError;
use crate::geometry::Rect;
use crate::paint::{CornerRadius, Paint};
use crate::scope::DrawScope;
use crate::text::{TextMetrics, TextStyle};
use crate::types::ScreenPoint;

/// One captured primitive call, in issue order.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    Circle { center: ScreenPoint, radius: f32, paint: Paint },
    RoundRect { rect: Rect, corner: CornerRadius, paint: Paint },
    Triangle { a: ScreenPoint, b: ScreenPoint, c: ScreenPoint, paint: Paint },
    Text { text: String, origin: ScreenPoint, style: TextStyle },
}

/// DrawScope that records commands instead of rasterizing. Text measurement
/// uses a synthetic fixed-advance model (0.6em per char, 0.8em ascent,
/// 0.2em descent) so recorded geometry is fully deterministic.
pub struct Recorder {
    width: f32,
    height: f32,
    measure_fails: bool,
    pub commands: Vec<DrawCmd>,
}

impl Recorder {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height, measure_fails: false, commands: Vec::new() }
    }

    /// Recorder that reports text measurement as unavailable; exercises the
    /// measurement-failure path.
    pub fn without_metrics(width: f32, height: f32) -> Self {
        Self { width, height, measure_fails: true, commands: Vec::new() }
    }
}

impl DrawScope for Recorder {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn measure_text(&self, text: &str, style: &TextStyle) -> Result<TextMetrics, DecorError> {
        if self.measure_fails {
            return Err(DecorError::TextMeasure("no font metrics available".to_owned()));
        }
        Ok(TextMetrics {
            width: text.chars().count() as f32 * style.size * 0.6,
            ascent: style.size * 0.8,
            descent: style.size * 0.2,
        })
    }

    fn draw_circle(&mut self, center: ScreenPoint, radius: f32, paint: &Paint) {
        self.commands.push(DrawCmd::Circle { center, radius, paint: *paint });
    }

    fn draw_round_rect(&mut self, rect: Rect, corner: CornerRadius, paint: &Paint) {
        self.commands.push(DrawCmd::RoundRect { rect, corner, paint: *paint });
    }

    fn draw_triangle(&mut self, a: ScreenPoint, b: ScreenPoint, c: ScreenPoint, paint: &Paint) {
        self.commands.push(DrawCmd::Triangle { a, b, c, paint: *paint });
    }

    fn draw_text(&mut self, text: &str, origin: ScreenPoint, style: &TextStyle) {
        self.commands.push(DrawCmd::Text {
            text: text.to_owned(),
            origin,
            style: style.clone(),
        });
    }
}
