// File: crates/decor-core/src/popup.rs
// Summary: Selection highlight popup: auto-sized tooltip bubble with arrow and label text.

use std::fmt;
use std::sync::Arc;

use crate::error::DecorError;
use crate::geometry::{clamp, Rect};
use crate::paint::{BlendMode, Color, ColorFilter, CornerRadius, FillStyle, Paint};
use crate::scope::DrawScope;
use crate::text::{TextAlign, TextStyle, Typeface};
use crate::types::{DataPoint, ScreenPoint};

/// Horizontal gap between the anchor and the popup's left edge.
const ANCHOR_OFFSET_X: f32 = 10.0;
/// Wider gap used when the selected data point sits exactly on x = 0, so the
/// popup clears the left edge of the chart.
const ANCHOR_OFFSET_X_AT_ORIGIN: f32 = 100.0;
/// Headroom above the anchor where the label baseline is placed.
const ANCHOR_OFFSET_Y: f32 = 80.0;
/// Arrow triangle base width and height.
const ARROW_SIZE: f32 = 20.0;
/// Extra bubble height below the text so the arrow attaches to the bottom edge.
const BUBBLE_CLEARANCE: f32 = 20.0;
/// Horizontal nudge of the arrow apex off the bubble center.
const ARROW_NUDGE_X: f32 = 5.0;
/// Inset of the arrow apex above the bubble's bottom edge.
const ARROW_BOTTOM_INSET: f32 = 10.0;
/// Label x shift matching the wider anchor offset for the x = 0 case.
const ORIGIN_TEXT_SHIFT: f32 = 120.0;
/// Drop from the anchor (minus padding) down to the first text baseline.
const FIRST_BASELINE_DROP: f32 = 50.0;
// Extra gap inserted after the second line only. Kept literally for visual
// compatibility with existing charts; not a general layout rule.
const SECOND_LINE_EXTRA_GAP: f32 = 50.0;

/// Builds the popup's label from the selected point's data-space x and y.
pub type LabelFormatter = Arc<dyn Fn(f32, f32) -> Result<String, DecorError> + Send + Sync>;

/// Renders the popup for a selected point. Inject an implementation on
/// [`SelectionPopup::renderer`] to replace the default bubble per instance.
pub trait PopupRenderer: Send + Sync {
    fn draw(
        &self,
        scope: &mut dyn DrawScope,
        style: &SelectionPopup,
        anchor: ScreenPoint,
        point: DataPoint,
    ) -> Result<(), DecorError>;
}

/// Style configuration for the tooltip bubble shown above a selected point.
#[derive(Clone)]
pub struct SelectionPopup {
    pub background_color: Color,
    pub background_alpha: f32,
    pub corner_radius: CornerRadius,
    pub color_filter: Option<ColorFilter>,
    pub blend_mode: BlendMode,
    pub style: FillStyle,
    /// Vertical padding between the bubble and the selected point's headroom.
    pub padding_between_popup_and_point: f32,
    pub label_size: f32,
    pub label_color: Color,
    pub label_alignment: TextAlign,
    pub label_typeface: Typeface,
    /// Multi-line labels are supported: lines are split on `\n`.
    pub label_formatter: LabelFormatter,
    pub renderer: Arc<dyn PopupRenderer>,
}

impl Default for SelectionPopup {
    fn default() -> Self {
        Self {
            background_color: Color::BLACK,
            background_alpha: 0.7,
            corner_radius: CornerRadius::uniform(5.0),
            color_filter: None,
            blend_mode: BlendMode::SrcOver,
            style: FillStyle::Fill,
            padding_between_popup_and_point: 10.0,
            label_size: 14.0,
            label_color: Color::WHITE,
            label_alignment: TextAlign::Center,
            label_typeface: Typeface::Default,
            label_formatter: default_label_formatter(),
            renderer: default_popup_renderer(),
        }
    }
}

impl fmt::Debug for SelectionPopup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionPopup")
            .field("background_color", &self.background_color)
            .field("background_alpha", &self.background_alpha)
            .field("corner_radius", &self.corner_radius)
            .field("color_filter", &self.color_filter)
            .field("blend_mode", &self.blend_mode)
            .field("style", &self.style)
            .field(
                "padding_between_popup_and_point",
                &self.padding_between_popup_and_point,
            )
            .field("label_size", &self.label_size)
            .field("label_color", &self.label_color)
            .field("label_alignment", &self.label_alignment)
            .field("label_typeface", &self.label_typeface)
            .finish_non_exhaustive()
    }
}

/// One laid-out label line with its baseline origin.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub origin: ScreenPoint,
}

/// Geometry derived from one anchor/data-point pair, computed before any
/// primitive is issued so a failed layout draws nothing.
#[derive(Clone, Debug, PartialEq)]
pub struct PopupLayout {
    /// Tight bounds of the measured label text.
    pub background: Rect,
    /// The rounded rectangle actually drawn (padding + arrow clearance).
    pub bubble: Rect,
    /// Downward triangle: [base-left, base-right, apex].
    pub arrow: [ScreenPoint; 3],
    pub lines: Vec<TextLine>,
}

impl SelectionPopup {
    /// Text style used for the popup's label lines.
    pub fn label_style(&self) -> TextStyle {
        TextStyle {
            size: self.label_size,
            color: self.label_color,
            align: self.label_alignment,
            typeface: self.label_typeface.clone(),
        }
    }

    /// Draw the popup anchored at `anchor` via the configured renderer.
    pub fn draw(
        &self,
        scope: &mut dyn DrawScope,
        anchor: ScreenPoint,
        point: DataPoint,
    ) -> Result<(), DecorError> {
        let renderer = Arc::clone(&self.renderer);
        renderer.draw(scope, self, anchor, point)
    }

    /// Format the label and compute the full popup geometry for one
    /// anchor/data-point pair. Pure apart from text measurement.
    pub fn layout(
        &self,
        scope: &dyn DrawScope,
        anchor: ScreenPoint,
        point: DataPoint,
    ) -> Result<PopupLayout, DecorError> {
        let label = (self.label_formatter)(point.x, point.y)?;
        let style = self.label_style();
        let at_origin = point.x == 0.0;

        // The widest line drives the background width; ascent/descent come
        // from the backend's font metrics.
        let mut width = 0.0f32;
        let mut ascent = 0.0f32;
        let mut descent = 0.0f32;
        for line in label.split('\n') {
            let m = scope.measure_text(line, &style)?;
            width = width.max(m.width);
            ascent = ascent.max(m.ascent);
            descent = descent.max(m.descent);
        }

        let offset_x = if at_origin { ANCHOR_OFFSET_X_AT_ORIGIN } else { ANCHOR_OFFSET_X };
        let left = anchor.x + offset_x;
        let baseline = anchor.y - ANCHOR_OFFSET_Y;

        // Keep the popup on the drawing surface: slide it left when it would
        // cross the right edge, but never past the surface's left edge.
        let (surface_w, _) = scope.size();
        let max_left = (surface_w - width).max(0.0);
        let clamped_left = clamp(left, 0.0, max_left);
        let shift = clamped_left - left;

        let background = Rect::from_ltwh(clamped_left, baseline - ascent, width, ascent + descent);

        let bubble = Rect::from_ltwh(
            background.left,
            background.top - self.padding_between_popup_and_point,
            background.width(),
            background.height() + ARROW_SIZE + BUBBLE_CLEARANCE,
        );

        let apex = ScreenPoint::new(
            bubble.center_x() + ARROW_NUDGE_X,
            bubble.bottom - ARROW_BOTTOM_INSET,
        );
        let arrow = [
            ScreenPoint::new(apex.x - ARROW_SIZE / 2.0, apex.y - ARROW_SIZE),
            ScreenPoint::new(apex.x + ARROW_SIZE / 2.0, apex.y - ARROW_SIZE),
            apex,
        ];

        let text_x =
            anchor.x + if at_origin { ORIGIN_TEXT_SHIFT } else { 0.0 } + shift;
        let mut baseline_y =
            anchor.y - self.padding_between_popup_and_point - FIRST_BASELINE_DROP;
        let mut lines = Vec::new();
        for (index, line) in label.split('\n').enumerate() {
            lines.push(TextLine {
                text: line.to_owned(),
                origin: ScreenPoint::new(text_x, baseline_y),
            });
            baseline_y += style.size;
            if index == 1 {
                baseline_y += SECOND_LINE_EXTRA_GAP;
            }
        }

        Ok(PopupLayout { background, bubble, arrow, lines })
    }
}

/// Default formatter: `"x : {x as integer}  y : {y to two decimals}"`.
pub fn default_label_formatter() -> LabelFormatter {
    Arc::new(|x, y| Ok(format!("x : {}  y : {:.2}", x as i64, y)))
}

/// Default look: rounded bubble, filled arrow pointing down at the anchor,
/// then one text draw per label line. Order matters; arrow and text both
/// derive from the bubble geometry.
struct BubblePopup;

impl PopupRenderer for BubblePopup {
    fn draw(
        &self,
        scope: &mut dyn DrawScope,
        style: &SelectionPopup,
        anchor: ScreenPoint,
        point: DataPoint,
    ) -> Result<(), DecorError> {
        let layout = style.layout(&*scope, anchor, point)?;

        let bubble_paint = Paint {
            color: style.background_color,
            alpha: style.background_alpha,
            style: style.style,
            color_filter: style.color_filter,
            blend_mode: style.blend_mode,
        };
        scope.draw_round_rect(layout.bubble, style.corner_radius, &bubble_paint);

        let [a, b, c] = layout.arrow;
        scope.draw_triangle(a, b, c, &Paint::fill(style.background_color));

        let text_style = style.label_style();
        for line in &layout.lines {
            scope.draw_text(&line.text, line.origin, &text_style);
        }
        Ok(())
    }
}

pub fn default_popup_renderer() -> Arc<dyn PopupRenderer> {
    Arc::new(BubblePopup)
}
