// File: crates/decor-render-skia/src/lib.rs
// Summary: Skia renderer crate; maps the DrawScope primitives onto a skia Canvas.

use skia_safe as skia;

use decor_core::{
    BlendMode, Color, CornerRadius, DecorError, DrawScope, FillStyle, Paint, Rect, ScreenPoint,
    TextAlign, TextMetrics, TextStyle, Typeface,
};

// Family preference lists; resolved against the system font manager.
const SANS_FAMILIES: &[&str] =
    &["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"];
const MONO_FAMILIES: &[&str] =
    &["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"];

/// DrawScope over a skia canvas. The canvas and its pixel extent are passed
/// explicitly; nothing is read from ambient state.
pub struct SkiaScope<'a> {
    canvas: &'a skia::Canvas,
    width: f32,
    height: f32,
    fonts: skia::FontMgr,
}

impl<'a> SkiaScope<'a> {
    pub fn new(canvas: &'a skia::Canvas, width: f32, height: f32) -> Self {
        Self { canvas, width, height, fonts: skia::FontMgr::default() }
    }

    fn font_for(&self, style: &TextStyle) -> Result<skia::Font, DecorError> {
        let size = style.size.max(1.0);
        let families: &[&str] = match &style.typeface {
            Typeface::Default => SANS_FAMILIES,
            Typeface::Monospace => MONO_FAMILIES,
            Typeface::Family(name) => {
                let tf = self
                    .fonts
                    .match_family_style(name, skia::FontStyle::normal())
                    .ok_or_else(|| {
                        DecorError::TextMeasure(format!("typeface '{name}' not found"))
                    })?;
                return Ok(skia::Font::from_typeface(tf, size));
            }
        };
        for family in families {
            if let Some(tf) = self.fonts.match_family_style(family, skia::FontStyle::normal()) {
                return Ok(skia::Font::from_typeface(tf, size));
            }
        }
        // System manager fallback
        let mut font = skia::Font::default();
        font.set_size(size);
        Ok(font)
    }
}

fn to_skia_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn to_skia_blend(mode: BlendMode) -> skia::BlendMode {
    match mode {
        BlendMode::SrcOver => skia::BlendMode::SrcOver,
        BlendMode::Src => skia::BlendMode::Src,
        BlendMode::Multiply => skia::BlendMode::Multiply,
        BlendMode::Screen => skia::BlendMode::Screen,
        BlendMode::Plus => skia::BlendMode::Plus,
    }
}

fn to_skia_paint(paint: &Paint) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_color(to_skia_color(paint.color));
    // `alpha` multiplies the color's own alpha channel.
    p.set_alpha_f(paint.alpha.clamp(0.0, 1.0) * f32::from(paint.color.a) / 255.0);
    match paint.style {
        FillStyle::Fill => {
            p.set_style(skia::paint::Style::Fill);
        }
        FillStyle::Stroke { width } => {
            p.set_style(skia::paint::Style::Stroke);
            p.set_stroke_width(width);
        }
    }
    p.set_blend_mode(to_skia_blend(paint.blend_mode));
    if let Some(filter) = paint.color_filter {
        p.set_color_filter(skia::color_filters::blend(
            to_skia_color(filter.color),
            to_skia_blend(filter.mode),
        ));
    }
    p
}

impl DrawScope for SkiaScope<'_> {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn measure_text(&self, text: &str, style: &TextStyle) -> Result<TextMetrics, DecorError> {
        let font = self.font_for(style)?;
        let (width, _) = font.measure_str(text, None);
        let (_, fm) = font.metrics();
        // Skia ascent is negative-up; the core model wants positive distances.
        Ok(TextMetrics { width, ascent: -fm.ascent, descent: fm.descent })
    }

    fn draw_circle(&mut self, center: ScreenPoint, radius: f32, paint: &Paint) {
        self.canvas
            .draw_circle((center.x, center.y), radius, &to_skia_paint(paint));
    }

    fn draw_round_rect(&mut self, rect: Rect, corner: CornerRadius, paint: &Paint) {
        let r = skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom);
        self.canvas
            .draw_round_rect(r, corner.x, corner.y, &to_skia_paint(paint));
    }

    fn draw_triangle(&mut self, a: ScreenPoint, b: ScreenPoint, c: ScreenPoint, paint: &Paint) {
        let mut path = skia::Path::new();
        path.move_to((a.x, a.y));
        path.line_to((b.x, b.y));
        path.line_to((c.x, c.y));
        path.close();
        self.canvas.draw_path(&path, &to_skia_paint(paint));
    }

    fn draw_text(&mut self, text: &str, origin: ScreenPoint, style: &TextStyle) {
        let font = match self.font_for(style) {
            Ok(font) => font,
            Err(err) => {
                // Layout measures with this style before any draw, so a font
                // miss here means the caller skipped measurement.
                debug_assert!(false, "font resolution failed after layout: {err}");
                return;
            }
        };
        let width = font.measure_str(text, None).0;
        let x = match style.align {
            TextAlign::Start => origin.x,
            TextAlign::Center => origin.x - width * 0.5,
            TextAlign::End => origin.x - width,
        };
        let paint = to_skia_paint(&Paint::fill(style.color));
        self.canvas.draw_str(text, (x, origin.y), &font, &paint);
    }
}
