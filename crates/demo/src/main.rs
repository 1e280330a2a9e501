// File: crates/demo/src/main.rs
// Summary: Demo renders a small line series with intersection markers and a selection popup to PNG.

use anyhow::Result;
use skia_safe as skia;

use decor_core::{Color, DataPoint, PointMarker, ScreenPoint, SelectionPopup};
use decor_render_skia::SkiaScope;

const WIDTH: i32 = 1024;
const HEIGHT: i32 = 640;

fn main() -> Result<()> {
    let data: Vec<(f32, f32)> =
        vec![(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.5), (4.0, 2.5)];
    let selected = 3usize;

    let mut surface = skia::surfaces::raster_n32_premul((WIDTH, HEIGHT))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
    let canvas = surface.canvas();
    canvas.clear(skia::Color::from_argb(255, 18, 18, 20));

    // Trivial linear mapping into a padded plot rect; the decoration layer
    // only ever sees the resulting screen points.
    let (l, t, r, b) = (72.0f32, 24.0f32, WIDTH as f32 - 24.0, HEIGHT as f32 - 56.0);
    let (x_max, y_max) = (4.0f32, 4.0f32);
    let sx = |x: f32| l + x / x_max * (r - l);
    let sy = |y: f32| b - y / y_max * (b - t);

    let mut path = skia::Path::new();
    path.move_to((sx(data[0].0), sy(data[0].1)));
    for &(x, y) in data.iter().skip(1) {
        path.line_to((sx(x), sy(y)));
    }
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    stroke.set_color(skia::Color::from_argb(255, 64, 160, 255));
    canvas.draw_path(&path, &stroke);

    let mut scope = SkiaScope::new(canvas, WIDTH as f32, HEIGHT as f32);

    let marker = PointMarker {
        color: Color::from_argb(255, 64, 160, 255),
        ..PointMarker::default()
    };
    for &(x, y) in &data {
        marker.draw(&mut scope, ScreenPoint::new(sx(x), sy(y)))?;
    }

    let popup = SelectionPopup::default();
    let (dx, dy) = data[selected];
    popup.draw(
        &mut scope,
        ScreenPoint::new(sx(dx), sy(dy)),
        DataPoint::new(dx, dy),
    )?;

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let png = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;

    let out = std::path::PathBuf::from("target/demo_out/selection_popup.png");
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&out, png.as_bytes())?;
    println!("Wrote {}", out.display());
    Ok(())
}
