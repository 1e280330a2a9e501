// File: crates/decor-core/tests/marker.rs
// Purpose: Validate the ring marker's two-circle contract and renderer injection.

use std::sync::Arc;

use decor_core::{
    Color, DecorError, DrawCmd, DrawScope, FillStyle, MarkerRenderer, Paint, PointMarker, Recorder,
    ScreenPoint,
};

#[test]
fn default_marker_draws_ring_with_white_hole() {
    let marker = PointMarker {
        color: Color::from_argb(255, 220, 80, 80),
        radius: 6.0,
        ..PointMarker::default()
    };
    let center = ScreenPoint::new(120.0, 96.5);

    let mut rec = Recorder::new(1024.0, 640.0);
    marker.draw(&mut rec, center).expect("marker draw");

    assert_eq!(rec.commands.len(), 2, "outer + inner circle");
    match (&rec.commands[0], &rec.commands[1]) {
        (
            DrawCmd::Circle { center: c0, radius: r0, paint: p0 },
            DrawCmd::Circle { center: c1, radius: r1, paint: p1 },
        ) => {
            assert_eq!(c0, &center);
            assert_eq!(c1, &center, "both circles share the center");
            assert_eq!(*r0, 6.0);
            assert_eq!(*r1, 6.0 - 1.5, "inner radius is reduced by the ring width");
            assert_eq!(p0.color, Color::from_argb(255, 220, 80, 80));
            assert_eq!(p1.color, Color::WHITE, "inner disc is always white");
            assert_eq!(p0.alpha, p1.alpha);
            assert_eq!(p0.style, p1.style);
        }
        other => panic!("expected two circles, got {other:?}"),
    }
}

#[test]
fn inner_circle_stays_white_for_any_outer_color_and_radius() {
    for (r, color) in [
        (2.0, Color::BLACK),
        (6.0, Color::from_argb(255, 40, 200, 120)),
        (14.0, Color::from_argb(128, 64, 160, 255)),
    ] {
        let marker = PointMarker { color, radius: r, ..PointMarker::default() };
        let mut rec = Recorder::new(1024.0, 640.0);
        marker.draw(&mut rec, ScreenPoint::new(50.0, 50.0)).expect("marker draw");
        match &rec.commands[1] {
            DrawCmd::Circle { radius, paint, .. } => {
                assert_eq!(*radius, r - 1.5);
                assert_eq!(paint.color, Color::WHITE);
            }
            other => panic!("expected circle, got {other:?}"),
        }
    }
}

#[test]
fn marker_style_flows_into_both_circles() {
    let marker = PointMarker {
        alpha: 0.5,
        style: FillStyle::Stroke { width: 2.0 },
        ..PointMarker::default()
    };
    let mut rec = Recorder::new(1024.0, 640.0);
    marker.draw(&mut rec, ScreenPoint::new(10.0, 10.0)).expect("marker draw");
    for cmd in &rec.commands {
        match cmd {
            DrawCmd::Circle { paint, .. } => {
                assert_eq!(paint.alpha, 0.5);
                assert_eq!(paint.style, FillStyle::Stroke { width: 2.0 });
            }
            other => panic!("expected circle, got {other:?}"),
        }
    }
}

#[test]
fn injected_renderer_replaces_default_ring() {
    struct DotMarker;
    impl MarkerRenderer for DotMarker {
        fn draw(
            &self,
            scope: &mut dyn DrawScope,
            style: &PointMarker,
            center: ScreenPoint,
        ) -> Result<(), DecorError> {
            scope.draw_circle(center, style.radius, &Paint::fill(style.color));
            Ok(())
        }
    }

    let marker = PointMarker { renderer: Arc::new(DotMarker), ..PointMarker::default() };
    let mut rec = Recorder::new(1024.0, 640.0);
    marker.draw(&mut rec, ScreenPoint::new(5.0, 5.0)).expect("marker draw");
    assert_eq!(rec.commands.len(), 1, "override draws a single dot");
}
