// File: crates/decor-core/tests/determinism.rs
// Purpose: Identical configuration + inputs must yield identical primitive sequences.

use decor_core::{DataPoint, PointMarker, Recorder, ScreenPoint, SelectionPopup};

#[test]
fn popup_draw_is_idempotent_per_call() {
    let popup = SelectionPopup::default();
    let anchor = ScreenPoint::new(123.0, 456.0);
    let point = DataPoint::new(7.0, 2.71828);

    let mut first = Recorder::new(1024.0, 640.0);
    popup.draw(&mut first, anchor, point).expect("first draw");

    let mut second = Recorder::new(1024.0, 640.0);
    popup.draw(&mut second, anchor, point).expect("second draw");

    assert_eq!(first.commands, second.commands);
}

#[test]
fn identically_configured_popups_draw_identically() {
    let a = SelectionPopup::default();
    let b = SelectionPopup::default();
    let anchor = ScreenPoint::new(80.0, 220.0);
    let point = DataPoint::new(0.0, 9.5);

    let mut rec_a = Recorder::new(800.0, 600.0);
    a.draw(&mut rec_a, anchor, point).expect("draw a");
    let mut rec_b = Recorder::new(800.0, 600.0);
    b.draw(&mut rec_b, anchor, point).expect("draw b");

    assert_eq!(rec_a.commands, rec_b.commands);
}

#[test]
fn marker_draw_is_idempotent_per_call() {
    let marker = PointMarker::default();
    let center = ScreenPoint::new(42.0, 42.0);

    let mut first = Recorder::new(1024.0, 640.0);
    marker.draw(&mut first, center).expect("first draw");
    let mut second = Recorder::new(1024.0, 640.0);
    marker.draw(&mut second, center).expect("second draw");

    assert_eq!(first.commands, second.commands);
}
