use egui::{Rect, pos2, vec2};
use stratmap::{ViewTransform, ZoomDirection, ZoomLimits};

#[test]
fn test_zoom_in_clamps_to_max() {
    let limits = ZoomLimits::default();
    let mut view = ViewTransform::default();
    for _ in 0..40 {
        view.zoom(ZoomDirection::In, &limits);
    }
    assert_eq!(view.scale(), 5.0);
}

#[test]
fn test_zoom_out_clamps_to_min() {
    let limits = ZoomLimits::default();
    let mut view = ViewTransform::default();
    for _ in 0..40 {
        view.zoom(ZoomDirection::Out, &limits);
    }
    assert_eq!(view.scale(), 0.2);
}

#[test]
fn test_reset_is_exact() {
    let limits = ZoomLimits::default();
    let mut view = ViewTransform::default();
    view.zoom(ZoomDirection::In, &limits);
    view.pan_by(vec2(13.0, -7.0));
    view.reset();
    assert_eq!(view.scale(), 1.0);
    assert_eq!(view.offset(), vec2(0.0, 0.0));
}

#[test]
fn test_screen_round_trip() {
    let limits = ZoomLimits::default();
    let viewport = Rect::from_min_size(pos2(120.0, 40.0), vec2(800.0, 600.0));
    let mut view = ViewTransform::default();
    view.zoom(ZoomDirection::In, &limits);
    view.zoom(ZoomDirection::In, &limits);
    view.pan_by(vec2(33.0, -12.0));

    for logical in [pos2(0.0, 0.0), pos2(400.0, 300.0), pos2(-50.0, 725.5)] {
        let back = view.to_logical(view.to_screen(logical, viewport), viewport);
        assert!((back - logical).length() < 1e-3, "{logical:?} -> {back:?}");
    }
}

#[test]
fn test_zoom_is_anchored_on_canvas_center() {
    let limits = ZoomLimits::default();
    let viewport = Rect::from_min_size(pos2(0.0, 0.0), vec2(400.0, 300.0));
    let mut view = ViewTransform::default();
    let center = viewport.center();
    let before = view.to_logical(center, viewport);
    for _ in 0..5 {
        view.zoom(ZoomDirection::In, &limits);
    }
    let after = view.to_logical(center, viewport);
    assert!((before - after).length() < 1e-3);
}
