use egui::{pos2, vec2};
use stratmap::{
    BaseMap, DrawingObject, EraseStroke, HexColor, LayerStore, PenStroke, Renderer, SurfaceSize,
    ViewTransform,
};

fn horizontal_pen(y: f32, color: HexColor) -> DrawingObject {
    PenStroke::new(color, 8.0, vec![pos2(0.0, y), pos2(50.0, y), pos2(100.0, y)])
        .unwrap()
        .into()
}

fn vertical_erase(x: f32) -> DrawingObject {
    EraseStroke::new(16.0, vec![pos2(x, 0.0), pos2(x, 100.0)]).unwrap().into()
}

#[test]
fn test_erase_only_removes_earlier_strokes() {
    let mut layers = LayerStore::new();
    layers.push(horizontal_pen(30.0, HexColor::TERTIARY));
    layers.push(vertical_erase(50.0));
    layers.push(horizontal_pen(70.0, HexColor::TERTIARY));

    let mut renderer = Renderer::new();
    let frame = renderer
        .render_frame(SurfaceSize::from_points(vec2(100.0, 100.0)), &ViewTransform::default(), None, layers.active_layer(), None)
        .unwrap();

    // Earlier stroke is cut where the eraser crossed it
    assert_eq!(frame.pixel(50, 30).unwrap().alpha(), 0);
    assert_eq!(frame.pixel(20, 30).unwrap().alpha(), 255);
    // Later stroke is intact
    let later = frame.pixel(50, 70).unwrap();
    assert_eq!(later.alpha(), 255);
    assert_eq!(later.red(), 0xff);
}

#[test]
fn test_base_map_is_centered() {
    let map = BaseMap::from_rgba(image::RgbaImage::from_pixel(20, 20, image::Rgba([0, 255, 0, 255]))).unwrap();
    let layers = LayerStore::new();
    let mut renderer = Renderer::new();
    let frame = renderer
        .render_frame(SurfaceSize::from_points(vec2(100.0, 100.0)), &ViewTransform::default(), Some(&map), layers.active_layer(), None)
        .unwrap();

    assert_eq!(frame.pixel(50, 50).unwrap().green(), 255);
    assert_eq!(frame.pixel(5, 5).unwrap().alpha(), 0);
}

#[test]
fn test_surface_follows_size() {
    let layers = LayerStore::new();
    let mut renderer = Renderer::new();
    renderer.render_frame(SurfaceSize::from_points(vec2(64.0, 32.0)), &ViewTransform::default(), None, layers.active_layer(), None);
    renderer.render_frame(SurfaceSize::from_points(vec2(80.0, 40.0)), &ViewTransform::default(), None, layers.active_layer(), None);
    let surface = renderer.surface().unwrap();
    assert_eq!((surface.width(), surface.height()), (80, 40));
}
