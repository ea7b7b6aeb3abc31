// src/renderer.rs
use egui::{ColorImage, Pos2, TextureHandle, TextureOptions, Vec2, pos2};
use tiny_skia::{
    BlendMode, Color, LineCap, LineJoin, Paint, Path, PathBuilder, Pixmap, PixmapPaint, Stroke,
    Transform,
};

use crate::base_map::BaseMap;
use crate::drawing::{Compositing, DrawingObject, PathSegment};
use crate::layer::Layer;
use crate::view::ViewTransform;

/// Canvas size in points, and how many physical pixels make up a point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    pub points: Vec2,
    pub pixels_per_point: f32,
}

impl SurfaceSize {
    pub fn new(points: Vec2, pixels_per_point: f32) -> Self {
        Self {
            points,
            pixels_per_point,
        }
    }

    pub fn from_points(points: Vec2) -> Self {
        Self::new(points, 1.0)
    }

    fn physical(&self) -> Vec2 {
        self.points * self.pixels_per_point
    }

    /// Whole physical pixels covering the canvas
    pub fn pixels(&self) -> [u32; 2] {
        let px = self.physical().round();
        [px.x.max(0.0) as u32, px.y.max(0.0) as u32]
    }

    /// Texture coordinate of the canvas' bottom-right corner.
    ///
    /// Differs from (1, 1) by the sub-pixel lost when rounding to whole pixels.
    pub fn uv_max(&self) -> Pos2 {
        let [w, h] = self.pixels();
        if w == 0 || h == 0 {
            return pos2(1.0, 1.0);
        }
        let px = self.physical();
        pos2(px.x / w as f32, px.y / h as f32)
    }
}

/// Replays a layer onto a raster surface.
///
/// Every frame is a full redraw: clear, base map, then every object of the
/// layer in commit order, then the optional in-progress preview. Erase
/// strokes use destination-out, so they only remove what was drawn before them.
#[derive(Default)]
pub struct Renderer {
    surface: Option<Pixmap>,
    texture: Option<TextureHandle>,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("surface", &self.surface.as_ref().map(|s| [s.width(), s.height()]))
            .field("texture", &self.texture.as_ref().map(|t| t.id()))
            .finish()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders a complete frame for a canvas of `size`.
    ///
    /// Logical coordinates map to points exactly as [`ViewTransform::screen_transform`]
    /// does, so input and rendering agree. Returns `None` if the surface has no area.
    pub fn render_frame(
        &mut self,
        size: SurfaceSize,
        view: &ViewTransform,
        base_map: Option<&BaseMap>,
        layer: &Layer,
        preview: Option<&DrawingObject>,
    ) -> Option<&Pixmap> {
        let [width, height] = size.pixels();
        let surface = match self.surface.take() {
            Some(mut surface) if surface.width() == width && surface.height() == height => {
                surface.fill(Color::TRANSPARENT);
                surface
            }
            _ => {
                log::debug!("Renderer: allocating {width}x{height} surface");
                Pixmap::new(width, height)?
            }
        };
        let surface = self.surface.insert(surface);

        let ts = view.surface_transform(size.points);
        let ppp = size.pixels_per_point;
        let transform = Transform::from_row(
            ts.scaling * ppp,
            0.0,
            0.0,
            ts.scaling * ppp,
            ts.translation.x * ppp,
            ts.translation.y * ppp,
        );

        if let Some(map) = base_map {
            // Centered on the canvas midpoint in logical space
            let x = (size.points.x - map.width() as f32) / 2.0;
            let y = (size.points.y - map.height() as f32) / 2.0;
            surface.draw_pixmap(
                0,
                0,
                map.pixmap().as_ref(),
                &PixmapPaint::default(),
                transform.pre_translate(x, y),
                None,
            );
        }

        for object in layer.objects() {
            draw_object(surface, object, transform);
        }
        if let Some(preview) = preview {
            draw_object(surface, preview, transform);
        }

        Some(&*surface)
    }

    /// The most recently rendered frame
    pub fn surface(&self) -> Option<&Pixmap> {
        self.surface.as_ref()
    }

    /// Uploads the current frame to the GPU, reusing the texture between frames
    pub fn upload(&mut self, ctx: &egui::Context) -> Option<&TextureHandle> {
        let surface = self.surface.as_ref()?;
        let image = ColorImage::from_rgba_premultiplied(
            [surface.width() as usize, surface.height() as usize],
            surface.data(),
        );
        match &mut self.texture {
            Some(texture) => texture.set(image, TextureOptions::LINEAR),
            None => {
                self.texture = Some(ctx.load_texture("battle_map_frame", image, TextureOptions::LINEAR));
            }
        }
        self.texture.as_ref()
    }

    pub fn texture(&self) -> Option<&TextureHandle> {
        self.texture.as_ref()
    }
}

fn build_path(segments: &[PathSegment]) -> Option<Path> {
    let mut pb = PathBuilder::new();
    for segment in segments {
        match *segment {
            PathSegment::MoveTo(p) => pb.move_to(p.x, p.y),
            PathSegment::LineTo(p) => pb.line_to(p.x, p.y),
            PathSegment::QuadTo { ctrl, to } => pb.quad_to(ctrl.x, ctrl.y, to.x, to.y),
        }
    }
    pb.finish()
}

fn draw_object(surface: &mut Pixmap, object: &DrawingObject, transform: Transform) {
    let Some(path) = build_path(&object.path()) else {
        log::trace!("Renderer: nothing to stroke for {object:?}");
        return;
    };

    let mut paint = Paint::default();
    paint.anti_alias = true;
    match (object.compositing(), object.color()) {
        (Compositing::Normal, Some(color)) => {
            let [r, g, b] = color.rgb();
            paint.set_color_rgba8(r, g, b, 255);
        }
        // Color is irrelevant under destination-out, only coverage counts
        _ => {
            paint.set_color_rgba8(255, 255, 255, 255);
            paint.blend_mode = BlendMode::DestinationOut;
        }
    }

    let stroke = Stroke {
        width: object.width(),
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Stroke::default()
    };
    surface.stroke_path(&path, &paint, &stroke, transform, None);
}
