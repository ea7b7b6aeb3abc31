//! Pan/zoom state and the mapping between screen and logical coordinates.
//!
//! Zoom pivots around the center of the canvas, never around the pointer:
//! `screen = center + (logical + offset - center) * scale`.

use egui::emath::TSTransform;
use egui::{Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Allowed zoom range and the step applied per zoom action
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomLimits {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min: 0.2,
            max: 5.0,
            step: 0.1,
        }
    }
}

impl ZoomLimits {
    /// Finite, with `0 < min <= max` and a positive step
    pub fn is_valid(&self) -> bool {
        [self.min, self.max, self.step].iter().all(|v| v.is_finite())
            && self.min > 0.0
            && self.min <= self.max
            && self.step > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Current scale and pan offset of the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    scale: f32,
    offset: Vec2,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: Vec2::ZERO,
        }
    }
}

impl ViewTransform {
    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Zooms one step, staying on the step grid and inside the limits
    pub fn zoom(&mut self, direction: ZoomDirection, limits: &ZoomLimits) {
        let steps = (self.scale / limits.step).round();
        let steps = match direction {
            ZoomDirection::In => steps + 1.0,
            ZoomDirection::Out => steps - 1.0,
        };
        self.scale = (steps * limits.step).clamp(limits.min, limits.max);
    }

    /// Back to scale 1 with no pan
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Pans by a screen-space pointer delta
    pub fn pan_by(&mut self, screen_delta: Vec2) {
        self.offset += screen_delta / self.scale;
    }

    /// Logical -> surface pixels, for a surface of `size` with its origin at (0, 0)
    pub fn surface_transform(&self, size: Vec2) -> TSTransform {
        let center = size / 2.0;
        TSTransform::new(center + (self.offset - center) * self.scale, self.scale)
    }

    /// Logical -> screen, for a canvas occupying `viewport` on screen
    pub fn screen_transform(&self, viewport: Rect) -> TSTransform {
        let surface = self.surface_transform(viewport.size());
        TSTransform::new(surface.translation + viewport.min.to_vec2(), surface.scaling)
    }

    pub fn to_logical(&self, screen: Pos2, viewport: Rect) -> Pos2 {
        self.screen_transform(viewport).inverse().mul_pos(screen)
    }

    pub fn to_screen(&self, logical: Pos2, viewport: Rect) -> Pos2 {
        self.screen_transform(viewport).mul_pos(logical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    fn viewport() -> Rect {
        Rect::from_min_size(pos2(40.0, 30.0), vec2(800.0, 600.0))
    }

    #[test]
    fn test_identity_view_only_removes_origin() {
        let view = ViewTransform::default();
        assert_eq!(view.to_logical(pos2(140.0, 130.0), viewport()), pos2(100.0, 100.0));
    }

    #[test]
    fn test_zoom_pivots_on_canvas_center() {
        let mut view = ViewTransform::default();
        let limits = ZoomLimits::default();
        let center = viewport().center();
        let before = view.to_logical(center, viewport());
        for _ in 0..5 {
            view.zoom(ZoomDirection::In, &limits);
        }
        let after = view.to_logical(center, viewport());
        assert!((before - after).length() < 1e-3);
    }

    #[test]
    fn test_pan_is_scaled() {
        let mut view = ViewTransform::default();
        let limits = ZoomLimits::default();
        for _ in 0..10 {
            view.zoom(ZoomDirection::In, &limits);
        }
        assert!((view.scale() - 2.0).abs() < 1e-6);
        view.pan_by(vec2(20.0, -10.0));
        assert!((view.offset() - vec2(10.0, -5.0)).length() < 1e-5);
    }

    #[test]
    fn test_limits_validation() {
        assert!(ZoomLimits::default().is_valid());
        let bad = [
            ZoomLimits { min: 5.0, max: 0.2, step: 0.1 },
            ZoomLimits { step: 0.0, ..ZoomLimits::default() },
            ZoomLimits { min: 0.0, ..ZoomLimits::default() },
            ZoomLimits { max: f32::INFINITY, ..ZoomLimits::default() },
            ZoomLimits { step: f32::NAN, ..ZoomLimits::default() },
        ];
        for limits in bad {
            assert!(!limits.is_valid(), "{limits:?}");
        }
    }

    #[test]
    fn test_zoom_out_clamps_at_min() {
        let mut view = ViewTransform::default();
        let limits = ZoomLimits::default();
        for _ in 0..30 {
            view.zoom(ZoomDirection::Out, &limits);
        }
        assert_eq!(view.scale(), limits.min);
    }
}
