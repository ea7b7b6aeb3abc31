//! Committed drawing objects.
//!
//! A layer is an ordered list of these. Once committed an object is never
//! edited again, so layers and history snapshots share them through [`DrawingRef`].

use egui::Pos2;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::color::HexColor;
use crate::error::{CanvasError, CanvasResult};

/// Shared handle to an immutable drawing object
pub type DrawingRef = Arc<DrawingObject>;

/// One segment of a path in logical coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(Pos2),
    LineTo(Pos2),
    QuadTo { ctrl: Pos2, to: Pos2 },
}

/// How a drawing object combines with the pixels beneath it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compositing {
    /// Paint over (source-over)
    Normal,
    /// Remove what is beneath (destination-out)
    Erase,
}

/// Freehand pen stroke
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PenStroke {
    color: HexColor,
    width: f32,
    points: Vec<Pos2>,
}

/// Straight line between two points. Start may equal end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    color: HexColor,
    width: f32,
    start: Pos2,
    end: Pos2,
}

/// Freehand erase stroke, removes everything drawn before it on the layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EraseStroke {
    width: f32,
    points: Vec<Pos2>,
}

fn require_two_points(points: &[Pos2]) -> CanvasResult<()> {
    if points.len() < 2 {
        return Err(CanvasError::DegenerateInput {
            points: points.len(),
        });
    }
    Ok(())
}

impl PenStroke {
    pub fn new(color: HexColor, width: f32, points: Vec<Pos2>) -> CanvasResult<Self> {
        require_two_points(&points)?;
        Ok(Self {
            color,
            width,
            points,
        })
    }

    pub fn color(&self) -> HexColor {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }
}

impl LineSegment {
    pub fn new(color: HexColor, width: f32, start: Pos2, end: Pos2) -> Self {
        Self {
            color,
            width,
            start,
            end,
        }
    }

    pub fn color(&self) -> HexColor {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn start(&self) -> Pos2 {
        self.start
    }

    pub fn end(&self) -> Pos2 {
        self.end
    }
}

impl EraseStroke {
    pub fn new(width: f32, points: Vec<Pos2>) -> CanvasResult<Self> {
        require_two_points(&points)?;
        Ok(Self { width, points })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DrawingObject {
    Pen(PenStroke),
    Line(LineSegment),
    Erase(EraseStroke),
}

impl DrawingObject {
    pub fn width(&self) -> f32 {
        match self {
            DrawingObject::Pen(pen) => pen.width,
            DrawingObject::Line(line) => line.width,
            DrawingObject::Erase(erase) => erase.width,
        }
    }

    /// Stroke color, `None` for erase strokes
    pub fn color(&self) -> Option<HexColor> {
        match self {
            DrawingObject::Pen(pen) => Some(pen.color),
            DrawingObject::Line(line) => Some(line.color),
            DrawingObject::Erase(_) => None,
        }
    }

    pub fn compositing(&self) -> Compositing {
        match self {
            DrawingObject::Erase(_) => Compositing::Erase,
            DrawingObject::Pen(_) | DrawingObject::Line(_) => Compositing::Normal,
        }
    }

    /// The path the renderer strokes for this object
    pub fn path(&self) -> Vec<PathSegment> {
        match self {
            DrawingObject::Pen(pen) => smooth_path(&pen.points),
            DrawingObject::Erase(erase) => smooth_path(&erase.points),
            DrawingObject::Line(line) => {
                vec![PathSegment::MoveTo(line.start), PathSegment::LineTo(line.end)]
            }
        }
    }
}

impl From<PenStroke> for DrawingObject {
    fn from(pen: PenStroke) -> Self {
        DrawingObject::Pen(pen)
    }
}

impl From<LineSegment> for DrawingObject {
    fn from(line: LineSegment) -> Self {
        DrawingObject::Line(line)
    }
}

impl From<EraseStroke> for DrawingObject {
    fn from(erase: EraseStroke) -> Self {
        DrawingObject::Erase(erase)
    }
}

/// Rolling-midpoint smoothing.
///
/// With three or more samples every interior sample becomes the control point
/// of a quadratic curve ending at the midpoint to the next sample. Two samples
/// give a straight segment and fewer give nothing drawable.
pub fn smooth_path(points: &[Pos2]) -> Vec<PathSegment> {
    match points {
        [] | [_] => Vec::new(),
        [first, second] => vec![PathSegment::MoveTo(*first), PathSegment::LineTo(*second)],
        [first, ..] => {
            let mut path = Vec::with_capacity(points.len() - 1);
            path.push(PathSegment::MoveTo(*first));
            for pair in points[1..].windows(2) {
                let (ctrl, next) = (pair[0], pair[1]);
                path.push(PathSegment::QuadTo {
                    ctrl,
                    to: ctrl.lerp(next, 0.5),
                });
            }
            path
        }
    }
}
