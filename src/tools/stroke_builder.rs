use egui::Pos2;

use crate::color::HexColor;
use crate::drawing::{DrawingObject, EraseStroke, LineSegment, PathSegment, PenStroke, smooth_path};
use crate::error::CanvasResult;
use crate::history::HistoryAction;

#[derive(Debug, Clone, PartialEq)]
enum Shape {
    Pen { color: HexColor, points: Vec<Pos2> },
    Eraser { points: Vec<Pos2> },
    Line { color: HexColor, anchor: Pos2, cursor: Pos2 },
}

/// Accumulates pointer samples for the stroke in progress.
///
/// Exists only between pointer-down and pointer-up. Preview and commit build
/// the same [`DrawingObject`], so what is shown while drawing is exactly what
/// gets committed.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeBuilder {
    shape: Shape,
    width: f32,
}

impl StrokeBuilder {
    pub fn pen(color: HexColor, width: f32, start: Pos2) -> Self {
        Self {
            shape: Shape::Pen {
                color,
                points: vec![start],
            },
            width,
        }
    }

    pub fn eraser(width: f32, start: Pos2) -> Self {
        Self {
            shape: Shape::Eraser {
                points: vec![start],
            },
            width,
        }
    }

    pub fn line(color: HexColor, width: f32, anchor: Pos2) -> Self {
        Self {
            shape: Shape::Line {
                color,
                anchor,
                cursor: anchor,
            },
            width,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Feeds a new logical sample. For lines this only moves the free end.
    pub fn add_point(&mut self, pos: Pos2) {
        match &mut self.shape {
            Shape::Pen { points, .. } | Shape::Eraser { points } => points.push(pos),
            Shape::Line { cursor, .. } => *cursor = pos,
        }
    }

    /// Raw samples recorded so far (anchor and cursor for lines)
    pub fn points(&self) -> Vec<Pos2> {
        match &self.shape {
            Shape::Pen { points, .. } | Shape::Eraser { points } => points.clone(),
            Shape::Line { anchor, cursor, .. } => vec![*anchor, *cursor],
        }
    }

    /// Smoothed path of the samples so far
    pub fn path(&self) -> Vec<PathSegment> {
        match &self.shape {
            Shape::Pen { points, .. } | Shape::Eraser { points } => smooth_path(points),
            Shape::Line { anchor, cursor, .. } => {
                vec![PathSegment::MoveTo(*anchor), PathSegment::LineTo(*cursor)]
            }
        }
    }

    /// The object that would be committed right now, if it is drawable
    pub fn preview(&self) -> Option<DrawingObject> {
        self.build().ok()
    }

    /// Consumes the builder. Lines take `end` as their final point and are
    /// always produced; freehand strokes need at least two samples.
    pub fn finish(mut self, end: Pos2) -> CanvasResult<(DrawingObject, HistoryAction)> {
        if let Shape::Line { cursor, .. } = &mut self.shape {
            *cursor = end;
        }
        let action = match self.shape {
            Shape::Eraser { .. } => HistoryAction::Erase,
            Shape::Pen { .. } | Shape::Line { .. } => HistoryAction::Line,
        };
        Ok((self.build()?, action))
    }

    fn build(&self) -> CanvasResult<DrawingObject> {
        Ok(match &self.shape {
            Shape::Pen { color, points } => PenStroke::new(*color, self.width, points.clone())?.into(),
            Shape::Eraser { points } => EraseStroke::new(self.width, points.clone())?.into(),
            Shape::Line {
                color,
                anchor,
                cursor,
            } => LineSegment::new(*color, self.width, *anchor, *cursor).into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CanvasError;
    use egui::pos2;

    #[test]
    fn test_single_sample_is_not_drawable() {
        let builder = StrokeBuilder::pen(HexColor::SECONDARY, 6.0, pos2(1.0, 1.0));
        assert!(builder.preview().is_none());
        assert!(builder.path().is_empty());
        let err = builder.finish(pos2(2.0, 2.0)).unwrap_err();
        assert_eq!(err, CanvasError::DegenerateInput { points: 1 });
    }

    #[test]
    fn test_preview_matches_commit() {
        let mut builder = StrokeBuilder::eraser(64.0, pos2(0.0, 0.0));
        builder.add_point(pos2(5.0, 5.0));
        builder.add_point(pos2(10.0, 0.0));
        let preview = builder.preview().unwrap();
        let (committed, action) = builder.finish(pos2(99.0, 99.0)).unwrap();
        assert_eq!(preview, committed);
        assert_eq!(action, HistoryAction::Erase);
        assert_eq!(committed.width(), 64.0);
    }

    #[test]
    fn test_line_keeps_only_endpoints() {
        let mut builder = StrokeBuilder::line(HexColor::TERTIARY, 6.0, pos2(0.0, 0.0));
        builder.add_point(pos2(3.0, 3.0));
        builder.add_point(pos2(7.0, 1.0));
        assert_eq!(builder.points(), vec![pos2(0.0, 0.0), pos2(7.0, 1.0)]);

        let (line, action) = builder.finish(pos2(8.0, 2.0)).unwrap();
        assert_eq!(action, HistoryAction::Line);
        match line {
            DrawingObject::Line(line) => {
                assert_eq!(line.start(), pos2(0.0, 0.0));
                assert_eq!(line.end(), pos2(8.0, 2.0));
            }
            other => panic!("expected a line, got {other:?}"),
        }
    }

    #[test]
    fn test_click_without_drag_gives_zero_length_line() {
        let builder = StrokeBuilder::line(HexColor::PRIMARY, 6.0, pos2(4.0, 4.0));
        let (line, _) = builder.finish(pos2(4.0, 4.0)).unwrap();
        assert_eq!(line.path(), vec![PathSegment::MoveTo(pos2(4.0, 4.0)), PathSegment::LineTo(pos2(4.0, 4.0))]);
    }
}
