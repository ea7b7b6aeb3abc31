use std::fmt;

mod controller;
mod stroke_builder;

pub use controller::{ControllerState, ToolController};
pub use stroke_builder::StrokeBuilder;

/// The selected tool. This is configuration, not drag state: the
/// controller's [`ControllerState`] says what the pointer is doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolKind {
    /// Drag to pan the map
    #[default]
    Select,
    Pen,
    Eraser,
    Line,
}

impl ToolKind {
    pub const ALL: [ToolKind; 4] = [ToolKind::Select, ToolKind::Pen, ToolKind::Eraser, ToolKind::Line];

    pub fn name(&self) -> &'static str {
        match self {
            ToolKind::Select => "Select",
            ToolKind::Pen => "Pen",
            ToolKind::Eraser => "Eraser",
            ToolKind::Line => "Line",
        }
    }

    /// Whether the secondary button draws with the right-click color
    pub fn accepts_secondary_button(&self) -> bool {
        matches!(self, ToolKind::Pen | ToolKind::Line)
    }

    /// Whether the palette slots apply to this tool
    pub fn uses_color(&self) -> bool {
        self.accepts_secondary_button()
    }

    pub fn cursor(&self) -> egui::CursorIcon {
        match self {
            ToolKind::Select => egui::CursorIcon::Move,
            ToolKind::Pen | ToolKind::Eraser | ToolKind::Line => egui::CursorIcon::Crosshair,
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
