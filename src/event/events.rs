use egui::Vec2;

use crate::history::HistoryAction;
use crate::layer::LayerId;
use crate::tools::ToolKind;

#[derive(Debug, Clone, PartialEq)]
pub enum CanvasEvent {
    ToolChanged {
        old: ToolKind,
        new: ToolKind,
    },
    LayerSwitched {
        old: LayerId,
        new: LayerId,
    },
    /// A drawing object was appended to a layer
    DrawingCommitted {
        layer: LayerId,
        action: HistoryAction,
    },
    LayerCleared {
        layer: LayerId,
    },
    /// The layer's history changed length (record, undo or jump)
    HistoryChanged {
        layer: LayerId,
        len: usize,
    },
    ViewChanged {
        scale: f32,
        offset: Vec2,
    },
}
