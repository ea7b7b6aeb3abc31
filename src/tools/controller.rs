use egui::{PointerButton, Pos2, Rect};

use super::{StrokeBuilder, ToolKind};
use crate::color::HexColor;
use crate::config::CanvasConfig;
use crate::drawing::DrawingObject;
use crate::event::{CanvasEvent, EventBus, EventHandler};
use crate::history::{HistoryAction, HistoryStack};
use crate::layer::{LayerId, LayerStore};
use crate::palette::{ColorSlot, Palette};
use crate::view::{ViewTransform, ZoomDirection};

/// What the pointer is currently doing on the canvas
#[derive(Debug, Clone, PartialEq)]
pub enum ControllerState {
    Idle,
    Panning { last: Pos2 },
    DrawingPen(StrokeBuilder),
    DrawingEraser(StrokeBuilder),
    DrawingLine(StrokeBuilder),
}

impl ControllerState {
    pub fn name(&self) -> &'static str {
        match self {
            ControllerState::Idle => "Idle",
            ControllerState::Panning { .. } => "Panning",
            ControllerState::DrawingPen(_) => "DrawingPen",
            ControllerState::DrawingEraser(_) => "DrawingEraser",
            ControllerState::DrawingLine(_) => "DrawingLine",
        }
    }

    fn builder(&self) -> Option<&StrokeBuilder> {
        match self {
            ControllerState::DrawingPen(b)
            | ControllerState::DrawingEraser(b)
            | ControllerState::DrawingLine(b) => Some(b),
            ControllerState::Idle | ControllerState::Panning { .. } => None,
        }
    }
}

/// Turns pointer, keyboard and UI events into layer, history and view changes.
///
/// Owns all mutable canvas state. Every operation runs to completion on
/// `&mut self`, so a handler can never observe a half-updated stroke.
#[derive(Debug)]
pub struct ToolController {
    config: CanvasConfig,
    layers: LayerStore,
    history: HistoryStack,
    view: ViewTransform,
    palette: Palette,
    tool: ToolKind,
    state: ControllerState,
    draw_color: HexColor,
    events: EventBus,
    needs_redraw: bool,
}

impl ToolController {
    pub fn new(config: CanvasConfig, layers: LayerStore, history: HistoryStack, palette: Palette) -> Self {
        let draw_color = palette.color(ColorSlot::Left);
        Self {
            config: config.sanitized(),
            layers,
            history,
            view: ViewTransform::default(),
            palette,
            tool: ToolKind::default(),
            state: ControllerState::Idle,
            draw_color,
            events: EventBus::new(),
            needs_redraw: true,
        }
    }

    /// Fresh session: empty layer bank, seeded history, default palette
    pub fn with_config(config: CanvasConfig) -> Self {
        let layers = LayerStore::new();
        let history = HistoryStack::new(layers.layer_count());
        Self::new(config, layers, history, Palette::default())
    }

    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.events.subscribe(handler);
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn layers(&self) -> &LayerStore {
        &self.layers
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    /// Color of the last stroke started, or the left slot after a layer switch
    pub fn draw_color(&self) -> HexColor {
        self.draw_color
    }

    /// The object being drawn, not yet committed
    pub fn preview(&self) -> Option<DrawingObject> {
        self.state.builder().and_then(StrokeBuilder::preview)
    }

    /// Returns whether a redraw was requested since the last call
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    pub fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    pub fn set_tool(&mut self, tool: ToolKind) {
        if tool == self.tool {
            return;
        }
        let old = std::mem::replace(&mut self.tool, tool);
        self.events.emit(CanvasEvent::ToolChanged { old, new: tool });
    }

    // --- pointer input ---

    pub fn pointer_down(&mut self, screen: Pos2, button: PointerButton, viewport: Rect) {
        if self.state != ControllerState::Idle {
            log::debug!("Ignoring {button:?} press while {}", self.state.name());
            return;
        }
        let Some(slot) = ColorSlot::from_button(button) else {
            return;
        };
        if slot == ColorSlot::Right && !self.tool.accepts_secondary_button() {
            return;
        }

        let logical = self.view.to_logical(screen, viewport);
        let pen_width = self.config.pen_width;
        self.state = match self.tool {
            ToolKind::Select => ControllerState::Panning { last: screen },
            ToolKind::Pen => {
                self.draw_color = self.palette.color(slot);
                ControllerState::DrawingPen(StrokeBuilder::pen(self.draw_color, pen_width, logical))
            }
            ToolKind::Eraser => {
                ControllerState::DrawingEraser(StrokeBuilder::eraser(self.config.eraser_width, logical))
            }
            ToolKind::Line => {
                self.draw_color = self.palette.color(slot);
                ControllerState::DrawingLine(StrokeBuilder::line(self.draw_color, pen_width, logical))
            }
        };
        log::debug!("Pointer down at {logical:?}: {}", self.state.name());
    }

    pub fn pointer_move(&mut self, screen: Pos2, viewport: Rect) {
        let logical = self.view.to_logical(screen, viewport);
        match &mut self.state {
            ControllerState::Idle => {}
            ControllerState::Panning { last } => {
                let delta = screen - *last;
                *last = screen;
                self.view.pan_by(delta);
                self.view_changed();
            }
            ControllerState::DrawingPen(builder)
            | ControllerState::DrawingEraser(builder)
            | ControllerState::DrawingLine(builder) => {
                builder.add_point(logical);
                self.needs_redraw = true;
            }
        }
    }

    pub fn pointer_up(&mut self, screen: Pos2, viewport: Rect) {
        let logical = self.view.to_logical(screen, viewport);
        match std::mem::replace(&mut self.state, ControllerState::Idle) {
            ControllerState::Idle | ControllerState::Panning { .. } => {}
            ControllerState::DrawingPen(builder)
            | ControllerState::DrawingEraser(builder)
            | ControllerState::DrawingLine(builder) => self.commit(builder, logical),
        }
    }

    /// Leaving the canvas ends the gesture exactly like releasing the button
    pub fn pointer_leave(&mut self, screen: Pos2, viewport: Rect) {
        self.pointer_up(screen, viewport);
    }

    fn commit(&mut self, builder: StrokeBuilder, end: Pos2) {
        self.needs_redraw = true;
        let (object, action) = match builder.finish(end) {
            Ok(done) => done,
            Err(e) => {
                log::debug!("Discarding stroke: {e}");
                return;
            }
        };
        let layer = self.layers.active_id();
        self.layers.push(object);
        self.history.record(action, self.layers.active_layer().snapshot());
        log::info!("Committed {action} on layer {layer}");
        self.events.emit(CanvasEvent::DrawingCommitted { layer, action });
        self.history_changed();
    }

    // --- view ---

    pub fn zoom(&mut self, direction: ZoomDirection) {
        self.view.zoom(direction, &self.config.zoom);
        self.view_changed();
    }

    pub fn reset_view(&mut self) {
        self.view.reset();
        self.view_changed();
    }

    fn view_changed(&mut self) {
        self.needs_redraw = true;
        self.events.emit(CanvasEvent::ViewChanged {
            scale: self.view.scale(),
            offset: self.view.offset(),
        });
    }

    // --- layers and history ---

    /// Switches layer, dropping any stroke in progress
    pub fn select_layer(&mut self, id: LayerId) {
        let old = self.layers.active_id();
        if let Err(e) = self.layers.switch_to(id).and_then(|()| self.history.set_layer(id)) {
            log::warn!("Layer switch ignored: {e}");
            return;
        }
        self.state = ControllerState::Idle;
        self.draw_color = self.palette.color(ColorSlot::Left);
        self.needs_redraw = true;
        self.events.emit(CanvasEvent::LayerSwitched { old, new: id });
    }

    /// Empties the active layer. Recorded in history so it can be undone.
    pub fn clear_layer(&mut self) {
        let layer = self.layers.active_id();
        if self.layers.active_layer().is_empty() {
            return;
        }
        self.layers.clear();
        self.history.record(HistoryAction::Clear, Vec::new());
        self.needs_redraw = true;
        self.events.emit(CanvasEvent::LayerCleared { layer });
        self.history_changed();
    }

    pub fn undo(&mut self) {
        match self.history.undo(&mut self.layers) {
            Ok(true) => {
                self.needs_redraw = true;
                self.history_changed();
            }
            Ok(false) => log::debug!("Nothing to undo on layer {}", self.layers.active_id()),
            Err(e) => log::warn!("Undo failed: {e}"),
        }
    }

    /// Restores history entry `index` of the active layer, discarding later entries
    pub fn jump_to(&mut self, index: usize) {
        if let Err(e) = self.history.jump_to(index, &mut self.layers) {
            log::warn!("History jump ignored: {e}");
            return;
        }
        self.needs_redraw = true;
        self.history_changed();
    }

    fn history_changed(&self) {
        self.events.emit(CanvasEvent::HistoryChanged {
            layer: self.history.active_layer(),
            len: self.history.len(),
        });
    }

    // --- palette ---

    /// A palette slot was assigned a new color
    pub fn color_selected(&mut self, slot: ColorSlot, color: HexColor) {
        self.palette.color_selected(slot, color);
        if slot == ColorSlot::Left && self.tool == ToolKind::Pen {
            self.draw_color = color;
        }
    }

    pub fn add_custom_color(&mut self, color: HexColor) -> bool {
        self.palette.add_custom(color)
    }

    pub fn remove_custom_color(&mut self, index: usize) {
        if let Some(removed) = self.palette.remove_custom(index) {
            if self.draw_color == removed {
                self.draw_color = self.palette.color(ColorSlot::Left);
            }
        }
    }
}
