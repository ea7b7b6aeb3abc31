use egui::{Color32, Rect};
use std::path::Path;

use crate::base_map::{BaseMap, PendingMap};
use crate::config::CanvasConfig;
use crate::event::LogEventHandler;
use crate::input::{InputEvent, InputHandler, ShortcutAction};
use crate::history::HistoryStack;
use crate::layer::{LayerId, LayerStore};
use crate::palette::Palette;
use crate::panels;
use crate::renderer::{Renderer, SurfaceSize};
use crate::tools::ToolController;

/// Where the optional JSON config is looked up, relative to the working directory
pub const CONFIG_PATH: &str = "stratmap.json";

pub struct StratMapApp {
    controller: ToolController,
    renderer: Renderer,
    base_map: Option<BaseMap>,
    pending_map: Option<PendingMap>,
    input: InputHandler,
    /// Palette as last written to storage
    saved_palette: Palette,
    /// Surface size used for the last rendered frame
    surface_size: Option<SurfaceSize>,
    pub(crate) layers_minimized: bool,
    pub(crate) color_picker: Option<Color32>,
}

impl StratMapApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = CanvasConfig::load(Path::new(CONFIG_PATH));
        let palette = cc.storage.map(|storage| Palette::load(storage)).unwrap_or_default();
        let mut app = Self::with_parts(config, palette);
        app.reload_map(&cc.egui_ctx);
        app
    }

    /// Builds the app without an eframe context: no persisted preferences and
    /// no base map until [`Self::reload_map`] is called.
    pub fn with_parts(config: CanvasConfig, palette: Palette) -> Self {
        let layers = LayerStore::new();
        let history = HistoryStack::new(layers.layer_count());
        let controller = ToolController::new(config, layers, history, palette.clone());
        controller.subscribe(Box::new(LogEventHandler));

        Self {
            controller,
            renderer: Renderer::new(),
            base_map: None,
            pending_map: None,
            input: InputHandler::new(Rect::NOTHING),
            saved_palette: palette,
            surface_size: None,
            layers_minimized: false,
            color_picker: None,
        }
    }

    pub fn controller(&self) -> &ToolController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut ToolController {
        &mut self.controller
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn has_base_map(&self) -> bool {
        self.base_map.is_some()
    }

    /// Starts (re)loading the configured base map. The current map stays until the new one arrives.
    pub fn reload_map(&mut self, ctx: &egui::Context) {
        self.pending_map = Some(PendingMap::request(&self.controller.config().base_map, ctx));
        self.poll_base_map();
    }

    fn poll_base_map(&mut self) {
        let Some(result) = self.pending_map.as_ref().and_then(PendingMap::poll) else {
            return;
        };
        self.pending_map = None;
        match result {
            Ok(map) => {
                self.base_map = Some(map);
                self.controller.request_redraw();
            }
            Err(e) => log::warn!("Drawing without a new base map: {e}"),
        }
    }

    pub fn open_color_picker(&mut self) {
        self.color_picker = Some(self.controller.draw_color().color32());
    }

    pub fn apply_shortcut(&mut self, ctx: &egui::Context, action: ShortcutAction) {
        log::debug!("Shortcut: {action:?}");
        match action {
            ShortcutAction::SelectTool(tool) => self.controller.set_tool(tool),
            ShortcutAction::OpenColorPicker => self.open_color_picker(),
            ShortcutAction::ClearLayer => self.controller.clear_layer(),
            ShortcutAction::ReloadMap => self.reload_map(ctx),
            ShortcutAction::Undo => self.controller.undo(),
            ShortcutAction::SelectLayer(id) => self.select_layer(id),
        }
    }

    pub fn select_layer(&mut self, id: LayerId) {
        self.controller.select_layer(id);
    }

    /// Feeds this frame's input for the canvas at `rect` to the controller.
    ///
    /// `canvas_has_pointer` comes from the canvas response, so presses on a
    /// window floating over the canvas never reach the tools.
    pub(crate) fn handle_canvas_input(&mut self, ctx: &egui::Context, rect: Rect, canvas_has_pointer: bool) {
        self.input.set_canvas_rect(rect);
        let typing = ctx.wants_keyboard_input();
        for event in self.input.process_input(ctx, canvas_has_pointer) {
            match event {
                InputEvent::PointerDown { pos, button } => self.controller.pointer_down(pos, button, rect),
                InputEvent::PointerMove { pos } => self.controller.pointer_move(pos, rect),
                InputEvent::PointerUp { pos, .. } => self.controller.pointer_up(pos, rect),
                InputEvent::PointerLeave { last_known_pos } => {
                    self.controller.pointer_leave(last_known_pos, rect)
                }
                InputEvent::Zoom(direction) => self.controller.zoom(direction),
                InputEvent::KeyDown { key, modifiers } => {
                    if typing {
                        continue;
                    }
                    if let Some(action) = ShortcutAction::from_key(key, modifiers) {
                        self.apply_shortcut(ctx, action);
                    }
                }
            }
        }
    }

    /// Re-renders the frame if anything changed. Returns the texture and the
    /// uv rect to paint it over `rect` with.
    pub(crate) fn render_canvas(&mut self, ctx: &egui::Context, rect: Rect) -> Option<(egui::TextureId, Rect)> {
        // Same points size as the input mapping, so both agree on the canvas center
        let size = SurfaceSize::new(rect.size(), ctx.pixels_per_point());
        let resized = self.surface_size != Some(size);
        if self.controller.take_redraw() || resized {
            self.surface_size = Some(size);
            let preview = self.controller.preview();
            let frame = self.renderer.render_frame(
                size,
                self.controller.view(),
                self.base_map.as_ref(),
                self.controller.layers().active_layer(),
                preview.as_ref(),
            );
            if frame.is_some() {
                self.renderer.upload(ctx);
            }
        }
        let uv = Rect::from_min_max(egui::Pos2::ZERO, size.uv_max());
        self.renderer.texture().map(|texture| (texture.id(), uv))
    }

    pub(crate) fn hover_pos(&self) -> Option<egui::Pos2> {
        self.input.hover_pos()
    }

    /// Lays out every panel for one frame
    pub fn ui(&mut self, ctx: &egui::Context) {
        self.poll_base_map();

        panels::tools_panel(self, ctx);
        panels::layers_panel(self, ctx);
        panels::history_panel(self, ctx);
        panels::color_picker_window(self, ctx);
        panels::central_panel(self, ctx);
    }

    fn persist_palette(&mut self, frame: &mut eframe::Frame) {
        if self.controller.palette() == &self.saved_palette {
            return;
        }
        if let Some(storage) = frame.storage_mut() {
            self.controller.palette().save(storage);
            self.saved_palette = self.controller.palette().clone();
        }
    }
}

impl eframe::App for StratMapApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.controller.palette().save(storage);
        self.saved_palette = self.controller.palette().clone();
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.ui(ctx);
        self.persist_palette(frame);
    }
}
