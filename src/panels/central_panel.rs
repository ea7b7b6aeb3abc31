use crate::StratMapApp;
use crate::tools::{ControllerState, ToolKind};

pub fn central_panel(app: &mut StratMapApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(egui::Color32::from_gray(24)))
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
            let canvas_rect = response.rect;

            app.handle_canvas_input(ctx, canvas_rect, response.contains_pointer());

            if let Some((texture, uv)) = app.render_canvas(ctx, canvas_rect) {
                painter.image(texture, canvas_rect, uv, egui::Color32::WHITE);
            }

            let controller = app.controller();
            let tool = controller.tool();
            if tool == ToolKind::Eraser {
                if let Some(pos) = app.hover_pos() {
                    // Sized in screen pixels, independent of zoom
                    let radius = controller.config().eraser_width / 2.0;
                    painter.circle(
                        pos,
                        radius,
                        egui::Color32::from_white_alpha(38),
                        egui::Stroke::new(2.0, egui::Color32::WHITE),
                    );
                }
            }

            let cursor = match controller.state() {
                ControllerState::Panning { .. } => egui::CursorIcon::Grabbing,
                _ if tool == ToolKind::Eraser => egui::CursorIcon::None,
                _ => tool.cursor(),
            };
            response.on_hover_cursor(cursor);
        });
}
