use crate::StratMapApp;
use crate::layer::LayerId;

/// Bottom strip with one button per layer, collapsible to just the active one
pub fn layers_panel(app: &mut StratMapApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("layers_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let toggle = if app.layers_minimized { "▶" } else { "◀" };
            if ui.small_button(toggle).on_hover_text("Show or hide layers").clicked() {
                app.layers_minimized = !app.layers_minimized;
            }

            let active = app.controller().layers().active_id();
            if app.layers_minimized {
                ui.label(format!("Layer {active}"));
                return;
            }

            ui.label("Layers");
            let mut selected = None;
            for (index, layer) in app.controller().layers().layers().iter().enumerate() {
                let id = LayerId::new(index);
                let text = if layer.is_empty() {
                    egui::RichText::new(id.to_string())
                } else {
                    egui::RichText::new(id.to_string()).strong()
                };
                // Widget ids come from the layer uuid
                let response = ui
                    .push_id(layer.id, |ui| ui.selectable_label(id == active, text))
                    .inner
                    .on_hover_text(format!("{} ({} objects)", layer.name, layer.len()));
                if response.clicked() {
                    selected = Some(id);
                }
            }
            if let Some(id) = selected {
                app.select_layer(id);
            }
        });
    });
}
