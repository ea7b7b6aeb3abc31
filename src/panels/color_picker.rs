use crate::StratMapApp;
use crate::color::HexColor;
use crate::palette::ColorSlot;

/// Floating picker, open while `app.color_picker` holds a color
pub fn color_picker_window(app: &mut StratMapApp, ctx: &egui::Context) {
    let Some(mut color) = app.color_picker else {
        return;
    };

    let mut open = true;
    let mut close = false;
    egui::Window::new("Color")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            egui::color_picker::color_picker_color32(ui, &mut color, egui::color_picker::Alpha::Opaque);
            let picked = HexColor::from(color);
            ui.monospace(picked.to_string());

            ui.horizontal(|ui| {
                if ui.button("Use as left").clicked() {
                    app.controller_mut().color_selected(ColorSlot::Left, picked);
                    close = true;
                }
                if ui.button("Use as right").clicked() {
                    app.controller_mut().color_selected(ColorSlot::Right, picked);
                    close = true;
                }
            });
            if ui.button("Add to palette").clicked() && !app.controller_mut().add_custom_color(picked) {
                log::debug!("{picked} is already in the palette");
            }
        });

    app.color_picker = (open && !close).then_some(color);
}
