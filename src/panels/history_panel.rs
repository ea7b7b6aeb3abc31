use crate::StratMapApp;

pub fn history_panel(app: &mut StratMapApp, ctx: &egui::Context) {
    egui::SidePanel::right("history_panel")
        .resizable(true)
        .default_width(140.0)
        .show(ctx, |ui| {
            ui.heading("History");

            let can_undo = app.controller().history().can_undo();
            if ui
                .add_enabled(can_undo, egui::Button::new("Undo"))
                .on_hover_text("Ctrl+Z")
                .clicked()
            {
                app.controller_mut().undo();
            }

            ui.separator();

            let mut jump = None;
            egui::ScrollArea::vertical().stick_to_bottom(true).show(ui, |ui| {
                let entries = app.controller().history().entries();
                let current = entries.len().saturating_sub(1);
                for (index, entry) in entries.iter().enumerate() {
                    let mut text = egui::RichText::new(format!("{}. {}", index + 1, entry.action.label()));
                    if let Some(accent) = entry.accent_color() {
                        text = text.color(accent.color32());
                    }
                    if ui.selectable_label(index == current, text).clicked() && index != current {
                        jump = Some(index);
                    }
                }
            });

            if let Some(index) = jump {
                app.controller_mut().jump_to(index);
            }
        });
}
