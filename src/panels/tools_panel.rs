use crate::StratMapApp;
use crate::color::HexColor;
use crate::components::{ColorSwatch, ToolButton};
use crate::palette::ColorSlot;
use crate::tools::ToolKind;
use crate::view::ZoomDirection;

pub fn tools_panel(app: &mut StratMapApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(160.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let active = app.controller().tool();
            ui.horizontal(|ui| {
                for tool in ToolKind::ALL {
                    if ToolButton::new(tool, tool == active).show(ui).clicked() {
                        log::info!("Tool selected from UI: {tool}");
                        app.controller_mut().set_tool(tool);
                    }
                }
            });

            ui.separator();
            view_section(app, ui);

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Clear layer").on_hover_text("Y").clicked() {
                    app.controller_mut().clear_layer();
                }
                if ui.button("Reload map").on_hover_text("A").clicked() {
                    app.reload_map(ctx);
                }
            });
            if !app.has_base_map() {
                ui.weak("No base map loaded");
            }

            ui.separator();
            palette_section(app, ui);
        });
}

fn view_section(app: &mut StratMapApp, ui: &mut egui::Ui) {
    let scale = app.controller().view().scale();
    ui.horizontal(|ui| {
        if ui.button("−").on_hover_text("Zoom out").clicked() {
            app.controller_mut().zoom(ZoomDirection::Out);
        }
        ui.label(format!("{:.0}%", scale * 100.0));
        if ui.button("+").on_hover_text("Zoom in").clicked() {
            app.controller_mut().zoom(ZoomDirection::In);
        }
        if ui.button("Reset").on_hover_text("Reset zoom and pan").clicked() {
            app.controller_mut().reset_view();
        }
    });
}

fn palette_section(app: &mut StratMapApp, ui: &mut egui::Ui) {
    ui.label("Colors");

    let palette = app.controller().palette().clone();
    let draw_color = app.controller().draw_color();

    ui.horizontal(|ui| {
        for (slot, name) in [(ColorSlot::Left, "Left"), (ColorSlot::Right, "Right")] {
            let color = palette.color(slot);
            ui.vertical(|ui| {
                ui.small(name);
                let response = ColorSwatch::new(color)
                    .size(28.0)
                    .outlined(color == draw_color)
                    .show(ui);
                if response.clicked() {
                    app.open_color_picker();
                }
            });
        }
    });
    if ui.button("Pick color…").on_hover_text("T").clicked() {
        app.open_color_picker();
    }

    ui.add_space(4.0);
    ui.small("Custom (click: left, right-click: right)");

    let mut assign: Option<(ColorSlot, HexColor)> = None;
    let mut remove: Option<usize> = None;
    ui.horizontal_wrapped(|ui| {
        for (index, &color) in palette.custom().iter().enumerate() {
            let response = ColorSwatch::new(color).show(ui);
            if response.clicked() {
                assign = Some((ColorSlot::Left, color));
            } else if response.secondary_clicked() {
                assign = Some((ColorSlot::Right, color));
            }
            if response.middle_clicked() {
                remove = Some(index);
            }
        }
    });
    if !palette.custom().is_empty() {
        ui.weak("Middle-click a swatch to remove it");
    }

    if let Some((slot, color)) = assign {
        app.controller_mut().color_selected(slot, color);
    }
    if let Some(index) = remove {
        app.controller_mut().remove_custom_color(index);
    }
}
