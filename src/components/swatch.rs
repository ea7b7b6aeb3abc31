use crate::color::HexColor;

/// A clickable color chip. Reports both primary and secondary clicks.
pub struct ColorSwatch {
    color: HexColor,
    size: f32,
    outlined: bool,
}

impl ColorSwatch {
    pub fn new(color: HexColor) -> Self {
        Self {
            color,
            size: 20.0,
            outlined: false,
        }
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Draws a highlight ring, used for the active palette slot
    pub fn outlined(mut self, outlined: bool) -> Self {
        self.outlined = outlined;
        self
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(self.size, self.size), egui::Sense::click());

        if ui.is_rect_visible(rect) {
            ui.painter().rect_filled(rect, 3.0, self.color.color32());
            let ring = if self.outlined {
                egui::Stroke::new(2.0, egui::Color32::WHITE)
            } else if response.hovered() {
                egui::Stroke::new(1.0, egui::Color32::LIGHT_GRAY)
            } else {
                egui::Stroke::new(1.0, egui::Color32::from_gray(20))
            };
            ui.painter().rect_stroke(rect, 3.0, ring);
        }

        response.on_hover_text(self.color.to_string())
    }
}
