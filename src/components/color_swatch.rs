use eframe::egui;

use crate::pixel::Rgba;

/// Palette entry: a filled square, outlined in yellow when selected
pub struct ColorSwatch<'a> {
    pub hex: &'a str,
    pub selected: bool,
}

impl<'a> ColorSwatch<'a> {
    pub fn new(hex: &'a str, selected: bool) -> Self {
        Self { hex, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let size = egui::vec2(28.0, 28.0);
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let fill = Rgba::from_hex(self.hex, 1.0).unwrap_or(Rgba::BLACK).to_color32();
            let rect = if self.selected { rect.shrink(2.0) } else { rect };
            ui.painter().rect_filled(rect, 6.0, fill);

            let border = if self.selected {
                egui::Stroke::new(2.0, egui::Color32::from_rgb(250, 204, 21))
            } else if response.hovered() {
                egui::Stroke::new(2.0, egui::Color32::from_gray(90))
            } else {
                egui::Stroke::new(2.0, egui::Color32::from_gray(60))
            };
            ui.painter().rect_stroke(rect, 6.0, border);
        }

        response.on_hover_text(self.hex)
    }
}
