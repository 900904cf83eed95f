use crate::PaintApp;
use crate::brush::{PALETTE, THICK_WIDTH, THIN_WIDTH};
use crate::components::{ColorSwatch, ToolButton};
use crate::config::MAX_CANVAS_SIDE;
use crate::tool::DrawMode;

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let active_mode = app.brush().mode();
            for row in DrawMode::ALL.chunks(3) {
                ui.horizontal(|ui| {
                    for &mode in row {
                        if ToolButton::new(mode, mode == active_mode).show(ui).clicked() {
                            app.select_mode(mode);
                        }
                    }
                });
            }
            ui.separator();

            ui.horizontal(|ui| {
                let width = app.brush().width();
                if ui.selectable_label(width == THICK_WIDTH, "Thick").clicked() {
                    app.brush_mut().use_thick();
                }
                if ui.selectable_label(width == THIN_WIDTH, "Thin").clicked() {
                    app.brush_mut().use_thin();
                }
            });

            let active_color = app.brush().color().to_owned();
            egui::Grid::new("palette_grid")
                .num_columns(3)
                .spacing([4.0, 4.0])
                .show(ui, |ui| {
                    for row in PALETTE.chunks(3) {
                        for &hex in row {
                            let selected = hex.eq_ignore_ascii_case(&active_color);
                            if ColorSwatch::new(hex, selected).show(ui).clicked() {
                                log::debug!("Color selected: {hex}");
                                app.brush_mut().change_color(hex);
                            }
                        }
                        ui.end_row();
                    }
                });

            let mut percent = app.brush().opacity() * 100.0;
            if ui
                .add(egui::Slider::new(&mut percent, 0.0..=100.0).text("Opacity").suffix("%"))
                .changed()
            {
                app.brush_mut().change_opacity(percent);
            }
            ui.separator();

            // Undo/Redo section
            ui.horizontal(|ui| {
                let can_undo = app.history().can_undo();
                let can_redo = app.history().can_redo();

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.redo();
                }
            });

            let history = app.history();
            ui.horizontal(|ui| {
                ui.label(format!("Undo stack size: {}", history.undo_len()));
                ui.label(format!("Redo stack size: {}", history.redo_len()));
            });
            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Clear").clicked() {
                    app.clear();
                }
                if ui.button("Export PNG").clicked() {
                    app.export();
                }
            });

            ui.collapsing("Canvas", |ui| {
                let config = app.config_mut();
                ui.horizontal(|ui| {
                    let sides = 1..=MAX_CANVAS_SIDE;
                    ui.add(egui::DragValue::new(&mut config.canvas_width).range(sides.clone()));
                    ui.label("×");
                    ui.add(egui::DragValue::new(&mut config.canvas_height).range(sides));
                });
                ui.checkbox(&mut config.keyboard_shortcuts, "Keyboard shortcuts");
                if ui.button("New canvas").clicked() {
                    app.new_canvas();
                }
            });

            if let Some(status) = app.status() {
                ui.label(egui::RichText::new(status).weak());
            }
        });
}
