use egui::{Color32, Pos2, Rect, Sense, Vec2, pos2};

use crate::PaintApp;
use crate::element::Blend;

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    let texture = app.canvas_texture(ctx);

    egui::CentralPanel::default().show(ctx, |ui| {
        let size = Vec2::new(app.canvas().width() as f32, app.canvas().height() as f32);
        egui::ScrollArea::both().show(ui, |ui| {
            let (response, painter) = ui.allocate_painter(size, Sense::drag());
            let canvas_rect = response.rect;
            let to_canvas = |pos: Pos2| (pos - canvas_rect.min).to_pos2();
            let to_screen = |pos: Pos2| canvas_rect.min + pos.to_vec2();

            handle_input(app, ui, &response, to_canvas);

            // The canvas itself is transparent; show it on white paper.
            painter.rect_filled(canvas_rect, 0.0, Color32::WHITE);
            if let Some(texture) = texture {
                let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
                painter.image(texture, canvas_rect, uv, Color32::WHITE);
            }

            if let Some(stroke) = app.tool().pending_stroke() {
                let color = if stroke.blend() == Blend::Erase {
                    Color32::from_white_alpha(160)
                } else {
                    stroke.color().to_color32()
                };
                let points: Vec<Pos2> = stroke.points().iter().copied().map(to_screen).collect();
                if let [point] = points.as_slice() {
                    painter.circle_filled(*point, stroke.width() / 2.0, color);
                } else {
                    let line = egui::Stroke::new(stroke.width(), color);
                    painter.add(egui::Shape::line(points, line));
                }
            }

            if let Some(shape) = app.tool().pending_shape() {
                let points: Vec<Pos2> = shape.outline().into_iter().map(to_screen).collect();
                let stroke = egui::Stroke::new(shape.width(), shape.color().to_color32());
                painter.add(egui::Shape::line(points, stroke));
            }

            painter.rect_stroke(canvas_rect, 0.0, egui::Stroke::new(1.0, Color32::from_gray(120)));
        });
    });
}

fn handle_input(
    app: &mut PaintApp,
    ui: &egui::Ui,
    response: &egui::Response,
    to_canvas: impl Fn(Pos2) -> Pos2,
) {
    let (pressed, released, latest) = ui.input(|i| {
        let pointer = &i.pointer;
        (pointer.primary_pressed(), pointer.primary_released(), pointer.latest_pos())
    });
    let Some(pos) = latest else {
        return;
    };

    if pressed && response.hovered() {
        app.pointer_down(to_canvas(pos));
    } else if app.tool().is_active() {
        app.pointer_move(to_canvas(pos));
    }

    if released && app.tool().is_active() {
        app.pointer_up(to_canvas(pos));
    }
}
