use egui::Pos2;
use serde::{Deserialize, Serialize};

use crate::brush::BrushSettings;
use crate::command::Command;
use crate::element::{Blend, Shape, ShapeKind, Stroke};
use crate::pixel::Rgba;

/// What a press on the canvas does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawMode {
    Pencil,
    Eraser,
    Rectangle,
    Ellipse,
    Line,
    Fill,
}

impl DrawMode {
    pub const ALL: [DrawMode; 6] = [
        DrawMode::Pencil,
        DrawMode::Eraser,
        DrawMode::Fill,
        DrawMode::Rectangle,
        DrawMode::Ellipse,
        DrawMode::Line,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DrawMode::Pencil => "Pencil",
            DrawMode::Eraser => "Eraser",
            DrawMode::Rectangle => "Rectangle",
            DrawMode::Ellipse => "Ellipse",
            DrawMode::Line => "Line",
            DrawMode::Fill => "Fill",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            DrawMode::Pencil => "✏",
            DrawMode::Eraser => "⌫",
            DrawMode::Rectangle => "⬜",
            DrawMode::Ellipse => "⭕",
            DrawMode::Line => "➖",
            DrawMode::Fill => "💧",
        }
    }

    pub fn is_shape(self) -> bool {
        self.shape_kind().is_some()
    }

    fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            DrawMode::Rectangle => Some(ShapeKind::Rectangle),
            DrawMode::Ellipse => Some(ShapeKind::Ellipse),
            DrawMode::Line => Some(ShapeKind::Line),
            DrawMode::Pencil | DrawMode::Eraser | DrawMode::Fill => None,
        }
    }
}

/// A gesture that has started but not finished. Nothing in here is part of
/// the document until the pointer is released.
#[derive(Debug, Clone, Default)]
enum Gesture {
    #[default]
    Idle,
    Stroke(Stroke),
    Shape(Shape),
}

/// Turns pointer events into commands according to the brush's draw mode
#[derive(Debug, Default)]
pub struct ToolState {
    gesture: Gesture,
}

impl ToolState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a press on the canvas. Fill completes immediately; every other
    /// mode starts a gesture.
    pub fn pointer_down(&mut self, pos: Pos2, brush: &BrushSettings) -> Option<Command> {
        let mode = brush.mode();
        self.gesture = match mode {
            DrawMode::Pencil => {
                let stroke = Stroke::begin(pos, brush.stroke_color(), brush.width(), Blend::Paint);
                Gesture::Stroke(stroke)
            }
            DrawMode::Eraser => {
                let stroke = Stroke::begin(pos, Rgba::TRANSPARENT, brush.width(), Blend::Erase);
                Gesture::Stroke(stroke)
            }
            DrawMode::Rectangle | DrawMode::Ellipse | DrawMode::Line => match mode.shape_kind() {
                Some(kind) => {
                    let shape = Shape::new(kind, pos, pos, brush.stroke_color(), brush.width());
                    Gesture::Shape(shape)
                }
                None => Gesture::Idle,
            },
            DrawMode::Fill => {
                return Some(Command::Fill {
                    x: pos.x.floor() as i64,
                    y: pos.y.floor() as i64,
                    color: brush.stroke_color(),
                });
            }
        };
        None
    }

    pub fn pointer_move(&mut self, pos: Pos2) {
        match &mut self.gesture {
            Gesture::Idle => {}
            Gesture::Stroke(stroke) => stroke.add_point(pos),
            Gesture::Shape(shape) => shape.set_end(pos),
        }
    }

    /// Finish the gesture. Shapes that were never dragged are discarded.
    pub fn pointer_up(&mut self, pos: Pos2) -> Option<Command> {
        match std::mem::take(&mut self.gesture) {
            Gesture::Idle => None,
            Gesture::Stroke(mut stroke) => {
                stroke.add_point(pos);
                Some(Command::AddStroke(stroke))
            }
            Gesture::Shape(mut shape) => {
                shape.set_end(pos);
                if shape.is_degenerate() {
                    log::debug!("Discarding zero-sized {:?}", shape.kind());
                    None
                } else {
                    Some(Command::AddShape(shape))
                }
            }
        }
    }

    /// Abandon the current gesture, e.g. when the mode changes mid-drag
    pub fn cancel(&mut self) {
        self.gesture = Gesture::Idle;
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.gesture, Gesture::Idle)
    }

    pub fn pending_stroke(&self) -> Option<&Stroke> {
        match &self.gesture {
            Gesture::Stroke(stroke) => Some(stroke),
            _ => None,
        }
    }

    pub fn pending_shape(&self) -> Option<&Shape> {
        match &self.gesture {
            Gesture::Shape(shape) => Some(shape),
            _ => None,
        }
    }
}
