use crate::canvas::Canvas;
use crate::element::{Blend, Shape, ShapeKind, Stroke};
use crate::pixel::Rgba;

/// A completed user edit, ready to be applied to the canvas
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Finished pencil or eraser stroke
    AddStroke(Stroke),
    /// Finished outlined shape
    AddShape(Shape),
    /// Bucket fill from a seed pixel
    Fill { x: i64, y: i64, color: Rgba },
    /// Wipe the canvas
    Clear,
}

impl Command {
    /// Apply the command. Returns `true` if the canvas changed and the edit
    /// should be recorded in the history.
    pub fn execute(self, canvas: &mut Canvas) -> bool {
        match self {
            Command::AddStroke(stroke) => {
                if stroke.is_empty() {
                    return false;
                }
                canvas.add_element(stroke);
                true
            }
            Command::AddShape(shape) => {
                if shape.is_degenerate() {
                    return false;
                }
                canvas.add_element(shape);
                true
            }
            Command::Fill { x, y, color } => canvas.fill(x, y, color),
            Command::Clear => canvas.clear(),
        }
    }

    /// Short human readable description
    pub fn label(&self) -> &'static str {
        match self {
            Command::AddStroke(stroke) => match stroke.blend() {
                Blend::Paint => "Draw",
                Blend::Erase => "Erase",
            },
            Command::AddShape(shape) => match shape.kind() {
                ShapeKind::Rectangle => "Rectangle",
                ShapeKind::Ellipse => "Ellipse",
                ShapeKind::Line => "Line",
            },
            Command::Fill { .. } => "Fill",
            Command::Clear => "Clear",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn fill(color: Rgba) -> Command {
        Command::Fill {
            x: 0,
            y: 0,
            color,
        }
    }

    #[test]
    fn test_execute_reports_changes() {
        let mut canvas = Canvas::new(10, 10);

        assert!(!Command::Clear.execute(&mut canvas));
        let empty = Stroke::new(Vec::new(), Rgba::BLACK, 2.0, Blend::Paint);
        assert!(!Command::AddStroke(empty).execute(&mut canvas));

        let stroke = Stroke::begin(pos2(5.0, 5.0), Rgba::BLACK, 2.0, Blend::Paint);
        assert!(Command::AddStroke(stroke).execute(&mut canvas));

        assert!(!fill(Rgba::TRANSPARENT).execute(&mut canvas));
        assert!(fill(Rgba::WHITE).execute(&mut canvas));

        assert!(Command::Clear.execute(&mut canvas));
        assert!(canvas.document().is_empty());
    }

    #[test]
    fn test_degenerate_shape_rejected() {
        let mut canvas = Canvas::new(10, 10);
        let corner = pos2(3.0, 3.0);
        let shape = Shape::new(ShapeKind::Rectangle, corner, corner, Rgba::BLACK, 2.0);
        assert!(!Command::AddShape(shape).execute(&mut canvas));
        assert!(canvas.document().is_empty());
    }

    #[test]
    fn test_labels() {
        let erase = Stroke::begin(pos2(0.0, 0.0), Rgba::TRANSPARENT, 1.0, Blend::Erase);
        let erase = Command::AddStroke(erase);
        assert_eq!(erase.label(), "Erase");
        assert_eq!(fill(Rgba::BLACK).label(), "Fill");
    }
}
