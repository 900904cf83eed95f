use serde::{Deserialize, Serialize};

mod bitmap;
mod common;
mod shape;
mod stroke;

pub use bitmap::Bitmap;
pub use shape::{Shape, ShapeKind};
pub use stroke::{Blend, Stroke};

pub(crate) use common::distance_to_line_segment;

/// Everything that can be drawn on the canvas, in paint order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    Stroke(Stroke),
    Shape(Shape),
    Bitmap(Bitmap),
}

impl Element {
    /// Get the element type as a string
    pub fn element_type(&self) -> &'static str {
        match self {
            Element::Stroke(stroke) => match stroke.blend() {
                Blend::Paint => "stroke",
                Blend::Erase => "erase",
            },
            Element::Shape(shape) => match shape.kind() {
                ShapeKind::Rectangle => "rectangle",
                ShapeKind::Ellipse => "ellipse",
                ShapeKind::Line => "line",
            },
            Element::Bitmap(_) => "bitmap",
        }
    }
}

impl From<Stroke> for Element {
    fn from(stroke: Stroke) -> Self {
        Element::Stroke(stroke)
    }
}

impl From<Shape> for Element {
    fn from(shape: Shape) -> Self {
        Element::Shape(shape)
    }
}

impl From<Bitmap> for Element {
    fn from(bitmap: Bitmap) -> Self {
        Element::Bitmap(bitmap)
    }
}
