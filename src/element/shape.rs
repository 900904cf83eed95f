use egui::{Pos2, Rect};
use serde::{Deserialize, Serialize};

use crate::element::common;
use crate::pixel::Rgba;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Rectangle,
    Ellipse,
    Line,
}

/// An outlined shape spanned by a drag from `start` to `end`.
///
/// Shapes are never filled. Rectangles and ellipses occupy the rectangle
/// spanned by the two points whichever direction the drag went; the ellipse
/// is inscribed in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    kind: ShapeKind,
    start: Pos2,
    end: Pos2,
    color: Rgba,
    width: f32,
}

impl Shape {
    pub fn new(kind: ShapeKind, start: Pos2, end: Pos2, color: Rgba, width: f32) -> Self {
        Self {
            kind,
            start,
            end,
            color,
            width,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn start(&self) -> Pos2 {
        self.start
    }

    pub fn end(&self) -> Pos2 {
        self.end
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn set_end(&mut self, end: Pos2) {
        self.end = end;
    }

    /// The normalized rectangle spanned by the drag
    pub fn rect(&self) -> Rect {
        Rect::from_two_pos(self.start, self.end)
    }

    /// True when the drag never moved, so there is nothing to draw
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// The outline as a polyline, closed for rectangles and ellipses
    pub fn outline(&self) -> Vec<Pos2> {
        match self.kind {
            ShapeKind::Line => vec![self.start, self.end],
            ShapeKind::Rectangle => {
                let rect = self.rect();
                vec![
                    rect.left_top(),
                    rect.right_top(),
                    rect.right_bottom(),
                    rect.left_bottom(),
                    rect.left_top(),
                ]
            }
            ShapeKind::Ellipse => common::ellipse_outline(self.rect(), common::ELLIPSE_SEGMENTS),
        }
    }
}
