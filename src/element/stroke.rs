use egui::Pos2;
use serde::{Deserialize, Serialize};

use crate::pixel::Rgba;

/// How a stroke combines with what is already on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Blend {
    /// Composite the stroke color over the canvas
    Paint,
    /// Clear the pixels under the stroke back to transparent
    Erase,
}

/// A freehand pencil or eraser stroke
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    points: Vec<Pos2>,
    color: Rgba,
    width: f32,
    blend: Blend,
}

impl Stroke {
    pub fn new(points: Vec<Pos2>, color: Rgba, width: f32, blend: Blend) -> Self {
        Self {
            points,
            color,
            width,
            blend,
        }
    }

    /// Start a stroke at a single point
    pub fn begin(start: Pos2, color: Rgba, width: f32, blend: Blend) -> Self {
        Self::new(vec![start], color, width, blend)
    }

    pub fn add_point(&mut self, point: Pos2) {
        // Pointer events often repeat the last position; skip those.
        if self.points.last() != Some(&point) {
            self.points.push(point);
        }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn blend(&self) -> Blend {
        self.blend
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
