use serde::{Deserialize, Serialize};

use crate::pixel::Rgba;
use crate::tool::DrawMode;

pub const DEFAULT_COLOR: &str = "#000000";
pub const DEFAULT_WIDTH: f32 = 10.0;
pub const DEFAULT_OPACITY: f32 = 1.0;
pub const THICK_WIDTH: f32 = 20.0;
pub const THIN_WIDTH: f32 = 10.0;

/// Swatches offered in the palette, three per row
#[rustfmt::skip]
pub const PALETTE: [&str; 18] = [
    "#000000", "#808080", "#0000FF",
    "#FFFFFF", "#A9A9A9", "#00BFFF",
    "#008000", "#8B0000", "#8B4513",
    "#90EE90", "#FF0000", "#FFA500",
    "#DAA520", "#800080", "#F08080",
    "#FFD700", "#FF00FF", "#FFB6C1",
];

/// The active drawing mode and brush parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushSettings {
    /// `#rrggbb`
    color: String,
    width: f32,
    /// `0.0..=1.0`
    opacity: f32,
    mode: DrawMode,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_owned(),
            width: DEFAULT_WIDTH,
            opacity: DEFAULT_OPACITY,
            mode: DrawMode::Pencil,
        }
    }
}

impl BrushSettings {
    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn mode(&self) -> DrawMode {
        self.mode
    }

    /// Select a `#rrggbb` color. Invalid colors are ignored.
    pub fn change_color(&mut self, hex: &str) {
        if Rgba::from_hex(hex, self.opacity).is_none() {
            log::warn!("Ignoring invalid color {hex:?}");
            return;
        }
        self.color = hex.to_owned();
    }

    /// Set the opacity from a slider percentage
    pub fn change_opacity(&mut self, percent: f32) {
        self.opacity = (percent / 100.0).clamp(0.0, 1.0);
    }

    pub fn use_pencil(&mut self) {
        self.mode = DrawMode::Pencil;
    }

    /// Use the thick width. Keeps erasing if the eraser is active, otherwise
    /// switches to the pencil.
    pub fn use_thick(&mut self) {
        self.set_width_keeping_eraser(THICK_WIDTH);
    }

    /// Use the thin width. Keeps erasing if the eraser is active, otherwise
    /// switches to the pencil.
    pub fn use_thin(&mut self) {
        self.set_width_keeping_eraser(THIN_WIDTH);
    }

    fn set_width_keeping_eraser(&mut self, width: f32) {
        self.width = width;
        if self.mode != DrawMode::Eraser {
            self.mode = DrawMode::Pencil;
        }
    }

    pub fn use_eraser(&mut self) {
        self.mode = DrawMode::Eraser;
    }

    /// Switch to one of the shape modes. Other modes are ignored.
    pub fn use_shape(&mut self, shape: DrawMode) {
        if shape.is_shape() {
            self.mode = shape;
        }
    }

    pub fn use_fill(&mut self) {
        self.mode = DrawMode::Fill;
    }

    /// The current color with the current opacity applied
    pub fn stroke_color(&self) -> Rgba {
        Rgba::from_hex(&self.color, self.opacity).unwrap_or(Rgba::BLACK)
    }
}
