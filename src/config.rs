use serde::{Deserialize, Serialize};

use crate::brush::BrushSettings;

/// Environment variable overriding the canvas width
pub const WIDTH_VAR: &str = "DRAWING_PAD_WIDTH";
/// Environment variable overriding the canvas height
pub const HEIGHT_VAR: &str = "DRAWING_PAD_HEIGHT";

/// Largest accepted canvas side, in pixels
pub const MAX_CANVAS_SIDE: usize = 4096;

/// Pad configuration, persisted between runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct PadConfig {
    pub canvas_width: usize,
    pub canvas_height: usize,
    /// Ctrl/Cmd+Z and friends
    pub keyboard_shortcuts: bool,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            canvas_width: 640,
            canvas_height: 480,
            keyboard_shortcuts: true,
        }
    }
}

impl PadConfig {
    /// Apply `DRAWING_PAD_WIDTH` / `DRAWING_PAD_HEIGHT` if they are set
    pub fn with_env_overrides(self) -> Self {
        let width = std::env::var(WIDTH_VAR).ok();
        let height = std::env::var(HEIGHT_VAR).ok();
        self.with_overrides(width.as_deref(), height.as_deref())
    }

    fn with_overrides(mut self, width: Option<&str>, height: Option<&str>) -> Self {
        if let Some(width) = width.and_then(|w| parse_side(WIDTH_VAR, w)) {
            self.canvas_width = width;
        }
        if let Some(height) = height.and_then(|h| parse_side(HEIGHT_VAR, h)) {
            self.canvas_height = height;
        }
        self
    }

    /// Canvas size clamped to `1..=MAX_CANVAS_SIDE`
    pub fn canvas_size(&self) -> (usize, usize) {
        (
            self.canvas_width.clamp(1, MAX_CANVAS_SIDE),
            self.canvas_height.clamp(1, MAX_CANVAS_SIDE),
        )
    }
}

fn parse_side(var: &str, value: &str) -> Option<usize> {
    match value.trim().parse::<usize>() {
        Ok(side) if (1..=MAX_CANVAS_SIDE).contains(&side) => Some(side),
        _ => {
            log::warn!("Ignoring {var}={value:?}: expected a size between 1 and {MAX_CANVAS_SIDE}");
            None
        }
    }
}

/// Everything the app persists through eframe storage
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub config: PadConfig,
    pub brush: BrushSettings,
}
