#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod brush;
pub mod canvas;
pub mod command;
mod components;
pub mod config;
pub mod document;
pub mod element;
pub mod error;
pub mod fill;
pub mod history;
mod panels;
pub mod pixel;
pub mod raster;
pub mod tool;

pub use app::PaintApp;
pub use brush::BrushSettings;
pub use canvas::Canvas;
pub use command::Command;
pub use config::{PadConfig, Settings};
pub use document::Document;
pub use element::Element;
pub use error::{ExportError, HistoryError, SceneError};
pub use fill::flood_fill;
pub use history::{History, Restore, Scene, Snapshot};
pub use pixel::{PixelBuffer, Rgba};
pub use tool::{DrawMode, ToolState};
