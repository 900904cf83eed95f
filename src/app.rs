use egui::{Key, KeyboardShortcut, Modifiers, Pos2, TextureHandle, TextureOptions};
use futures::executor::block_on;

use crate::brush::BrushSettings;
use crate::canvas::Canvas;
use crate::command::Command;
use crate::config::{PadConfig, Settings};
use crate::error::{ExportError, HistoryError, SceneError};
use crate::history::{History, Restore, Scene};
use crate::panels::{central_panel, tools_panel};
use crate::tool::{DrawMode, ToolState};

const UNDO_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);

pub struct PaintApp {
    settings: Settings,
    canvas: Canvas,
    history: History,
    tool: ToolState,
    texture: Option<TextureHandle>,
    texture_version: Option<u64>,
    /// Last error shown under the tools
    status: Option<String>,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, SceneError> {
        let settings: Settings = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        Self::with_settings(settings)
    }

    pub fn with_settings(mut settings: Settings) -> Result<Self, SceneError> {
        settings.config = settings.config.with_env_overrides();
        let (width, height) = settings.config.canvas_size();
        let canvas = Canvas::new(width, height);
        let history = History::new(canvas.snapshot()?);
        log::info!("Created a {width}x{height} canvas");

        Ok(Self {
            settings,
            canvas,
            history,
            tool: ToolState::new(),
            texture: None,
            texture_version: None,
            status: None,
        })
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn brush(&self) -> &BrushSettings {
        &self.settings.brush
    }

    pub fn brush_mut(&mut self) -> &mut BrushSettings {
        &mut self.settings.brush
    }

    pub fn config_mut(&mut self) -> &mut PadConfig {
        &mut self.settings.config
    }

    pub fn tool(&self) -> &ToolState {
        &self.tool
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Switch draw mode, abandoning any gesture in progress
    pub fn select_mode(&mut self, mode: DrawMode) {
        let brush = &mut self.settings.brush;
        match mode {
            DrawMode::Pencil => brush.use_pencil(),
            DrawMode::Eraser => brush.use_eraser(),
            DrawMode::Fill => brush.use_fill(),
            shape => brush.use_shape(shape),
        }
        self.tool.cancel();
        log::info!("Mode selected: {}", mode.name());
    }

    /// Run a command and record the resulting state
    pub fn execute(&mut self, command: Command) {
        let label = command.label();
        if !command.execute(&mut self.canvas) {
            log::debug!("{label} changed nothing");
            return;
        }
        match self.canvas.snapshot() {
            Ok(snapshot) => {
                self.history.capture(snapshot);
            }
            Err(err) => {
                log::warn!("Could not snapshot after {label}: {err}");
                self.status = Some(err.to_string());
            }
        }
    }

    pub fn pointer_down(&mut self, pos: Pos2) {
        if let Some(command) = self.tool.pointer_down(pos, &self.settings.brush) {
            self.execute(command);
        }
    }

    pub fn pointer_move(&mut self, pos: Pos2) {
        self.tool.pointer_move(pos);
    }

    pub fn pointer_up(&mut self, pos: Pos2) {
        if let Some(command) = self.tool.pointer_up(pos) {
            self.execute(command);
        }
    }

    pub fn undo(&mut self) {
        self.tool.cancel();
        let result = block_on(self.history.undo(&mut self.canvas));
        self.report_restore("Undo", result);
    }

    pub fn redo(&mut self) {
        self.tool.cancel();
        let result = block_on(self.history.redo(&mut self.canvas));
        self.report_restore("Redo", result);
    }

    fn report_restore(&mut self, action: &str, result: Result<Restore, HistoryError>) {
        match result {
            Ok(Restore::Applied) => {
                log::debug!("{action} applied");
                self.status = None;
            }
            Ok(Restore::Nothing) => {}
            Ok(Restore::Busy) => log::debug!("{action} ignored: restore in progress"),
            Err(err) => {
                log::warn!("{action} failed: {err}");
                self.status = Some(format!("{action} failed: {err}"));
            }
        }
    }

    pub fn clear(&mut self) {
        self.tool.cancel();
        self.execute(Command::Clear);
    }

    /// Save the canvas as `drawing-<timestamp>.png`: into the working
    /// directory natively, as a browser download on the web.
    pub fn export(&mut self) {
        let file_name = format!("drawing-{}.png", timestamp_secs());
        let result = self
            .canvas
            .export_png()
            .and_then(|png| save_png(&file_name, &png));
        match result {
            Ok(()) => {
                log::info!("Exported canvas to {file_name}");
                self.status = Some(format!("Saved {file_name}"));
            }
            Err(err) => {
                log::warn!("Export failed: {err}");
                self.status = Some(format!("Export failed: {err}"));
            }
        }
    }

    /// Throw the drawing away and start a blank canvas at the configured size
    pub fn new_canvas(&mut self) {
        let (width, height) = self.settings.config.canvas_size();
        let canvas = Canvas::new(width, height);
        let baseline = match canvas.snapshot() {
            Ok(snapshot) => snapshot,
            Err(err) => {
                log::warn!("Could not snapshot the new canvas: {err}");
                self.status = Some(err.to_string());
                return;
            }
        };
        if !self.history.reset(baseline) {
            return;
        }
        self.tool.cancel();
        self.canvas = canvas;
        self.texture_version = None;
        self.status = None;
        log::info!("Started a new {width}x{height} canvas");
    }

    /// Upload the canvas pixels if they changed since the last frame
    pub(crate) fn canvas_texture(&mut self, ctx: &egui::Context) -> Option<egui::TextureId> {
        let version = self.canvas.version();
        if self.texture.is_none() || self.texture_version != Some(version) {
            let image = self.canvas.pixels().to_color_image();
            if let Some(texture) = &mut self.texture {
                texture.set(image, TextureOptions::NEAREST);
            } else {
                self.texture = Some(ctx.load_texture("canvas", image, TextureOptions::NEAREST));
            }
            self.texture_version = Some(version);
        }
        self.texture.as_ref().map(TextureHandle::id)
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if !self.settings.config.keyboard_shortcuts {
            return;
        }
        // Shift+Z first: the plain undo shortcut would also match it.
        let redo_shift = KeyboardShortcut::new(Modifiers::COMMAND | Modifiers::SHIFT, Key::Z);
        if ctx.input_mut(|i| {
            i.consume_shortcut(&redo_shift) || i.consume_shortcut(&REDO_SHORTCUT)
        }) {
            self.redo();
        } else if ctx.input_mut(|i| i.consume_shortcut(&UNDO_SHORTCUT)) {
            self.undo();
        } else if ctx.input_mut(|i| i.consume_key(Modifiers::NONE, Key::Escape)) {
            self.tool.cancel();
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn save_png(file_name: &str, png: &[u8]) -> Result<(), ExportError> {
    std::fs::write(file_name, png)?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn save_png(file_name: &str, png: &[u8]) -> Result<(), ExportError> {
    use eframe::wasm_bindgen::JsCast as _;

    let js_error = |err: eframe::wasm_bindgen::JsValue| ExportError::Download(format!("{err:?}"));

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| ExportError::Download("no document".to_owned()))?;

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(png));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("image/png");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(js_error)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_error)?;

    let anchor = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| ExportError::Download("<a> is not an anchor element".to_owned()))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).map_err(js_error)
}

#[cfg(not(target_arch = "wasm32"))]
fn timestamp_secs() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn timestamp_secs() -> u64 {
    (js_sys::Date::now() / 1000.0) as u64
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.settings);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
