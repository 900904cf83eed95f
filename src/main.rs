#![warn(clippy::all, rust_2018_idioms)]
// hide console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

// When compiling natively:
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([480.0, 320.0])
            .with_title("Drawing Pad"),
        ..Default::default()
    };
    eframe::run_native(
        "drawing_pad",
        native_options,
        Box::new(|cc| {
            let app = drawing_pad::PaintApp::new(cc)?;
            Ok(Box::new(app))
        }),
    )
}

// When compiling to web using trunk:
#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    // Redirect `log` message to `console.log` and friends:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            log::error!("No document to attach the canvas to");
            return;
        };

        let canvas = match document.get_element_by_id("the_canvas_id") {
            Some(element) => match element.dyn_into::<web_sys::HtmlCanvasElement>() {
                Ok(canvas) => canvas,
                Err(_) => {
                    log::error!("the_canvas_id was not a HtmlCanvasElement");
                    return;
                }
            },
            None => {
                log::error!("Failed to find the_canvas_id");
                return;
            }
        };

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| {
                    let app = drawing_pad::PaintApp::new(cc)?;
                    Ok(Box::new(app))
                }),
            )
            .await;

        if let Err(err) = start_result {
            log::error!("Failed to start eframe: {err:?}");
        }
    });
}
