//! WASM browser host for the todo widget.
//!
//! The page must contain a `<canvas id="the_canvas_id">`. The widget texts can
//! be overridden with a JSON script tag:
//!
//! ```html
//! <script id="todo-widget-config" type="application/json">{"title":"Groceries"}</script>
//! ```

use wasm_bindgen::prelude::*;
use todo_egui::{Error, TodoApp, WidgetConfig};

const CANVAS_ID: &str = "the_canvas_id";
const CONFIG_ELEMENT_ID: &str = "todo-widget-config";
const LOADING_ELEMENT_ID: &str = "loading_text";

/// WASM entry point - called from JavaScript.
#[wasm_bindgen(start)]
pub fn main() {
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = start().await {
            log::error!("Failed to start todo widget: {e:?}");
        }
    });
}

async fn start() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let config = read_config(&document);
    let canvas = find_canvas(&document).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let start_result = eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(move |cc| Ok(Box::new(TodoApp::new(config).with_repaint(&cc.egui_ctx)))),
        )
        .await;

    if let Some(loading_text) = document.get_element_by_id(LOADING_ELEMENT_ID) {
        match &start_result {
            Ok(()) => loading_text.remove(),
            Err(_) => loading_text.set_inner_html(
                "<p>The app has crashed. See the developer console for details.</p>",
            ),
        }
    }

    start_result
}

fn find_canvas(document: &web_sys::Document) -> todo_egui::Result<web_sys::HtmlCanvasElement> {
    document
        .get_element_by_id(CANVAS_ID)
        .and_then(|element| element.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        .ok_or_else(|| Error::MissingElement(CANVAS_ID.to_owned()))
}

/// Read the widget config from the DOM, falling back to defaults.
fn read_config(document: &web_sys::Document) -> WidgetConfig {
    let Some(json) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|script| script.text_content())
    else {
        return WidgetConfig::default();
    };

    WidgetConfig::from_json(&json).unwrap_or_else(|e| {
        log::warn!("Ignoring widget config: {e}");
        WidgetConfig::default()
    })
}
