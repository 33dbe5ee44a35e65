use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Vertical scroll offset of the page, `0.0` when unavailable.
#[must_use]
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Lock or release page scrolling behind an overlay.
pub fn set_body_overflow(value: &str) {
    let Some(body) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.body())
    else {
        return;
    };
    if let Err(err) = body.style().set_property("overflow", value) {
        console_error(&format!(
            "failed to set body overflow: {}",
            js_error_message(&err)
        ));
    }
}
