// Utility helpers shared by the demo components.

use wasm_bindgen::JsValue;

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

pub fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|win| win.local_storage().ok().flatten())
}
