// Live clock in the footer, refreshed once per second from the host's
// locale time formatting.

use crate::dom_helpers;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Document;

const TICK_MS: i32 = 1000;

pub fn install(document: &Document) -> Result<(), JsValue> {
    let element = match document.get_element_by_id("live-clock") {
        Some(element) => element,
        None => return Ok(()),
    };
    let window = match dom_helpers::window() {
        Some(window) => window,
        None => return Ok(()),
    };
    let callback = Closure::wrap(Box::new(move || {
        let now = js_sys::Date::new_0();
        let time = String::from(now.to_locale_time_string("en-US"));
        element.set_text_content(Some(&time));
    }) as Box<dyn FnMut()>);
    window.set_interval_with_callback_and_timeout_and_arguments_0(
        callback.as_ref().unchecked_ref(),
        TICK_MS,
    )?;
    callback.forget();
    Ok(())
}
