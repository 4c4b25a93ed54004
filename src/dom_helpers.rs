// Helper functions for the repetitive browser plumbing: window/document
// lookup and attaching long-lived event listeners.

use wasm_bindgen::closure::{Closure, WasmClosure};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, EventTarget, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// Attaches `handler` to `target` for the lifetime of the page. The closure
/// is leaked with `forget`; listeners installed this way are never removed.
pub fn add_listener<T>(target: &EventTarget, event: &str, handler: Box<T>) -> Result<(), JsValue>
where
    T: ?Sized + WasmClosure,
{
    let closure = Closure::wrap(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
