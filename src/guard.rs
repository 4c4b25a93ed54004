// Content-protection event blockers, kept as the thinnest possible
// interception layer. These are cosmetic only: they suppress the default
// browser UI for right-click, selection, copy/cut, drag, and the common
// devtools shortcuts, but they provide no actual access control. Page
// source and developer tools remain fully reachable in any modern browser.

use crate::dom_helpers::add_listener;
use wasm_bindgen::JsValue;
use web_sys::{Document, Event, KeyboardEvent};

const BLOCKED_EVENTS: [&str; 5] = ["contextmenu", "selectstart", "copy", "cut", "dragstart"];

pub fn install(document: &Document) -> Result<(), JsValue> {
    for event in BLOCKED_EVENTS.iter() {
        add_listener(
            document,
            event,
            Box::new(move |e: Event| {
                e.prevent_default();
            }) as Box<dyn FnMut(Event)>,
        )?;
    }
    add_listener(
        document,
        "keydown",
        Box::new(move |e: KeyboardEvent| {
            if is_blocked_shortcut(&e.key(), e.ctrl_key(), e.shift_key()) {
                e.prevent_default();
            }
        }) as Box<dyn FnMut(KeyboardEvent)>,
    )
}

/// F12, Ctrl+Shift+I/J/C (devtools), Ctrl+U (view source), Ctrl+S (save).
pub fn is_blocked_shortcut(key: &str, ctrl: bool, shift: bool) -> bool {
    match key {
        "F12" => true,
        "I" | "J" | "C" => ctrl && shift,
        "u" | "s" => ctrl,
        _ => false,
    }
}
