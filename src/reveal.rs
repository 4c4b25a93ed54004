// Scroll-triggered reveals: cards fade in the first time they enter the
// viewport, and skill progress bars pick up their fill width from a data
// attribute when at least half visible.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

pub fn install(document: &Document) -> Result<(), JsValue> {
    fade_in_cards(document)?;
    progress_bars(document)?;
    Ok(())
}

#[allow(deprecated)]
fn fade_in_cards(document: &Document) -> Result<(), JsValue> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = match entry.dyn_into() {
                    Ok(entry) => entry,
                    Err(_) => continue,
                };
                if entry.is_intersecting() {
                    let _ = entry.target().class_list().add_1("fade-in-up");
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let mut options = IntersectionObserverInit::new();
    options
        .threshold(&JsValue::from(0.1))
        .root_margin("0px 0px -50px 0px");
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    observe_all(document, &observer, ".skill-card, .project-card, .quick-link-card")
}

#[allow(deprecated)]
fn progress_bars(document: &Document) -> Result<(), JsValue> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = match entry.dyn_into() {
                    Ok(entry) => entry,
                    Err(_) => continue,
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let bar: HtmlElement = match entry.target().dyn_into() {
                    Ok(bar) => bar,
                    Err(_) => continue,
                };
                if let Some(progress) = bar.get_attribute("data-progress") {
                    let _ = bar
                        .style()
                        .set_property("--progress", &format!("{}%", progress));
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let mut options = IntersectionObserverInit::new();
    options.threshold(&JsValue::from(0.5));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    observe_all(document, &observer, ".progress-bar")
}

fn observe_all(
    document: &Document,
    observer: &IntersectionObserver,
    selector: &str,
) -> Result<(), JsValue> {
    let nodes = document.query_selector_all(selector)?;
    for index in 0..nodes.length() {
        if let Some(element) = nodes
            .item(index)
            .and_then(|n| n.dyn_into::<Element>().ok())
        {
            observer.observe(&element);
        }
    }
    Ok(())
}
