// Navigation behaviors: smooth-scrolling for same-page anchor links, the
// mobile hamburger menu, and the navbar backdrop change on scroll.

use crate::dom_helpers::{self, add_listener};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, HtmlElement, MouseEvent, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

pub fn install(document: &Document) -> Result<(), JsValue> {
    smooth_scroll(document)?;
    menu_toggle(document)?;
    navbar_backdrop(document)?;
    Ok(())
}

/// Hash links scroll their target into view instead of jumping. The target
/// is looked up by the href selector at click time; a missing target means
/// the click does nothing.
#[allow(deprecated)]
fn smooth_scroll(document: &Document) -> Result<(), JsValue> {
    let anchors = document.query_selector_all(r##"a[href^="#"]"##)?;
    for index in 0..anchors.length() {
        let anchor: Element = match anchors.item(index).and_then(|n| n.dyn_into().ok()) {
            Some(anchor) => anchor,
            None => continue,
        };
        let document = document.clone();
        let link = anchor.clone();
        add_listener(
            &anchor,
            "click",
            Box::new(move |event: MouseEvent| {
                event.prevent_default();
                let href = match link.get_attribute("href") {
                    Some(href) => href,
                    None => return,
                };
                if let Ok(Some(target)) = document.query_selector(&href) {
                    let mut options = ScrollIntoViewOptions::new();
                    options
                        .behavior(ScrollBehavior::Smooth)
                        .block(ScrollLogicalPosition::Start);
                    target.scroll_into_view_with_scroll_into_view_options(&options);
                }
            }) as Box<dyn FnMut(MouseEvent)>,
        )?;
    }
    Ok(())
}

fn menu_toggle(document: &Document) -> Result<(), JsValue> {
    let hamburger = match document.query_selector(".hamburger")? {
        Some(element) => element,
        None => return Ok(()),
    };
    let nav_links: HtmlElement = match document
        .query_selector(".nav-links")?
        .and_then(|e| e.dyn_into().ok())
    {
        Some(element) => element,
        None => return Ok(()),
    };
    add_listener(
        &hamburger,
        "click",
        Box::new(move |_: MouseEvent| {
            let _ = toggle_menu(&nav_links);
        }) as Box<dyn FnMut(MouseEvent)>,
    )
}

fn toggle_menu(nav_links: &HtmlElement) -> Result<(), JsValue> {
    let style = nav_links.style();
    let display = style.get_property_value("display")?;
    let next = if display == "flex" { "none" } else { "flex" };
    style.set_property("display", next)?;
    style.set_property("flex-direction", "column")?;
    style.set_property("position", "absolute")?;
    style.set_property("top", "60px")?;
    style.set_property("right", "20px")?;
    style.set_property("background-color", "rgba(10, 14, 39, 0.98)")?;
    style.set_property("padding", "1rem")?;
    style.set_property("border-radius", "5px")?;
    Ok(())
}

fn navbar_backdrop(document: &Document) -> Result<(), JsValue> {
    let window = match dom_helpers::window() {
        Some(window) => window,
        None => return Ok(()),
    };
    let document = document.clone();
    add_listener(
        &window,
        "scroll",
        Box::new(move |_: Event| {
            let scrolled = dom_helpers::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or(0.0);
            if let Ok(Some(navbar)) = document.query_selector(".navbar") {
                if let Ok(navbar) = navbar.dyn_into::<HtmlElement>() {
                    let color = if scrolled > 50.0 {
                        "rgba(10, 14, 39, 0.98)"
                    } else {
                        "rgba(10, 14, 39, 0.95)"
                    };
                    let _ = navbar.style().set_property("background-color", color);
                }
            }
        }) as Box<dyn FnMut(Event)>,
    )
}
