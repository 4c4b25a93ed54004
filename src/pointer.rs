// Pointer-driven flourishes: the hero background shifts slightly against
// the cursor, and card icons pick up an accent color on hover.

use crate::dom_helpers::{self, add_listener};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, MouseEvent};

const PARALLAX_SCALE: f64 = 0.01;
const ACCENT_COLOR: &str = "#00ff99";

pub fn install(document: &Document) -> Result<(), JsValue> {
    hero_parallax(document)?;
    hover_accent(document)?;
    Ok(())
}

fn hero_parallax(document: &Document) -> Result<(), JsValue> {
    let doc = document.clone();
    add_listener(
        document,
        "mousemove",
        Box::new(move |event: MouseEvent| {
            let hero: HtmlElement = match doc.query_selector(".hero") {
                Ok(Some(element)) => match element.dyn_into() {
                    Ok(hero) => hero,
                    Err(_) => return,
                },
                _ => return,
            };
            let window = match dom_helpers::window() {
                Some(window) => window,
                None => return,
            };
            let center_x = window
                .inner_width()
                .ok()
                .and_then(|w| w.as_f64())
                .unwrap_or(0.0)
                / 2.0;
            let center_y = window
                .inner_height()
                .ok()
                .and_then(|h| h.as_f64())
                .unwrap_or(0.0)
                / 2.0;
            let move_x = (event.client_x() as f64 - center_x) * PARALLAX_SCALE;
            let move_y = (event.client_y() as f64 - center_y) * PARALLAX_SCALE;
            let _ = hero.style().set_property(
                "background-position",
                &format!("{}% {}%", 50.0 + move_x, 50.0 + move_y),
            );
        }) as Box<dyn FnMut(MouseEvent)>,
    )
}

fn hover_accent(document: &Document) -> Result<(), JsValue> {
    let cards = document.query_selector_all(".skill-card, .project-card")?;
    for index in 0..cards.length() {
        let card: Element = match cards.item(index).and_then(|n| n.dyn_into().ok()) {
            Some(card) => card,
            None => continue,
        };

        // mouseenter/mouseleave do not bubble, so each card gets its own
        // pair of listeners.
        let enter_card = card.clone();
        add_listener(
            &card,
            "mouseenter",
            Box::new(move |_: MouseEvent| {
                if let Some(icon) = card_icon(&enter_card) {
                    let _ = icon.style().set_property("color", ACCENT_COLOR);
                    let _ = icon.style().set_property("transition", "color 0.3s ease");
                }
            }) as Box<dyn FnMut(MouseEvent)>,
        )?;

        let leave_card = card.clone();
        add_listener(
            &card,
            "mouseleave",
            Box::new(move |_: MouseEvent| {
                if let Some(icon) = card_icon(&leave_card) {
                    let _ = icon.style().set_property("color", "");
                }
            }) as Box<dyn FnMut(MouseEvent)>,
        )?;
    }
    Ok(())
}

fn card_icon(card: &Element) -> Option<HtmlElement> {
    card.query_selector("i").ok()??.dyn_into().ok()
}
