//! Browser-side tests for the DOM-facing surface.
//! Run with `wasm-pack test --headless --chrome`.

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use portfolio_effects_backend::{
    clock, guard, nav, pointer, reveal, typewriter, FieldAnimation, ParticleField,
};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

#[wasm_bindgen_test]
fn renders_onto_a_canvas() {
    let document = document();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    canvas.set_width(320);
    canvas.set_height(240);
    let context = canvas
        .get_context("2d")
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::CanvasRenderingContext2d>()
        .unwrap();

    let mut field = ParticleField::new(320.0, 240.0);
    field.initialize_particles(25);
    field.update();
    field.render(&context).unwrap();
    // Rendering twice without an update must also succeed (no state is
    // consumed by drawing).
    field.render(&context).unwrap();
}

#[wasm_bindgen_test]
fn attach_is_a_no_op_without_the_canvas() {
    assert!(FieldAnimation::attach("no-such-canvas").is_none());
}

#[wasm_bindgen_test]
fn attach_is_a_no_op_on_a_non_canvas_element() {
    let document = document();
    let div = document.create_element("div").unwrap();
    div.set_id("not-a-canvas");
    document.body().unwrap().append_child(&div).unwrap();
    assert!(FieldAnimation::attach("not-a-canvas").is_none());
    document.body().unwrap().remove_child(&div).unwrap();
}

#[wasm_bindgen_test]
fn attach_starts_and_stop_cancels() {
    let document = document();
    let canvas = document.create_element("canvas").unwrap();
    canvas.set_id("particles-under-test");
    document.body().unwrap().append_child(&canvas).unwrap();

    let animation =
        FieldAnimation::attach("particles-under-test").expect("animation should attach");
    animation.stop();

    document.body().unwrap().remove_child(&canvas).unwrap();
}

#[wasm_bindgen_test]
fn installers_skip_missing_elements() {
    // None of the portfolio markup exists in the test page; every
    // installer must treat that as a silent no-op.
    let document = document();
    nav::install(&document).unwrap();
    reveal::install(&document).unwrap();
    typewriter::install(&document).unwrap();
    clock::install(&document).unwrap();
    pointer::install(&document).unwrap();
    guard::install(&document).unwrap();
}
