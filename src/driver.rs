// Frame driver for the particle field. Owns the requestAnimationFrame
// loop: each iteration steps the whole store, renders the frame, and
// schedules the next iteration at the display's refresh cadence. There is
// no catch-up logic; a slow frame just schedules the next one late.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::dom_helpers;
use crate::{ParticleField, Timer};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, CanvasRenderingContext2d, HtmlCanvasElement, Window};

/// Handle to a running particle-field animation.
///
/// The loop keeps itself scheduled through its own callback, so the handle
/// can be dropped without stopping the animation; `stop` is the only way
/// to end it short of tearing the page down.
#[wasm_bindgen]
pub struct FieldAnimation {
    running: Rc<Cell<bool>>,
    frame_id: Rc<Cell<i32>>,
}

#[wasm_bindgen]
impl FieldAnimation {
    /// Binds the animation to the canvas with the given element id, sizes
    /// it to the viewport, creates the particle store, and starts the
    /// loop. Returns `None` without touching the page when the element is
    /// missing or is not a canvas.
    pub fn attach(canvas_id: &str) -> Option<FieldAnimation> {
        FieldAnimation::try_attach(canvas_id).ok().flatten()
    }

    /// Stops the loop and cancels the pending animation frame.
    pub fn stop(&self) {
        self.running.set(false);
        if let Some(window) = dom_helpers::window() {
            let _ = window.cancel_animation_frame(self.frame_id.get());
        }
    }
}

impl FieldAnimation {
    fn try_attach(canvas_id: &str) -> Result<Option<FieldAnimation>, JsValue> {
        let window = match dom_helpers::window() {
            Some(window) => window,
            None => return Ok(None),
        };
        let document = match window.document() {
            Some(document) => document,
            None => return Ok(None),
        };
        let canvas = match document.get_element_by_id(canvas_id) {
            Some(element) => match element.dyn_into::<HtmlCanvasElement>() {
                Ok(canvas) => canvas,
                Err(_) => return Ok(None),
            },
            None => return Ok(None),
        };

        let (width, height) = viewport_size(&window);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let mut field = ParticleField::new(width, height);
        {
            let _timer = Timer::new("ParticleField::initialize_particles");
            field.initialize_particles(ParticleField::DEFAULT_COUNT);
        }
        let field = Rc::new(RefCell::new(field));

        let running = Rc::new(Cell::new(true));
        let frame_id = Rc::new(Cell::new(0));

        // Resize arrives between frames; the store is fully replaced before
        // the next frame reads it.
        {
            let field = field.clone();
            let canvas = canvas.clone();
            dom_helpers::add_listener(
                &window,
                "resize",
                Box::new(move |_: web_sys::Event| {
                    if let Some(window) = dom_helpers::window() {
                        let (width, height) = viewport_size(&window);
                        canvas.set_width(width as u32);
                        canvas.set_height(height as u32);
                        field.borrow_mut().resize(width, height);
                    }
                }) as Box<dyn FnMut(web_sys::Event)>,
            )?;
        }

        // The closure holds an Rc to itself so it can keep requesting the
        // next frame; storing it inside an Option lets us create it before
        // taking that reference.
        let callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let scheduled = callback.clone();
        {
            let running = running.clone();
            let frame_id = frame_id.clone();
            let field = field.clone();
            *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                if !running.get() {
                    return;
                }
                {
                    let mut field = field.borrow_mut();
                    field.update();
                    if let Err(err) = field.render(&context) {
                        console::error_1(&err);
                    }
                }
                if let Some(window) = dom_helpers::window() {
                    if let Ok(id) = window.request_animation_frame(
                        scheduled.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                    ) {
                        frame_id.set(id);
                    }
                }
            }) as Box<dyn FnMut()>));
        }

        frame_id.set(window.request_animation_frame(
            callback.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
        )?);

        Ok(Some(FieldAnimation { running, frame_id }))
    }
}

fn viewport_size(window: &Window) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    (width, height)
}
