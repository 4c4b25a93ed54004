// Painter that handles the CanvasRenderingContext2d calls for one frame:
// clearing the surface, filled circles for particles, and the fading
// connection lines between nearby pairs.

use crate::color::Color;
use crate::particle::Particle;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

/// Hue shared by particles and connection lines.
pub const BASE_COLOR: Color = Color { r: 0, g: 204, b: 153 };

/// Distance below which two particles get a connecting line.
pub const CONNECT_DISTANCE: f64 = 100.0;

/// Stroke alpha for a connection line between particles `distance` apart.
/// Fades linearly with distance and reaches zero exactly at
/// `CONNECT_DISTANCE`.
pub fn connection_alpha(distance: f64) -> f64 {
    (0.2 - distance / 500.0).max(0.0)
}

pub struct Painter {
    context: CanvasRenderingContext2d,
}

impl Painter {
    pub fn new(context: CanvasRenderingContext2d) -> Self {
        Painter { context }
    }

    pub fn clear(&self, width: f64, height: f64) {
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    #[allow(deprecated)]
    pub fn draw_particle(&self, p: &Particle) -> Result<(), JsValue> {
        let fill = JsValue::from_str(&BASE_COLOR.to_css_rgba(p.opacity));
        self.context.set_fill_style(&fill);
        self.context.begin_path();
        self.context
            .arc(p.x, p.y, p.size, 0.0, std::f64::consts::PI * 2.0)?;
        self.context.fill();
        Ok(())
    }

    #[allow(deprecated)]
    pub fn draw_connection(&self, a: &Particle, b: &Particle, alpha: f64) {
        let stroke = JsValue::from_str(&BASE_COLOR.to_css_rgba(alpha));
        self.context.set_stroke_style(&stroke);
        self.context.set_line_width(1.0);
        self.context.begin_path();
        self.context.move_to(a.x, a.y);
        self.context.line_to(b.x, b.y);
        self.context.stroke();
    }
}
