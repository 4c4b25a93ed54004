pub mod clock;
pub mod color;
pub mod dom_helpers;
pub mod driver;
pub mod guard;
pub mod nav;
pub mod painter;
pub mod particle;
pub mod pointer;
pub mod reveal;
pub mod typewriter;
mod utils;

use crate::painter::Painter;
use crate::particle::Particle;
use wasm_bindgen::prelude::*;
use web_sys::{console, CanvasRenderingContext2d};

pub use crate::driver::FieldAnimation;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

/// Installs every page behavior in one call: the particle field on the
/// `#particles` canvas plus the navigation, reveal, typewriter, clock,
/// pointer, and guard listeners. Each behavior checks for its own page
/// elements and silently skips installation when they are absent, so a
/// page carrying only some of the markup still gets the rest.
#[wasm_bindgen]
pub fn run() -> Result<(), JsValue> {
    utils::set_panic_hook();
    let document = match dom_helpers::document() {
        Some(document) => document,
        None => return Ok(()),
    };
    nav::install(&document)?;
    reveal::install(&document)?;
    typewriter::install(&document)?;
    clock::install(&document)?;
    pointer::install(&document)?;
    guard::install(&document)?;
    // The animation keeps itself alive through its scheduled callback;
    // dropping the handle leaves it running for the page lifetime.
    let _animation = FieldAnimation::attach("particles");
    Ok(())
}

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

/// The particle store: owns the surface dimensions and the current
/// generation of particles. A generation lives from one `initialize`
/// (or `resize`) to the next and is always discarded in full.
#[wasm_bindgen]
pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

#[wasm_bindgen]
impl ParticleField {
    pub fn new(width: f64, height: f64) -> ParticleField {
        ParticleField {
            width,
            height,
            particles: Vec::new(),
        }
    }

    /// Replaces the store with `num_particles` freshly spawned particles.
    pub fn initialize_particles(&mut self, num_particles: u32) {
        let mut rng = rand::thread_rng();
        let mut particles = Vec::with_capacity(num_particles as usize);
        for _ in 0..num_particles {
            particles.push(Particle::spawn(&mut rng, self.width, self.height));
        }
        self.particles = particles;
    }

    /// Advances every particle by one frame.
    pub fn update(&mut self) {
        for particle in &mut self.particles {
            *particle = particle.step(self.width, self.height);
        }
    }

    /// Draws the current generation: clear, then a filled circle per
    /// particle, then the connection lines. Pure function of the store,
    /// so repeated renders without an intervening `update` are identical.
    pub fn render(&self, context: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        let painter = Painter::new(context.clone());
        painter.clear(self.width, self.height);
        for particle in &self.particles {
            painter.draw_particle(particle)?;
        }
        for (i, j, alpha) in self.connections() {
            painter.draw_connection(&self.particles[i], &self.particles[j], alpha);
        }
        Ok(())
    }

    /// Adopts new surface dimensions and recreates the store so no stale
    /// particle sits outside the new bounds.
    pub fn resize(&mut self, width: f64, height: f64) {
        let count = self.particles.len() as u32;
        self.width = width;
        self.height = height;
        self.initialize_particles(count);
    }
}

impl ParticleField {
    /// Default generation size for the page background.
    pub const DEFAULT_COUNT: u32 = 100;

    pub fn with_particles(width: f64, height: f64, particles: Vec<Particle>) -> ParticleField {
        ParticleField {
            width,
            height,
            particles,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Every unordered pair closer than the connection threshold, with the
    /// stroke alpha for its line. Pairs at or beyond the threshold are
    /// absent; a particle never pairs with itself.
    pub fn connections(&self) -> Vec<(usize, usize, f64)> {
        let mut links = Vec::new();
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let distance = self.particles[i].distance_to(&self.particles[j]);
                if distance < painter::CONNECT_DISTANCE {
                    links.push((i, j, painter::connection_alpha(distance)));
                }
            }
        }
        links
    }
}
