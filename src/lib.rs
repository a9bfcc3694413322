#[macro_use]
mod utils;

pub mod animation;
pub mod color;
pub mod config;
pub mod error;
pub mod field;
pub mod particle;
pub mod surface;
pub mod web;

use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

pub use crate::animation::{Animation, AnimationState, FrameScheduler, ResizeEvents};
pub use crate::color::Color;
pub use crate::config::{FieldConfig, SampleRange};
pub use crate::error::ParticleError;
pub use crate::field::{Link, ParticleField};
pub use crate::particle::Particle;
pub use crate::surface::{CommandLog, DrawCommand, Surface};

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

/// Field settings as seen from JavaScript.
#[wasm_bindgen]
pub struct ParticleOptions {
    config: FieldConfig,
}

#[wasm_bindgen]
impl ParticleOptions {
    #[wasm_bindgen(constructor)]
    pub fn new() -> ParticleOptions {
        ParticleOptions {
            config: FieldConfig::default(),
        }
    }

    pub fn sparse() -> ParticleOptions {
        ParticleOptions {
            config: FieldConfig::sparse(),
        }
    }

    pub fn set_count(&mut self, count: u32) {
        self.config.count = count as usize;
    }

    /// Takes an array of CSS hex strings, e.g. `["#fff", "#60a5fa"]`.
    pub fn set_palette(&mut self, palette: &js_sys::Array) -> Result<(), JsValue> {
        let mut colors = Vec::with_capacity(palette.length() as usize);
        for i in 0..palette.length() {
            let entry = palette.get(i);
            let hex = entry
                .as_string()
                .ok_or_else(|| ParticleError::InvalidColor(format!("{:?}", entry)))?;
            colors.push(Color::from_hex(&hex)?);
        }
        self.config.palette = colors;
        Ok(())
    }

    pub fn set_velocity(&mut self, min: f64, max: f64) {
        self.config.velocity = SampleRange::new(min, max);
    }

    pub fn set_radius(&mut self, min: f64, max: f64) {
        self.config.radius = SampleRange::new(min, max);
    }

    pub fn set_link_distance(&mut self, distance: f64) {
        self.config.link_distance = distance;
    }

    pub fn set_link_style(&mut self, max_alpha: f64, width: f64) {
        self.config.link_max_alpha = max_alpha;
        self.config.link_width = width;
    }

    pub fn set_particle_alpha(&mut self, alpha: f64) {
        self.config.particle_alpha = alpha;
    }

    pub fn set_overlay(&mut self, color: &str, alpha: f64) -> Result<(), JsValue> {
        self.config.overlay_color = Color::from_hex(color)?;
        self.config.overlay_alpha = alpha;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), JsValue> {
        self.config.validate()?;
        Ok(())
    }
}

impl Default for ParticleOptions {
    fn default() -> Self {
        ParticleOptions::new()
    }
}

/// Animated particle background filling a canvas the size of the window.
#[wasm_bindgen]
pub struct ParticleBackground {
    animation: Rc<RefCell<web::BrowserAnimation>>,
}

#[wasm_bindgen]
impl ParticleBackground {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<ParticleBackground, JsValue> {
        ParticleBackground::with_options(canvas, &ParticleOptions::new(), None)
    }

    /// A `seed` makes the initial particle layout repeatable.
    pub fn with_options(
        canvas: HtmlCanvasElement,
        options: &ParticleOptions,
        seed: Option<u32>,
    ) -> Result<ParticleBackground, JsValue> {
        let window = web::window()?;
        let (width, height) = web::window_size(&window)?;
        canvas.set_width(width);
        canvas.set_height(height);

        let config = options.config.clone();
        let field = match seed {
            Some(seed) => {
                ParticleField::new(width, height, config, &mut StdRng::seed_from_u64(seed as u64))?
            }
            None => ParticleField::new(width, height, config, &mut rand::thread_rng())?,
        };
        log!(
            "particle background: {} particles on {}x{}",
            field.particles().len(),
            width,
            height
        );

        let animation = web::attach(field, canvas)?;
        Ok(ParticleBackground { animation })
    }

    pub fn start(&self) -> Result<(), JsValue> {
        self.animation.borrow_mut().start()?;
        Ok(())
    }

    pub fn stop(&self) {
        self.animation.borrow_mut().stop();
    }

    pub fn is_running(&self) -> bool {
        self.animation.borrow().is_running()
    }

    /// Resizes the canvas and the field, for hosts that track size themselves.
    pub fn resize(&self, width: u32, height: u32) -> Result<(), JsValue> {
        self.animation.borrow_mut().on_resize(width, height)?;
        Ok(())
    }

    pub fn particle_count(&self) -> u32 {
        self.animation.borrow().field().particles().len() as u32
    }
}
