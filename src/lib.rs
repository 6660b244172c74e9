// Animated particle backdrop for the portfolio page, compiled to wasm.
// `ParticleBackground` is the JS entry point; the simulation itself lives in
// `field`/`animator` and knows nothing about the browser.

mod utils;
extern crate nalgebra_glm as glm;

pub mod animator;
pub mod background;
pub mod canvas;
pub mod color;
pub mod config;
pub mod contact;
pub mod field;
pub mod particle;
pub mod reveal;
pub mod scheduler;
pub mod surface;

use wasm_bindgen::prelude::*;

pub use animator::Animator;
pub use background::ParticleBackground;
pub use color::Color;
pub use config::FieldConfig;
pub use field::{particle_count, ParticleField};
pub use particle::Particle;
pub use scheduler::{FrameHandle, FrameScheduler};
pub use surface::{Surface, SurfaceLost};

// Use `wee_alloc` as the global allocator when the feature is on
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}
