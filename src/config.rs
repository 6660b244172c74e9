// Tunables for the particle field. Defaults reproduce the portfolio backdrop:
// sky blue dots, at most 150 of them, linked when closer than 100px

use crate::color::Color;
use js_sys::Reflect;
use wasm_bindgen::JsValue;

/// Upper bound on `maxParticles` accepted from JavaScript.
pub const MAX_PARTICLES_LIMIT: usize = 10_000;

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    /// Canvas area (px²) that earns one particle.
    pub area_per_particle: f64,
    pub max_particles: usize,
    /// Pairs strictly closer than this are joined by a line.
    pub link_distance: f64,
    /// Per-axis speed bound; velocities are drawn from `[-max_speed, max_speed)`.
    pub max_speed: f64,
    pub radius_min: f64,
    pub radius_spread: f64,
    pub alpha_min: f64,
    pub alpha_spread: f64,
    pub hue: Color,
    pub link_alpha: f64,
    pub link_width: f64,
    /// Wrap every tick in a console timer.
    pub profile: bool,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            area_per_particle: 15000.0,
            max_particles: 150,
            link_distance: 100.0,
            max_speed: 0.25,
            radius_min: 0.5,
            radius_spread: 1.5,
            alpha_min: 0.2,
            alpha_spread: 0.5,
            hue: Color::from_u32(0x0ea5e9ff),
            link_alpha: 0.03,
            link_width: 0.5,
            profile: false,
        }
    }
}

impl FieldConfig {
    pub fn link_color(&self) -> Color {
        self.hue.with_alpha(self.link_alpha)
    }

    // Reads overrides from a plain JS object, e.g. `{ maxParticles: 80 }`.
    // Unknown, missing or non-numeric keys keep their defaults
    pub fn from_js(options: &JsValue) -> FieldConfig {
        let mut config = FieldConfig::default();
        if !options.is_object() {
            return config;
        }
        if let Some(v) = read_f64(options, "areaPerParticle").filter(|v| *v > 0.0) {
            config.area_per_particle = v;
        }
        if let Some(v) = read_f64(options, "maxParticles").filter(|v| *v >= 0.0) {
            config.max_particles = (v as usize).min(MAX_PARTICLES_LIMIT);
        }
        if let Some(v) = read_f64(options, "linkDistance") {
            config.link_distance = v;
        }
        if let Some(v) = read_f64(options, "maxSpeed").filter(|v| *v >= 0.0) {
            config.max_speed = v;
        }
        if let Some(v) = Reflect::get(options, &JsValue::from_str("profile"))
            .ok()
            .and_then(|v| v.as_bool())
        {
            config.profile = v;
        }
        config
    }
}

fn read_f64(options: &JsValue, key: &str) -> Option<f64> {
    Reflect::get(options, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_f64())
        .filter(|v| v.is_finite())
}
