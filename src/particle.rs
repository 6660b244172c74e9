// Simple particle struct to keep track of individual position, velocity, size and color

use crate::color::Color;
use crate::config::FieldConfig;
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: [f64; 2],
    pub vel: [f64; 2],
    pub radius: f64,
    pub color: Color,
}

impl Particle {
    pub fn new(
        pos_x: f64,
        pos_y: f64,
        vel_x: f64,
        vel_y: f64,
        radius: f64,
        color: Color,
    ) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            radius,
            color,
        }
    }

    // Places a particle uniformly inside the extent with a random drift,
    // size and opacity
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        width: f64,
        height: f64,
        config: &FieldConfig,
    ) -> Particle {
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let radius = rng.gen::<f64>() * config.radius_spread + config.radius_min;
        let vel_x = (rng.gen::<f64>() - 0.5) * 2.0 * config.max_speed;
        let vel_y = (rng.gen::<f64>() - 0.5) * 2.0 * config.max_speed;
        let alpha = rng.gen::<f64>() * config.alpha_spread + config.alpha_min;
        Particle::new(pos_x, pos_y, vel_x, vel_y, radius, config.hue.with_alpha(alpha))
    }

    // Moves one frame's worth of velocity, then bounces on any axis that ended
    // up outside [0, extent]. Position is not pulled back in; the flipped
    // velocity brings it back on the next frame.
    pub fn advance(&mut self, width: f64, height: f64) {
        self.pos = vecmath::vec2_add(self.pos, self.vel);
        if self.pos[0] < 0.0 || self.pos[0] > width {
            self.vel[0] *= -1.0;
        }
        if self.pos[1] < 0.0 || self.pos[1] > height {
            self.vel[1] *= -1.0;
        }
    }
}
