// The particle set backing the backdrop. Owns every particle and the extent
// they bounce inside; regenerated wholesale whenever that extent changes.

use crate::config::FieldConfig;
use crate::particle::Particle;
use rand::Rng;

/// Number of particles a `width` x `height` canvas gets:
/// one per `area_per_particle` px², capped at `max_particles`.
pub fn particle_count(width: u32, height: u32, config: &FieldConfig) -> usize {
    let area = width as f64 * height as f64;
    let count = (area / config.area_per_particle).floor() as usize;
    count.min(config.max_particles)
}

/// Whether two positions are close enough to be joined by a line.
pub fn within_link(a: [f64; 2], b: [f64; 2], link_distance: f64) -> bool {
    glm::distance(&glm::vec2(a[0], a[1]), &glm::vec2(b[0], b[1])) < link_distance
}

#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    width: u32,
    height: u32,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new() -> ParticleField {
        ParticleField::default()
    }

    pub fn from_particles(width: u32, height: u32, particles: Vec<Particle>) -> ParticleField {
        ParticleField {
            width,
            height,
            particles,
        }
    }

    // Throws away the current set and spawns a fresh one sized for the new extent
    pub fn regenerate<R: Rng + ?Sized>(
        &mut self,
        width: u32,
        height: u32,
        config: &FieldConfig,
        rng: &mut R,
    ) {
        let num_particles = particle_count(width, height, config);
        let mut particles = Vec::with_capacity(num_particles);
        for _ in 0..num_particles {
            particles.push(Particle::spawn(rng, width as f64, height as f64, config));
        }
        self.width = width;
        self.height = height;
        self.particles = particles;
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn advance_all(&mut self) {
        let (width, height) = (self.width as f64, self.height as f64);
        for particle in &mut self.particles {
            particle.advance(width, height);
        }
    }

    // Every unordered pair closer than `link_distance`. Plain O(n²) scan,
    // n is capped by `max_particles`
    pub fn connections(
        &self,
        link_distance: f64,
    ) -> impl Iterator<Item = (&Particle, &Particle)> + '_ {
        let particles = &self.particles;
        (0..particles.len())
            .flat_map(move |i| {
                (i + 1..particles.len()).map(move |j| (&particles[i], &particles[j]))
            })
            .filter(move |(a, b)| within_link(a.pos, b.pos, link_distance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn dot(x: f64, y: f64) -> Particle {
        Particle::new(x, y, 0.0, 0.0, 1.0, Color::from_u32(0x000000ff))
    }

    #[test]
    fn count_is_zero_for_empty_canvas() {
        let config = FieldConfig::default();
        assert_eq!(particle_count(0, 0, &config), 0);
        assert_eq!(particle_count(1920, 0, &config), 0);
    }

    #[test]
    fn count_floors_area_ratio() {
        let config = FieldConfig::default();
        // 14_999 px² is not enough for a single particle
        assert_eq!(particle_count(14_999, 1, &config), 0);
        assert_eq!(particle_count(15_000, 1, &config), 1);
        assert_eq!(particle_count(800, 600, &config), 32);
    }

    #[test]
    fn count_reaches_cap_exactly() {
        let config = FieldConfig::default();
        assert_eq!(particle_count(15_000, 150, &config), 150);
    }

    #[test]
    fn count_clamps_above_cap() {
        let config = FieldConfig::default();
        assert_eq!(particle_count(15_000, 151, &config), 150);
        assert_eq!(particle_count(3840, 2160, &config), 150);
    }

    #[test]
    fn link_threshold_is_strict() {
        assert!(within_link([0.0, 0.0], [99.999, 0.0], 100.0));
        assert!(!within_link([0.0, 0.0], [100.0, 0.0], 100.0));
        assert!(!within_link([0.0, 0.0], [60.0, 80.0], 100.0));
        assert!(within_link([0.0, 0.0], [60.0, 79.99], 100.0));
    }

    #[test]
    fn connections_visit_each_close_pair_once() {
        let field = ParticleField::from_particles(
            500,
            500,
            vec![dot(0.0, 0.0), dot(50.0, 0.0), dot(400.0, 400.0), dot(0.0, 80.0)],
        );
        let pairs: Vec<_> = field.connections(100.0).map(|(a, b)| (a.pos, b.pos)).collect();
        assert_eq!(
            pairs,
            vec![
                ([0.0, 0.0], [50.0, 0.0]),
                ([0.0, 0.0], [0.0, 80.0]),
                ([50.0, 0.0], [0.0, 80.0]),
            ]
        );
    }

    #[test]
    fn regenerate_replaces_previous_set() {
        let config = FieldConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut field = ParticleField::new();
        field.regenerate(3840, 2160, &config, &mut rng);
        assert_eq!(field.len(), 150);

        field.regenerate(300, 200, &config, &mut rng);
        assert_eq!(field.len(), 4);
        assert_eq!((field.width(), field.height()), (300, 200));
        for p in field.particles() {
            assert!(p.pos[0] < 300.0 && p.pos[1] < 200.0);
        }
    }

    proptest! {
        #[test]
        fn particles_never_stray_more_than_one_step(
            seed in any::<u64>(),
            width in 1u32..2000,
            height in 1u32..2000,
            ticks in 0usize..400,
        ) {
            let config = FieldConfig::default();
            let mut rng = StdRng::seed_from_u64(seed);
            let mut field = ParticleField::new();
            field.regenerate(width, height, &config, &mut rng);
            for _ in 0..ticks {
                field.advance_all();
            }
            for p in field.particles() {
                let eps_x = p.vel[0].abs() + 1e-9;
                let eps_y = p.vel[1].abs() + 1e-9;
                prop_assert!(p.pos[0] >= -eps_x && p.pos[0] <= width as f64 + eps_x);
                prop_assert!(p.pos[1] >= -eps_y && p.pos[1] <= height as f64 + eps_y);
            }
        }

        #[test]
        fn bounce_flips_sign_and_keeps_speed(
            seed in any::<u64>(),
            width in 1u32..400,
            height in 1u32..400,
            ticks in 1usize..200,
        ) {
            let config = FieldConfig::default();
            let mut rng = StdRng::seed_from_u64(seed);
            let mut field = ParticleField::new();
            field.regenerate(width, height, &config, &mut rng);
            let (w, h) = (width as f64, height as f64);
            for _ in 0..ticks {
                let before: Vec<Particle> = field.particles().to_vec();
                field.advance_all();
                for (old, new) in before.iter().zip(field.particles()) {
                    let out_x = new.pos[0] < 0.0 || new.pos[0] > w;
                    let out_y = new.pos[1] < 0.0 || new.pos[1] > h;
                    let want_x = if out_x { -old.vel[0] } else { old.vel[0] };
                    let want_y = if out_y { -old.vel[1] } else { old.vel[1] };
                    prop_assert_eq!(new.vel, [want_x, want_y]);
                    prop_assert_eq!(new.vel[0].abs(), old.vel[0].abs());
                    prop_assert_eq!(new.vel[1].abs(), old.vel[1].abs());
                }
            }
        }
    }
}
