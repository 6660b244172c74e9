// Drives the particle field: owns the particle set, the surface it draws on,
// and the pending frame request. The host calls `mount`/`unmount` around the
// lifetime of its canvas, `resize` on viewport changes, and `on_frame` from
// its frame callback.

use crate::config::FieldConfig;
use crate::field::ParticleField;
use crate::scheduler::{FrameHandle, FrameScheduler};
use crate::surface::{Surface, SurfaceLost};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct Animator<S, F, R = StdRng> {
    config: FieldConfig,
    field: ParticleField,
    surface: Option<S>,
    scheduler: F,
    // Only a frame recorded here may draw. Cleared on unmount so a callback
    // the host already queued bails out.
    pending: Option<FrameHandle>,
    rng: R,
}

impl<S: Surface, F: FrameScheduler> Animator<S, F, StdRng> {
    pub fn new(config: FieldConfig, scheduler: F) -> Self {
        Animator::with_rng(config, scheduler, StdRng::from_entropy())
    }
}

impl<S: Surface, F: FrameScheduler, R: Rng> Animator<S, F, R> {
    pub fn with_rng(config: FieldConfig, scheduler: F, rng: R) -> Self {
        Animator {
            config,
            field: ParticleField::new(),
            surface: None,
            scheduler,
            pending: None,
            rng,
        }
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut F {
        &mut self.scheduler
    }

    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    /// True while a next frame is queued with the host.
    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    // Sizes the surface, spawns the particle set and draws the first frame
    // right away. Mounting over a live surface unmounts it first.
    pub fn mount(&mut self, mut surface: S, width: u32, height: u32) {
        self.unmount();
        surface.set_size(width, height);
        self.field.regenerate(width, height, &self.config, &mut self.rng);
        self.surface = Some(surface);
        self.run_frame();
    }

    // Full regeneration for the new extent; old particles are not rescaled.
    // Ignored while unmounted.
    pub fn resize(&mut self, width: u32, height: u32) {
        let surface = match self.surface.as_mut() {
            Some(surface) => surface,
            None => return,
        };
        surface.set_size(width, height);
        self.field.regenerate(width, height, &self.config, &mut self.rng);
    }

    // Cancels the queued frame and hands the surface back. Safe to call any
    // number of times.
    pub fn unmount(&mut self) -> Option<S> {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
        self.field.clear();
        self.surface.take()
    }

    /// Entry point for the host's frame callback.
    pub fn on_frame(&mut self) {
        if self.pending.take().is_none() {
            return;
        }
        self.run_frame();
    }

    fn run_frame(&mut self) {
        self.pending = match self.tick() {
            Ok(()) => self.scheduler.request_frame(),
            // decorative only: stop quietly
            Err(SurfaceLost) => None,
        };
    }

    /// One frame: clear, draw-then-move every particle, then link close pairs.
    pub fn tick(&mut self) -> Result<(), SurfaceLost> {
        let surface = match self.surface.as_mut() {
            Some(surface) if surface.is_available() => surface,
            _ => return Err(SurfaceLost),
        };
        let width = self.field.width() as f64;
        let height = self.field.height() as f64;

        surface.clear(width, height)?;
        for particle in self.field.particles_mut() {
            surface.fill_circle(particle.pos, particle.radius, &particle.color)?;
            particle.advance(width, height);
        }

        let link_color = self.config.link_color();
        let link_width = self.config.link_width;
        for (a, b) in self.field.connections(self.config.link_distance) {
            surface.stroke_line(a.pos, b.pos, &link_color, link_width)?;
        }
        Ok(())
    }
}
