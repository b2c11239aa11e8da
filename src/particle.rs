//! Verlet particles for the cloth mesh.

use crate::float::Float;
use crate::vec::Vec2;

/// A Verlet particle: position-based dynamics with implicit velocity.
///
/// `mass` is carried as data only. Integration is mass-independent, and
/// pinning is decided by the `pinned` flag alone.
#[derive(Clone, Debug)]
pub struct Particle<F: Float> {
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
    pub mass: F,
    pub pinned: bool,
}

impl<F: Float> Particle<F> {
    pub fn new(pos: Vec2<F>, mass: F) -> Self {
        Particle {
            pos,
            prev_pos: pos,
            mass,
            pinned: false,
        }
    }

    /// Anchor the particle where it currently stands.
    pub fn pin(&mut self) {
        self.pinned = true;
        self.mass = F::infinity();
        self.prev_pos = self.pos;
    }

    /// One drag-damped Verlet step; gravity acts on y only.
    ///
    /// A pinned particle snaps back to its anchor instead, undoing whatever
    /// the previous relaxation pass did to it.
    pub fn integrate(&mut self, dt: F, gravity_y: F, drag: F) {
        if self.pinned {
            self.pos = self.prev_pos;
            return;
        }
        let old = self.pos;
        let keep = F::one() - drag;
        self.pos = Vec2::new(
            old.x + (old.x - self.prev_pos.x) * keep,
            old.y + (old.y - self.prev_pos.y) * keep + gravity_y * dt * dt,
        );
        self.prev_pos = old;
    }

    /// Saturate the position into `[min, max]`.
    pub fn clamp_to(&mut self, min: Vec2<F>, max: Vec2<F>) {
        self.pos = self.pos.clamp(min, max);
    }

    /// Displacement since the previous frame.
    pub fn velocity_raw(&self) -> Vec2<F> {
        self.pos - self.prev_pos
    }
}
