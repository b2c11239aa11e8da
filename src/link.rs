//! Structural links between cloth particles.

use crate::float::Float;
use crate::geometry::{difference, distance, segments_intersect, vector_length};
use crate::particle::Particle;
use crate::vec::Vec2;

/// Lengths below this are treated as coincident particles and left alone.
pub const DEGENERATE_LENGTH: f32 = 1e-10;

/// A fixed-rest-length connection between two particles of a mesh.
///
/// `p1` and `p2` index into the owning mesh's particle vector.
#[derive(Clone, Debug, PartialEq)]
pub struct Link<F: Float> {
    pub p1: usize,
    pub p2: usize,
    pub rest_length: F,
    /// Stretch limit. Stored, never enforced.
    pub max_length: F,
}

impl<F: Float> Link<F> {
    pub fn new(p1: usize, p2: usize, rest_length: F, max_length: F) -> Self {
        Link { p1, p2, rest_length, max_length }
    }

    /// Link two particles at their current distance.
    pub fn from_particles(p1: usize, p2: usize, particles: &[Particle<F>], max_length: F) -> Self {
        let rest_length = distance(particles[p1].pos, particles[p2].pos);
        Link { p1, p2, rest_length, max_length }
    }

    /// Current endpoints of the link.
    pub fn endpoints(&self, particles: &[Particle<F>]) -> (Vec2<F>, Vec2<F>) {
        (particles[self.p1].pos, particles[self.p2].pos)
    }

    pub fn current_length(&self, particles: &[Particle<F>]) -> F {
        let (a, b) = self.endpoints(particles);
        vector_length(difference(a, b))
    }

    /// Move both ends halfway toward the rest length.
    ///
    /// Pinned particles move too; integration puts them back next frame.
    pub fn relax(&self, particles: &mut [Particle<F>]) {
        let diff = difference(particles[self.p1].pos, particles[self.p2].pos);
        let length = vector_length(diff);
        if length.is_near_zero(F::from_f32(DEGENERATE_LENGTH)) {
            return; // coincident, no direction to correct along
        }

        let factor = (self.rest_length - length) / length * F::half();
        let offset = diff.scale(factor);

        particles[self.p1].pos = particles[self.p1].pos + offset;
        particles[self.p2].pos = particles[self.p2].pos - offset;
    }

    /// True if the cut stroke `from`-`to` crosses the link as it lies now.
    pub fn is_crossed_by(&self, from: Vec2<F>, to: Vec2<F>, particles: &[Particle<F>]) -> bool {
        let (a, b) = self.endpoints(particles);
        segments_intersect(from, to, a, b)
    }
}
