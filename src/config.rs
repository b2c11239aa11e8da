//! Construction-time configuration for a cloth mesh.

use crate::float::Float;
use crate::vec::Vec2;

/// Configuration for building and stepping a [`ClothMesh`](crate::ClothMesh).
///
/// Fixed once the mesh is set up.
///
/// # Builder Pattern
/// ```
/// use tearcloth::config::ClothConfig;
/// use tearcloth::vec::Vec2;
///
/// let config: ClothConfig<f32> = ClothConfig::new()
///     .with_cloth_size(400.0, 300.0)
///     .with_spacing(20.0)
///     .with_viewport(Vec2::new(640.0, 480.0))
///     .with_iterations(8);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ClothConfig<F: Float> {
    /// Cloth width in world units. Columns = floor(width / spacing). Default: 800.
    pub width: F,
    /// Cloth height in world units. Rows = floor(height / spacing). Default: 600.
    pub height: F,
    /// Distance between neighbouring particles. Default: 25.
    pub spacing: F,
    /// Clamping box is `[0, viewport.x] x [0, viewport.y]`. Default: 800x600.
    pub viewport: Vec2<F>,
    /// Gravity acceleration. Only `y` is applied. Default: (0, 981).
    pub gravity: Vec2<F>,
    /// Fraction of inherited motion lost per frame, in [0, 1]. Default: 0.01.
    pub drag: F,
    /// Relaxation passes per frame. Default: 5.
    pub iterations: usize,
    /// Mass of every unpinned particle. Default: 10000.
    pub particle_mass: F,
    /// Stretch limit stored on every link. Default: 50.
    pub max_link_length: F,
    /// Pin every n-th particle of the top row, starting at column 0. Default: 2.
    pub pin_every: usize,
}

impl<F: Float> ClothConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        ClothConfig {
            width: F::from_f32(800.0),
            height: F::from_f32(600.0),
            spacing: F::from_f32(25.0),
            viewport: Vec2::new(F::from_f32(800.0), F::from_f32(600.0)),
            gravity: Vec2::new(F::zero(), F::from_f32(981.0)),
            drag: F::from_f32(0.01),
            iterations: 5,
            particle_mass: F::from_f32(10000.0),
            max_link_length: F::from_f32(50.0),
            pin_every: 2,
        }
    }

    pub fn with_cloth_size(mut self, width: F, height: F) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_spacing(mut self, spacing: F) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_viewport(mut self, viewport: Vec2<F>) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_drag(mut self, drag: F) -> Self {
        self.drag = drag;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_particle_mass(mut self, mass: F) -> Self {
        self.particle_mass = mass;
        self
    }

    pub fn with_max_link_length(mut self, max_length: F) -> Self {
        self.max_link_length = max_length;
        self
    }

    /// Set the pin stride. Zero disables pinning.
    pub fn with_pin_every(mut self, stride: usize) -> Self {
        self.pin_every = stride;
        self
    }

    /// Grid dimensions as `(cols, rows)`.
    pub fn grid_size(&self) -> (usize, usize) {
        if !(self.spacing > F::zero()) {
            return (0, 0);
        }
        let cols = (self.width / self.spacing).floor().to_usize();
        let rows = (self.height / self.spacing).floor().to_usize();
        (cols, rows)
    }
}

impl<F: Float> Default for ClothConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_is_32_by_24() {
        let config: ClothConfig<f32> = ClothConfig::default();
        assert_eq!(config.grid_size(), (32, 24));
    }

    #[test]
    fn grid_size_floors_partial_cells() {
        let config: ClothConfig<f64> = ClothConfig::new()
            .with_cloth_size(99.0, 51.0)
            .with_spacing(25.0);
        assert_eq!(config.grid_size(), (3, 2));
    }

    #[test]
    fn non_positive_spacing_gives_empty_grid() {
        let config: ClothConfig<f32> = ClothConfig::new().with_spacing(0.0);
        assert_eq!(config.grid_size(), (0, 0));
    }
}
