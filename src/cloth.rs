//! Tearable cloth: a grid of Verlet particles held together by links that a
//! mouse drag can cut.

use crate::clock::Clock;
use crate::config::ClothConfig;
use crate::error::ClothError;
use crate::float::Float;
use crate::link::Link;
use crate::observer::StepObserver;
use crate::particle::Particle;
use crate::render::{Color, Surface, PARTICLE_RADIUS};
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;
use core::mem::size_of;
use log::{debug, trace};

/// Delta time reported before the first update.
const INITIAL_DELTA_TIME: f32 = 0.01;

/// A cloth mesh built from a grid of Verlet particles.
///
/// Particle at (col, row) sits at `(col * spacing, row * spacing)` and has
/// index `col * rows + row`. The particle vector never changes size; the
/// link vector only shrinks.
pub struct ClothMesh<F: Float> {
    particles: AllocVec<Particle<F>>,
    links: AllocVec<Link<F>>,
    config: ClothConfig<F>,
    cols: usize,
    rows: usize,
    last_update_ms: u64,
    delta_time: F,
}

impl<F: Float> ClothMesh<F> {
    /// Build the grid described by `config`, reading `clock` once to seed the
    /// frame timer.
    ///
    /// Every particle gets a link to its left neighbour and one to the
    /// neighbour above, when those exist. The particle being placed is
    /// always `p1`. Top-row particles whose column is a multiple of
    /// `pin_every` are pinned.
    pub fn setup<C: Clock>(config: ClothConfig<F>, clock: &C) -> Result<Self, ClothError> {
        validate(&config)?;

        let (cols, rows) = config.grid_size();
        if cols == 0 || rows == 0 {
            return Err(ClothError::EmptyGrid { cols, rows });
        }

        let (particle_count, link_count) =
            grid_capacity::<F>(cols, rows).ok_or(ClothError::GridTooLarge { cols, rows })?;

        let spacing = config.spacing;
        let mut particles = AllocVec::with_capacity(particle_count);
        let mut links = AllocVec::with_capacity(link_count);

        for col in 0..cols {
            for row in 0..rows {
                let idx = particles.len();
                let x = F::from_f32(col as f32) * spacing;
                let y = F::from_f32(row as f32) * spacing;
                particles.push(Particle::new(Vec2::new(x, y), config.particle_mass));

                if col > 0 {
                    let left = (col - 1) * rows + row;
                    links.push(Link::from_particles(idx, left, &particles, config.max_link_length));
                }
                if row > 0 {
                    let above = col * rows + (row - 1);
                    links.push(Link::from_particles(idx, above, &particles, config.max_link_length));
                }
                if row == 0 && config.pin_every > 0 && col % config.pin_every == 0 {
                    particles[idx].pin();
                }
            }
        }

        debug!(
            "cloth setup: {}x{} particles, {} links, spacing {:?}",
            cols,
            rows,
            links.len(),
            spacing
        );

        Ok(ClothMesh {
            particles,
            links,
            config,
            cols,
            rows,
            last_update_ms: clock.now_ms(),
            delta_time: F::from_f32(INITIAL_DELTA_TIME),
        })
    }

    /// Advance one frame using the wall time elapsed since the last call.
    ///
    /// Links crossed by the stroke `cursor_now`-`cursor_prev` are removed.
    /// Returns the number of links cut.
    pub fn update<C: Clock, O: StepObserver>(
        &mut self,
        clock: &C,
        cursor_now: Vec2<F>,
        cursor_prev: Vec2<F>,
        observer: &mut O,
    ) -> usize {
        let now = clock.now_ms();
        let elapsed_ms = now.saturating_sub(self.last_update_ms);
        self.last_update_ms = now;
        self.delta_time = F::from_f32(elapsed_ms as f32) / F::from_f32(1000.0);
        trace!("cloth update: dt {:?}", self.delta_time);

        self.step(self.delta_time, cursor_now, cursor_prev, observer)
    }

    /// Advance one frame with an explicit delta time.
    ///
    /// Integrates, runs the configured number of relaxation passes while
    /// cutting, then clamps every particle back into the viewport.
    pub fn step<O: StepObserver>(
        &mut self,
        dt: F,
        cursor_now: Vec2<F>,
        cursor_prev: Vec2<F>,
        observer: &mut O,
    ) -> usize {
        self.integrate(dt);
        observer.on_integrate();

        let mut cut = 0;
        for i in 0..self.config.iterations {
            cut += self.relax(cursor_now, cursor_prev, observer);
            observer.on_relax_iteration(i);
        }

        self.clamp_to_viewport();
        observer.on_step_complete();
        cut
    }

    /// Verlet-integrate every particle and clamp it into the viewport.
    /// Pinned particles return to their anchors.
    pub fn integrate(&mut self, dt: F) {
        let gravity_y = self.config.gravity.y;
        let drag = self.config.drag;
        let (min, max) = self.bounds();
        for p in self.particles.iter_mut() {
            p.integrate(dt, gravity_y, drag);
            if !p.pinned {
                p.clamp_to(min, max);
            }
        }
    }

    /// One relaxation pass over the active links, cutting those the stroke
    /// crosses after they are corrected.
    ///
    /// Each link is visited exactly once; removals are compacted in the same
    /// sweep. Returns the number of links cut.
    pub fn relax<O: StepObserver>(
        &mut self,
        cursor_now: Vec2<F>,
        cursor_prev: Vec2<F>,
        observer: &mut O,
    ) -> usize {
        let before = self.links.len();
        let particles = &mut self.particles;

        self.links.retain(|link| {
            link.relax(particles);
            if link.is_crossed_by(cursor_now, cursor_prev, particles) {
                trace!("cut link {} - {}", link.p1, link.p2);
                observer.on_link_cut(link.p1, link.p2);
                false
            } else {
                true
            }
        });

        before - self.links.len()
    }

    /// Saturate every particle into `[0, viewport]`.
    pub fn clamp_to_viewport(&mut self) {
        let (min, max) = self.bounds();
        for p in self.particles.iter_mut() {
            p.clamp_to(min, max);
        }
    }

    /// Draw a dot per particle, then a line per active link.
    pub fn render<S: Surface<F>>(&self, surface: &mut S) {
        let radius = F::from_f32(PARTICLE_RADIUS);
        for p in self.particles.iter() {
            surface.circle(p.pos, radius, Color::WHITE);
        }
        for link in self.links.iter() {
            let (a, b) = link.endpoints(&self.particles);
            surface.line(a, b, Color::WHITE);
        }
    }

    fn bounds(&self) -> (Vec2<F>, Vec2<F>) {
        (Vec2::zero(), self.config.viewport)
    }

    pub fn index(&self, col: usize, row: usize) -> usize {
        col * self.rows + row
    }

    pub fn position_at(&self, col: usize, row: usize) -> Vec2<F> {
        self.particles[self.index(col, row)].pos
    }

    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.particles.iter().map(|p| p.pos).collect()
    }

    pub fn particle(&self, index: usize) -> &Particle<F> { &self.particles[index] }
    pub fn particles(&self) -> &[Particle<F>] { &self.particles }
    pub fn links(&self) -> &[Link<F>] { &self.links }
    pub fn cols(&self) -> usize { self.cols }
    pub fn rows(&self) -> usize { self.rows }
    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn link_count(&self) -> usize { self.links.len() }
    pub fn config(&self) -> &ClothConfig<F> { &self.config }

    /// Delta time used by the most recent `update`, in seconds.
    pub fn delta_time(&self) -> F { self.delta_time }
}

/// Particle and link counts for a `cols` x `rows` grid, or `None` when
/// either vector could not be allocated.
fn grid_capacity<F: Float>(cols: usize, rows: usize) -> Option<(usize, usize)> {
    let particles = cols.checked_mul(rows)?;
    let horizontal = (cols - 1).checked_mul(rows)?;
    let vertical = cols.checked_mul(rows - 1)?;
    let links = horizontal.checked_add(vertical)?;

    let fits = |count: usize, size: usize| {
        count.checked_mul(size).map_or(false, |bytes| bytes <= isize::MAX as usize)
    };
    if !fits(particles, size_of::<Particle<F>>()) || !fits(links, size_of::<Link<F>>()) {
        return None;
    }
    Some((particles, links))
}

fn validate<F: Float>(config: &ClothConfig<F>) -> Result<(), ClothError> {
    let size_ok = |v: F| v >= F::zero() && v.is_finite();
    if !size_ok(config.width) || !size_ok(config.height) {
        return Err(ClothError::InvalidClothSize);
    }
    if !(config.spacing > F::zero()) || !config.spacing.is_finite() {
        return Err(ClothError::InvalidSpacing);
    }
    let viewport = config.viewport;
    if !(viewport.x >= F::zero() && viewport.y >= F::zero())
        || !viewport.x.is_finite()
        || !viewport.y.is_finite()
    {
        return Err(ClothError::InvalidViewport);
    }
    if !(config.drag >= F::zero() && config.drag <= F::one()) {
        return Err(ClothError::InvalidDrag);
    }
    if config.iterations == 0 {
        return Err(ClothError::InvalidIterations);
    }
    Ok(())
}
