//! Tearable 2D cloth built on Verlet integration.
//!
//! `tearcloth` simulates a sheet of particles joined by structural links,
//! hung from pinned points along its top edge. Each frame the particles are
//! integrated under gravity and drag, the links are relaxed toward their
//! rest lengths, and any link crossed by the user's mouse stroke is cut for
//! good.
//!
//! # Features
//!
//! - **Verlet integration**: Position-based dynamics with implicit velocity
//! - **Link relaxation**: Fixed number of half-and-half positional corrections
//! - **Cutting**: Exact segment intersection against the mouse stroke
//! - **Host-agnostic rendering**: Draw through the `Surface` trait
//! - **Observable**: Monitor physics steps via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! # Example
//! ```
//! use tearcloth::{ClothConfig, ClothMesh, CommandBuffer, ManualClock, NoOpStepObserver, Vec2};
//!
//! let clock = ManualClock::new(0);
//! let mut cloth: ClothMesh<f32> = ClothMesh::setup(ClothConfig::default(), &clock).unwrap();
//!
//! clock.advance(16);
//! let cursor = Vec2::new(412.5, 312.5);
//! cloth.update(&clock, cursor, cursor, &mut NoOpStepObserver);
//!
//! let mut frame = CommandBuffer::new();
//! cloth.render(&mut frame);
//! assert_eq!(frame.len(), cloth.particle_count() + cloth.link_count());
//! ```

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod float;
pub mod vec;
pub mod geometry;
pub mod particle;
pub mod link;
pub mod cloth;
pub mod clock;
pub mod render;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use geometry::{distance, vector_length, difference, segments_intersect};
pub use particle::Particle;
pub use link::Link;
pub use cloth::ClothMesh;
pub use clock::{Clock, ManualClock};
#[cfg(feature = "std")]
pub use clock::SystemClock;
pub use render::{Color, CommandBuffer, DrawCommand, Surface};
pub use config::ClothConfig;
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::ClothError;
