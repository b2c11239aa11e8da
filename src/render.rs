//! Drawing surface abstraction the cloth renders into.

use crate::float::Float;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Radius of the dot drawn for each particle.
pub const PARTICLE_RADIUS: f32 = 5.0;

/// An RGB colour with 8 bits per channel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255 };
}

/// Something primitive shapes can be drawn onto.
///
/// The cloth borrows a surface for the duration of one render call and
/// never keeps it.
pub trait Surface<F: Float> {
    /// Filled circle.
    fn circle(&mut self, center: Vec2<F>, radius: F, color: Color);

    /// One-pixel line segment.
    fn line(&mut self, from: Vec2<F>, to: Vec2<F>, color: Color);
}

/// A recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand<F: Float> {
    Circle { center: Vec2<F>, radius: F, color: Color },
    Line { from: Vec2<F>, to: Vec2<F>, color: Color },
}

/// A surface that records draw calls for a host to replay.
#[derive(Clone, Debug, Default)]
pub struct CommandBuffer<F: Float> {
    commands: AllocVec<DrawCommand<F>>,
}

impl<F: Float> CommandBuffer<F> {
    pub fn new() -> Self {
        CommandBuffer { commands: AllocVec::new() }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn commands(&self) -> &[DrawCommand<F>] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Circles as flat `[x, y, radius, ...]`.
    pub fn circles_flat(&self) -> AllocVec<f32> {
        let mut out = AllocVec::new();
        for cmd in &self.commands {
            if let DrawCommand::Circle { center, radius, .. } = cmd {
                out.extend_from_slice(&[center.x.to_f32(), center.y.to_f32(), radius.to_f32()]);
            }
        }
        out
    }

    /// Lines as flat `[x0, y0, x1, y1, ...]`.
    pub fn lines_flat(&self) -> AllocVec<f32> {
        let mut out = AllocVec::new();
        for cmd in &self.commands {
            if let DrawCommand::Line { from, to, .. } = cmd {
                out.extend_from_slice(&[from.x.to_f32(), from.y.to_f32(), to.x.to_f32(), to.y.to_f32()]);
            }
        }
        out
    }
}

impl<F: Float> Surface<F> for CommandBuffer<F> {
    fn circle(&mut self, center: Vec2<F>, radius: F, color: Color) {
        self.commands.push(DrawCommand::Circle { center, radius, color });
    }

    fn line(&mut self, from: Vec2<F>, to: Vec2<F>, color: Color) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattening_splits_by_kind() {
        let mut buf: CommandBuffer<f32> = CommandBuffer::new();
        buf.circle(Vec2::new(1.0, 2.0), 5.0, Color::WHITE);
        buf.line(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0), Color::WHITE);
        buf.circle(Vec2::new(6.0, 7.0), 5.0, Color::WHITE);

        assert_eq!(buf.len(), 3);
        assert_eq!(buf.circles_flat(), [1.0, 2.0, 5.0, 6.0, 7.0, 5.0]);
        assert_eq!(buf.lines_flat(), [0.0, 0.0, 3.0, 4.0]);

        buf.clear();
        assert!(buf.is_empty());
    }
}
