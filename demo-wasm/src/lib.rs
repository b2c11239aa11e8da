use tearcloth::{Clock, ClothConfig, ClothMesh, CommandBuffer, ManualClock, NoOpStepObserver, Vec2};
use wasm_bindgen::prelude::*;

/// Smoothing applied to the frames-per-second estimate.
const FPS_SMOOTHING: f32 = 0.1;

/// Left-button drag state, in canvas pixels.
///
/// The stroke handed to the cloth covers the pointer's motion since the
/// previous frame, and only while the button is held.
#[derive(Clone, Copy, Debug, Default)]
struct DragState {
    down: bool,
    position: Vec2<f32>,
    previous: Vec2<f32>,
}

impl DragState {
    fn press(&mut self, x: f32, y: f32) {
        self.down = true;
        self.position = Vec2::new(x, y);
        self.previous = self.position;
    }

    fn moved(&mut self, x: f32, y: f32) {
        if self.down {
            self.position = Vec2::new(x, y);
        }
    }

    fn release(&mut self) {
        self.down = false;
        self.previous = self.position;
    }

    /// Stroke for this frame as `(now, prev)`. Idle strokes have zero length.
    fn stroke(&self) -> (Vec2<f32>, Vec2<f32>) {
        (self.position, self.previous)
    }

    /// Start the next frame's stroke where this one ended.
    fn end_frame(&mut self) {
        self.previous = self.position;
    }
}

// ---- Cloth Demo ----

#[wasm_bindgen]
pub struct ClothDemo {
    cloth: ClothMesh<f32>,
    clock: ManualClock,
    drag: DragState,
    frame: CommandBuffer<f32>,
    fps: f32,
    last_frame_ms: u64,
}

#[wasm_bindgen]
impl ClothDemo {
    /// Build a cloth filling a `width` x `height` canvas.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, spacing: f32, now_ms: f64) -> Result<ClothDemo, JsValue> {
        let clock = ManualClock::new(now_ms as u64);
        let config = ClothConfig::new()
            .with_cloth_size(width, height)
            .with_spacing(spacing)
            .with_viewport(Vec2::new(width, height));
        let cloth = ClothMesh::setup(config, &clock).map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(ClothDemo {
            cloth,
            last_frame_ms: clock.now_ms(),
            clock,
            drag: DragState::default(),
            frame: CommandBuffer::new(),
            fps: 0.0,
        })
    }

    pub fn mouse_down(&mut self, x: f32, y: f32) {
        self.drag.press(x, y);
    }

    pub fn mouse_move(&mut self, x: f32, y: f32) {
        self.drag.moved(x, y);
    }

    pub fn mouse_up(&mut self) {
        self.drag.release();
    }

    /// Step the cloth to `now_ms` and record its draw calls.
    ///
    /// Returns the number of links cut this frame.
    pub fn frame(&mut self, now_ms: f64) -> usize {
        self.clock.set(now_ms as u64);
        let now = self.clock.now_ms();
        let elapsed = now.saturating_sub(self.last_frame_ms);
        self.last_frame_ms = now;
        if elapsed > 0 {
            let instant = 1000.0 / elapsed as f32;
            self.fps = if self.fps == 0.0 {
                instant
            } else {
                self.fps + (instant - self.fps) * FPS_SMOOTHING
            };
        }

        let (cursor_now, cursor_prev) = self.drag.stroke();
        let cut = self.cloth.update(&self.clock, cursor_now, cursor_prev, &mut NoOpStepObserver);
        self.drag.end_frame();

        self.frame.clear();
        self.cloth.render(&mut self.frame);
        cut
    }

    /// Returns flat [x0, y0, r0, x1, y1, r1, ...] for every particle
    pub fn circles(&self) -> Vec<f32> {
        self.frame.circles_flat()
    }

    /// Returns flat [ax0, ay0, bx0, by0, ...] for every remaining link
    pub fn lines(&self) -> Vec<f32> {
        self.frame.lines_flat()
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn dragging(&self) -> bool {
        self.drag.down
    }

    pub fn particle_count(&self) -> usize {
        self.cloth.particle_count()
    }

    pub fn link_count(&self) -> usize {
        self.cloth.link_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stroke_follows_motion_between_frames() {
        let mut drag = DragState::default();
        drag.press(10.0, 10.0);
        assert_eq!(drag.stroke(), (Vec2::new(10.0, 10.0), Vec2::new(10.0, 10.0)));

        drag.moved(40.0, 10.0);
        assert_eq!(drag.stroke(), (Vec2::new(40.0, 10.0), Vec2::new(10.0, 10.0)));
        drag.end_frame();

        drag.moved(40.0, 30.0);
        assert_eq!(drag.stroke(), (Vec2::new(40.0, 30.0), Vec2::new(40.0, 10.0)));
        drag.end_frame();
    }

    #[test]
    fn released_pointer_does_not_cut() {
        let mut drag = DragState::default();
        drag.press(10.0, 10.0);
        drag.moved(20.0, 20.0);
        drag.release();
        drag.moved(90.0, 90.0);
        let (now, prev) = drag.stroke();
        assert_eq!(now, prev);
        assert_eq!(now, Vec2::new(20.0, 20.0));
    }

    #[test]
    fn dragging_across_the_demo_cloth_tears_it() {
        let mut demo = ClothDemo::new(200.0, 150.0, 25.0, 0.0).unwrap();
        let links = demo.link_count();
        demo.frame(16.0);
        assert_eq!(demo.link_count(), links);
        assert_eq!(demo.circles().len(), demo.particle_count() * 3);

        demo.mouse_down(-5.0, 12.5);
        demo.mouse_move(205.0, 12.5);
        let cut = demo.frame(32.0);
        assert_eq!(cut, 8);
        assert_eq!(demo.link_count(), links - 8);
        assert_eq!(demo.lines().len(), demo.link_count() * 4);
        demo.mouse_up();
        assert!(!demo.dragging());
        assert!(demo.fps() > 0.0);
    }
}
