use crate::constants::POINTER_OFFSET_SCALE;
use glam::Vec2;

/// Window half-dimensions and the pointer's scaled offset from the centre.
///
/// Mutated by resize and mousemove handlers; read by the particle renderer
/// once per frame and by the scroll handlers for the viewport midpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportState {
    pub half_width: f32,
    pub half_height: f32,
    pub pointer_offset: Vec2,
}

impl ViewportState {
    pub fn new(width: f32, height: f32) -> Self {
        let mut v = Self::default();
        v.resize(width, height);
        v
    }

    /// Recompute half-dimensions. The pointer offset keeps its last value
    /// until the next pointer move, matching the browser's event order.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.half_width = width.max(0.0) / 2.0;
        self.half_height = height.max(0.0) / 2.0;
    }

    pub fn pointer_moved(&mut self, client_x: f32, client_y: f32) {
        self.pointer_offset = Vec2::new(
            (client_x - self.half_width) * POINTER_OFFSET_SCALE,
            (client_y - self.half_height) * POINTER_OFFSET_SCALE,
        );
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.half_width * 2.0
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.half_height * 2.0
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width() / self.height().max(1.0)
    }

    /// Document-space y of the viewport's vertical midpoint.
    #[inline]
    pub fn midpoint(&self, scroll_y: f32) -> f32 {
        scroll_y + self.half_height
    }
}
