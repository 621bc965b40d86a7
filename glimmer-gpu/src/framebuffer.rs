use glam::{UVec2, Vec4};

/// Destination of the pixels written by a pass.
pub trait Framebuffer {
    fn write(&mut self, screen_pos: UVec2, color: Vec4);
}
