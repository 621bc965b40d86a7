use glam::{uvec2, UVec2, Vec4};
use image::{Rgba, RgbaImage};

/// Linear RGBA image the engine renders into.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    size: UVec2,
    pixels: Vec<Vec4>,
}

impl Frame {
    pub fn new(size: UVec2) -> Self {
        Self {
            size,
            pixels: vec![Vec4::ZERO; (size.x * size.y) as usize],
        }
    }

    pub fn size(&self) -> UVec2 {
        self.size
    }

    /// Pixels in row-major order, starting at the top-left corner.
    pub fn pixels(&self) -> &[Vec4] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [Vec4] {
        &mut self.pixels
    }

    pub fn get(&self, pos: UVec2) -> Option<Vec4> {
        if pos.x < self.size.x && pos.y < self.size.y {
            Some(self.pixels[(pos.y * self.size.x + pos.x) as usize])
        } else {
            None
        }
    }

    /// Converts this frame into an 8-bit image, clamping all channels into
    /// `0.0..=1.0`.
    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.size.x, self.size.y, |x, y| {
            let color = self.get(uvec2(x, y)).unwrap_or_default();
            let color = (color.clamp(Vec4::ZERO, Vec4::ONE) * 255.0).round();

            Rgba(color.to_array().map(|channel| channel as u8))
        })
    }
}
